mod base;
mod court;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use court::CourtClient;
pub use court::{CreateCourtAvailabilityInput, CreateCourtUnavailabilityInput};
pub use court_scheduler_api_structs::ExceptionType;
pub use court_scheduler_domain::{DailySlot, OffDayException, OffDayScope, ID};
use std::sync::Arc;

/// Court Scheduler SDK
///
/// The SDK contains methods for writing court schedules to the court
/// booking API.
#[derive(Clone)]
pub struct CourtSchedulerSDK {
    pub court: CourtClient,
}

impl CourtSchedulerSDK {
    pub fn new<T: Into<String>>(address: String, api_token: Option<T>) -> Self {
        let mut base = BaseClient::new(address);
        if let Some(api_token) = api_token {
            base.set_api_token(api_token.into());
        }
        let base = Arc::new(base);
        let court = CourtClient::new(base);

        Self { court }
    }
}
