mod inmemory;

use court_scheduler_domain::{DailySlot, OffDayException, ID};
use court_scheduler_sdk::{
    CourtSchedulerSDK, CreateCourtAvailabilityInput, CreateCourtUnavailabilityInput,
};
pub use inmemory::{CourtScheduleWrite, InMemoryCourtScheduleService};
use tracing::info;

/// The backend writes a court schedule submission is made of
#[async_trait::async_trait]
pub trait ICourtScheduleService: Send + Sync {
    /// Replaces the weekly availability of the court
    async fn create_availability(
        &self,
        court_id: &ID,
        daily_slots: &[DailySlot],
    ) -> anyhow::Result<()>;
    /// Adds an off-day on top of the weekly availability
    async fn create_unavailability(
        &self,
        court_id: &ID,
        exception: &OffDayException,
    ) -> anyhow::Result<()>;
}

pub struct HttpCourtScheduleService {
    sdk: CourtSchedulerSDK,
}

impl HttpCourtScheduleService {
    pub fn new(sdk: CourtSchedulerSDK) -> Self {
        Self { sdk }
    }
}

#[async_trait::async_trait]
impl ICourtScheduleService for HttpCourtScheduleService {
    #[tracing::instrument(name = "Creating court availability", skip(self, daily_slots))]
    async fn create_availability(
        &self,
        court_id: &ID,
        daily_slots: &[DailySlot],
    ) -> anyhow::Result<()> {
        let input = CreateCourtAvailabilityInput {
            court_id: court_id.clone(),
            daily_slots: daily_slots.to_vec(),
        };
        self.sdk
            .court
            .create_availability(input)
            .await
            .map_err(|e| anyhow::anyhow!("Court availability was not created: {}", e))?;
        info!("Created {} daily slots", daily_slots.len());
        Ok(())
    }

    #[tracing::instrument(name = "Creating court unavailability", skip(self))]
    async fn create_unavailability(
        &self,
        court_id: &ID,
        exception: &OffDayException,
    ) -> anyhow::Result<()> {
        let input = CreateCourtUnavailabilityInput {
            court_id: court_id.clone(),
            exception: exception.clone(),
        };
        self.sdk
            .court
            .create_unavailability(input)
            .await
            .map_err(|e| anyhow::anyhow!("Court unavailability was not created: {}", e))
    }
}
