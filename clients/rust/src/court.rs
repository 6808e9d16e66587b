use crate::base::{APIResponse, BaseClient, CREATED};
use court_scheduler_api_structs::*;
use court_scheduler_domain::{DailySlot, OffDayException, ID};
use std::sync::Arc;

#[derive(Clone)]
pub struct CourtClient {
    base: Arc<BaseClient>,
}

pub struct CreateCourtAvailabilityInput {
    pub court_id: ID,
    pub daily_slots: Vec<DailySlot>,
}

pub struct CreateCourtUnavailabilityInput {
    pub court_id: ID,
    pub exception: OffDayException,
}

impl CourtClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    /// Replaces the weekly schedule of a court
    pub async fn create_availability(
        &self,
        input: CreateCourtAvailabilityInput,
    ) -> APIResponse<()> {
        let body = create_court_availability::RequestBody {
            court: input.court_id,
            daily_slots: input.daily_slots,
        };
        self.base.post(body, "court-availabilities", CREATED).await
    }

    /// Creates a blackout window for a court
    pub async fn create_unavailability(
        &self,
        input: CreateCourtUnavailabilityInput,
    ) -> APIResponse<()> {
        let body = create_court_unavailability::RequestBody::new(input.court_id, &input.exception);
        self.base.post(body, "court-unavailabilities", CREATED).await
    }
}
