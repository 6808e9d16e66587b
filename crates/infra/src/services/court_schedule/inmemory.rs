use super::ICourtScheduleService;
use court_scheduler_domain::{DailySlot, OffDayException, ID};

#[derive(Debug, Clone, PartialEq)]
pub enum CourtScheduleWrite {
    Availability {
        court_id: ID,
        daily_slots: Vec<DailySlot>,
    },
    Unavailability {
        court_id: ID,
        exception: OffDayException,
    },
}

/// Records every write instead of calling the backend. Either write kind
/// can be configured to fail.
pub struct InMemoryCourtScheduleService {
    writes: std::sync::Mutex<Vec<CourtScheduleWrite>>,
    fail_availability: bool,
    fail_unavailability: bool,
}

impl InMemoryCourtScheduleService {
    pub fn new() -> Self {
        Self {
            writes: std::sync::Mutex::new(Vec::new()),
            fail_availability: false,
            fail_unavailability: false,
        }
    }

    pub fn failing_availability(mut self) -> Self {
        self.fail_availability = true;
        self
    }

    pub fn failing_unavailability(mut self) -> Self {
        self.fail_unavailability = true;
        self
    }

    /// Every attempted write, failed ones included
    pub fn writes(&self) -> Vec<CourtScheduleWrite> {
        self.writes.lock().unwrap().clone()
    }
}

impl Default for InMemoryCourtScheduleService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ICourtScheduleService for InMemoryCourtScheduleService {
    async fn create_availability(
        &self,
        court_id: &ID,
        daily_slots: &[DailySlot],
    ) -> anyhow::Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push(CourtScheduleWrite::Availability {
                court_id: court_id.clone(),
                daily_slots: daily_slots.to_vec(),
            });
        if self.fail_availability {
            anyhow::bail!("Court availability was rejected");
        }
        Ok(())
    }

    async fn create_unavailability(
        &self,
        court_id: &ID,
        exception: &OffDayException,
    ) -> anyhow::Result<()> {
        self.writes
            .lock()
            .unwrap()
            .push(CourtScheduleWrite::Unavailability {
                court_id: court_id.clone(),
                exception: exception.clone(),
            });
        if self.fail_unavailability {
            anyhow::bail!("Court unavailability was rejected");
        }
        Ok(())
    }
}
