use court_scheduler_domain::ScheduleValidationError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CourtSchedulerError {
    #[error("{0}")]
    InvalidSchedule(ScheduleValidationError),
    #[error("Update failed. Please try again.")]
    UpdateFailed,
}
