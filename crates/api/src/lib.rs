mod court_schedule;
mod error;
mod shared;

pub use court_schedule::*;
pub use error::CourtSchedulerError;
pub use shared::notification::{
    Notification, NotificationKind, Notifier, RecordingNotifier, TracingNotifier,
};
pub use shared::usecase::{execute, UseCase};
