use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast shown to the court owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success<T: Into<String>>(message: T) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn error<T: Into<String>>(message: T) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Where user facing feedback of a submission goes
pub trait Notifier {
    fn notify(&self, notification: Notification);

    /// Signals that a submission started (`true`) or settled (`false`)
    fn loading(&self, _active: bool) {}
}

/// Writes notifications to the log, used when there is no UI attached
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => info!("{}", notification.message),
            NotificationKind::Error => warn!("{}", notification.message),
        }
    }
}

/// Keeps every notification and loading signal it receives
#[derive(Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
    loading: Mutex<Vec<bool>>,
}

impl RecordingNotifier {
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn loading_signals(&self) -> Vec<bool> {
        self.loading.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }

    fn loading(&self, active: bool) {
        self.loading.lock().unwrap().push(active);
    }
}
