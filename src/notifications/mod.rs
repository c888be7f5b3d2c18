//! Expiry notifications: trigger selection, rendering and dispatch.

pub mod scheduler;
pub mod templates;
pub mod transport;

pub use scheduler::{dispatch_all, due_for_notification, run_daily_check, NotificationScheduler};
pub use templates::render;
pub use transport::{FaultInjectingMailer, LogMailer, Mailer, RecordingMailer};
