use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// EmailNotification — Rendered expiry notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// Sent seven days before the end date.
    ExpiryReminder,
    /// Sent on the end date itself.
    ExpiryWarning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotification {
    pub to: String,
    pub subject: String,
    /// Complete HTML document.
    pub body: String,
    pub contract_id: String,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
}

// ---------------------------------------------------------------------------
// DispatchReport — Outcome of a best-effort batch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchFailure {
    pub contract_id: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReport {
    pub sent: usize,
    pub failed: usize,
    pub notifications: Vec<EmailNotification>,
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub fn attempted(&self) -> usize {
        self.sent + self.failed
    }
}
