use std::path::PathBuf;

/// Days before the end date at which a contract counts as expiring soon.
pub const EXPIRY_WINDOW_DAYS: i64 = 7;

/// Exact day offsets that trigger an expiry notice.
pub const NOTIFICATION_OFFSETS: [i64; 2] = [7, 0];

pub const DEFAULT_BASE_URL: &str = "http://localhost:5173";

pub const CONTRACTS_FILE: &str = "contracts.json";

pub const CSV_FILE_NAME: &str = "contratos-jurisync.csv";
pub const JSON_FILE_NAME: &str = "contratos-jurisync.json";
pub const REPORT_FILE_NAME: &str = "relatorio-contratos-jurisync.html";

pub const CSV_MIME: &str = "text/csv";
pub const JSON_MIME: &str = "application/json";
pub const HTML_MIME: &str = "text/html";

pub const COLOR_ACTIVE: &str = "#10b981";
pub const COLOR_EXPIRING_SOON: &str = "#f59e0b";
pub const COLOR_EXPIRED: &str = "#ef4444";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("jurisync")
    } else {
        PathBuf::from(".jurisync-data")
    }
}

pub fn default_contracts_path() -> PathBuf {
    default_data_dir().join(CONTRACTS_FILE)
}
