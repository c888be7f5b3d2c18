#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Report export requires aggregated chart data")]
    MissingChartData,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
