#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Map error: {0}")]
    Map(String),
}

/// The three user-facing failure categories. Whatever the cause, a failed
/// fetch is shown to the user as one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    Stations,
    StationDetails,
    SystemInformation,
}

impl FetchKind {
    pub fn message(&self) -> &'static str {
        match self {
            FetchKind::Stations => "Failed to fetch stations",
            FetchKind::StationDetails => "Failed to fetch station details",
            FetchKind::SystemInformation => "Failed to load system information",
        }
    }
}
