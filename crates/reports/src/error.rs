use atlas_session::SessionError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("session store error: {0}")]
    Session(#[from] SessionError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown report type: {0}")]
    UnknownReportType(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ReportError>;
