use thiserror::Error;

#[derive(Error, Debug)]
pub enum FidelityError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("frequency must be between 0 and 100 (got {0})")]
    FrequencyOutOfRange(u32),

    #[error("unknown rating grade: {0}")]
    UnknownGrade(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FidelityError>;
