use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlipscoreError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("no contractor records found under: {0}")]
    NoRecords(String),

    #[error("contractor not found in data set: {0}")]
    ContractorNotFound(String),

    #[error("malformed contractor record {path}: {message}")]
    RecordParse { path: String, message: String },

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid --as-of timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("unknown experience bracket: {0} (expected 1-3, 3-6, 6-10 or 10+)")]
    InvalidBracket(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FlipscoreError>;
