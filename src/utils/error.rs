use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExplorerError {
    /// Transport failure or a non-success HTTP status from the project API.
    #[error("Project fetch failed: {reason}")]
    FetchError { reason: String },

    /// The API answered but the payload did not decode into project records.
    #[error("Project decode failed: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Invalid configuration value for '{field}' ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl From<reqwest::Error> for ExplorerError {
    fn from(err: reqwest::Error) -> Self {
        ExplorerError::FetchError {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExplorerError>;
