use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Transport error: {0}")]
    TransportError(reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(serde_json::Error),

    #[error("Decode error: {0}")]
    DecodeError(serde_json::Error),

    #[error("Invalid value for header {0}")]
    InvalidHeaderValue(String),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        Self::TransportError(value)
    }
}
