#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Token decode error: {0}")]
    Base64(#[from] base64::DecodeError),
}
