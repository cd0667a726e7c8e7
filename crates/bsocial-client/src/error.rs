use bsocial_query::QueryError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Index service error: status {status}")]
    Service { status: u16 },

    #[error("Malformed stream payload: {0}")]
    StreamDecode(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Query error: {0}")]
    Query(#[from] QueryError),
}
