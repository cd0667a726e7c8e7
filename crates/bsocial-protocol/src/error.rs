use bsocial_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Signature protocol \"{0}\" not supported")]
    UnsupportedProtocol(String),

    #[error("Invalid signing key: {0}")]
    InvalidKey(String),

    #[error("No output at index {0}")]
    OutputIndex(usize),

    #[error("Core error: {0}")]
    Core(#[from] CoreError),
}
