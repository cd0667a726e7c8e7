use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid ASM: {0}")]
    Asm(String),

    #[error("Invalid script: {0}")]
    Script(String),

    #[error("Hex error: {0}")]
    Hex(#[from] hex::FromHexError),
}
