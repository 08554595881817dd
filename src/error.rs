//! Error types for block inspection

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error(
        "Malformed payload: cannot read {field} at offset {offset} (need {needed} bytes, {available} available)"
    )]
    Format {
        field: &'static str,
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Complex parsing of script is not implemented (leading opcode {0:#04x})")]
    UnsupportedScript(u8),

    #[error("Script push of {needed} bytes exceeds the {available} bytes remaining")]
    ScriptBounds { needed: usize, available: usize },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("RPC server error (code: {code}): {message}")]
    Rpc { code: i64, message: String },

    #[error("RPC transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
