//! Error types for key codec operations

use thiserror::Error;

/// Error type for key decode operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of buffer")]
    EndOfBuffer,
    #[error("extra data found: {0} bytes")]
    ExtraData(usize),
    #[error("invalid bool byte: {0}")]
    InvalidBool(u8),
    #[error("invalid null marker: {0}")]
    InvalidMarker(u8),
    #[error("invalid escape byte: {0}")]
    InvalidEscape(u8),
    #[error("invalid char code point: {0}")]
    InvalidChar(u32),
    #[error("invalid utf-8 in decoded string")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
