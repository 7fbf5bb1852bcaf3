// crates/asciiwire-core/src/error.rs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WireError>;

#[derive(Debug, Error)]
pub enum WireError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("malformed input: {len} unit(s) at position {at}")]
    Malformed { at: usize, len: usize },

    #[error("unmappable input: {len} unit(s) at position {at}")]
    Unmappable { at: usize, len: usize },
}
