//! Error types for a session.

use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid literal for integer age: {input:?} ({reason})")]
    InvalidAge { input: String, reason: String },

    #[error("input closed before a line was read")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
