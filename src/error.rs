//! Crate-level error types.

use std::fmt;

use crate::state::LocketId;

/// Errors produced by the arix crate.
#[derive(Debug)]
pub enum ArixError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Two poses in one locket set share an identifier.
    DuplicateLocket(LocketId),
}

impl fmt::Display for ArixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::DuplicateLocket(id) => {
                write!(f, "duplicate locket id: {id}")
            }
        }
    }
}

impl std::error::Error for ArixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ArixError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
