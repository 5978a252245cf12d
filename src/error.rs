//! Error types for the pigpen helper.

use thiserror::Error;

/// Problems found while building a mapping table from a custom symbol list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("Expected {expected} symbols, got {found}")]
    WrongLength { expected: usize, found: usize },

    #[error("Symbol for letter '{letter}' is empty")]
    EmptySymbol { letter: char },

    #[error("Symbol '{symbol}' for letter '{letter}' contains the token delimiter")]
    ContainsDelimiter { letter: char, symbol: String },

    #[error("Symbol '{symbol}' is used for both '{first}' and '{second}'")]
    DuplicateSymbol {
        symbol: String,
        first: char,
        second: char,
    },
}

/// Failures of the interactive helper itself. The cipher transforms never fail.
#[derive(Debug, Error)]
pub enum HelperError {
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T> = std::result::Result<T, HelperError>;
