//! Error types for rowwire
//!
//! This module defines all error types raised while building rows.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Every variant is recoverable by the caller: an operation that returns an
//! error leaves the row builder's cursor and buffer exactly as they were.

use crate::types::ColumnType;
use thiserror::Error;

/// Result type alias for rowwire operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the row encoder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The appended value does not match the column at the cursor,
    /// or the row is already complete.
    #[error("Column mismatch at position {position}: expected {}, got {actual}", fmt_expected(.expected))]
    ColumnMismatch {
        /// Cursor position at the time of the call
        position: usize,
        /// Type the schema expects here (`None` when past the last column)
        expected: Option<ColumnType>,
        /// Type of the attempted append
        actual: ColumnAppend,
    },

    /// A variable-length payload exceeds the protocol length limit
    #[error("Value too large: {len} bytes exceeds maximum of {max}")]
    ValueTooLarge {
        /// Payload length in bytes
        len: usize,
        /// Maximum allowed payload length
        max: usize,
    },

    /// The output buffer could not grow
    #[error("Buffer allocation failed: could not reserve {requested} bytes")]
    BufferAllocationFailure {
        /// Additional bytes that were requested
        requested: usize,
    },

    /// A schema was decoded from a wire tag that names no column type
    #[error("Unknown wire type tag: {0}")]
    UnknownWireType(u8),

    /// The finished row was requested before every column was written
    #[error("Row incomplete: {written} of {expected} columns written")]
    RowIncomplete {
        /// Columns written so far
        written: usize,
        /// Columns in the schema
        expected: usize,
    },

    /// A schema definition could not be turned into a schema
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),
}

/// The kind of append that was attempted, for `ColumnMismatch` reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnAppend {
    /// A typed value append
    Value(ColumnType),
    /// An `add_null` call
    Null,
}

impl std::fmt::Display for ColumnAppend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnAppend::Value(ty) => write!(f, "{}", ty),
            ColumnAppend::Null => write!(f, "NULL"),
        }
    }
}

fn fmt_expected(expected: &Option<ColumnType>) -> String {
    match expected {
        Some(ty) => ty.to_string(),
        None => "end of row".to_string(),
    }
}

impl Error {
    /// Create a column mismatch error.
    pub fn column_mismatch(
        position: usize,
        expected: Option<ColumnType>,
        actual: ColumnAppend,
    ) -> Self {
        Error::ColumnMismatch {
            position,
            expected,
            actual,
        }
    }

    /// Check if this is a column mismatch
    pub fn is_column_mismatch(&self) -> bool {
        matches!(self, Error::ColumnMismatch { .. })
    }

    /// Check if this is a value-too-large error
    pub fn is_value_too_large(&self) -> bool {
        matches!(self, Error::ValueTooLarge { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::InvalidSchema(e.to_string())
    }
}
