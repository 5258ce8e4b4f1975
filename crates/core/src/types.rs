//! Column type tags
//!
//! This module defines:
//! - ColumnType: the closed set of column types a row may carry
//! - NULL sentinels for every column type
//!
//! ## Wire Tags
//!
//! Each column type has a one-byte tag on the wire:
//! - TINYINT = 3
//! - SMALLINT = 4
//! - INTEGER = 5
//! - BIGINT = 6
//! - FLOAT = 8
//! - STRING = 9
//! - VARBINARY = 25

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length prefix written in place of a payload for NULL variable-length columns
pub const NULL_LENGTH: i32 = -1;

/// Size of the length prefix in front of every variable-length field
pub const LENGTH_PREFIX_SIZE: usize = 4;

/// NULL sentinel for TINYINT columns
pub const NULL_TINYINT: i8 = i8::MIN;
/// NULL sentinel for SMALLINT columns
pub const NULL_SMALLINT: i16 = i16::MIN;
/// NULL sentinel for INTEGER columns
pub const NULL_INTEGER: i32 = i32::MIN;
/// NULL sentinel for BIGINT columns
pub const NULL_BIGINT: i64 = i64::MIN;
/// NULL sentinel for FLOAT columns (-1.7976931348623157e308)
pub const NULL_FLOAT: f64 = f64::MIN;

/// Column type of a single field in a row
///
/// Fixed-width types encode as exactly `fixed_width()` big-endian bytes.
/// Variable-length types encode as a 4-byte signed length followed by the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum ColumnType {
    /// 8-bit signed integer
    TinyInt = 3,
    /// 16-bit signed integer
    SmallInt = 4,
    /// 32-bit signed integer
    Integer = 5,
    /// 64-bit signed integer
    BigInt = 6,
    /// 64-bit IEEE-754 double
    Float = 8,
    /// UTF-8 string
    String = 9,
    /// Raw bytes
    VarBinary = 25,
}

impl ColumnType {
    /// All column types, in wire tag order
    pub const ALL: [ColumnType; 7] = [
        ColumnType::TinyInt,
        ColumnType::SmallInt,
        ColumnType::Integer,
        ColumnType::BigInt,
        ColumnType::Float,
        ColumnType::String,
        ColumnType::VarBinary,
    ];

    /// Convert to wire tag
    pub fn wire_tag(&self) -> u8 {
        *self as u8
    }

    /// Create from wire tag
    ///
    /// Unknown tags are rejected with `Error::UnknownWireType`.
    pub fn from_wire_tag(tag: u8) -> Result<Self> {
        match tag {
            3 => Ok(ColumnType::TinyInt),
            4 => Ok(ColumnType::SmallInt),
            5 => Ok(ColumnType::Integer),
            6 => Ok(ColumnType::BigInt),
            8 => Ok(ColumnType::Float),
            9 => Ok(ColumnType::String),
            25 => Ok(ColumnType::VarBinary),
            other => Err(Error::UnknownWireType(other)),
        }
    }

    /// Encoded width in bytes, or `None` for variable-length types
    pub fn fixed_width(&self) -> Option<usize> {
        match self {
            ColumnType::TinyInt => Some(1),
            ColumnType::SmallInt => Some(2),
            ColumnType::Integer => Some(4),
            ColumnType::BigInt | ColumnType::Float => Some(8),
            ColumnType::String | ColumnType::VarBinary => None,
        }
    }

    /// Whether this type is length-prefixed on the wire
    pub fn is_variable_length(&self) -> bool {
        self.fixed_width().is_none()
    }

    /// Bytes written by `add_null` for this type
    pub fn null_width(&self) -> usize {
        self.fixed_width().unwrap_or(LENGTH_PREFIX_SIZE)
    }

    /// Protocol name of the type
    pub fn name(&self) -> &'static str {
        match self {
            ColumnType::TinyInt => "TINYINT",
            ColumnType::SmallInt => "SMALLINT",
            ColumnType::Integer => "INTEGER",
            ColumnType::BigInt => "BIGINT",
            ColumnType::Float => "FLOAT",
            ColumnType::String => "STRING",
            ColumnType::VarBinary => "VARBINARY",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColumnType {
    type Err = Error;

    /// Parse a protocol type name, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        ColumnType::ALL
            .iter()
            .copied()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidSchema(format!("unknown column type '{}'", s)))
    }
}
