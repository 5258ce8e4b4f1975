//! Value types for rowwire
//!
//! `Value` is one field of a row in application terms. Each non-null variant
//! corresponds to exactly one `ColumnType`; there are no implicit coercions,
//! so `Integer(1)` can never be written to a BIGINT column.

use crate::types::ColumnType;
use serde::{Deserialize, Serialize};

/// A single field value
///
/// Float equality follows IEEE-754 semantics (`NaN != NaN`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absent value, encoded as the column type's NULL sentinel
    Null,
    /// TINYINT value
    TinyInt(i8),
    /// SMALLINT value
    SmallInt(i16),
    /// INTEGER value
    Integer(i32),
    /// BIGINT value
    BigInt(i64),
    /// FLOAT value
    Float(f64),
    /// STRING value
    String(String),
    /// VARBINARY value
    VarBinary(Vec<u8>),
}

impl Value {
    /// Column type this value encodes as, or `None` for `Null`
    pub fn column_type(&self) -> Option<ColumnType> {
        match self {
            Value::Null => None,
            Value::TinyInt(_) => Some(ColumnType::TinyInt),
            Value::SmallInt(_) => Some(ColumnType::SmallInt),
            Value::Integer(_) => Some(ColumnType::Integer),
            Value::BigInt(_) => Some(ColumnType::BigInt),
            Value::Float(_) => Some(ColumnType::Float),
            Value::String(_) => Some(ColumnType::String),
            Value::VarBinary(_) => Some(ColumnType::VarBinary),
        }
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Value::TinyInt(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Value::SmallInt(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::BigInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::VarBinary(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::VarBinary(v.to_vec())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}
