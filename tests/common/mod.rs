//! Shared test utilities for the integration test suites.
//!
//! Provides a reference decoder for the row layout, a sink with a hard
//! capacity limit, and tracing setup.
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]
#![allow(unused_imports)]

use std::sync::Once;

pub use rowwire::{
    BuilderConfig, ByteBuffer, ColumnAppend, ColumnType, Error, Result, RowBuilder, RowSink,
    Schema, Value, NULL_BIGINT, NULL_FLOAT, NULL_INTEGER, NULL_LENGTH, NULL_SMALLINT,
    NULL_TINYINT,
};

// ============================================================================
// Initialization
// ============================================================================

static INIT_TRACING: Once = Once::new();

/// Install a test-writer subscriber once per test binary.
pub fn init_tracing() {
    INIT_TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    });
}

// ============================================================================
// Reference decoder
// ============================================================================

/// Decode one row image back into values, mapping sentinels to `Value::Null`.
///
/// Panics on malformed input; only used to check encoder output.
pub fn decode_row(schema: &Schema, bytes: &[u8]) -> Vec<Value> {
    let mut offset = 0;
    let mut values = Vec::with_capacity(schema.len());

    for column_type in schema.types() {
        let value = match column_type {
            ColumnType::TinyInt => {
                let v = bytes[offset] as i8;
                offset += 1;
                if v == NULL_TINYINT {
                    Value::Null
                } else {
                    Value::TinyInt(v)
                }
            }
            ColumnType::SmallInt => {
                let v = i16::from_be_bytes(bytes[offset..offset + 2].try_into().unwrap());
                offset += 2;
                if v == NULL_SMALLINT {
                    Value::Null
                } else {
                    Value::SmallInt(v)
                }
            }
            ColumnType::Integer => {
                let v = i32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap());
                offset += 4;
                if v == NULL_INTEGER {
                    Value::Null
                } else {
                    Value::Integer(v)
                }
            }
            ColumnType::BigInt => {
                let v = i64::from_be_bytes(bytes[offset..offset + 8].try_into().unwrap());
                offset += 8;
                if v == NULL_BIGINT {
                    Value::Null
                } else {
                    Value::BigInt(v)
                }
            }
            ColumnType::Float => {
                let v = f64::from_be_bytes(bytes[offset..offset + 8].try_into().unwrap());
                offset += 8;
                if v == NULL_FLOAT {
                    Value::Null
                } else {
                    Value::Float(v)
                }
            }
            ColumnType::String | ColumnType::VarBinary => {
                let len = i32::from_be_bytes(bytes[offset..offset + 4].try_into().unwrap());
                offset += 4;
                if len == NULL_LENGTH {
                    Value::Null
                } else {
                    let len = len as usize;
                    let payload = bytes[offset..offset + len].to_vec();
                    offset += len;
                    if column_type == ColumnType::String {
                        Value::String(String::from_utf8(payload).unwrap())
                    } else {
                        Value::VarBinary(payload)
                    }
                }
            }
        };
        values.push(value);
    }

    assert_eq!(offset, bytes.len(), "trailing bytes after last column");
    values
}

// ============================================================================
// LimitedSink - sink that refuses to grow past a fixed size
// ============================================================================

/// Sink that fails `ensure_capacity` once `limit` bytes would be exceeded.
#[derive(Debug, Default)]
pub struct LimitedSink {
    inner: ByteBuffer,
    limit: usize,
}

impl LimitedSink {
    pub fn new(limit: usize) -> Self {
        LimitedSink {
            inner: ByteBuffer::new(),
            limit,
        }
    }
}

impl RowSink for LimitedSink {
    fn ensure_capacity(&mut self, additional: usize) -> Result<()> {
        if self.inner.len() + additional > self.limit {
            return Err(Error::BufferAllocationFailure {
                requested: additional,
            });
        }
        self.inner.ensure_capacity(additional)
    }

    fn put_i8(&mut self, value: i8) {
        self.inner.put_i8(value)
    }

    fn put_i16(&mut self, value: i16) {
        self.inner.put_i16(value)
    }

    fn put_i32(&mut self, value: i32) {
        self.inner.put_i32(value)
    }

    fn put_i64(&mut self, value: i64) {
        self.inner.put_i64(value)
    }

    fn put_f64(&mut self, value: f64) {
        self.inner.put_f64(value)
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        self.inner.put_bytes(bytes)
    }

    fn truncate(&mut self, len: usize) {
        self.inner.truncate(len)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn as_bytes(&self) -> &[u8] {
        self.inner.as_bytes()
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Builder over `types` with default configuration.
pub fn builder_for(types: &[ColumnType]) -> RowBuilder {
    init_tracing();
    RowBuilder::new(Schema::new(types.iter().copied()))
}

/// Encode `values` against `types`, returning the finished row.
pub fn encode(types: &[ColumnType], values: &[Value]) -> Vec<u8> {
    let mut builder = builder_for(types);
    builder.add_row(values).unwrap();
    builder.row().unwrap().to_vec()
}

/// Snapshot of builder state for atomicity checks.
pub fn state_of<S: RowSink>(builder: &RowBuilder<S>) -> (usize, Vec<u8>) {
    (builder.position(), builder.as_bytes().to_vec())
}
