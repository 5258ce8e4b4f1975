//! # RowBuilder - Row Encoding
//!
//! `RowBuilder` encodes one row at a time against a fixed schema. Values are
//! appended strictly in column order; each append checks the value's type
//! against the column at the cursor before any byte is written.
//!
//! ## Wire Format
//!
//! ```text
//! row            := field(col_0) field(col_1) ... field(col_{N-1})
//! fixed_field    := <width bytes, big-endian, two's complement / IEEE-754>
//! variable_field := <i32 length><length bytes>    (length = -1 encodes NULL)
//! ```
//!
//! ## Failure Atomicity
//!
//! A failed append leaves both the cursor and the buffer exactly as they
//! were, so the caller may retry with a corrected value or `reset`.
//!
//! ## Usage
//!
//! ```ignore
//! let schema = Schema::new([ColumnType::BigInt, ColumnType::String]);
//! let mut builder = RowBuilder::new(schema);
//! builder.add_i64(5)?;
//! builder.add_string("hi")?;
//! send(builder.row()?);
//!
//! // Reuse builder for next row
//! builder.reset();
//! builder.add_null()?;
//! ```

use crate::buffer::{ByteBuffer, RowSink};
use crate::config::{BuilderConfig, DEFAULT_INITIAL_CAPACITY};
use rowwire_core::error::{ColumnAppend, Error, Result};
use rowwire_core::schema::Schema;
use rowwire_core::types::{
    ColumnType, LENGTH_PREFIX_SIZE, NULL_BIGINT, NULL_FLOAT, NULL_INTEGER, NULL_LENGTH,
    NULL_SMALLINT, NULL_TINYINT,
};
use rowwire_core::value::Value;

/// Encodes rows of one schema into a reusable buffer.
///
/// Not synchronized: all appends for a row and the `reset` that follows
/// must come from the owner. Separate builders share nothing.
pub struct RowBuilder<S: RowSink = ByteBuffer> {
    schema: Schema,
    max_value_len: usize,
    sink: S,
    position: usize,
}

impl RowBuilder<ByteBuffer> {
    /// Create a builder with default configuration.
    pub fn new(schema: Schema) -> Self {
        Self::with_config(schema, &BuilderConfig::default())
    }

    /// Create a builder with the given configuration.
    ///
    /// A `max_value_len` above the protocol limit is clamped to it.
    pub fn with_config(schema: Schema, config: &BuilderConfig) -> Self {
        let capacity = config
            .initial_capacity
            .unwrap_or_else(|| schema.fixed_width_total().max(DEFAULT_INITIAL_CAPACITY));
        Self::with_sink(schema, config, ByteBuffer::with_capacity(capacity))
    }

    /// Hand out the finished row and reset for the next one.
    pub fn take_row(&mut self) -> Result<Vec<u8>> {
        self.check_complete()?;
        let row = self.sink.take();
        self.position = 0;
        Ok(row)
    }
}

impl<S: RowSink> RowBuilder<S> {
    /// Create a builder writing into `sink`.
    ///
    /// The sink is cleared so every row starts at offset zero.
    pub fn with_sink(schema: Schema, config: &BuilderConfig, mut sink: S) -> Self {
        sink.clear();
        tracing::debug!(
            columns = schema.len(),
            max_value_len = config.effective_max_value_len(),
            "Created row builder"
        );
        RowBuilder {
            schema,
            max_value_len: config.effective_max_value_len(),
            sink,
            position: 0,
        }
    }

    /// Append a TINYINT.
    pub fn add_i8(&mut self, value: i8) -> Result<()> {
        self.expect_column(ColumnType::TinyInt)?;
        self.sink.ensure_capacity(1)?;
        self.sink.put_i8(value);
        self.advance();
        Ok(())
    }

    /// Append a SMALLINT.
    pub fn add_i16(&mut self, value: i16) -> Result<()> {
        self.expect_column(ColumnType::SmallInt)?;
        self.sink.ensure_capacity(2)?;
        self.sink.put_i16(value);
        self.advance();
        Ok(())
    }

    /// Append an INTEGER.
    pub fn add_i32(&mut self, value: i32) -> Result<()> {
        self.expect_column(ColumnType::Integer)?;
        self.sink.ensure_capacity(4)?;
        self.sink.put_i32(value);
        self.advance();
        Ok(())
    }

    /// Append a BIGINT.
    pub fn add_i64(&mut self, value: i64) -> Result<()> {
        self.expect_column(ColumnType::BigInt)?;
        self.sink.ensure_capacity(8)?;
        self.sink.put_i64(value);
        self.advance();
        Ok(())
    }

    /// Append a FLOAT.
    pub fn add_f64(&mut self, value: f64) -> Result<()> {
        self.expect_column(ColumnType::Float)?;
        self.sink.ensure_capacity(8)?;
        self.sink.put_f64(value);
        self.advance();
        Ok(())
    }

    /// Append a STRING as its UTF-8 bytes.
    pub fn add_string(&mut self, value: &str) -> Result<()> {
        self.expect_column(ColumnType::String)?;
        self.put_variable(value.as_bytes())
    }

    /// Append a VARBINARY.
    pub fn add_varbinary(&mut self, value: &[u8]) -> Result<()> {
        self.expect_column(ColumnType::VarBinary)?;
        self.put_variable(value)
    }

    /// Append the NULL sentinel of the column at the cursor.
    pub fn add_null(&mut self) -> Result<()> {
        let column_type = match self.schema.column_type(self.position) {
            Some(ty) => ty,
            None => return Err(self.mismatch(None, ColumnAppend::Null)),
        };
        self.sink.ensure_capacity(column_type.null_width())?;
        match column_type {
            ColumnType::TinyInt => self.sink.put_i8(NULL_TINYINT),
            ColumnType::SmallInt => self.sink.put_i16(NULL_SMALLINT),
            ColumnType::Integer => self.sink.put_i32(NULL_INTEGER),
            ColumnType::BigInt => self.sink.put_i64(NULL_BIGINT),
            ColumnType::Float => self.sink.put_f64(NULL_FLOAT),
            ColumnType::String | ColumnType::VarBinary => self.sink.put_i32(NULL_LENGTH),
        }
        self.advance();
        Ok(())
    }

    /// Append a typed value, or its column's NULL sentinel for `Value::Null`.
    pub fn add_value(&mut self, value: &Value) -> Result<()> {
        match value {
            Value::Null => self.add_null(),
            Value::TinyInt(v) => self.add_i8(*v),
            Value::SmallInt(v) => self.add_i16(*v),
            Value::Integer(v) => self.add_i32(*v),
            Value::BigInt(v) => self.add_i64(*v),
            Value::Float(v) => self.add_f64(*v),
            Value::String(v) => self.add_string(v),
            Value::VarBinary(v) => self.add_varbinary(v),
        }
    }

    /// Append several values in order.
    ///
    /// All or nothing: if any value fails, the values appended by this call
    /// are rolled back and the error of the failing value is returned.
    pub fn add_row(&mut self, values: &[Value]) -> Result<()> {
        let start_position = self.position;
        let start_len = self.sink.len();
        for value in values {
            if let Err(e) = self.add_value(value) {
                self.sink.truncate(start_len);
                self.position = start_position;
                return Err(e);
            }
        }
        Ok(())
    }

    /// Clear the buffer and return the cursor to the first column.
    pub fn reset(&mut self) {
        self.sink.clear();
        self.position = 0;
    }

    /// The finished row, once every column has been written.
    pub fn row(&self) -> Result<&[u8]> {
        self.check_complete()?;
        Ok(self.sink.as_bytes())
    }

    /// Bytes written so far, complete or not.
    pub fn as_bytes(&self) -> &[u8] {
        self.sink.as_bytes()
    }

    /// Number of bytes written so far.
    pub fn encoded_len(&self) -> usize {
        self.sink.len()
    }

    /// Index of the next column expected.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of columns in the schema.
    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    /// Columns still to be written.
    pub fn remaining(&self) -> usize {
        self.schema.len() - self.position
    }

    /// Whether every column has been written.
    pub fn is_complete(&self) -> bool {
        self.position == self.schema.len()
    }

    /// Type of the next column, or `None` once the row is complete.
    pub fn expected_type(&self) -> Option<ColumnType> {
        self.schema.column_type(self.position)
    }

    /// The schema rows are built against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Largest STRING/VARBINARY payload accepted.
    pub fn max_value_len(&self) -> usize {
        self.max_value_len
    }

    /// The underlying sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the builder, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    fn expect_column(&self, column_type: ColumnType) -> Result<()> {
        match self.schema.column_type(self.position) {
            Some(expected) if expected == column_type => Ok(()),
            expected => Err(self.mismatch(expected, ColumnAppend::Value(column_type))),
        }
    }

    fn mismatch(&self, expected: Option<ColumnType>, actual: ColumnAppend) -> Error {
        tracing::trace!(
            position = self.position,
            expected = ?expected,
            actual = %actual,
            "Column mismatch"
        );
        Error::column_mismatch(self.position, expected, actual)
    }

    fn put_variable(&mut self, payload: &[u8]) -> Result<()> {
        if payload.len() > self.max_value_len {
            return Err(Error::ValueTooLarge {
                len: payload.len(),
                max: self.max_value_len,
            });
        }
        // max_value_len never exceeds i32::MAX
        let len = payload.len() as i32;
        self.sink.ensure_capacity(LENGTH_PREFIX_SIZE + payload.len())?;
        self.sink.put_i32(len);
        self.sink.put_bytes(payload);
        self.advance();
        Ok(())
    }

    fn advance(&mut self) {
        debug_assert!(self.position < self.schema.len());
        self.position += 1;
    }

    fn check_complete(&self) -> Result<()> {
        if !self.is_complete() {
            return Err(Error::RowIncomplete {
                written: self.position,
                expected: self.schema.len(),
            });
        }
        Ok(())
    }
}
