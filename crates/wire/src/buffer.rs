//! Row output buffers
//!
//! All bytes produced by the row builder pass through a `RowSink`.
//! Growth is the only fallible step: callers reserve space with
//! `ensure_capacity` and the writers that follow never fail.
//!
//! All multi-byte values are written big-endian.

use byteorder::{BigEndian, ByteOrder};
use rowwire_core::error::{Error, Result};

/// Append-only byte sink consumed by the row builder.
///
/// # Contract
///
/// - `ensure_capacity(n)` either reserves room for `n` more bytes or fails
///   with `Error::BufferAllocationFailure` without changing the contents.
/// - Writers append exactly their width in bytes and cannot fail once
///   capacity has been reserved.
/// - `clear` truncates to empty but keeps the allocation for reuse.
pub trait RowSink {
    /// Reserve room for `additional` more bytes.
    fn ensure_capacity(&mut self, additional: usize) -> Result<()>;

    /// Append a signed 8-bit value.
    fn put_i8(&mut self, value: i8);

    /// Append a big-endian signed 16-bit value.
    fn put_i16(&mut self, value: i16);

    /// Append a big-endian signed 32-bit value.
    fn put_i32(&mut self, value: i32);

    /// Append a big-endian signed 64-bit value.
    fn put_i64(&mut self, value: i64);

    /// Append a big-endian IEEE-754 double.
    fn put_f64(&mut self, value: f64);

    /// Append raw bytes verbatim.
    fn put_bytes(&mut self, bytes: &[u8]);

    /// Roll back to an earlier length. No-op if `len` is not shorter.
    fn truncate(&mut self, len: usize);

    /// Truncate to empty, keeping capacity.
    fn clear(&mut self);

    /// Bytes written so far.
    fn len(&self) -> usize;

    /// Whether nothing has been written.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export the written bytes.
    fn as_bytes(&self) -> &[u8];
}

/// Growable `Vec<u8>`-backed sink.
#[derive(Debug, Clone, Default)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        ByteBuffer {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Allocated capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Consume the buffer, returning its bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    /// Move the bytes out, leaving an empty buffer with the same capacity.
    pub fn take(&mut self) -> Vec<u8> {
        let capacity = self.data.capacity();
        std::mem::replace(&mut self.data, Vec::with_capacity(capacity))
    }
}

impl RowSink for ByteBuffer {
    fn ensure_capacity(&mut self, additional: usize) -> Result<()> {
        self.data.try_reserve(additional).map_err(|e| {
            tracing::warn!(
                requested = additional,
                len = self.data.len(),
                error = %e,
                "Row buffer allocation failed"
            );
            Error::BufferAllocationFailure {
                requested: additional,
            }
        })
    }

    fn put_i8(&mut self, value: i8) {
        self.data.push(value as u8);
    }

    fn put_i16(&mut self, value: i16) {
        let mut buf = [0u8; 2];
        BigEndian::write_i16(&mut buf, value);
        self.data.extend_from_slice(&buf);
    }

    fn put_i32(&mut self, value: i32) {
        let mut buf = [0u8; 4];
        BigEndian::write_i32(&mut buf, value);
        self.data.extend_from_slice(&buf);
    }

    fn put_i64(&mut self, value: i64) {
        let mut buf = [0u8; 8];
        BigEndian::write_i64(&mut buf, value);
        self.data.extend_from_slice(&buf);
    }

    fn put_f64(&mut self, value: f64) {
        let mut buf = [0u8; 8];
        BigEndian::write_f64(&mut buf, value);
        self.data.extend_from_slice(&buf);
    }

    fn put_bytes(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    fn truncate(&mut self, len: usize) {
        self.data.truncate(len);
    }

    fn clear(&mut self) {
        self.data.clear();
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
