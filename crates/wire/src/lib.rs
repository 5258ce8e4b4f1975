//! Row encoding for the rowwire ingestion protocol
//!
//! This crate turns typed column values into the protocol's row image:
//! - RowBuilder: Validates each append against the schema and encodes it
//! - RowSink / ByteBuffer: The growable output buffer contract and its default implementation
//! - BuilderConfig: Buffer sizing and payload limits, loadable from TOML

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod builder;
pub mod config;

pub use buffer::{ByteBuffer, RowSink};
pub use builder::RowBuilder;
pub use config::{BuilderConfig, ConfigError, DEFAULT_INITIAL_CAPACITY, PROTOCOL_MAX_VALUE_LEN};
