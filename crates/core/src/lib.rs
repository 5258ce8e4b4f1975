//! Core types for rowwire
//!
//! This crate defines the foundational types used by the row encoder:
//! - ColumnType: Closed set of column types with wire tags and NULL sentinels
//! - Column / Schema: Ordered, immutable column lists
//! - SchemaDef: TOML-loadable schema definitions
//! - Value: Typed field values
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod schema;
pub mod types;
pub mod value;

pub use error::{ColumnAppend, Error, Result};
pub use schema::{Column, ColumnDef, Schema, SchemaDef};
pub use types::{
    ColumnType, LENGTH_PREFIX_SIZE, NULL_BIGINT, NULL_FLOAT, NULL_INTEGER, NULL_LENGTH,
    NULL_SMALLINT, NULL_TINYINT,
};
pub use value::Value;
