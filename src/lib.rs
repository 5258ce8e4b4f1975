//! rowwire - Typed row encoder for row-ingestion protocols
//!
//! rowwire encodes one row at a time against a fixed column schema into the
//! byte layout a storage system's row-ingestion protocol expects.
//!
//! # Quick Start
//!
//! ```ignore
//! use rowwire::{ColumnType, RowBuilder, Schema};
//!
//! let schema = Schema::new([ColumnType::BigInt, ColumnType::String]);
//! let mut builder = RowBuilder::new(schema);
//!
//! builder.add_i64(5)?;
//! builder.add_string("hi")?;
//! let row = builder.row()?;
//! ```
//!
//! # Architecture
//!
//! - `rowwire-core`: column types, schemas, values and errors
//! - `rowwire-wire`: the output buffer contract and the row builder

pub use rowwire_core::*;
pub use rowwire_wire::*;
