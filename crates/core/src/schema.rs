//! Row schemas
//!
//! A `Schema` is the ordered, immutable list of columns one row must carry.
//! Schemas can be built from column types, from named columns, from raw wire
//! tags, or from a TOML definition:
//!
//! ```toml
//! [[columns]]
//! name = "id"
//! type = "BIGINT"
//!
//! [[columns]]
//! name = "payload"
//! type = "varbinary"
//! ```

use crate::error::{Error, Result};
use crate::types::ColumnType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A single named column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Column name (empty for anonymous columns)
    pub name: String,
    /// Column type
    pub column_type: ColumnType,
}

impl Column {
    /// Create a named column
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Column {
            name: name.into(),
            column_type,
        }
    }
}

/// Ordered, immutable column list
///
/// Cloning is cheap: the column list is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    columns: Arc<[Column]>,
}

impl Schema {
    /// Create a schema of anonymous columns
    pub fn new(types: impl IntoIterator<Item = ColumnType>) -> Self {
        Schema::from_columns(types.into_iter().map(|ty| Column::new("", ty)))
    }

    /// Create a schema from named columns
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Self {
        Schema {
            columns: columns.into_iter().collect(),
        }
    }

    /// Create a schema from raw wire tags
    ///
    /// Fails with `Error::UnknownWireType` on the first tag that names no type.
    pub fn from_wire_tags(tags: &[u8]) -> Result<Self> {
        let types = tags
            .iter()
            .map(|&tag| ColumnType::from_wire_tag(tag))
            .collect::<Result<Vec<_>>>()?;
        Ok(Schema::new(types))
    }

    /// Parse a schema from a TOML definition
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let def: SchemaDef = toml::from_str(s)?;
        def.into_schema()
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column type at `index`, or `None` past the end
    pub fn column_type(&self, index: usize) -> Option<ColumnType> {
        self.columns.get(index).map(|c| c.column_type)
    }

    /// Column at `index`, or `None` past the end
    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column types in order
    pub fn types(&self) -> impl Iterator<Item = ColumnType> + '_ {
        self.columns.iter().map(|c| c.column_type)
    }

    /// Wire tags in order
    pub fn wire_tags(&self) -> Vec<u8> {
        self.types().map(|ty| ty.wire_tag()).collect()
    }

    /// Sum of fixed widths, counting only the length prefix of variable columns
    ///
    /// This is the minimum encoded size of any row in this schema.
    pub fn fixed_width_total(&self) -> usize {
        self.types().map(|ty| ty.null_width()).sum()
    }
}

/// Serialized schema definition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaDef {
    /// Columns in row order
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

/// Serialized column definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name
    #[serde(default)]
    pub name: String,
    /// Type name, case-insensitive (e.g. "BIGINT", "varbinary")
    #[serde(rename = "type")]
    pub type_name: String,
}

impl SchemaDef {
    /// Resolve type names into a schema
    pub fn into_schema(self) -> Result<Schema> {
        let columns = self
            .columns
            .into_iter()
            .enumerate()
            .map(|(i, def)| {
                let column_type = def.type_name.parse::<ColumnType>().map_err(|_| {
                    Error::InvalidSchema(format!(
                        "column {} ('{}'): unknown type '{}'",
                        i, def.name, def.type_name
                    ))
                })?;
                Ok(Column::new(def.name, column_type))
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(columns = columns.len(), "Loaded schema definition");
        Ok(Schema::from_columns(columns))
    }
}

impl From<&Schema> for SchemaDef {
    fn from(schema: &Schema) -> Self {
        SchemaDef {
            columns: schema
                .columns()
                .iter()
                .map(|c| ColumnDef {
                    name: c.name.clone(),
                    type_name: c.column_type.name().to_string(),
                })
                .collect(),
        }
    }
}
