//! Introspected metadata types.
//!
//! These are the shapes the analysis pipeline consumes. They are produced
//! either by the sidecar worker (see [`crate::worker::protocol`]) or by a
//! JSON snapshot file; both are mapped into these types at the boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single sampled row: column name -> raw value.
///
/// A `BTreeMap` keeps iteration order deterministic, which keeps value-pattern
/// hits in a stable order across runs.
pub type SampleRow = BTreeMap<String, serde_json::Value>;

/// Metadata for one column, as reported by introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMetadata {
    /// Column name.
    pub name: String,
    /// Database-specific declared type (e.g. "varchar(50)", "datetime2").
    #[serde(rename = "type")]
    pub declared_type: String,
    /// Whether the database reports this column as part of the primary key.
    #[serde(default)]
    pub is_primary_key: bool,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_primary_key: false,
        }
    }

    /// Mark this column as a primary-key column.
    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }
}

/// Metadata for one table: columns plus a small row sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableMetadata {
    /// Table name, possibly schema-qualified ("public.orders").
    pub name: String,
    /// Column metadata in declaration order.
    pub columns: Vec<ColumnMetadata>,
    /// A few sampled rows (may be empty).
    #[serde(default, rename = "sample")]
    pub sample_rows: Vec<SampleRow>,
}

impl TableMetadata {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnMetadata>) -> Self {
        Self {
            name: name.into(),
            columns,
            sample_rows: Vec::new(),
        }
    }

    /// Base table name with any schema qualifier stripped.
    pub fn base_name(&self) -> &str {
        match self.name.rsplit_once('.') {
            Some((_, base)) => base,
            None => &self.name,
        }
    }

    /// Names of columns the database reports as primary key.
    pub fn reported_pk_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }
}
