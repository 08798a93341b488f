//! Snapshot-backed metadata provider.
//!
//! Reads an introspection dump (a JSON array of tables) from disk. Useful
//! for offline runs and tests; the file uses the same table shape the
//! external interface defines.

use std::path::Path;

use async_trait::async_trait;

use super::provider::{MetadataProvider, MetadataResult};
use super::types::TableMetadata;
use crate::worker::WorkerError;

/// MetadataProvider over a JSON introspection dump.
pub struct SnapshotProvider {
    tables: Vec<TableMetadata>,
}

impl SnapshotProvider {
    /// Load a snapshot from a JSON file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse as a table list.
    pub fn from_file<P: AsRef<Path>>(path: P) -> MetadataResult<Self> {
        let content = std::fs::read_to_string(path).map_err(WorkerError::ReadFailed)?;
        let tables: Vec<TableMetadata> =
            serde_json::from_str(&content).map_err(WorkerError::DeserializeFailed)?;
        Ok(Self { tables })
    }

    /// Build a provider from already-parsed tables.
    pub fn from_tables(tables: Vec<TableMetadata>) -> Self {
        Self { tables }
    }
}

#[async_trait]
impl MetadataProvider for SnapshotProvider {
    async fn list_tables(&self) -> MetadataResult<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn get_table(&self, table: &str) -> MetadataResult<TableMetadata> {
        self.tables
            .iter()
            .find(|t| t.name == table)
            .cloned()
            .ok_or_else(|| WorkerError::InvalidRequest(format!("unknown table: {table}")))
    }

    async fn fetch_all(&self) -> MetadataResult<Vec<TableMetadata>> {
        Ok(self.tables.clone())
    }
}
