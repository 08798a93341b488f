//! MetadataProvider trait and the worker-backed implementation.
//!
//! The trait abstracts over where introspected metadata comes from: the
//! sidecar worker (live database) or a JSON snapshot on disk. The analysis
//! pipeline only ever sees [`TableMetadata`].

use std::sync::Arc;

use async_trait::async_trait;

use super::types::{ColumnMetadata, TableMetadata};
use crate::classify::MAX_SAMPLE_ROWS;
use crate::worker::protocol::{self, methods, ConnectionParams};
use crate::worker::{WorkerClient, WorkerError};

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, WorkerError>;

/// Trait for fetching database metadata.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// List table names, possibly schema-qualified.
    async fn list_tables(&self) -> MetadataResult<Vec<String>>;

    /// Get column metadata and a row sample for one table.
    async fn get_table(&self, table: &str) -> MetadataResult<TableMetadata>;

    /// Fetch metadata for every table.
    ///
    /// Default implementation lists tables and fetches them in parallel.
    async fn fetch_all(&self) -> MetadataResult<Vec<TableMetadata>> {
        let names = self.list_tables().await?;

        let futures: Vec<_> = names.iter().map(|name| self.get_table(name)).collect();
        let results = futures::future::join_all(futures).await;

        results.into_iter().collect()
    }
}

/// MetadataProvider implementation that uses the WorkerClient.
pub struct WorkerMetadataProvider {
    /// The worker client for RPC calls.
    client: Arc<WorkerClient>,
    /// Cached connection parameters to avoid repeated allocations.
    connection: ConnectionParams,
    /// Schema to introspect (empty = the driver's default).
    schema: Option<String>,
    /// Rows to request per table.
    sample_limit: i32,
}

impl WorkerMetadataProvider {
    /// Create a new WorkerMetadataProvider.
    pub fn new(
        client: Arc<WorkerClient>,
        driver: impl Into<String>,
        connection_string: impl Into<String>,
    ) -> Self {
        Self {
            client,
            connection: ConnectionParams {
                driver: driver.into(),
                connection_string: connection_string.into(),
            },
            schema: None,
            sample_limit: MAX_SAMPLE_ROWS as i32,
        }
    }

    /// Restrict introspection to one schema.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    /// Override how many rows are sampled per table.
    pub fn with_sample_limit(mut self, limit: usize) -> Self {
        self.sample_limit = limit as i32;
        self
    }

    #[inline]
    fn connection_params(&self) -> ConnectionParams {
        self.connection.clone()
    }

    /// Get the driver name.
    pub fn driver(&self) -> &str {
        &self.connection.driver
    }
}

#[async_trait]
impl MetadataProvider for WorkerMetadataProvider {
    async fn list_tables(&self) -> MetadataResult<Vec<String>> {
        let response: protocol::ListTablesResponse = self
            .client
            .request(
                methods::LIST_TABLES,
                protocol::ListTablesParams {
                    connection: self.connection_params(),
                    schema: self.schema.clone(),
                },
            )
            .await?;

        Ok(response.tables)
    }

    async fn get_table(&self, table: &str) -> MetadataResult<TableMetadata> {
        let response: protocol::GetTableResponse = self
            .client
            .request(
                methods::GET_TABLE,
                protocol::GetTableParams {
                    connection: self.connection_params(),
                    table: table.to_string(),
                },
            )
            .await?;

        let samples: protocol::SampleRowsResponse = self
            .client
            .request(
                methods::SAMPLE_ROWS,
                protocol::SampleRowsParams {
                    connection: self.connection_params(),
                    table: table.to_string(),
                    limit: Some(self.sample_limit),
                },
            )
            .await?;

        let descriptor = response.table;
        Ok(TableMetadata {
            name: descriptor.name,
            columns: descriptor
                .columns
                .into_iter()
                .map(|c| ColumnMetadata {
                    name: c.name,
                    declared_type: c.data_type,
                    is_primary_key: c.is_primary_key,
                })
                .collect(),
            sample_rows: samples.rows,
        })
    }
}
