//! Protocol types for worker communication.
//!
//! The sidecar worker answers two families of methods over NDJSON:
//! `metadata.*` (database introspection) and `model.*` (zero-shot
//! classification). The raw prediction shapes returned by `model.*` are
//! mapped into typed records at the [`crate::model`] boundary and never
//! leak further into the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Request/Response Envelope
// ============================================================================

/// Request envelope sent to the worker.
#[derive(Debug, Clone, Serialize)]
pub struct RequestEnvelope {
    /// Unique request ID for correlation.
    pub id: String,
    /// Method name (e.g., "metadata.list_tables").
    pub method: String,
    /// Method-specific parameters.
    pub params: serde_json::Value,
}

/// Response envelope received from the worker.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseEnvelope {
    /// Request ID this response corresponds to.
    pub id: String,
    /// Whether the request succeeded.
    pub success: bool,
    /// Result data (present if success = true).
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    /// Error information (present if success = false).
    #[serde(default)]
    pub error: Option<ErrorInfo>,
}

/// Error information in a failed response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorInfo {
    /// Error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

// ============================================================================
// Connection Parameters (included in all metadata requests)
// ============================================================================

/// Database connection parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionParams {
    /// Database driver name (e.g., "postgres", "duckdb").
    pub driver: String,
    /// Driver-specific connection string.
    pub connection_string: String,
}

// ============================================================================
// Metadata Request Parameters
// ============================================================================

/// Parameters for `metadata.list_tables`.
#[derive(Debug, Clone, Serialize)]
pub struct ListTablesParams {
    #[serde(flatten)]
    pub connection: ConnectionParams,
    /// Schema to list tables from (optional, uses default if empty).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
}

/// Parameters for `metadata.get_table`.
#[derive(Debug, Clone, Serialize)]
pub struct GetTableParams {
    #[serde(flatten)]
    pub connection: ConnectionParams,
    /// Table name, possibly schema-qualified.
    pub table: String,
}

/// Parameters for `metadata.sample_rows`.
#[derive(Debug, Clone, Serialize)]
pub struct SampleRowsParams {
    #[serde(flatten)]
    pub connection: ConnectionParams,
    /// Table name, possibly schema-qualified.
    pub table: String,
    /// Maximum number of rows to return (default: 3).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,
}

// ============================================================================
// Model Request Parameters
// ============================================================================

/// Parameters for `model.classify_text`.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyTextParams {
    /// The text to classify.
    pub text: String,
    /// Candidate labels for zero-shot scoring.
    pub labels: Vec<String>,
}

/// Parameters for `model.extract_entities`.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractEntitiesParams {
    /// The text to extract labeled spans from.
    pub text: String,
    /// Span labels the model should predict.
    pub labels: Vec<String>,
}

// ============================================================================
// Metadata Response Types
// ============================================================================

/// Response from `metadata.list_tables`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTablesResponse {
    pub tables: Vec<String>,
}

/// Column descriptor as reported by the worker.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name.
    pub name: String,
    /// Database-specific type name.
    pub data_type: String,
    /// Whether this column is part of the primary key.
    #[serde(default)]
    pub is_primary_key: bool,
}

/// Table descriptor as reported by the worker.
#[derive(Debug, Clone, Deserialize)]
pub struct TableDescriptor {
    /// Table name, possibly schema-qualified.
    pub name: String,
    /// Columns in declaration order.
    pub columns: Vec<ColumnDescriptor>,
}

/// Response from `metadata.get_table`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetTableResponse {
    pub table: TableDescriptor,
}

/// Response from `metadata.sample_rows`.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRowsResponse {
    /// Sampled rows as column-name -> value maps.
    pub rows: Vec<BTreeMap<String, serde_json::Value>>,
}

// ============================================================================
// Model Response Types
// ============================================================================

/// One label prediction from `model.classify_text`.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionInfo {
    /// The candidate label.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f64,
}

/// Response from `model.classify_text`. Predictions are ordered best-first.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyTextResponse {
    pub predictions: Vec<PredictionInfo>,
}

/// One labeled span from `model.extract_entities`.
#[derive(Debug, Clone, Deserialize)]
pub struct SpanInfo {
    /// The matched span text.
    pub text: String,
    /// The predicted label.
    pub label: String,
    /// Confidence score (0.0 to 1.0).
    pub score: f64,
}

/// Response from `model.extract_entities`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractEntitiesResponse {
    pub entities: Vec<SpanInfo>,
}

// ============================================================================
// Method Names
// ============================================================================

/// Worker method names.
pub mod methods {
    pub const LIST_TABLES: &str = "metadata.list_tables";
    pub const GET_TABLE: &str = "metadata.get_table";
    pub const SAMPLE_ROWS: &str = "metadata.sample_rows";
    pub const CLASSIFY_TEXT: &str = "model.classify_text";
    pub const EXTRACT_ENTITIES: &str = "model.extract_entities";
}
