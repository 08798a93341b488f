//! # Weaver
//!
//! Infers a property-graph schema from introspected relational metadata.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │              Introspected Metadata                       │
//! │      (tables, columns, PK flags, sample rows)            │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [classify]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Column roles + entity candidates + value patterns      │
//! │   + structural pattern (node/edge/event/...)             │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [schema generator]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Graph schema (nodes + relationships, YAML)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Structural signals (keys, column naming) always decide the pattern; the
//! table name only contributes a secondary label with a confidence score,
//! produced by a zero-shot model when one is available and by a lexicon
//! fallback when it is not.

pub mod classify;
pub mod config;
pub mod metadata;
pub mod model;
pub mod schema;
pub mod worker;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::classify::{
        analyze_samples, classify_column_type, determine_pattern, ClassificationReport,
        ColumnClassification, ColumnRole, Pattern, SchemaAnalyzer, TableClassification, TableLabel,
    };
    pub use crate::metadata::{
        ColumnMetadata, MetadataProvider, SampleRow, SnapshotProvider, TableMetadata,
        WorkerMetadataProvider,
    };
    pub use crate::model::{DisabledClassifier, WorkerClassifier, ZeroShotClassifier};
    pub use crate::schema::{generate, EdgeDef, GraphSchema, NodeDef};
}

// Also export the most common entry points at the crate root
pub use classify::{SchemaAnalyzer, TableClassification};
pub use schema::{generate, GraphSchema};
