//! Introspected metadata: types and providers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      MetadataProvider                       │
//! │  ┌───────────────────────────┬───────────────────────────┐  │
//! │  │  WorkerMetadataProvider   │  SnapshotProvider         │  │
//! │  │  (sidecar RPC, live DB)   │  (JSON dump on disk)      │  │
//! │  └───────────────────────────┴───────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//!                       TableMetadata
//! ```

mod provider;
mod snapshot;
mod types;

pub use provider::{MetadataProvider, MetadataResult, WorkerMetadataProvider};
pub use snapshot::SnapshotProvider;
pub use types::{ColumnMetadata, SampleRow, TableMetadata};
