//! Graph-schema document types and the generator that produces them.

mod document;
mod generator;

pub use document::{EdgeDef, Endpoint, GraphSchema, IdColumn, NodeDef};
pub use generator::generate;
