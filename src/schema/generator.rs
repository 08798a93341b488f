//! Schema-object synthesis.
//!
//! Turns the list of per-table classifications into node and edge
//! definitions. Endpoint entity names are inferred from foreign-key column
//! names; the generator is a pure fold and never mutates its input, so
//! re-running it over identical classifications produces an identical
//! document.

use std::collections::BTreeMap;

use crate::classify::{entity_name, ColumnRole, Pattern, TableClassification};

use super::document::{EdgeDef, Endpoint, GraphSchema, IdColumn, NodeDef};

/// Placeholder endpoint id columns used when a table classified as an edge
/// has fewer than two usable ID columns.
const FROM_ID_PLACEHOLDER: &str = "from_id";
const TO_ID_PLACEHOLDER: &str = "to_id";

/// Endpoint node label used when no column exists to derive a name from.
const UNKNOWN_NODE: &str = "unknown";

/// Generate the graph-schema document from a full set of classifications.
pub fn generate(classifications: &[TableClassification]) -> GraphSchema {
    let mut schema = GraphSchema::default();

    for classification in classifications {
        if classification.pattern.is_edge() {
            schema.relationships.push(edge_def(classification));
        } else {
            schema.nodes.push(node_def(classification));
        }
    }

    schema
}

/// Pick the ID-column pair used to infer an edge's endpoints.
///
/// Composite-key and denormalized edges key their endpoints off the primary
/// key; fk edges off the foreign keys (padded with the primary key when only
/// one exists); everything else prefers foreign keys with the primary key as
/// fallback. A keyless standard edge (no PK at all) also falls back to its
/// foreign keys.
fn endpoint_columns(classification: &TableClassification) -> Vec<&String> {
    let pk = &classification.pk_columns;
    let fk = &classification.fk_columns;

    match classification.pattern {
        Pattern::DenormalizedEdge | Pattern::StandardEdge => {
            if !pk.is_empty() {
                pk.iter().collect()
            } else {
                fk.iter().collect()
            }
        }
        Pattern::FkEdge => {
            if fk.len() >= 2 {
                fk.iter().collect()
            } else {
                fk.iter().chain(pk.iter()).collect()
            }
        }
        _ => {
            if !fk.is_empty() {
                fk.iter().collect()
            } else {
                pk.iter().collect()
            }
        }
    }
}

fn edge_def(classification: &TableClassification) -> EdgeDef {
    let id_columns = endpoint_columns(classification);

    let from = match id_columns.first() {
        Some(column) => Endpoint {
            node: entity_name(column),
            id: (*column).clone(),
        },
        None => Endpoint {
            node: UNKNOWN_NODE.to_string(),
            id: FROM_ID_PLACEHOLDER.to_string(),
        },
    };
    let to = match id_columns.get(1) {
        Some(column) => Endpoint {
            node: entity_name(column),
            id: (*column).clone(),
        },
        None => Endpoint {
            node: UNKNOWN_NODE.to_string(),
            id: TO_ID_PLACEHOLDER.to_string(),
        },
    };

    EdgeDef {
        edge_type: classification.table_name.clone(),
        from,
        to,
        properties: property_map(classification),
    }
}

fn node_def(classification: &TableClassification) -> NodeDef {
    let id_column = classification
        .pk_columns
        .first()
        .cloned()
        .unwrap_or_else(|| "id".to_string());

    NodeDef {
        label: node_label(&classification.table_name),
        table: classification.table_name.clone(),
        id: IdColumn { column: id_column },
        properties: property_map(classification),
    }
}

/// Naive singularization: strip one trailing `s`.
///
/// Known imprecision ("address" -> "addres", "status" -> "statu") kept as
/// the default behavior.
fn node_label(table_name: &str) -> String {
    table_name
        .strip_suffix('s')
        .unwrap_or(table_name)
        .to_string()
}

/// Identity property mapping for every column that is neither a primary nor
/// a foreign key.
fn property_map(classification: &TableClassification) -> BTreeMap<String, String> {
    classification
        .columns
        .iter()
        .filter(|c| !matches!(c.role, ColumnRole::PrimaryKey | ColumnRole::ForeignKey))
        .map(|c| (c.name.clone(), c.name.clone()))
        .collect()
}
