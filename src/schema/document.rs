//! The generated graph-schema document.
//!
//! This is the output artifact handed to the schema consumer, serialized as
//! YAML. Empty property maps are omitted rather than emitted as `{}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full generated schema: nodes plus relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSchema {
    pub nodes: Vec<NodeDef>,
    pub relationships: Vec<EdgeDef>,
}

impl GraphSchema {
    /// Serialize the document as YAML.
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Look up a node definition by label.
    pub fn node(&self, label: &str) -> Option<&NodeDef> {
        self.nodes.iter().find(|n| n.label == label)
    }

    /// Look up a relationship definition by type.
    pub fn relationship(&self, edge_type: &str) -> Option<&EdgeDef> {
        self.relationships.iter().find(|r| r.edge_type == edge_type)
    }
}

/// The column a node's identity maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdColumn {
    pub column: String,
}

/// A node definition backed by one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDef {
    /// Node label in the graph.
    pub label: String,
    /// Backing table name.
    pub table: String,
    /// Identity column mapping.
    pub id: IdColumn,
    /// Property name -> column name; omitted when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}

/// One endpoint of a relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// Referenced node label.
    pub node: String,
    /// Column holding the endpoint id on the edge table.
    pub id: String,
}

/// A relationship definition backed by one table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDef {
    /// Relationship type in the graph.
    #[serde(rename = "type")]
    pub edge_type: String,
    /// Source endpoint.
    pub from: Endpoint,
    /// Target endpoint.
    pub to: Endpoint,
    /// Property name -> column name; omitted when empty.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, String>,
}
