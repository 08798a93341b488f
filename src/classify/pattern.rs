//! Structural pattern determination.
//!
//! This is the central decision procedure of the pipeline. It looks only at
//! key counts and column-structure signals, never at the table name, so a
//! badly-named fact table is still classified from its keys. The branch
//! order below is the contract; several branches overlap and are
//! disambiguated purely by precedence.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metadata::ColumnMetadata;

/// Structural category a table falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Entity table: single key, no references out.
    StandardNode,
    /// Junction/fact table linking two or more entities.
    StandardEdge,
    /// Entity table that also references other entities.
    FkNode,
    /// Keyless or single-key table whose foreign keys form the relationship.
    FkEdge,
    /// Edge table carrying endpoint attributes inline (origin_*/dest_*).
    DenormalizedEdge,
    /// Edge table with a type discriminator column.
    PolymorphicEdge,
    /// Append-only event stream relating entities over time.
    EventEdge,
    /// No graph structure detected.
    FlatTable,
}

impl Pattern {
    /// Whether the schema generator should emit this table as an edge.
    pub fn is_edge(&self) -> bool {
        matches!(
            self,
            Self::StandardEdge
                | Self::DenormalizedEdge
                | Self::PolymorphicEdge
                | Self::EventEdge
                | Self::FkEdge
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StandardNode => "standard_node",
            Self::StandardEdge => "standard_edge",
            Self::FkNode => "fk_node",
            Self::FkEdge => "fk_edge",
            Self::DenormalizedEdge => "denormalized_edge",
            Self::PolymorphicEdge => "polymorphic_edge",
            Self::EventEdge => "event_edge",
            Self::FlatTable => "flat_table",
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// camelCase entity-reference suffix (userId, person1Id), which never matches
/// snake_case `_id` names.
static CAMEL_REF_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9](Id|ID)$").expect("camel ref regex"));

/// Column-structure signals derived in one pass over the column list.
#[derive(Debug, Default)]
struct StructuralSignals {
    /// A column literally named `type` or ending in `_type`.
    has_type: bool,
    /// A column name containing action/event_type/operation/status.
    has_action: bool,
    /// A column name containing time/date, or a datetime-declared type.
    has_timestamp: bool,
    /// A column name containing origin_/src_/from_.
    has_origin: bool,
    /// A column name containing dest_/dst_/to_.
    has_dest: bool,
    /// camelCase entity-reference columns not already counted as PK/FK.
    entity_refs: usize,
}

impl StructuralSignals {
    fn collect(pk_columns: &[String], fk_columns: &[String], columns: &[ColumnMetadata]) -> Self {
        let mut signals = Self::default();

        for column in columns {
            let lower = column.name.to_lowercase();

            if lower == "type" || lower.ends_with("_type") {
                signals.has_type = true;
            }
            if ["action", "event_type", "operation", "status"]
                .iter()
                .any(|w| lower.contains(w))
            {
                signals.has_action = true;
            }
            if lower.contains("time")
                || lower.contains("date")
                || column.declared_type.to_lowercase().starts_with("datetime")
            {
                signals.has_timestamp = true;
            }
            if ["origin_", "src_", "from_"].iter().any(|p| lower.contains(p)) {
                signals.has_origin = true;
            }
            if ["dest_", "dst_", "to_"].iter().any(|p| lower.contains(p)) {
                signals.has_dest = true;
            }
            if CAMEL_REF_SUFFIX.is_match(&column.name)
                && !pk_columns.contains(&column.name)
                && !fk_columns.contains(&column.name)
            {
                signals.entity_refs += 1;
            }
        }

        signals
    }
}

fn is_origin_prefixed(lower: &str) -> bool {
    lower.starts_with("origin_") || lower.starts_with("src_")
}

fn is_dest_prefixed(lower: &str) -> bool {
    lower.starts_with("dest_") || lower.starts_with("dst_")
}

/// An endpoint-attribute column: an origin-prefixed name, or a descriptive
/// attribute (`_name`/`_city`/`_country`) that denormalized edges carry
/// inline for their endpoints.
fn is_origin_like(lower: &str) -> bool {
    is_origin_prefixed(lower)
        || lower.contains("_name")
        || lower.contains("_city")
        || lower.contains("_country")
}

/// Determine the structural pattern for a table.
///
/// Pure: identical inputs always produce the identical pattern. A table with
/// zero columns falls through every branch to `FlatTable`.
pub fn determine_pattern(
    pk_columns: &[String],
    fk_columns: &[String],
    columns: &[ColumnMetadata],
) -> Pattern {
    let pk_count = pk_columns.len();
    let fk_count = fk_columns.len();
    let signals = StructuralSignals::collect(pk_columns, fk_columns, columns);

    // 1. Composite key over foreign keys: the classic junction/fact table.
    if pk_count >= 2 && fk_count >= 2 {
        return Pattern::StandardEdge;
    }

    // 2. Composite key without enough FKs: check the non-key columns for
    //    inline endpoint attributes before settling on a plain edge.
    if pk_count >= 2 {
        let non_pk: Vec<String> = columns
            .iter()
            .filter(|c| !pk_columns.contains(&c.name))
            .map(|c| c.name.to_lowercase())
            .collect();

        let origin_like = non_pk.iter().any(|c| is_origin_like(c));
        let dest_like = non_pk.iter().any(|c| is_dest_prefixed(c));
        if origin_like && dest_like {
            return Pattern::DenormalizedEdge;
        }
        // Pure junction table or an edge with extra properties: both edges.
        return Pattern::StandardEdge;
    }

    // 3. Single primary key.
    if pk_count == 1 {
        let lowered: Vec<String> = columns.iter().map(|c| c.name.to_lowercase()).collect();
        let origin = lowered.iter().any(|c| is_origin_prefixed(c));
        let dest = lowered.iter().any(|c| is_dest_prefixed(c));
        if origin && dest {
            return Pattern::DenormalizedEdge;
        }
        if fk_count == 0 {
            return Pattern::StandardNode;
        }
        if fk_count >= 2 {
            return Pattern::FkEdge;
        }
        return Pattern::FkNode;
    }

    // No primary key from here on.

    // 4. Type discriminator over multiple foreign keys.
    if signals.has_type && fk_count >= 2 {
        return Pattern::PolymorphicEdge;
    }

    // 5. Multiple foreign keys. Fires before the origin/dest check below;
    //    preserved as observed even where both would match.
    if fk_count >= 2 {
        return Pattern::StandardEdge;
    }

    // 6. Origin/destination naming without key structure.
    if signals.has_origin && signals.has_dest {
        return Pattern::DenormalizedEdge;
    }

    // 7. A single foreign key still carries a relationship.
    if fk_count >= 1 {
        return Pattern::FkEdge;
    }

    // 8. Timestamped action columns: an event stream.
    if signals.has_timestamp && signals.has_action {
        return Pattern::EventEdge;
    }

    // 9. Timestamped rows referencing two or more entities camelCase-style.
    if signals.has_timestamp && signals.entity_refs >= 2 {
        return Pattern::EventEdge;
    }

    // 10. Nothing structural to go on.
    Pattern::FlatTable
}
