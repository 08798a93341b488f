//! Whole-table classification.
//!
//! The primary path asks the zero-shot model to score the base table name
//! against four candidate labels. The fallback path looks the singularized
//! name up in two static lexicons and reports a fixed, low confidence so
//! downstream consumers can tell it apart from model-derived scores.

use serde::{Deserialize, Serialize};

use super::confidence;
use super::inflection::singularize;
use crate::model::{ClassifierResult, ZeroShotClassifier};

/// Candidate labels presented to the zero-shot model.
pub const TABLE_LABELS: [&str; 4] = ["node entity", "relationship", "event", "dimension"];

/// What a table represents in the target graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableLabel {
    Node,
    Edge,
    Event,
    Unknown,
}

impl std::fmt::Display for TableLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Node => write!(f, "node"),
            Self::Edge => write!(f, "edge"),
            Self::Event => write!(f, "event"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// A name-based label with its confidence and a human-readable reason.
#[derive(Debug, Clone, PartialEq)]
pub struct NameClassification {
    pub label: TableLabel,
    pub confidence: f64,
    pub reason: String,
}

/// Singular nouns that commonly name entity tables.
static NODE_NOUNS: &[&str] = &[
    "user", "customer", "person", "employee", "member", "account", "company", "organization",
    "vendor", "supplier", "product", "item", "order", "store", "category", "location", "address",
    "city", "country", "student", "course", "article", "post", "comment", "book", "author",
    "movie", "song", "artist", "device", "machine", "airport", "station",
];

/// Singular verbs that commonly name relationship tables.
static RELATIONSHIP_VERBS: &[&str] = &[
    "follow", "like", "own", "purchase", "rate", "review", "view", "visit", "transfer",
    "subscribe", "enroll", "attend", "assign", "belong", "contain", "link", "connect", "refer",
    "mention", "tag",
];

/// Strip any schema qualifier and return the bare table name.
fn base_name(table_name: &str) -> &str {
    match table_name.rsplit_once('.') {
        Some((_, base)) => base,
        None => table_name,
    }
}

/// Classify a table name with the zero-shot model.
///
/// Picks the highest-scoring of [`TABLE_LABELS`] and maps it onto
/// [`TableLabel`] (dimension tables become nodes). Errors from the model
/// propagate so the caller can switch to the fallback path.
pub async fn classify_table(
    classifier: &dyn ZeroShotClassifier,
    table_name: &str,
) -> ClassifierResult<NameClassification> {
    let base = base_name(table_name);
    let predictions = classifier.classify_text(base, &TABLE_LABELS).await?;

    let best = predictions
        .iter()
        .max_by(|a, b| a.score.total_cmp(&b.score));

    Ok(match best {
        Some(p) => {
            let label = match p.label.as_str() {
                "node entity" | "dimension" => TableLabel::Node,
                "relationship" => TableLabel::Edge,
                "event" => TableLabel::Event,
                _ => TableLabel::Unknown,
            };
            NameClassification {
                label,
                confidence: p.score,
                reason: format!("zero-shot model scored '{}' highest", p.label),
            }
        }
        None => NameClassification {
            label: TableLabel::Unknown,
            confidence: confidence::UNKNOWN,
            reason: "model returned no predictions".to_string(),
        },
    })
}

/// Dictionary fallback used when no model is available.
///
/// The confidence is always exactly [`confidence::LEXICON_FALLBACK`]; it is
/// a sentinel meaning "heuristic-only, low trust", not a score comparable to
/// model output.
pub fn classify_table_fallback(table_name: &str) -> NameClassification {
    let base = base_name(table_name).to_lowercase();
    let singular = singularize(&base);

    if NODE_NOUNS.contains(&singular.as_str()) {
        return NameClassification {
            label: TableLabel::Node,
            confidence: confidence::LEXICON_FALLBACK,
            reason: "name matches a common entity noun (model unavailable)".to_string(),
        };
    }
    if RELATIONSHIP_VERBS.contains(&singular.as_str()) {
        return NameClassification {
            label: TableLabel::Edge,
            confidence: confidence::LEXICON_FALLBACK,
            reason: "name matches a common relationship verb (model unavailable)".to_string(),
        };
    }

    NameClassification {
        label: TableLabel::Unknown,
        confidence: confidence::UNKNOWN,
        reason: "cannot determine from name alone".to_string(),
    }
}
