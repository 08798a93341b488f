//! Referenced-entity extraction from foreign-key-like column names.
//!
//! The model predicts labeled spans over the column name; spans labeled as
//! entity references or identifiers become candidate entity names. Absence
//! of the model is a supported mode (empty result), not an error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::model::{ClassifierResult, ZeroShotClassifier};

/// Span labels presented to the model.
pub const COLUMN_SPAN_LABELS: [&str; 4] =
    ["entity reference", "identifier", "attribute", "timestamp"];

/// A candidate referenced-entity name with the model's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityCandidate {
    pub name: String,
    pub confidence: f64,
}

/// Trailing camelCase id marker preceded by a lowercase letter or digit.
static CAMEL_ID_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])(?:Id|ID)$").expect("camel id regex"));

/// Derive an entity name from a key-column name.
///
/// Strips a snake_case `_id`/`_key`/`_sk` suffix, or a trailing camelCase
/// `Id`/`ID`, and lower-cases the remainder:
/// `follower_id` -> `follower`, `creatorId` -> `creator`,
/// `person1Id` -> `person1`. Names without a known suffix come back
/// lower-cased but otherwise untouched.
pub fn entity_name(column: &str) -> String {
    let lower = column.to_lowercase();
    for suffix in ["_id", "_key", "_sk"] {
        if let Some(base) = lower.strip_suffix(suffix) {
            if !base.is_empty() {
                return base.to_string();
            }
        }
    }
    CAMEL_ID_SUFFIX.replace(column, "$1").to_lowercase()
}

/// Extract candidate referenced entities from a column name.
///
/// Returns an empty list when no model backs the classifier; this function
/// never fails on an unavailable model, only on transport errors from a
/// live one (the analyzer treats those by falling back for the rest of the
/// run).
pub async fn extract_entities(
    classifier: &dyn ZeroShotClassifier,
    column_name: &str,
) -> ClassifierResult<Vec<EntityCandidate>> {
    if !classifier.is_available() {
        return Ok(Vec::new());
    }

    let spans = classifier
        .extract_spans(column_name, &COLUMN_SPAN_LABELS)
        .await?;

    Ok(spans
        .into_iter()
        .filter(|s| s.label == "entity reference" || s.label == "identifier")
        .map(|s| EntityCandidate {
            name: entity_name(&s.text),
            confidence: s.score,
        })
        .collect())
}
