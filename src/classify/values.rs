//! Sample-value pattern sniffing.
//!
//! Looks at a handful of sampled rows and flags columns whose values look
//! like emails, URLs, or UUIDs. An empty sample set is a normal outcome and
//! yields no hits.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::metadata::SampleRow;

/// Only the first few rows are inspected; samples beyond this are ignored.
pub const MAX_SAMPLE_ROWS: usize = 3;

/// The value shape that matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuePatternKind {
    Email,
    Url,
    Uuid,
}

impl std::fmt::Display for ValuePatternKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Url => write!(f, "url"),
            Self::Uuid => write!(f, "uuid"),
        }
    }
}

/// One matched value in one sampled row.
///
/// Hits are recorded independently: a column can accumulate several hits
/// across rows and they are not de-duplicated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePatternHit {
    /// Column the value came from.
    pub column: String,
    /// Which shape matched.
    pub pattern_kind: ValuePatternKind,
    /// The literal sampled value.
    pub sample_literal: String,
}

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@]+@[^@]+\.[^@]+$").expect("email regex"));
static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://").expect("url regex"));
static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("uuid regex")
});

/// Test one scalar value against the shapes, in order. First match wins.
fn sniff_value(value: &str) -> Option<ValuePatternKind> {
    if value.contains('@')
        && value.contains('.')
        && !value.chars().any(char::is_whitespace)
        && EMAIL_RE.is_match(value)
    {
        return Some(ValuePatternKind::Email);
    }
    if URL_RE.is_match(value) {
        return Some(ValuePatternKind::Url);
    }
    if UUID_RE.is_match(value) {
        return Some(ValuePatternKind::Uuid);
    }
    None
}

/// Flag columns whose sampled values look like emails, URLs, or UUIDs.
///
/// Inspects at most the first [`MAX_SAMPLE_ROWS`] rows; null and non-scalar
/// values are skipped.
pub fn analyze_samples(rows: &[SampleRow]) -> Vec<ValuePatternHit> {
    let mut hits = Vec::new();

    for row in rows.iter().take(MAX_SAMPLE_ROWS) {
        for (column, value) in row {
            let text = match value.as_str() {
                Some(s) => s,
                None => continue,
            };
            if let Some(kind) = sniff_value(text) {
                hits.push(ValuePatternHit {
                    column: column.clone(),
                    pattern_kind: kind,
                    sample_literal: text.to_string(),
                });
            }
        }
    }

    hits
}
