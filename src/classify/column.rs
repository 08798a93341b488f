//! Column role classification.
//!
//! Each rule implements one naming convention; the ordered rule table is the
//! precedence. First match wins, so a name that is both a primary-key name
//! and a `_id` suffix resolves to `pk`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Coarse role a column plays in its table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    /// Primary key column.
    #[serde(rename = "pk")]
    PrimaryKey,
    /// Foreign key column (by naming convention).
    #[serde(rename = "fk")]
    ForeignKey,
    /// Creation/update timestamp column.
    #[serde(rename = "timestamp")]
    Timestamp,
    /// Numeric measure column.
    #[serde(rename = "metric")]
    Metric,
    /// Plain attribute column.
    #[serde(rename = "attribute")]
    Attribute,
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PrimaryKey => write!(f, "pk"),
            Self::ForeignKey => write!(f, "fk"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Metric => write!(f, "metric"),
            Self::Attribute => write!(f, "attribute"),
        }
    }
}

/// camelCase foreign-key suffix: a lowercase letter or digit immediately
/// followed by `Id` or `ID` at the end of the name (userId, person1Id).
static CAMEL_ID_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9](Id|ID)$").expect("camel id regex"));

/// Substrings that mark a column as a numeric measure.
static METRIC_WORDS: &[&str] = &["amount", "price", "qty", "quantity", "count", "sum", "total"];

/// A single naming-convention rule.
pub struct RoleRule {
    /// Rule identifier (shows up in debug logs).
    pub name: &'static str,
    /// The role assigned when the rule matches.
    pub role: ColumnRole,
    matcher: RoleMatcher,
}

enum RoleMatcher {
    /// Exact primary-key names or a `_pk` suffix.
    PkName,
    /// `_id` / `_key` / `_sk` suffix.
    KeySuffix,
    /// camelCase `...Id` / `...ID` suffix.
    CamelIdSuffix,
    /// `_at` suffix, or created/updated combined with date/time.
    TimestampName,
    /// Measure words anywhere in the name.
    MetricName,
}

impl RoleRule {
    fn matches(&self, name: &str, lower: &str) -> bool {
        match self.matcher {
            RoleMatcher::PkName => {
                matches!(lower, "id" | "pk" | "primary_key") || lower.ends_with("_pk")
            }
            RoleMatcher::KeySuffix => {
                lower.ends_with("_id") || lower.ends_with("_key") || lower.ends_with("_sk")
            }
            RoleMatcher::CamelIdSuffix => CAMEL_ID_SUFFIX.is_match(name),
            RoleMatcher::TimestampName => {
                lower.ends_with("_at")
                    || ((lower.contains("created") || lower.contains("updated"))
                        && (lower.contains("date") || lower.contains("time")))
            }
            RoleMatcher::MetricName => METRIC_WORDS.iter().any(|w| lower.contains(w)),
        }
    }
}

/// The role rules in precedence order. The order is the contract: `pk` names
/// win over key suffixes, key suffixes win over timestamp/metric words.
pub fn default_role_rules() -> Vec<RoleRule> {
    vec![
        RoleRule {
            name: "pk_name",
            role: ColumnRole::PrimaryKey,
            matcher: RoleMatcher::PkName,
        },
        RoleRule {
            name: "key_suffix",
            role: ColumnRole::ForeignKey,
            matcher: RoleMatcher::KeySuffix,
        },
        RoleRule {
            name: "camel_id_suffix",
            role: ColumnRole::ForeignKey,
            matcher: RoleMatcher::CamelIdSuffix,
        },
        RoleRule {
            name: "timestamp_name",
            role: ColumnRole::Timestamp,
            matcher: RoleMatcher::TimestampName,
        },
        RoleRule {
            name: "metric_name",
            role: ColumnRole::Metric,
            matcher: RoleMatcher::MetricName,
        },
    ]
}

static DEFAULT_RULES: Lazy<Vec<RoleRule>> = Lazy::new(default_role_rules);

/// Classify a column name into its coarse role.
///
/// Pure and case-insensitive; always returns a role. Note this is the
/// name-based guess only: the introspected primary-key flag is applied on
/// top of it by the analyzer and always wins.
pub fn classify_column_type(column_name: &str) -> ColumnRole {
    let lower = column_name.to_lowercase();
    for rule in DEFAULT_RULES.iter() {
        if rule.matches(column_name, &lower) {
            return rule.role;
        }
    }
    ColumnRole::Attribute
}
