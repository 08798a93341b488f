//! String inflection utilities.
//!
//! Singularization is used by the table-name lexicon fallback so that
//! "customers" and "customer" hit the same lexicon entry. Uses the
//! `inflector` crate with additional handling for irregular plurals that
//! show up in database schemas.

use inflector::Inflector;

/// Irregular plurals that inflector doesn't handle well for database contexts.
static IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    // Latin/Greek, common in analytics schemas
    ("analysis", "analyses"),
    ("basis", "bases"),
    ("index", "indices"),
    ("matrix", "matrices"),
    ("vertex", "vertices"),
    ("datum", "data"),
    ("medium", "media"),
    ("criterion", "criteria"),
];

/// Singularize a word, handling irregulars first then falling back to inflector.
///
/// # Examples
/// ```ignore
/// assert_eq!(singularize("customers"), "customer");
/// assert_eq!(singularize("categories"), "category");
/// assert_eq!(singularize("people"), "person");
/// ```
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *plural {
            return singular.to_string();
        }
        // Already singular?
        if lower == *singular {
            return singular.to_string();
        }
    }

    lower.to_singular()
}

/// Pluralize a word, handling irregulars first then falling back to inflector.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lower = word.to_lowercase();

    for (singular, plural) in IRREGULAR_PLURALS {
        if lower == *singular {
            return plural.to_string();
        }
        // Already plural?
        if lower == *plural {
            return plural.to_string();
        }
    }

    lower.to_plural()
}
