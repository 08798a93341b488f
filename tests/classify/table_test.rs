#[cfg(test)]
mod tests {
    use weaver::classify::{classify_table_fallback, confidence, TableLabel};

    #[test]
    fn test_fallback_confidence_is_exactly_the_sentinel() {
        for name in ["users", "customers", "products", "follows", "likes"] {
            let result = classify_table_fallback(name);
            assert_eq!(
                result.confidence,
                confidence::LEXICON_FALLBACK,
                "{name} should carry the fixed fallback confidence"
            );
            assert!(
                result.reason.contains("model unavailable"),
                "{name} reason should state the model was unavailable"
            );
        }
    }

    #[test]
    fn test_noun_lexicon_labels_nodes() {
        assert_eq!(classify_table_fallback("users").label, TableLabel::Node);
        assert_eq!(classify_table_fallback("customer").label, TableLabel::Node);
        assert_eq!(classify_table_fallback("categories").label, TableLabel::Node);
    }

    #[test]
    fn test_verb_lexicon_labels_edges() {
        assert_eq!(classify_table_fallback("follows").label, TableLabel::Edge);
        assert_eq!(classify_table_fallback("purchases").label, TableLabel::Edge);
        assert_eq!(classify_table_fallback("subscribes").label, TableLabel::Edge);
    }

    #[test]
    fn test_unknown_name_has_fixed_reason() {
        let result = classify_table_fallback("tbl_xyz_staging");
        assert_eq!(result.label, TableLabel::Unknown);
        assert_eq!(result.reason, "cannot determine from name alone");
        assert_eq!(result.confidence, confidence::UNKNOWN);
    }

    #[test]
    fn test_schema_qualifier_is_stripped() {
        assert_eq!(
            classify_table_fallback("analytics.users").label,
            TableLabel::Node
        );
        assert_eq!(
            classify_table_fallback("social.follows").label,
            TableLabel::Edge
        );
    }
}
