#[cfg(test)]
mod tests {
    use serde_json::json;
    use weaver::classify::{analyze_samples, ValuePatternKind};
    use weaver::metadata::SampleRow;

    fn row(pairs: &[(&str, serde_json::Value)]) -> SampleRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_email_url_uuid_detection() {
        let rows = vec![row(&[
            ("email", json!("a@b.co")),
            ("homepage", json!("https://x.io")),
            ("external_ref", json!("550e8400-e29b-41d4-a716-446655440000")),
        ])];

        let hits = analyze_samples(&rows);
        assert_eq!(hits.len(), 3);

        let kind_of = |column: &str| {
            hits.iter()
                .find(|h| h.column == column)
                .map(|h| h.pattern_kind)
        };
        assert_eq!(kind_of("email"), Some(ValuePatternKind::Email));
        assert_eq!(kind_of("homepage"), Some(ValuePatternKind::Url));
        assert_eq!(kind_of("external_ref"), Some(ValuePatternKind::Uuid));
    }

    #[test]
    fn test_null_and_missing_values_flag_nothing() {
        let rows = vec![
            row(&[("email", json!(null))]),
            row(&[]),
        ];
        assert!(analyze_samples(&rows).is_empty());
    }

    #[test]
    fn test_empty_sample_set_is_not_an_error() {
        assert!(analyze_samples(&[]).is_empty());
    }

    #[test]
    fn test_sample_literal_is_recorded() {
        let rows = vec![row(&[("contact", json!("ops@example.org"))])];
        let hits = analyze_samples(&rows);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].sample_literal, "ops@example.org");
        assert_eq!(hits[0].column, "contact");
    }

    #[test]
    fn test_rows_beyond_the_third_are_ignored() {
        let rows: Vec<SampleRow> = (0..6)
            .map(|i| row(&[("url", json!(format!("https://example.com/{i}")))]))
            .collect();
        assert_eq!(analyze_samples(&rows).len(), 3);
    }

    #[test]
    fn test_plain_strings_do_not_match() {
        let rows = vec![row(&[
            ("name", json!("Ada Lovelace")),
            ("city", json!("London")),
            ("note", json!("reach me at the office")),
        ])];
        assert!(analyze_samples(&rows).is_empty());
    }
}
