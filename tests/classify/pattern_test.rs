#[cfg(test)]
mod tests {
    use weaver::classify::{determine_pattern, Pattern};
    use weaver::metadata::ColumnMetadata;

    fn cols(names: &[(&str, &str)]) -> Vec<ColumnMetadata> {
        names
            .iter()
            .map(|(n, t)| ColumnMetadata::new(*n, *t))
            .collect()
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_composite_key_tie_break() {
        // pk = fk = [a, b] is always a standard edge, whatever other
        // type/timestamp signals are present.
        let pk = strings(&["a", "b"]);
        let fk = strings(&["a", "b"]);
        let columns = cols(&[
            ("a", "bigint"),
            ("b", "bigint"),
            ("link_type", "varchar"),
            ("created_at", "datetime"),
        ]);
        assert_eq!(determine_pattern(&pk, &fk, &columns), Pattern::StandardEdge);
    }

    #[test]
    fn test_denormalization_tie_break() {
        // Single PK and zero FKs would be a standard node, but origin/dest
        // columns force denormalized edge.
        let pk = strings(&["id"]);
        let columns = cols(&[
            ("id", "bigint"),
            ("origin_city", "varchar"),
            ("dest_city", "varchar"),
        ]);
        assert_eq!(
            determine_pattern(&pk, &[], &columns),
            Pattern::DenormalizedEdge
        );
    }

    #[test]
    fn test_orders_scenario_is_fk_edge() {
        // Single PK, two FKs, no type/timestamp columns.
        let pk = strings(&["order_id"]);
        let fk = strings(&["customer_id", "product_id"]);
        let columns = cols(&[
            ("order_id", "bigint"),
            ("customer_id", "bigint"),
            ("product_id", "bigint"),
        ]);
        assert_eq!(determine_pattern(&pk, &fk, &columns), Pattern::FkEdge);
    }

    #[test]
    fn test_follows_scenario_is_standard_edge() {
        let fk = strings(&["follower_id", "followed_id"]);
        let columns = cols(&[("follower_id", "bigint"), ("followed_id", "bigint")]);
        assert_eq!(determine_pattern(&[], &fk, &columns), Pattern::StandardEdge);
    }

    #[test]
    fn test_audit_log_scenario_is_polymorphic_edge() {
        // event_type counts as a type column, and with two FKs the
        // polymorphic branch fires before the event branches.
        let fk = strings(&["actor_id", "target_id"]);
        let columns = cols(&[
            ("event_type", "varchar"),
            ("created_at", "timestamp"),
            ("actor_id", "bigint"),
            ("target_id", "bigint"),
        ]);
        assert_eq!(
            determine_pattern(&[], &fk, &columns),
            Pattern::PolymorphicEdge
        );
    }

    #[test]
    fn test_zero_pk_many_fk_with_origin_dest_stays_standard_edge() {
        // Observed precedence preserved: the fk-count branch fires before
        // the origin/dest check.
        let fk = strings(&["origin_airport_id", "dest_airport_id"]);
        let columns = cols(&[
            ("origin_airport_id", "bigint"),
            ("dest_airport_id", "bigint"),
            ("origin_city", "varchar"),
            ("dest_city", "varchar"),
        ]);
        assert_eq!(determine_pattern(&[], &fk, &columns), Pattern::StandardEdge);
    }

    #[test]
    fn test_event_edge_requires_timestamp() {
        let columns = cols(&[("action", "varchar"), ("payload", "text")]);
        assert_eq!(determine_pattern(&[], &[], &columns), Pattern::FlatTable);

        let columns = cols(&[
            ("action", "varchar"),
            ("payload", "text"),
            ("logged_at_time", "varchar"),
        ]);
        assert_eq!(determine_pattern(&[], &[], &columns), Pattern::EventEdge);
    }

    #[test]
    fn test_empty_table_is_flat() {
        assert_eq!(determine_pattern(&[], &[], &[]), Pattern::FlatTable);
    }

    #[test]
    fn test_purity() {
        let pk = strings(&["id"]);
        let fk = strings(&["user_id"]);
        let columns = cols(&[("id", "bigint"), ("user_id", "bigint"), ("body", "text")]);

        let first = determine_pattern(&pk, &fk, &columns);
        assert_eq!(first, Pattern::FkNode);
        for _ in 0..20 {
            assert_eq!(determine_pattern(&pk, &fk, &columns), first);
        }
    }

    #[test]
    fn test_edge_patterns_are_exactly_five() {
        let edges = [
            Pattern::StandardEdge,
            Pattern::DenormalizedEdge,
            Pattern::PolymorphicEdge,
            Pattern::EventEdge,
            Pattern::FkEdge,
        ];
        for pattern in edges {
            assert!(pattern.is_edge(), "{pattern} should be an edge");
        }
        for pattern in [Pattern::StandardNode, Pattern::FkNode, Pattern::FlatTable] {
            assert!(!pattern.is_edge(), "{pattern} should not be an edge");
        }
    }
}
