#[cfg(test)]
mod tests {
    use weaver::classify::{ClassificationReport, ColumnRole, Pattern, SchemaAnalyzer, TableLabel};
    use weaver::metadata::{ColumnMetadata, TableMetadata};

    fn follows_table() -> TableMetadata {
        TableMetadata::new(
            "follows",
            vec![
                ColumnMetadata::new("follower_id", "bigint"),
                ColumnMetadata::new("followed_id", "bigint"),
            ],
        )
    }

    #[tokio::test]
    async fn test_classification_record_shape() {
        let analyzer = SchemaAnalyzer::heuristic_only();
        let result = analyzer.analyze_table(&follows_table()).await;

        assert_eq!(result.table_name, "follows");
        assert_eq!(result.label, TableLabel::Edge);
        assert_eq!(result.pattern, Pattern::StandardEdge);
        assert_eq!(result.fk_columns, vec!["follower_id", "followed_id"]);
        assert!(result.pk_columns.is_empty());
        assert!(result.value_hits.is_empty());

        // Invariant: every key column appears among the classified columns,
        // and the pk/fk sets are disjoint.
        for key in result.pk_columns.iter().chain(result.fk_columns.iter()) {
            assert!(result.columns.iter().any(|c| &c.name == key));
        }
        for pk in &result.pk_columns {
            assert!(!result.fk_columns.contains(pk));
        }
    }

    #[tokio::test]
    async fn test_introspected_pk_flag_beats_naming() {
        let table = TableMetadata::new(
            "enrollments",
            vec![
                ColumnMetadata::new("student_id", "bigint").primary_key(),
                ColumnMetadata::new("course_id", "bigint").primary_key(),
                ColumnMetadata::new("grade", "varchar(2)"),
            ],
        );

        let analyzer = SchemaAnalyzer::heuristic_only();
        let result = analyzer.analyze_table(&table).await;

        assert_eq!(result.pk_columns, vec!["student_id", "course_id"]);
        assert!(result.fk_columns.is_empty());
        assert!(result
            .columns
            .iter()
            .take(2)
            .all(|c| c.role == ColumnRole::PrimaryKey && c.is_pk));
    }

    #[tokio::test]
    async fn test_batch_analysis_is_per_table_independent() {
        let tables = vec![
            follows_table(),
            TableMetadata::new(
                "users",
                vec![
                    ColumnMetadata::new("id", "bigint").primary_key(),
                    ColumnMetadata::new("email", "varchar(255)"),
                ],
            ),
        ];

        let analyzer = SchemaAnalyzer::heuristic_only();
        let batch = analyzer.analyze_tables(&tables).await;
        assert_eq!(batch.len(), 2);

        let single = analyzer.analyze_table(&tables[1]).await;
        assert_eq!(batch[1], single);
    }

    #[tokio::test]
    async fn test_report_render() {
        let analyzer = SchemaAnalyzer::heuristic_only();
        let result = analyzer.analyze_table(&follows_table()).await;
        let report = ClassificationReport::from(&result);

        insta::assert_snapshot!(report.render_text(), @r###"
        table: follows
        classification: edge (confidence 0.30)
        pattern: standard_edge
        primary keys: -
        foreign keys: follower_id, followed_id
        columns:
          follower_id fk (bigint)
          followed_id fk (bigint)
        value patterns: -
        reason: key structure links two or more entities; name matches a common relationship verb (model unavailable)
        "###);
    }

    #[tokio::test]
    async fn test_value_hits_flow_into_record() {
        let mut table = TableMetadata::new(
            "users",
            vec![
                ColumnMetadata::new("id", "bigint").primary_key(),
                ColumnMetadata::new("email", "varchar(255)"),
            ],
        );
        table.sample_rows = vec![[(
            "email".to_string(),
            serde_json::json!("a@b.co"),
        )]
        .into_iter()
        .collect()];

        let analyzer = SchemaAnalyzer::heuristic_only();
        let result = analyzer.analyze_table(&table).await;
        assert_eq!(result.value_hits.len(), 1);
        assert_eq!(result.value_hits[0].column, "email");
    }
}
