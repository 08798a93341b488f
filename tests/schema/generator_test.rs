#[cfg(test)]
mod tests {
    use weaver::classify::SchemaAnalyzer;
    use weaver::metadata::{ColumnMetadata, TableMetadata};
    use weaver::schema::generate;

    async fn analyze(tables: &[TableMetadata]) -> weaver::GraphSchema {
        let analyzer = SchemaAnalyzer::heuristic_only();
        let classifications = analyzer.analyze_tables(tables).await;
        generate(&classifications)
    }

    #[tokio::test]
    async fn test_node_definition_shape() {
        let tables = vec![TableMetadata::new(
            "users",
            vec![
                ColumnMetadata::new("id", "bigint").primary_key(),
                ColumnMetadata::new("email", "varchar(255)"),
                ColumnMetadata::new("full_name", "varchar(100)"),
            ],
        )];

        let schema = analyze(&tables).await;
        assert_eq!(schema.nodes.len(), 1);
        assert!(schema.relationships.is_empty());

        let node = &schema.nodes[0];
        assert_eq!(node.label, "user");
        assert_eq!(node.table, "users");
        assert_eq!(node.id.column, "id");
        assert_eq!(node.properties.get("email"), Some(&"email".to_string()));
        assert_eq!(
            node.properties.get("full_name"),
            Some(&"full_name".to_string())
        );
        // Key columns never become properties.
        assert!(!node.properties.contains_key("id"));
    }

    #[tokio::test]
    async fn test_endpoint_entity_names_round_trip() {
        let tables = vec![TableMetadata::new(
            "follows",
            vec![
                ColumnMetadata::new("follower_id", "bigint"),
                ColumnMetadata::new("followed_id", "bigint"),
            ],
        )];

        let schema = analyze(&tables).await;
        let edge = schema.relationship("follows").expect("follows edge");
        assert_eq!(edge.from.node, "follower");
        assert_eq!(edge.from.id, "follower_id");
        assert_eq!(edge.to.node, "followed");
        assert_eq!(edge.to.id, "followed_id");
    }

    #[tokio::test]
    async fn test_camel_case_endpoints() {
        let tables = vec![TableMetadata::new(
            "endorsements",
            vec![
                ColumnMetadata::new("creatorId", "bigint"),
                ColumnMetadata::new("person1Id", "bigint"),
            ],
        )];

        let schema = analyze(&tables).await;
        let edge = schema.relationship("endorsements").expect("edge");
        assert_eq!(edge.from.node, "creator");
        assert_eq!(edge.to.node, "person1");
    }

    #[tokio::test]
    async fn test_orders_edge_uses_fk_columns() {
        let tables = vec![TableMetadata::new(
            "orders",
            vec![
                ColumnMetadata::new("order_id", "bigint").primary_key(),
                ColumnMetadata::new("customer_id", "bigint"),
                ColumnMetadata::new("product_id", "bigint"),
            ],
        )];

        let schema = analyze(&tables).await;
        let edge = schema.relationship("orders").expect("orders edge");
        assert_eq!(edge.from.node, "customer");
        assert_eq!(edge.from.id, "customer_id");
        assert_eq!(edge.to.node, "product");
        assert_eq!(edge.to.id, "product_id");
    }

    #[tokio::test]
    async fn test_edge_properties_exclude_keys() {
        let tables = vec![TableMetadata::new(
            "follows",
            vec![
                ColumnMetadata::new("follower_id", "bigint"),
                ColumnMetadata::new("followed_id", "bigint"),
                ColumnMetadata::new("since", "date"),
            ],
        )];

        let schema = analyze(&tables).await;
        let edge = schema.relationship("follows").expect("edge");
        assert_eq!(edge.properties.len(), 1);
        assert_eq!(edge.properties.get("since"), Some(&"since".to_string()));
    }

    #[tokio::test]
    async fn test_yaml_output_shape() {
        let tables = vec![
            TableMetadata::new(
                "users",
                vec![ColumnMetadata::new("id", "bigint").primary_key()],
            ),
            TableMetadata::new(
                "follows",
                vec![
                    ColumnMetadata::new("follower_id", "bigint"),
                    ColumnMetadata::new("followed_id", "bigint"),
                ],
            ),
        ];

        let schema = analyze(&tables).await;
        let yaml = schema.to_yaml().unwrap();

        assert!(yaml.contains("nodes:"));
        assert!(yaml.contains("relationships:"));
        assert!(yaml.contains("label: user"));
        assert!(yaml.contains("type: follows"));
        // The keyless users node has no non-key columns; no empty map emitted.
        assert!(!yaml.contains("properties: {}"));
    }

    #[tokio::test]
    async fn test_flat_table_becomes_node() {
        let tables = vec![TableMetadata::new(
            "settings",
            vec![
                ColumnMetadata::new("color", "varchar(20)"),
                ColumnMetadata::new("motto", "varchar(200)"),
            ],
        )];

        let schema = analyze(&tables).await;
        assert_eq!(schema.nodes.len(), 1);
        let node = &schema.nodes[0];
        assert_eq!(node.label, "setting");
        // No PK introspected: the id column falls back to the literal `id`.
        assert_eq!(node.id.column, "id");
    }
}
