#[cfg(test)]
mod tests {
    use weaver::classify::{classify_column_type, ColumnRole};

    #[test]
    fn test_key_suffixes_are_fk() {
        for name in ["customer_id", "customer_key", "customer_sk", "ORDER_ID"] {
            assert_eq!(
                classify_column_type(name),
                ColumnRole::ForeignKey,
                "{name} should be fk"
            );
        }
    }

    #[test]
    fn test_pk_rules_win_over_fk_suffix() {
        // Order-of-rule invariant: the pk rules run before the suffix rules.
        assert_eq!(classify_column_type("id"), ColumnRole::PrimaryKey);
        assert_eq!(classify_column_type("pk"), ColumnRole::PrimaryKey);
        assert_eq!(classify_column_type("primary_key"), ColumnRole::PrimaryKey);
        assert_eq!(classify_column_type("customer_pk"), ColumnRole::PrimaryKey);
    }

    #[test]
    fn test_camel_case_names_are_fk() {
        for name in ["userId", "person1Id", "creatorID", "parentTaskId"] {
            assert_eq!(
                classify_column_type(name),
                ColumnRole::ForeignKey,
                "{name} should be fk"
            );
        }
    }

    #[test]
    fn test_camel_case_requires_lower_or_digit_before_suffix() {
        // Ends in "id" but not in the camelCase convention.
        assert_eq!(classify_column_type("valid"), ColumnRole::Attribute);
        assert_eq!(classify_column_type("grid"), ColumnRole::Attribute);
    }

    #[test]
    fn test_timestamp_rules() {
        assert_eq!(classify_column_type("created_at"), ColumnRole::Timestamp);
        assert_eq!(classify_column_type("updated_at"), ColumnRole::Timestamp);
        assert_eq!(classify_column_type("created_date"), ColumnRole::Timestamp);
        assert_eq!(classify_column_type("updated_time"), ColumnRole::Timestamp);
    }

    #[test]
    fn test_metric_rules() {
        assert_eq!(classify_column_type("total_amount"), ColumnRole::Metric);
        assert_eq!(classify_column_type("unit_price"), ColumnRole::Metric);
        assert_eq!(classify_column_type("quantity"), ColumnRole::Metric);
        assert_eq!(classify_column_type("checksum"), ColumnRole::Metric);
    }

    #[test]
    fn test_plain_attributes() {
        for name in ["email", "first_name", "color", "notes"] {
            assert_eq!(
                classify_column_type(name),
                ColumnRole::Attribute,
                "{name} should be attribute"
            );
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify_column_type("Created_At"), ColumnRole::Timestamp);
        assert_eq!(classify_column_type("TOTAL_AMOUNT"), ColumnRole::Metric);
        assert_eq!(classify_column_type("Primary_Key"), ColumnRole::PrimaryKey);
    }
}
