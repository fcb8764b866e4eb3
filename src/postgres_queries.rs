pub const SELECT_HIGH_ERROR_DAYS: &str = r#"
                SELECT CAST(log_stats.date AS date) AS date,
                CAST(log_stats.error_percentage AS float8) AS error_percentage
                FROM log_stats
                WHERE log_stats.error_percentage >= $1
                ORDER BY date ASC
                "#;
