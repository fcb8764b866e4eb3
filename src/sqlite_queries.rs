pub const SELECT_HIGH_ERROR_DAYS: &str = r#"
                SELECT date(log_stats.date) AS date,
                CAST(log_stats.error_percentage AS REAL) AS error_percentage
                FROM log_stats
                WHERE log_stats.error_percentage >= $1
                ORDER BY date ASC
                "#;
