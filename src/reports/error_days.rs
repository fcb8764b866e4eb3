use std::io::Write;

use chrono::NaiveDate;

use crate::database::{QueryExecutor, QueryParam, Statement};
use crate::error::Result;
use crate::{postgres_queries, section, sqlite_queries};

use super::{ReportStatus, settle};

pub const NAME: &str = "high_error_days";

const STATEMENT: Statement = Statement {
    name: NAME,
    postgres: postgres_queries::SELECT_HIGH_ERROR_DAYS,
    sqlite: sqlite_queries::SELECT_HIGH_ERROR_DAYS,
};

#[derive(Debug, sqlx::FromRow)]
pub struct ErrorDay {
    pub date: NaiveDate,
    pub error_percentage: f64,
}

pub fn title(threshold: f64) -> String {
    format!("Days with error responses over {threshold} %")
}

pub fn format_line(row: &ErrorDay) -> String {
    format!(
        "## {}--{:.1}% errors",
        row.date.format("%B, %d %Y"),
        row.error_percentage
    )
}

/// Unlike the other reports, an empty result prints no fallback line.
pub async fn run(
    executor: &QueryExecutor,
    out: &mut impl Write,
    threshold: f64,
) -> Result<ReportStatus> {
    section::header(out, &title(threshold))?;

    let result = executor
        .execute::<ErrorDay>(&STATEMENT, &[QueryParam::Float(threshold)])
        .await;
    let (days, status) = settle(NAME, result);

    for day in &days {
        writeln!(out, "{}", format_line(day))?;
    }

    section::footer(out)?;
    Ok(status)
}
