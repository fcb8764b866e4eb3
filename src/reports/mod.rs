//! The three news reports and the driver that prints them in order.

pub mod error_days;
pub mod popular_articles;
pub mod popular_authors;

use std::io::Write;

use tracing::error;

use crate::argument_parsing::ReportSettings;
use crate::database::QueryExecutor;
use crate::error::Result;

/// How a single report went. A failed query still produces the report's
/// banner and empty-result output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Completed { rows: usize },
    QueryFailed,
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub failed: Vec<&'static str>,
}

impl RunSummary {
    fn record(&mut self, name: &'static str, status: ReportStatus) {
        if status == ReportStatus::QueryFailed {
            self.failed.push(name);
        }
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Logs a failed query and hands the report an empty row set to format.
fn settle<T>(report: &'static str, result: Result<Vec<T>>) -> (Vec<T>, ReportStatus) {
    match result {
        Ok(rows) => {
            let rows_len = rows.len();
            (rows, ReportStatus::Completed { rows: rows_len })
        }
        Err(e) => {
            error!(report, category = e.category(), "{e}");
            (Vec::new(), ReportStatus::QueryFailed)
        }
    }
}

/// Prints every report; only a failing output stream stops the run.
pub async fn run_all(
    executor: &QueryExecutor,
    out: &mut impl Write,
    settings: &ReportSettings,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    let status = popular_articles::run(executor, out, settings.limit).await?;
    summary.record(popular_articles::NAME, status);

    let status = popular_authors::run(executor, out).await?;
    summary.record(popular_authors::NAME, status);

    let status = error_days::run(executor, out, settings.error_threshold).await?;
    summary.record(error_days::NAME, status);

    out.flush()?;
    Ok(summary)
}
