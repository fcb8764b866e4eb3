use std::io::Write;

use crate::database::{QueryExecutor, QueryParam, Statement};
use crate::error::Result;
use crate::section;
use crate::shared_queries::SELECT_MOST_VIEWED_ARTICLES_QUERY;

use super::{ReportStatus, settle};

pub const TITLE: &str = "Top articles by number of views";
pub const NAME: &str = "most_viewed_articles";
/// Kept misspelled; downstream consumers match on this exact line.
pub const NOT_FOUND: &str = "No artciles found.";

const STATEMENT: Statement = Statement::shared(NAME, SELECT_MOST_VIEWED_ARTICLES_QUERY);

#[derive(Debug, sqlx::FromRow)]
pub struct ArticleViews {
    pub title: String,
    pub views: i64,
}

pub fn format_line(row: &ArticleViews) -> String {
    format!("## \"{}\"--{}", row.title, row.views)
}

pub async fn run(
    executor: &QueryExecutor,
    out: &mut impl Write,
    limit: i64,
) -> Result<ReportStatus> {
    section::header(out, TITLE)?;

    let result = executor
        .execute::<ArticleViews>(&STATEMENT, &[QueryParam::Int(limit)])
        .await;
    let (articles, status) = settle(NAME, result);

    if articles.is_empty() {
        writeln!(out, "{NOT_FOUND}")?;
    } else {
        for article in &articles {
            writeln!(out, "{}", format_line(article))?;
        }
    }

    section::footer(out)?;
    Ok(status)
}
