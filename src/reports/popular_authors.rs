use std::io::Write;

use crate::database::{QueryExecutor, Statement};
use crate::error::Result;
use crate::section;
use crate::shared_queries::SELECT_AUTHORS_BY_VIEWS_QUERY;

use super::{ReportStatus, settle};

pub const TITLE: &str = "Author popularity by views";
pub const NAME: &str = "author_popularity";
pub const NOT_FOUND: &str = "No Authors Found";

const STATEMENT: Statement = Statement::shared(NAME, SELECT_AUTHORS_BY_VIEWS_QUERY);

#[derive(Debug, sqlx::FromRow)]
pub struct AuthorViews {
    pub name: String,
    pub views: i64,
}

pub fn format_line(row: &AuthorViews) -> String {
    format!("## {}--{} views", row.name, row.views)
}

pub async fn run(executor: &QueryExecutor, out: &mut impl Write) -> Result<ReportStatus> {
    section::header(out, TITLE)?;

    let result = executor.execute::<AuthorViews>(&STATEMENT, &[]).await;
    let (authors, status) = settle(NAME, result);

    if authors.is_empty() {
        writeln!(out, "{NOT_FOUND}")?;
    } else {
        for author in &authors {
            writeln!(out, "{}", format_line(author))?;
        }
    }

    section::footer(out)?;
    Ok(status)
}
