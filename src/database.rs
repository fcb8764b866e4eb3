//! Query execution against the reporting database.
//!
//! Every call opens its own connection, runs a single statement and closes
//! the connection again. Nothing is pooled or shared between reports.

use futures_util::TryStreamExt;
use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteRow};
use sqlx::{ConnectOptions, Connection, FromRow};
use tracing::{debug, warn};

use crate::error::{ReportError, Result};

/// Where the reports read from.
#[derive(Debug, Clone)]
pub enum DatabaseTarget {
    Postgres(PgConnectOptions),
    Sqlite(SqliteConnectOptions),
}

impl DatabaseTarget {
    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

/// A statement with its text for each supported backend.
#[derive(Debug, Clone, Copy)]
pub struct Statement {
    pub name: &'static str,
    pub postgres: &'static str,
    pub sqlite: &'static str,
}

impl Statement {
    /// For statements whose SQL is portable across both backends.
    pub const fn shared(name: &'static str, sql: &'static str) -> Self {
        Self {
            name,
            postgres: sql,
            sqlite: sql,
        }
    }
}

/// Positional parameter bound to `$1`, `$2`, ... in order.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone)]
pub struct QueryExecutor {
    target: DatabaseTarget,
}

impl QueryExecutor {
    pub fn new(target: DatabaseTarget) -> Self {
        Self { target }
    }

    /// Runs `statement` on a fresh connection and returns every row in the
    /// order the engine produced them.
    pub async fn execute<T>(
        &self,
        statement: &Statement,
        params: &[QueryParam],
    ) -> Result<Vec<T>>
    where
        T: Send + Unpin + for<'r> FromRow<'r, PgRow> + for<'r> FromRow<'r, SqliteRow>,
    {
        let rows = match &self.target {
            DatabaseTarget::Postgres(options) => {
                fetch_postgres(options, statement.postgres, params).await?
            }
            DatabaseTarget::Sqlite(options) => {
                fetch_sqlite(options, statement.sqlite, params).await?
            }
        };

        debug!(
            statement = statement.name,
            backend = self.target.backend_name(),
            rows = rows.len(),
            "statement executed"
        );

        Ok(rows)
    }
}

async fn fetch_postgres<T>(
    options: &PgConnectOptions,
    sql: &str,
    params: &[QueryParam],
) -> Result<Vec<T>>
where
    T: Send + Unpin + for<'r> FromRow<'r, PgRow>,
{
    let mut conn: PgConnection = options
        .connect()
        .await
        .map_err(ReportError::connection)?;

    let mut query = sqlx::query_as::<_, T>(sql);
    for param in params {
        query = match param {
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
        };
    }

    let rows: std::result::Result<Vec<T>, sqlx::Error> =
        query.fetch(&mut conn).try_collect().await;

    if let Err(e) = conn.close().await {
        warn!("Failed to close postgres connection: {e}");
    }

    rows.map_err(ReportError::query)
}

async fn fetch_sqlite<T>(
    options: &SqliteConnectOptions,
    sql: &str,
    params: &[QueryParam],
) -> Result<Vec<T>>
where
    T: Send + Unpin + for<'r> FromRow<'r, SqliteRow>,
{
    let mut conn: SqliteConnection = options
        .connect()
        .await
        .map_err(ReportError::connection)?;

    let mut query = sqlx::query_as::<_, T>(sql);
    for param in params {
        query = match param {
            QueryParam::Int(v) => query.bind(*v),
            QueryParam::Float(v) => query.bind(*v),
        };
    }

    let rows: std::result::Result<Vec<T>, sqlx::Error> =
        query.fetch(&mut conn).try_collect().await;

    if let Err(e) = conn.close().await {
        warn!("Failed to close sqlite connection: {e}");
    }

    rows.map_err(ReportError::query)
}
