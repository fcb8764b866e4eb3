use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use sqlx::postgres::PgConnectOptions;
use sqlx::sqlite::SqliteConnectOptions;
use validator::{Validate, ValidationError};

use crate::database::DatabaseTarget;
use crate::error::{ReportError, Result};

/// Print the news site analytics reports from either Postgres or Sqlite
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Postgres Db Connection String
    #[arg(short, long, env = "NEWS_PG", default_value = None)]
    pub(crate) pg: Option<String>,

    /// Sqlite Db file, opened read-only
    #[arg(short, long, env = "NEWS_SQLITE", default_value = None)]
    pub(crate) sqlite: Option<PathBuf>,

    /// Postgres database name used when no connection string is given;
    /// host and credentials come from the PG* environment variables
    #[arg(short, long, env = "NEWS_DATABASE", default_value = "news")]
    pub(crate) database: String,

    /// Number of articles in the most viewed report
    #[arg(short, long, env = "NEWS_LIMIT", default_value_t = 3)]
    pub(crate) limit: i64,

    /// Minimum daily error percentage (0-100) for the error days report
    #[arg(short = 't', long, env = "NEWS_ERROR_THRESHOLD", default_value_t = 1.0)]
    pub(crate) error_threshold: f64,

    /// Exit with a failure status if any report query failed
    #[arg(long, env = "NEWS_STRICT", default_value_t = false)]
    pub(crate) strict: bool,
}

/// Tunables shared by the report generators.
#[derive(Debug, Clone, Validate)]
pub struct ReportSettings {
    #[validate(range(min = 1))]
    pub limit: i64,
    #[validate(range(min = 0.0, max = 100.0), custom(function = "validate_finite"))]
    pub error_threshold: f64,
}

// NaN slips through range checks since every comparison with it is false.
fn validate_finite(value: f64) -> std::result::Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            limit: 3,
            error_threshold: 1.0,
        }
    }
}

impl Args {
    pub fn settings(&self) -> Result<ReportSettings> {
        let settings = ReportSettings {
            limit: self.limit,
            error_threshold: self.error_threshold,
        };
        settings.validate().map_err(ReportError::config)?;
        Ok(settings)
    }

    /// A non-empty Postgres string wins, then the Sqlite file, then the
    /// default Postgres database configured from the environment.
    pub fn database_target(&self) -> Result<DatabaseTarget> {
        match (self.pg.as_deref(), self.sqlite.as_ref()) {
            (Some(pg_string), _) if !pg_string.is_empty() => PgConnectOptions::from_str(pg_string)
                .map(DatabaseTarget::Postgres)
                .map_err(ReportError::config),
            (_, Some(path)) => Ok(DatabaseTarget::Sqlite(
                SqliteConnectOptions::new().filename(path).read_only(true),
            )),
            _ => Ok(DatabaseTarget::Postgres(PgConnectOptions::new().database(&self.database))),
        }
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}
