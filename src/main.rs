use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use crate::argument_parsing::{Args, ReportSettings};
use crate::database::{DatabaseTarget, QueryExecutor};
use crate::reports::RunSummary;

mod argument_parsing;
mod database;
mod error;
mod logging;
mod postgres_queries;
mod reports;
mod section;
mod shared_queries;
mod sqlite_queries;
#[cfg(test)]
mod test_fixtures;

const EXIT_QUERY_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn configure(args: &Args) -> error::Result<(ReportSettings, DatabaseTarget)> {
    Ok((args.settings()?, args.database_target()?))
}

async fn run(args: &Args) -> error::Result<RunSummary> {
    let (settings, target) = configure(args)?;
    info!(backend = target.backend_name(), "running news reports");

    let executor = QueryExecutor::new(target);
    let mut stdout = std::io::stdout();
    reports::run_all(&executor, &mut stdout, &settings).await
}

/// Failed report queries only change the status under `--strict`;
/// configuration and output errors always do.
fn exit_code(strict: bool, outcome: &error::Result<RunSummary>) -> u8 {
    match outcome {
        Ok(summary) if strict && !summary.all_succeeded() => EXIT_QUERY_FAILED,
        Ok(_) => 0,
        Err(_) => EXIT_ERROR,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();

    let outcome = run(&args).await;
    match &outcome {
        Ok(summary) if !summary.all_succeeded() => {
            error!(failed = ?summary.failed, "report queries failed");
        }
        Ok(_) => {}
        Err(e) => error!(category = e.category(), "{e}"),
    }

    ExitCode::from(exit_code(args.strict(), &outcome))
}
