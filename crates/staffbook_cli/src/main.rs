//! CLI smoke entry point.
//!
//! Opens the configured database, ensures both tables exist and prints every
//! stored review as one JSON line. Exits non-zero on any failure.

use log::error;
use staffbook_core::{
    core_version, init_logging, CoreConfig, RepoResult, ReviewService, SqliteEmployeeRepository,
    SqliteReviewRepository,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("staffbook: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(config.log_level, log_dir) {
            eprintln!("staffbook: {err}");
            return ExitCode::FAILURE;
        }
    }

    println!("staffbook_core version={}", core_version());
    match run(&config) {
        Ok(count) => {
            println!("staffbook reviews={count}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_run module=cli status=error error={err}");
            eprintln!("staffbook: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CoreConfig) -> RepoResult<usize> {
    let conn = config.open_connection()?;
    let employees = SqliteEmployeeRepository::new(&conn);
    employees.create_table()?;

    let service = ReviewService::new(SqliteReviewRepository::new(&conn), employees);
    service.create_table()?;

    let reviews = service.get_all()?;
    for review in &reviews {
        match serde_json::to_string(review) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("staffbook: cannot encode review {:?}: {err}", review.id()),
        }
    }
    Ok(reviews.len())
}
