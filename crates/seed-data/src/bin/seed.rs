//! Default seed script - fills the dealership database
//!
//! Run with:
//! ```
//! DATABASE_URL=postgres://... cargo run -p seed-data --bin seed
//! ```
//!
//! Exits with status 1 if the database is unreachable or the run aborts.
//! Individual records that fail to insert are logged and skipped.

use std::process::ExitCode;

use seed_data::builders::{SeedPlan, exit_code, run};
use seed_data::config::SeedConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();
    let plan = SeedPlan::from_config(&config);

    exit_code(&run(&config, &plan).await)
}
