//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "PY2PDDL_LOG";

#[derive(Parser)]
#[command(name = "py2pddl-init")]
#[command(version)]
#[command(
    about = "Interactively generate a py2pddl domain and problem skeleton",
    long_about = None
)]
struct Cli {
    /// Destination file to create (conventionally ending in `.py`); must not exist
    filename: PathBuf,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<(), AppError> = run_init(cli.filename);

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_init(filename: PathBuf) -> Result<(), AppError> {
    let outcome = crate::app::api::init(&filename)?;
    println!("File written to {}", outcome.path.display());
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
