//! Main execution logic
//!
//! `run` owns the mapping from arguments to exit codes: clap parse errors
//! and semantic validation errors print a message plus usage and exit 1,
//! everything else goes through the async request path.

use clap::{CommandFactory, Parser};

use crate::cli::{process_args, Args, QueryCriteria};
use crate::client::{api_base, fetch};
use crate::errors::TriplexqError;
use crate::output::print_response;
use crate::request::build_url;
use crate::status::ExitStatus;

/// Main entry point for the CLI.
pub fn run(args: Vec<String>) -> ExitStatus {
    let parsed = match Args::try_parse_from(&args) {
        Ok(args) => args,
        Err(e) => {
            e.print().ok();
            return if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                ExitStatus::Success
            } else {
                ExitStatus::Error
            };
        }
    };

    let criteria = match process_args(&parsed) {
        Ok(criteria) => criteria,
        Err(e) => return usage_error(e),
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return handle_error(e.into()),
    };

    match runtime.block_on(program(criteria)) {
        Ok(status) => status,
        Err(e) => handle_error(e),
    }
}

/// Perform one validated query against the API.
pub async fn program(criteria: QueryCriteria) -> Result<ExitStatus, TriplexqError> {
    let url = build_url(&api_base(), &criteria);
    let result = fetch(&url).await?;
    print_response(&result)?;
    Ok(ExitStatus::Success)
}

fn usage_error(error: TriplexqError) -> ExitStatus {
    eprintln!("error: {error}");
    eprintln!();
    eprintln!("{}", Args::command().render_usage());
    eprintln!();
    eprintln!("For more information, try '--help'.");
    ExitStatus::Error
}

fn handle_error(error: TriplexqError) -> ExitStatus {
    eprintln!("Error: {error}");
    ExitStatus::Error
}
