use sitelist_core::logging;

mod cli;

use crate::cli::CliCommand;

#[tokio::main]
async fn main() {
    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch.
    let result = CliCommand::run_from_args().await;
    if let Err(err) = &result {
        eprintln!("{}", error_message(err));
    }
    let code = exit_code(&result);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Line printed to stderr when a command fails.
fn error_message(err: &anyhow::Error) -> String {
    format!("sitelist error: {:#}", err)
}

/// Exit status for a command result. An empty site list is not a failure.
fn exit_code(result: &anyhow::Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}
