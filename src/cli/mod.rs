//! Command line interface for the SDK bundle generator.
//!
//! Ties argument parsing, the supervised lifecycle, and elapsed-time
//! reporting together into a single entry point consumed by `main`.

mod args;

pub use args::Args;

use std::time::Instant;

use crate::bundler::{GenerationOutcome, RunOptions, SdkBundler};
use crate::elapsed::format_elapsed;
use crate::error::Result;
use crate::lifecycle::{LifecycleRunner, RunOutcome};

/// Main CLI entry point, returning the process exit code.
///
/// The elapsed-time line is printed on every terminal state, including after
/// a reported error (validation or generation) and after graceful
/// cancellation.
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    init_logging(args.verbose);

    let start = Instant::now();
    let exit_code = match args.validate() {
        Err(reason) => {
            eprintln!("Error: {}", reason);
            2
        }
        Ok(()) => execute(&args).await,
    };

    println!("Elapsed time: {}", format_elapsed(start.elapsed()));
    Ok(exit_code)
}

/// Runs the supervised generation and maps its terminal state to an exit code.
async fn execute(args: &Args) -> i32 {
    let options = RunOptions::from(args);
    let bundler = SdkBundler::new(options);

    let runner = LifecycleRunner::new();
    let token = runner.cancellation_token();

    match runner.supervise(bundler.run(&token)).await {
        RunOutcome::Completed(GenerationOutcome::SkippedUpToDate) => {
            println!("Bundle is up to date, nothing to generate.");
            0
        }
        RunOutcome::Completed(_) => {
            println!(
                "SDK bundle generated under {}.",
                bundler.options().output_dir.display()
            );
            0
        }
        RunOutcome::GracefullyCancelled => {
            println!("Generation cancelled; partial work stopped at a safe checkpoint.");
            0
        }
        RunOutcome::Failed(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Initializes logging with the verbose flag as the default filter.
///
/// `RUST_LOG` still takes precedence when set; `try_init` tolerates a logger
/// already installed by an embedding application.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "error" };
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .try_init();
}
