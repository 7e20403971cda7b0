//! Swift SDK Bundler - cross-compilation SDK bundle generator.
//!
//! This binary derives host/target platform triples, builds the selected
//! recipe, and generates a Swift SDK bundle for a Linux target under a
//! signal-aware, cancellable lifecycle.

mod bundler;
mod cli;
mod elapsed;
mod error;
mod lifecycle;

use std::process;

#[tokio::main]
async fn main() {
    // Run CLI and get exit code (logging is initialized there, after the
    // verbose flag is known)
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
