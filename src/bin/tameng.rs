//! Tameng CLI binary.

use std::process;

use clap::Parser;
use tameng::cli::{args::*, commands::*};
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command line arguments using clap
    let args = TamengArgs::parse();

    // RUST_LOG wins over the verbosity flags
    let default_level = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tameng={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    // Execute the command
    if let Err(e) = execute_command(args) {
        if e.is_fatal() {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        eprintln!("Warning: {e}");
        process::exit(2);
    }
}
