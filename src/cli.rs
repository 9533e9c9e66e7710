//! Command line interface for the Tameng spam detector.

pub mod args;
pub mod commands;
pub mod output;
pub mod samples;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
