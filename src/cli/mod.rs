//! CLI argument parsing and processing

pub mod args;
pub mod process;

// Re-exports
pub use args::{Args, Organism};
pub use process::{process_args, Criterion, QueryCriteria};
