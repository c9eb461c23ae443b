//! triplexq library interface
//!
//! Command-line client for the TriplexRNA database.
//!
//! # Module Organization
//!
//! - [`cli`] - Argument definitions and validation (QueryCriteria)
//! - [`request`] - API path and URL construction
//! - [`client`] - The outbound HTTP GET
//! - [`output`] - Response checking and printing
//! - [`errors`] - Error types (TriplexqError, Result)
//! - [`status`] - Exit status codes (ExitStatus)
//! - [`core`] - Main execution logic

pub mod cli;
pub mod client;
pub mod core;
pub mod errors;
pub mod fs;
pub mod output;
pub mod request;
pub mod status;
