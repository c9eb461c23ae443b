//! Request URL construction

pub mod builder;

pub use builder::{build_path, build_url};
