//! HTTP client functionality

pub mod http;

pub use http::{api_base, fetch, HttpResult, DEFAULT_API_BASE, USER_AGENT_STRING};
