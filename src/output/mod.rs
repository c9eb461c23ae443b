//! Response output gate
//!
//! A successful query prints the JSON body verbatim, exactly once. Anything
//! else (non-200 status, empty body, unparsable JSON) produces no stdout at
//! all; the condition is logged at warn level so it is at least visible on
//! stderr, but the exit code stays 0 for compatibility with the original
//! client's all-or-nothing behavior.

use std::io::Write;

use crate::client::HttpResult;
use crate::errors::Result;

/// Why a response was not printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    HttpStatus(u16),
    EmptyBody,
    InvalidJson,
}

/// Decide whether a response body is printable.
///
/// Returns `Ok(())` when the response is HTTP 200 carrying well-formed,
/// non-empty JSON.
pub fn check_response(result: &HttpResult) -> std::result::Result<(), Rejection> {
    if result.status != 200 {
        return Err(Rejection::HttpStatus(result.status));
    }
    if result.body.trim().is_empty() {
        return Err(Rejection::EmptyBody);
    }
    match serde_json::from_str::<serde_json::Value>(&result.body) {
        Ok(serde_json::Value::Null) => Err(Rejection::EmptyBody),
        Ok(_) => Ok(()),
        Err(_) => Err(Rejection::InvalidJson),
    }
}

/// Print the response body, or log why it was swallowed.
pub fn print_response(result: &HttpResult) -> Result<()> {
    match check_response(result) {
        Ok(()) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            // Verbatim body, not a re-serialization
            writeln!(handle, "{}", result.body.trim_end_matches('\n'))?;
        }
        Err(Rejection::HttpStatus(status)) => {
            tracing::warn!(status = status, url = %result.url, "server returned a non-200 response; no output");
        }
        Err(Rejection::EmptyBody) => {
            tracing::warn!(url = %result.url, "server returned an empty response; no output");
        }
        Err(Rejection::InvalidJson) => {
            tracing::warn!(url = %result.url, "server response is not valid JSON; no output");
        }
    }
    Ok(())
}
