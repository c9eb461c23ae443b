//! HTTP request sending
//!
//! This module performs the single outbound GET using reqwest.

use reqwest::header::ACCEPT;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::errors::Result;

pub const USER_AGENT_STRING: &str = concat!("triplexq/", env!("CARGO_PKG_VERSION"));

/// Production API base. All request paths are appended to this.
pub const DEFAULT_API_BASE: &str = "https://triplexrna.org/JSON";

/// Defensive default: the upstream contract has no timeout at all.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolve the API base URL.
///
/// `TRIPLEXQ_API_BASE` overrides the production base; integration tests use
/// it to point the binary at a local mock server.
pub fn api_base() -> String {
    std::env::var("TRIPLEXQ_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

/// Result of the outbound request
#[derive(Debug)]
pub struct HttpResult {
    /// HTTP status code
    pub status: u16,
    /// Response body, decoded as text
    pub body: String,
    /// Request URL (for logging)
    pub url: String,
}

/// Send a single GET to the given URL. One attempt, no retries.
pub async fn fetch(url: &str) -> Result<HttpResult> {
    let url = Url::parse(url)?;
    let client = build_client()?;

    tracing::debug!(url = %url, "sending request");

    let response = client
        .get(url.clone())
        .header(ACCEPT, "application/json")
        .send()
        .await?;

    let status = response.status().as_u16();
    let body = response.text().await?;

    tracing::debug!(status = status, bytes = body.len(), "response received");

    Ok(HttpResult {
        status,
        body,
        url: url.to_string(),
    })
}

fn build_client() -> Result<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT_STRING)
        .timeout(REQUEST_TIMEOUT)
        .build()?)
}
