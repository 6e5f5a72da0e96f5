//! Blocking HTTP executor for `HttpRequest` values.
//!
//! # Design
//! One synchronous GET per call, no retry, no state across calls. The agent
//! is configured with `http_status_as_error(false)` so non-2xx responses come
//! back as data — status interpretation belongs to the client, not the
//! transport. The whole round trip is bounded by the caller-supplied timeout.

use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Request timeout used by `PhenomizerClient` unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Execute `request` and return the decoded response.
///
/// Fails with `ApiError::Timeout` when the round trip exceeds `timeout` and
/// with `ApiError::Transport` for any other failure that happens before a
/// status code is available. The body is decoded as UTF-8.
pub fn execute(request: &HttpRequest, timeout: Duration) -> Result<HttpResponse, ApiError> {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent();

    debug!("GET {}", request.url);
    let mut response = agent
        .get(&request.url)
        .query_pairs(request.query.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .call()
        .map_err(classify)?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(classify)?;

    Ok(HttpResponse { status, body })
}

fn classify(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Timeout(_) => ApiError::Timeout,
        ureq::Error::Io(e) if e.kind() == std::io::ErrorKind::TimedOut => ApiError::Timeout,
        other => ApiError::Transport(other.to_string()),
    }
}
