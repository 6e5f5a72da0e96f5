//! Error types for the phenomizer client.
//!
//! # Design
//! `Authentication` gets a dedicated variant because the service reports bad
//! credentials as a `Problem ...` line inside an HTTP 200 body, not as a
//! transport status — callers must be able to tell "the whole response is an
//! auth failure" apart from "one line had an odd field" (field-level parse
//! failures are not errors at all; they degrade to `None`/empty on the
//! record). Non-200 statuses land in `Service` with the raw status code.

use std::fmt;

/// Errors returned by `PhenomizerClient` and the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The network round trip exceeded the request timeout.
    Timeout,

    /// The server returned a non-200 status code.
    Service { status: u16 },

    /// The response body carried the service's `Problem` marker — the login
    /// credentials were not accepted.
    Authentication,

    /// The round trip failed before a status code was available (DNS,
    /// connection refused, TLS, I/O).
    Transport(String),

    /// A term could not be normalized to the `HP:` + digits form.
    InvalidTerm(String),

    /// A query was built with an empty term list.
    EmptyTermList,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Timeout => write!(f, "the request timed out"),
            ApiError::Service { status } => {
                write!(f, "phenomizer returned a bad status code: {status}")
            }
            ApiError::Authentication => write!(f, "login credentials are invalid"),
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::InvalidTerm(term) => write!(f, "not a valid HPO term: {term}"),
            ApiError::EmptyTermList => write!(f, "at least one HPO term is required"),
        }
    }
}

impl std::error::Error for ApiError {}
