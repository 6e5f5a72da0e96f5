//! Domain DTOs for the phenomizer client.
//!
//! # Design
//! `QueryRecord` mirrors one line of the service's tab-delimited output.
//! Every column is optional on its own: the service's column count varies by
//! record type, so absence of one field must never prevent the others from
//! being populated. `raw_line` keeps the original line verbatim for
//! diagnostics and pass-through output.

use std::fmt;

use serde::Serialize;

/// Username/password pair for the authenticated service endpoint.
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// One candidate disease/gene association parsed from a response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryRecord {
    /// Statistical significance of the candidate; lower is more significant.
    pub p_value: Option<f64>,
    /// Source database of the disease entry ("OMIM", "ORPHANET", "DECIPHER").
    pub disease_source: Option<String>,
    /// Numeric identifier within `disease_source`.
    pub disease_id: Option<u32>,
    /// Free-text disease name.
    pub description: Option<String>,
    /// Associated gene symbols, possibly empty.
    pub gene_symbols: Vec<String>,
    /// The response line this record was parsed from, verbatim.
    pub raw_line: String,
}
