//! Synchronous client core for the Phenomizer phenotype-similarity service.
//!
//! # Overview
//! Given a set of HPO terms and service credentials, issues one HTTP GET to
//! the phenomizer endpoint and parses its tab-delimited text response into a
//! lazy stream of typed records (disease candidate, p-value, gene symbols,
//! description).
//!
//! # Design
//! - `PhenomizerClient` is stateless — it holds only the endpoint URL and
//!   the request timeout, both explicit so tests can point it at a local
//!   fixture server.
//! - The query operation is split into `build_query` (produces an
//!   `HttpRequest` as plain data) and `parse_query` (consumes an
//!   `HttpResponse`); `transport::execute` performs the single blocking
//!   round trip between the two.
//! - The service reports invalid credentials as a `Problem ...` line inside
//!   an HTTP 200 body; the parser sniffs this and surfaces it as
//!   `ApiError::Authentication` instead of treating the body as data.
//! - Per-field parse failures are not errors: the service's column count
//!   varies by record type, so missing or unparseable columns degrade to
//!   `None`/empty on the record.

pub mod client;
pub mod error;
pub mod http;
pub mod parser;
pub mod term;
pub mod transport;
pub mod types;

pub use client::{PhenomizerClient, PHENOMIZER_URL};
pub use error::ApiError;
pub use http::{HttpRequest, HttpResponse};
pub use parser::{parse_record, parse_response, Records};
pub use term::HpoTermId;
pub use types::{Credentials, QueryRecord};
