//! HTTP values as plain data.
//!
//! # Design
//! The pure half of the client builds `HttpRequest` values and parses
//! `HttpResponse` values without touching the network; only
//! `transport::execute` performs I/O. Tests can therefore feed canned
//! responses straight into the parse methods, and the request a query would
//! send can be inspected without a server.
//!
//! The service speaks a single GET endpoint, so a request is just a URL plus
//! its query parameters. Pairs are stored unencoded; percent-encoding is the
//! executor's job.

/// An HTTP GET request described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Constructed by `transport::execute` (or a test) after the round trip,
/// then passed to `PhenomizerClient::parse_query`. The body has already been
/// decoded as UTF-8.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}
