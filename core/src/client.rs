//! Stateless request builder and response parser for the phenomizer service.
//!
//! # Design
//! `PhenomizerClient` holds only the endpoint URL and the request timeout.
//! The query operation is split into `build_query` (produces an
//! `HttpRequest`) and `parse_query` (consumes an `HttpResponse`), with
//! `query` wiring the two through `transport::execute` for the one real
//! round trip. Tests exercise the build/parse halves without a network.

use std::time::Duration;

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::parser::{parse_response, Records};
use crate::term::HpoTermId;
use crate::transport::{self, DEFAULT_TIMEOUT};
use crate::types::Credentials;

/// The production phenomizer endpoint.
pub const PHENOMIZER_URL: &str =
    "http://compbio.charite.de/phenomizer/phenomizer/PhenomizerServiceURI";

/// Synchronous client for the phenomizer phenotype-similarity service.
#[derive(Debug, Clone)]
pub struct PhenomizerClient {
    base_url: String,
    timeout: Duration,
}

impl Default for PhenomizerClient {
    fn default() -> Self {
        Self::new(PHENOMIZER_URL)
    }
}

impl PhenomizerClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the GET request for a similarity query.
    ///
    /// The term list must not be empty; terms go on the wire comma-joined in
    /// their canonical `HP:%07d` form, together with the credentials and the
    /// `mobilequery` flag the service requires.
    pub fn build_query(
        &self,
        credentials: &Credentials,
        terms: &[HpoTermId],
    ) -> Result<HttpRequest, ApiError> {
        if terms.is_empty() {
            return Err(ApiError::EmptyTermList);
        }
        let joined = terms
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Ok(HttpRequest {
            url: self.base_url.clone(),
            query: vec![
                ("mobilequery".to_string(), "true".to_string()),
                ("username".to_string(), credentials.username.clone()),
                ("password".to_string(), credentials.password.clone()),
                ("terms".to_string(), joined),
            ],
        })
    }

    /// Check the transport status and hand the body to the parser.
    ///
    /// A non-200 status fails with `ApiError::Service` and the body is never
    /// parsed. On 200 the returned iterator yields records lazily; an
    /// embedded `Problem` line surfaces as `ApiError::Authentication` during
    /// iteration.
    pub fn parse_query(&self, response: HttpResponse) -> Result<Records, ApiError> {
        if response.status != 200 {
            return Err(ApiError::Service {
                status: response.status,
            });
        }
        Ok(parse_response(response.body))
    }

    /// Run one similarity query: build, execute, parse.
    pub fn query(
        &self,
        credentials: &Credentials,
        terms: &[HpoTermId],
    ) -> Result<Records, ApiError> {
        let request = self.build_query(credentials, terms)?;
        let response = transport::execute(&request, self.timeout)?;
        self.parse_query(response)
    }

    /// Check whether a single term yields any result at all.
    ///
    /// Issues a one-term query and reads at most one record. Transport and
    /// authentication failures propagate to the caller.
    pub fn term_exists(
        &self,
        credentials: &Credentials,
        term: HpoTermId,
    ) -> Result<bool, ApiError> {
        let mut records = self.query(credentials, std::slice::from_ref(&term))?;
        let exists = match records.next() {
            Some(Ok(_)) => true,
            Some(Err(err)) => return Err(err),
            None => false,
        };
        debug!("term {term} exists: {exists}");
        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> PhenomizerClient {
        PhenomizerClient::new("http://localhost:3000/phenomizer")
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "user".to_string(),
            password: "secret".to_string(),
        }
    }

    fn terms(input: &[&str]) -> Vec<HpoTermId> {
        input.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn build_query_produces_correct_request() {
        let req = client()
            .build_query(&credentials(), &terms(&["HP:0001623", "0002497"]))
            .unwrap();
        assert_eq!(req.url, "http://localhost:3000/phenomizer");
        assert_eq!(
            req.query,
            vec![
                ("mobilequery".to_string(), "true".to_string()),
                ("username".to_string(), "user".to_string()),
                ("password".to_string(), "secret".to_string()),
                ("terms".to_string(), "HP:0001623,HP:0002497".to_string()),
            ]
        );
    }

    #[test]
    fn build_query_rejects_empty_term_list() {
        let err = client().build_query(&credentials(), &[]).unwrap_err();
        assert_eq!(err, ApiError::EmptyTermList);
    }

    #[test]
    fn parse_query_yields_records_on_200() {
        let response = HttpResponse {
            status: 200,
            body: "#header\n0.05\t3.2\tOMIM:143890\tHYPERCHOLESTEROLEMIA\tLDLR, APOB\n"
                .to_string(),
        };
        let records: Vec<_> = client().parse_query(response).unwrap().collect();
        assert_eq!(records.len(), 1);
        let record = records[0].as_ref().unwrap();
        assert_eq!(record.p_value, Some(0.05));
        assert_eq!(record.disease_source.as_deref(), Some("OMIM"));
        assert_eq!(record.disease_id, Some(143890));
        assert_eq!(record.gene_symbols, vec!["LDLR", "APOB"]);
    }

    #[test]
    fn parse_query_rejects_bad_status_without_parsing() {
        let response = HttpResponse {
            status: 500,
            // Even a well-formed body must not be parsed on a bad status.
            body: "0.05\t3.2\tOMIM:143890\tX\tLDLR\n".to_string(),
        };
        let err = client().parse_query(response).unwrap_err();
        assert_eq!(err, ApiError::Service { status: 500 });
    }

    #[test]
    fn parse_query_surfaces_embedded_auth_failure() {
        let response = HttpResponse {
            status: 200,
            body: "Problem: we could not validate your credentials\n".to_string(),
        };
        let mut records = client().parse_query(response).unwrap();
        assert_eq!(records.next(), Some(Err(ApiError::Authentication)));
        assert_eq!(records.next(), None);
    }
}
