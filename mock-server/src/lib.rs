//! Local stand-in for the phenomizer service endpoint.
//!
//! Serves `GET /phenomizer` with the service's text/plain wire format: a
//! `#`-prefixed header line followed by tab-delimited result rows. Invalid
//! credentials are reported the way the real service reports them: an
//! HTTP 200 whose body is a `Problem ...` line. An optional artificial
//! delay lets transport-timeout tests run against a real socket.

use std::{sync::Arc, time::Duration};

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

/// Query parameters the phenomizer endpoint accepts.
#[derive(Debug, Deserialize)]
pub struct QueryParams {
    pub mobilequery: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub terms: Option<String>,
}

/// Fixture configuration: accepted credentials, known terms, canned rows.
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub password: String,
    /// Terms the fixture "knows"; a query containing none of them returns
    /// the header line only.
    pub known_terms: Vec<String>,
    /// Tab-delimited result rows returned for queries with a known term.
    pub rows: Vec<String>,
    /// Sleep this long before answering, to provoke client timeouts.
    pub delay: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: "user".to_string(),
            password: "secret".to_string(),
            known_terms: vec!["HP:0001623".to_string(), "HP:0002497".to_string()],
            rows: vec![
                "0.0217\t4.334\tOMIM:143890\tHYPERCHOLESTEROLEMIA, FAMILIAL\tLDLR, APOB"
                    .to_string(),
                "0.0217\t4.334\tORPHANET:406\tHYPERCHOLESTEROLEMIA, AUTOSOMAL DOMINANT\tPCSK9"
                    .to_string(),
                "0.0929\t3.820\tOMIM:144010\tHYPERCHOLESTEROLEMIA, AUTOSOMAL DOMINANT, 3\t"
                    .to_string(),
            ],
            delay: None,
        }
    }
}

const HEADER: &str = "#p-value\tscore\tdisease-id\tdisease-name\tgene-symbols";

pub fn app(config: Config) -> Router {
    Router::new()
        .route("/phenomizer", get(query_handler))
        .with_state(Arc::new(config))
}

pub async fn run(listener: TcpListener, config: Config) -> Result<(), std::io::Error> {
    axum::serve(listener, app(config)).await
}

async fn query_handler(
    State(config): State<Arc<Config>>,
    Query(params): Query<QueryParams>,
) -> (StatusCode, String) {
    if let Some(delay) = config.delay {
        tokio::time::sleep(delay).await;
    }

    if params.mobilequery.as_deref() != Some("true") {
        return (
            StatusCode::BAD_REQUEST,
            "mobilequery parameter is required\n".to_string(),
        );
    }
    let terms = params.terms.as_deref().unwrap_or("");
    if terms.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            "terms parameter is required\n".to_string(),
        );
    }

    if params.username.as_deref() != Some(config.username.as_str())
        || params.password.as_deref() != Some(config.password.as_str())
    {
        // The real service answers 200 with an in-band error line.
        return (
            StatusCode::OK,
            "Problem: the login credentials could not be validated.\n".to_string(),
        );
    }

    let known = terms
        .split(',')
        .any(|t| config.known_terms.iter().any(|k| k == t));

    let mut body = String::from(HEADER);
    body.push('\n');
    if known {
        for row in &config.rows {
            body.push_str(row);
            body.push('\n');
        }
    }
    (StatusCode::OK, body)
}
