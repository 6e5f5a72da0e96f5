//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector case describes the query inputs, the expected outbound
//! request, a simulated response, and the expected parse result. Records are
//! compared as parsed JSON so the comparison tracks the serialized shape the
//! CLI's `--to-json` output uses.

use phenomizer_core::{ApiError, Credentials, HpoTermId, HttpResponse, PhenomizerClient};

const BASE_URL: &str = "http://localhost:3000/phenomizer";

#[test]
fn query_test_vectors() {
    let raw = include_str!("../../test-vectors/query.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let client = PhenomizerClient::new(BASE_URL);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let credentials = Credentials {
            username: case["username"].as_str().unwrap().to_string(),
            password: case["password"].as_str().unwrap().to_string(),
        };
        let terms: Vec<HpoTermId> = case["terms"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap().parse().unwrap())
            .collect();

        // Verify build
        let req = client.build_query(&credentials, &terms).unwrap();
        assert_eq!(req.url, BASE_URL, "{name}: url");
        let expected_query: Vec<(String, String)> = case["expected_query"]
            .as_array()
            .unwrap()
            .iter()
            .map(|pair| {
                let arr = pair.as_array().unwrap();
                (
                    arr[0].as_str().unwrap().to_string(),
                    arr[1].as_str().unwrap().to_string(),
                )
            })
            .collect();
        assert_eq!(req.query, expected_query, "{name}: query pairs");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            body: sim["body"].as_str().unwrap().to_string(),
        };

        match case.get("expected_error").and_then(|e| e.as_str()) {
            Some("Service") => {
                let status = case["expected_status"].as_u64().unwrap() as u16;
                let err = client.parse_query(response).unwrap_err();
                assert_eq!(err, ApiError::Service { status }, "{name}: error");
            }
            Some("Authentication") => {
                let mut records = client.parse_query(response).unwrap();
                assert_eq!(
                    records.next(),
                    Some(Err(ApiError::Authentication)),
                    "{name}: error"
                );
                assert_eq!(records.next(), None, "{name}: lines after Problem");
            }
            Some(other) => panic!("{name}: unknown expected_error: {other}"),
            None => {
                let records: Result<Vec<_>, _> =
                    client.parse_query(response).unwrap().collect();
                let parsed = serde_json::to_value(records.unwrap()).unwrap();
                assert_eq!(parsed, case["expected_records"], "{name}: records");
            }
        }
    }
}
