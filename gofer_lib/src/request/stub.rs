//! Only for tests.

use serde_json::Value;
use crate::error::Error;
use crate::request::client::Client;

/// Client for tests: asserts the request shape and returns a canned body.
pub struct StubClient {
    expected_url: String,
    expected_params: Vec<(String, String)>,
    expected_payload: Value,
    response_body: Value,
}

impl StubClient {

    /// Create client.
    pub fn new(expected_url: String,
        expected_params: Vec<(String, String)>,
        expected_payload: Value,
        response_body: Value) -> Self
    {
        StubClient {
            expected_url,
            expected_params,
            expected_payload,
            response_body,
        }
    }
}

impl Client for StubClient {

    fn make_json_request(&self, url: &str, payload: Value, params: &[(&str, &str)]) -> Result<Value, Error> {
        assert_eq!(url, self.expected_url, "request URL");

        assert_eq!(params.len(), self.expected_params.len(), "params count");
        for (actual, expected) in params.iter().zip(self.expected_params.iter()) {
            assert_eq!(actual.0, expected.0, "params keys");
            assert_eq!(actual.1, expected.1, "params values");
        }

        assert_eq!(payload, self.expected_payload);

        Ok(self.response_body.clone())
    }
}
