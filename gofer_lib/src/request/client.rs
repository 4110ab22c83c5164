use serde_json::Value;
use crate::error::Error;
use super::reqwest::ReqwestClient;

/// Request client.
pub trait Client {
    /// POST the payload to the URL with the given query params and return
    /// the JSON body of the response.
    fn make_json_request(&self, url: &str, payload: Value, params: &[(&str, &str)]) -> Result<Value, Error>;
}

/// Create reqwest client.
pub fn get_reqwest_client() -> Result<Box<dyn Client>, Error> {
    Ok(Box::new(ReqwestClient::new()))
}
