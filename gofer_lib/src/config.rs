/// Model parameters.
#[derive(Clone, Debug)]
pub struct Config {
    /// Model name.
    pub model: String,
    /// API key.
    pub api_key: String,
    /// Model API URL.
    pub api_url: String,
    /// Maximum number of tokens that will be generated.
    pub max_output_tokens: Option<i64>,
    /// Level of randomization when choosing tokens.
    pub temperature: Option<f64>,
}

impl Config {

    /// Create minimal config using model name, API key, and API URL.
    pub fn new(model: String, api_key: String, api_url: String) -> Self {
        Config {
            model,
            api_key,
            api_url,
            max_output_tokens: None,
            temperature: None,
        }
    }
}
