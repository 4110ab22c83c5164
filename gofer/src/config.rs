use std::path::PathBuf;

use gofer_lib::Config as ModelParams;

use crate::{error::AppError, options::Options};

/// Iteration cap of the conversation loop.
pub const MAX_ITERATIONS: usize = 20;

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// App config, assembled once at startup and passed into the driver.
#[derive(Clone, Debug)]
pub struct Config {
    /// Model parameters.
    pub model_params: ModelParams,
    /// User's request.
    pub prompt: String,
    /// Verbose output.
    pub verbose: bool,
    /// Directory the tools are confined to.
    pub working_dir: PathBuf,
    /// Iteration cap.
    pub max_iterations: usize,
}

impl TryFrom<Options> for Config {
    type Error = AppError;

    fn try_from(options: Options) -> Result<Self, AppError> {
        let api_key = options.api_key
            .ok_or(AppError::MissingArgError("API key (set the GEMINI_API_KEY environment variable)"))?;

        let model = options.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let api_url = options.api_url.unwrap_or_else(|| api_url_for_model(&model));

        let model_params = ModelParams::new(model, api_key, api_url);

        Ok(Config {
            model_params,
            prompt: options.prompt,
            verbose: options.verbose,
            working_dir: PathBuf::from(options.working_dir.unwrap_or_else(|| ".".to_owned())),
            max_iterations: MAX_ITERATIONS,
        })
    }
}

/// Gemini generateContent URL for the model.
pub fn api_url_for_model(model: &str) -> String {
    format!("https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent", model)
}
