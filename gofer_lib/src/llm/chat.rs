use crate::config::Config;
use crate::error::Error;
use crate::request::Client;
use crate::tools::ToolSpec;
use super::gemini::GeminiChat;
use super::{Content, ModelResponse};

/// A stateless chat boundary: the caller owns the history and sends the
/// whole of it with every request.
pub trait Chat {

    /// Send the full history (plus the system prompt and the declared tool
    /// catalog) and return the parsed reply: candidates with text parts
    /// and/or function-call requests, and token-usage counters.
    fn generate(&mut self, history: &[Content]) -> Result<ModelResponse, Error>;

    /// Update system prompt.
    fn set_system_prompt(&mut self, prompt: String);
}

/// Create a Gemini-backed `Chat` instance.
pub fn get_gemini_chat(config: Config, client: Box<dyn Client>, tools: Vec<ToolSpec>) -> Result<Box<dyn Chat>, Error> {
    Ok(Box::new(GeminiChat::new(config, client, tools)?))
}
