//! Gemini model interface.
mod chat;
mod gemini;
mod messages;
mod util;

pub use chat::Chat;
pub use chat::get_gemini_chat;
pub use messages::Content;
pub use messages::FunctionCall;
pub use messages::FunctionResponse;
pub use messages::ModelResponse;
pub use messages::Part;
pub use messages::Role;
pub use messages::Usage;
