//! Gofer-lib is a library for building tool-calling agent applications
//! on top of the Gemini `generateContent` API.
//! It models the conversation history, declares callable tools, and turns
//! model replies into text parts and function-call requests.
//!
//! ### Features
//!
//!  - plain data model for history entries (text, function calls, function results)
//!  - tool/function declarations with JSON-schema parameters
//!  - blocking transport behind a small trait, easy to stub in tests
//!
//! ### Example
//!
//! ```rust no_run
//! use gofer_lib::llm::{get_gemini_chat, Content, Part};
//! use gofer_lib::request::get_reqwest_client;
//! use gofer_lib::Config;
//!
//! let config = Config::new(
//!     "gemini-2.5-flash".into(),
//!     "<api-key>".into(),
//!     "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent".into(),
//! );
//!
//! let client = get_reqwest_client().expect("transport created");
//!
//! let mut chat = get_gemini_chat(config, client, vec![]).expect("chat created");
//!
//! chat.set_system_prompt("You are a helpful assistant.".into());
//!
//! let history = vec![Content::user_text("Hi assistant!".into())];
//!
//! let response = chat.generate(&history).expect("model reply");
//!
//! for part in response.candidates.iter().flat_map(|c| c.parts.iter()) {
//!     match part {
//!         Part::Text(text) => println!("{text}"),
//!         Part::FunctionCall(call) => println!("wants to call {}", call.name),
//!         Part::FunctionResponse(_) => panic!("model must not send tool results!"),
//!     };
//! }
//! ```

#![deny(missing_docs)]
#![deny(clippy::suspicious)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::collapsible_if)]

mod error;
mod config;
pub mod llm;
pub mod tools;
pub mod request;

pub use error::Error;
pub use config::Config;
