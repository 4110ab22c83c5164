use std::fmt::Display;
use serde_json::{Map, Value};

/// Logical author of a history entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Model.
    Model,
    /// User (including aggregated tool results).
    User,
}

impl Role {
    /// Wire name of the role.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::Model => "model",
            Role::User => "user",
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// One entry of the conversation history. Entries are append-only and
/// never mutated once recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    /// Author.
    pub role: Role,
    /// Ordered message parts.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a user entry holding a single text part.
    pub fn user_text(text: String) -> Self {
        Content {
            role: Role::User,
            parts: vec![Part::Text(text)],
        }
    }

    /// Create the user entry aggregating one iteration's tool results.
    pub fn tool_results(results: Vec<FunctionResponse>) -> Self {
        Content {
            role: Role::User,
            parts: results.into_iter().map(Part::FunctionResponse).collect(),
        }
    }

    /// Function-call requests among the parts, in order.
    pub fn function_calls(&self) -> impl Iterator<Item = &FunctionCall> {
        self.parts.iter().filter_map(|part| match part {
            Part::FunctionCall(call) => Some(call),
            _ => None,
        })
    }

    /// Concatenated text parts.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for part in self.parts.iter() {
            if let Part::Text(text) = part {
                out.push_str(text);
            }
        }
        out
    }
}

/// One part of a history entry.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Plain text.
    Text(String),
    /// Function-call request emitted by the model.
    FunctionCall(FunctionCall),
    /// Function-call result fed back to the model.
    FunctionResponse(FunctionResponse),
}

/// A request from the model to invoke a named local operation.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// Operation name.
    pub name: String,
    /// Arguments mapping.
    pub args: Map<String, Value>,
}

/// The result returned to the model after a local operation executed.
/// Valid only when the result mapping is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionResponse {
    /// Operation name.
    pub name: String,
    /// Result mapping.
    pub response: Map<String, Value>,
}

impl FunctionResponse {
    /// Build a successful envelope, `{"result": value}`.
    pub fn result(name: String, value: Value) -> Self {
        let mut response = Map::new();
        response.insert("result".to_owned(), value);
        FunctionResponse { name, response }
    }

    /// Build an error envelope, `{"error": message}`.
    pub fn error(name: String, message: String) -> Self {
        let mut response = Map::new();
        response.insert("error".to_owned(), Value::String(message));
        FunctionResponse { name, response }
    }
}

/// One reply from the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelResponse {
    /// Alternative responses returned for the request.
    pub candidates: Vec<Content>,
    /// Token-usage counters. A reply without these is malformed and is
    /// rejected during parsing.
    pub usage: Usage,
}

impl ModelResponse {
    /// All function-call requests across all candidates, in order.
    pub fn function_calls(&self) -> Vec<&FunctionCall> {
        self.candidates
            .iter()
            .flat_map(|candidate| candidate.function_calls())
            .collect()
    }

    /// Concatenated text parts across all candidates.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for candidate in self.candidates.iter() {
            out.push_str(&candidate.text());
        }
        out
    }
}

/// Token-usage counters of one reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Usage {
    /// Tokens consumed by the request.
    pub prompt_tokens: i64,
    /// Tokens generated across the candidates.
    pub response_tokens: i64,
}
