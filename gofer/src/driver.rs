//! The conversation loop.

use gofer_lib::llm::{Chat, Content, FunctionCall};

use crate::dispatch::DispatchTools;
use crate::error::AppError;
use crate::style::DIAG;

/// Terminal states of a run.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Model produced a final text answer.
    Answered(String),
    /// Iteration cap hit without a final answer.
    IterationLimit,
}

enum Step {
    Done(String),
    Continue,
}

/// Drives the send-history / execute-tools loop. Owns the append-only
/// message history; nothing else mutates it.
pub struct Driver {
    chat: Box<dyn Chat>,
    dispatcher: Box<dyn DispatchTools>,
    history: Vec<Content>,
    max_iterations: usize,
    verbose: bool,
}

impl Driver {

    /// Create a driver over a chat and a tool dispatcher.
    pub fn new(chat: Box<dyn Chat>, dispatcher: Box<dyn DispatchTools>, max_iterations: usize, verbose: bool) -> Self {
        Driver {
            chat,
            dispatcher,
            history: Vec::new(),
            max_iterations,
            verbose,
        }
    }

    /// Run the loop for one user prompt until the model answers, an
    /// iteration fails, or the cap is reached.
    pub fn run(&mut self, prompt: String) -> Result<Outcome, AppError> {
        if self.verbose {
            println!("User prompt: {prompt}\n");
        }

        self.history.push(Content::user_text(prompt));

        for iteration in 1..=self.max_iterations {
            if self.verbose {
                println!("\n{DIAG}--- Iteration {iteration} ---{DIAG:#}");
            }

            match self.step() {
                Ok(Step::Done(text)) => return Ok(Outcome::Answered(text)),
                Ok(Step::Continue) => {}
                Err(source) => {
                    return Err(AppError::Iteration { n: iteration, source: Box::new(source) });
                }
            }
        }

        Ok(Outcome::IterationLimit)
    }

    fn step(&mut self) -> Result<Step, AppError> {
        let response = self.chat.generate(&self.history)?;

        if self.verbose {
            println!("{DIAG}Prompt tokens: {}{DIAG:#}", response.usage.prompt_tokens);
            println!("{DIAG}Response tokens: {}{DIAG:#}", response.usage.response_tokens);
        }

        let calls: Vec<FunctionCall> = response.function_calls().into_iter().cloned().collect();
        let text = response.text();

        for candidate in response.candidates {
            self.history.push(candidate);
        }

        if calls.is_empty() {
            if !text.is_empty() {
                return Ok(Step::Done(text));
            }
            // Neither calls nor text: not terminal, bounded only by the cap.
            return Ok(Step::Continue);
        }

        let mut results = Vec::with_capacity(calls.len());
        for call in calls.iter() {
            let reply = self.dispatcher.dispatch(call)?;

            if reply.response.is_empty() {
                return Err(AppError::EmptyToolResponse(call.name.clone()));
            }

            results.push(reply);
        }

        // All of one iteration's tool results land in a single user entry.
        self.history.push(Content::tool_results(results));

        Ok(Step::Continue)
    }
}
