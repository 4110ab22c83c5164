mod config;
mod dispatch;
mod driver;
mod error;
mod options;
mod prompts;
mod style;
mod tools;

use config::Config;
use dispatch::Dispatcher;
use driver::{Driver, Outcome};
use error::AppError;
use gofer_lib::llm::get_gemini_chat;
use gofer_lib::request::get_reqwest_client;
use options::Options;
use style::HEADER;

fn run_agent() -> Result<(), AppError> {
    let options = Options::load(std::env::args())?;
    let config: Config = options.try_into()?;

    let dispatcher = Dispatcher::new(tools::catalog(&config.working_dir), config.verbose)?;

    let client = get_reqwest_client()?;
    let mut chat = get_gemini_chat(config.model_params.clone(), client, dispatcher.specs())?;
    chat.set_system_prompt(prompts::SYSTEM_PROMPT.to_owned());

    let mut driver = Driver::new(chat, Box::new(dispatcher), config.max_iterations, config.verbose);

    let outcome = driver.run(config.prompt.clone())?;

    println!("{HEADER}Response:{HEADER:#}");
    match outcome {
        Outcome::Answered(text) => println!("{text}"),
        Outcome::IterationLimit => println!("Maximum iterations reached."),
    }

    Ok(())
}

fn main() {
    if let Err(e) = run_agent() {
        eprintln!("ERROR: {e}");
        std::process::exit(1);
    }
}
