//! App initialization functions.

use anstyle::Style;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use std::ffi::OsString;
use crate::error::AppError;

/// App options as given on the command line / environment.
#[derive(Debug, Clone)]
pub struct Options {
    /// User's request.
    pub prompt: String,
    /// Verbose output.
    pub verbose: bool,
    /// Model name.
    pub model: Option<String>,
    /// API key.
    pub api_key: Option<String>,
    /// Model API URL.
    pub api_url: Option<String>,
    /// Directory the tools are confined to.
    pub working_dir: Option<String>,
}

impl Options {

    fn argument_parser<T>(args: impl IntoIterator<Item = T>) -> ArgMatches where T: Into<OsString> + Clone {
        let bold_underline = Style::new().underline().bold();
        let bold = Style::new().bold();

        Command::new("Gofer")
            .about("Gofer is a coding agent that answers a request by reading, writing, and running files in the working directory on the model's behalf.")
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                Arg::new("prompt")
                .help("Request to send to the model")
                .required(true)
            ).arg(
                Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print iteration banners, token usage, and tool traffic")
                .action(ArgAction::SetTrue)
            ).arg(
                Arg::new("model")
                .long("model")
                .short('m')
                .help("Inference model name")
                .env("GOFER_MODEL")
                .required(false)
            ).arg(
                Arg::new("api-key")
                .long("api-key")
                .short('k')
                .help("Gemini API key")
                .env("GEMINI_API_KEY")
                .required(false)
            ).arg(
                Arg::new("api-url")
                .long("api-url")
                .short('u')
                .help("Model API URL (derived from the model name when omitted)")
                .env("GOFER_API_URL")
                .required(false)
            ).arg(
                Arg::new("working-dir")
                .long("working-dir")
                .short('w')
                .help("Directory the file and process tools are confined to")
                .env("GOFER_WORKING_DIR")
                .required(false)
            )
            .after_help(format!("{bold_underline}Example:{bold_underline:#} {bold}

    gofer 'how does the calculator render results?' --verbose{bold:#}

The GEMINI_API_KEY environment variable must be set."))
            .get_matches_from(args)
    }

    /// Parse command line arguments.
    pub fn load<T>(args: impl IntoIterator<Item = T>) -> Result<Self, AppError> where T: Into<OsString> + Clone {
        let matches = Self::argument_parser(args);

        let prompt = matches.get_one::<String>("prompt")
            .cloned()
            .ok_or(AppError::MissingArgError("prompt"))?;

        Ok(Options {
            prompt,
            verbose: matches.get_flag("verbose"),
            model: matches.get_one::<String>("model").cloned(),
            api_key: matches.get_one::<String>("api-key").cloned(),
            api_url: matches.get_one::<String>("api-url").cloned(),
            working_dir: matches.get_one::<String>("working-dir").cloned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_prompt_and_flags() {
        let options = Options::load([
            "gofer",
            "fix the bug in main.rs",
            "--verbose",
            "--model", "gemini-2.5-flash",
            "--api-key", "secret",
            "--working-dir", "./sandbox",
        ]).expect("options parsed");

        assert_eq!(options.prompt, "fix the bug in main.rs");
        assert!(options.verbose);
        assert_eq!(options.model.as_deref(), Some("gemini-2.5-flash"));
        assert_eq!(options.api_key.as_deref(), Some("secret"));
        assert_eq!(options.working_dir.as_deref(), Some("./sandbox"));
        assert!(options.api_url.is_none());
    }

    #[test]
    fn test_load_defaults() {
        let options = Options::load(["gofer", "hello"]).expect("options parsed");

        assert_eq!(options.prompt, "hello");
        assert!(!options.verbose);
        assert!(options.model.is_none());
    }
}
