use gofer_lib::tools::{ParamType, ToolParam, ToolSpec};
use serde_json::{Map, Value};

use crate::error::AppError;
use super::{string_arg, Tool, WorkDir};

/// Keeps a runaway file from flooding the context window.
const MAX_CHARS: usize = 10000;

/// Returns file contents, truncated past a fixed size.
pub struct ReadFile {
    workdir: WorkDir,
}

impl ReadFile {

    /// Create an instance confined to the working directory.
    pub fn new(workdir: WorkDir) -> Self {
        ReadFile { workdir }
    }
}

impl Tool for ReadFile {

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "read_file".to_owned(),
            description: format!("Reads the content of the specified file, constrained to the working directory. Output is truncated at {MAX_CHARS} characters."),
            params: vec![
                ToolParam {
                    name: "file_path".to_string(),
                    description: "File to read, relative to the working directory.".to_string(),
                    data_type: ParamType::String,
                    required: true,
                },
            ],
        }
    }

    fn run(&self, args: &Map<String, Value>) -> Result<String, AppError> {
        let file_path = match string_arg(args, "file_path") {
            Ok(value) => value,
            Err(message) => return Ok(message),
        };

        let path = match self.workdir.resolve(file_path) {
            Ok(path) => path,
            Err(message) => return Ok(message),
        };

        if !path.is_file() {
            return Ok(format!("Error: File not found or is not a regular file: \"{file_path}\""));
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => return Ok(format!("Error reading file \"{file_path}\": {err}")),
        };

        if content.chars().count() > MAX_CHARS {
            let truncated: String = content.chars().take(MAX_CHARS).collect();
            return Ok(format!("{truncated}[...File \"{file_path}\" truncated at {MAX_CHARS} characters]"));
        }

        Ok(content)
    }
}
