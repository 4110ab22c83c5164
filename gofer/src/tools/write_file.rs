use gofer_lib::tools::{ParamType, ToolParam, ToolSpec};
use serde_json::{Map, Value};

use crate::error::AppError;
use super::{string_arg, Tool, WorkDir};

/// Creates or overwrites a file.
pub struct WriteFile {
    workdir: WorkDir,
}

impl WriteFile {

    /// Create an instance confined to the working directory.
    pub fn new(workdir: WorkDir) -> Self {
        WriteFile { workdir }
    }
}

impl Tool for WriteFile {

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "write_file".to_owned(),
            description: "Writes content to the specified file, creating it (and missing parent directories) or overwriting it, constrained to the working directory.".to_owned(),
            params: vec![
                ToolParam {
                    name: "file_path".to_string(),
                    description: "File to write, relative to the working directory.".to_string(),
                    data_type: ParamType::String,
                    required: true,
                },
                ToolParam {
                    name: "content".to_string(),
                    description: "Content to write to the file.".to_string(),
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
        let content = match string_arg(args, "content") {
            Ok(value) => value,
            Err(message) => return Ok(message),
        };

        let path = match self.workdir.resolve(file_path) {
            Ok(path) => path,
            Err(message) => return Ok(message),
        };

        if let Some(parent) = path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                return Ok(format!("Error writing to file \"{file_path}\": {err}"));
            }
        }

        if let Err(err) = std::fs::write(&path, content) {
            return Ok(format!("Error writing to file \"{file_path}\": {err}"));
        }

        Ok(format!(
            "Successfully wrote to \"{file_path}\" ({} characters written)",
            content.chars().count(),
        ))
    }
}
