use gofer_lib::tools::{ParamType, ToolParam, ToolSpec};
use serde_json::{Map, Value};

use crate::error::AppError;
use super::{optional_string_arg, Tool, WorkDir};

/// Lists directory entries with their sizes.
pub struct ListDirectory {
    workdir: WorkDir,
}

impl ListDirectory {

    /// Create an instance confined to the working directory.
    pub fn new(workdir: WorkDir) -> Self {
        ListDirectory { workdir }
    }
}

impl Tool for ListDirectory {

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "list_directory".to_owned(),
            description: "Lists files in the specified directory along with their sizes, constrained to the working directory.".to_owned(),
            params: vec![
                ToolParam {
                    name: "directory".to_string(),
                    description: "Directory to list, relative to the working directory (defaults to the working directory itself).".to_string(),
                    data_type: ParamType::String,
                    required: false,
                },
            ],
        }
    }

    fn run(&self, args: &Map<String, Value>) -> Result<String, AppError> {
        let directory = match optional_string_arg(args, "directory") {
            Ok(value) => value.unwrap_or("."),
            Err(message) => return Ok(message),
        };

        let path = match self.workdir.resolve(directory) {
            Ok(path) => path,
            Err(message) => return Ok(message),
        };

        if !path.is_dir() {
            return Ok(format!("Error: \"{directory}\" is not a directory"));
        }

        let reader = match std::fs::read_dir(&path) {
            Ok(reader) => reader,
            Err(err) => return Ok(format!("Error listing directory: {err}")),
        };

        let mut lines = Vec::new();
        for entry in reader {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => return Ok(format!("Error listing directory: {err}")),
            };
            let metadata = match entry.metadata() {
                Ok(metadata) => metadata,
                Err(err) => return Ok(format!("Error listing directory: {err}")),
            };

            lines.push(format!(
                "- {}: file_size={} bytes, is_dir={}",
                entry.file_name().to_string_lossy(),
                metadata.len(),
                metadata.is_dir(),
            ));
        }

        // Stable order, read_dir gives none.
        lines.sort();

        Ok(lines.join("\n"))
    }
}
