use std::process::{Command, Stdio};

use gofer_lib::tools::{ParamType, ToolParam, ToolSpec};
use serde_json::{Map, Value};

use crate::error::AppError;
use super::{optional_string_arg, string_arg, Tool, WorkDir};

/// Executes a program inside the working directory, capturing its output.
pub struct RunProgram {
    workdir: WorkDir,
}

impl RunProgram {

    /// Create an instance confined to the working directory.
    pub fn new(workdir: WorkDir) -> Self {
        RunProgram { workdir }
    }
}

impl Tool for RunProgram {

    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: "run_program".to_owned(),
            description: "Executes an existing program or script inside the working directory and returns its stdout, stderr, and exit code.".to_owned(),
            params: vec![
                ToolParam {
                    name: "file_path".to_string(),
                    description: "Program or script to execute, relative to the working directory.".to_string(),
                    data_type: ParamType::String,
                    required: true,
                },
                ToolParam {
                    name: "args".to_string(),
                    description: "Arguments to pass to the program, whitespace-separated.".to_string(),
                    data_type: ParamType::String,
                    required: false,
                },
            ],
        }
    }

    fn run(&self, args: &Map<String, Value>) -> Result<String, AppError> {
        let file_path = match string_arg(args, "file_path") {
            Ok(value) => value,
            Err(message) => return Ok(message),
        };
        let argv: Vec<&str> = match optional_string_arg(args, "args") {
            Ok(value) => value.unwrap_or("").split_whitespace().collect(),
            Err(message) => return Ok(message),
        };

        let path = match self.workdir.resolve(file_path) {
            Ok(path) => path,
            Err(message) => return Ok(message),
        };

        if !path.is_file() {
            return Ok(format!("Error: File \"{file_path}\" not found."));
        }

        // Absolute paths: the child's cwd changes to the sandbox root, and
        // a relative program path would be resolved against the old cwd.
        let program = match path.canonicalize() {
            Ok(program) => program,
            Err(err) => return Ok(format!("Error: executing \"{file_path}\": {err}")),
        };
        let cwd = match self.workdir.root().canonicalize() {
            Ok(cwd) => cwd,
            Err(err) => return Ok(format!("Error: executing \"{file_path}\": {err}")),
        };

        let output = match Command::new(&program)
            .args(&argv)
            .current_dir(&cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
        {
            Ok(output) => output,
            Err(err) => return Ok(format!("Error: executing \"{file_path}\": {err}")),
        };

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        let mut sections = Vec::new();
        if !stdout.is_empty() {
            sections.push(format!("STDOUT:\n{stdout}"));
        }
        if !stderr.is_empty() {
            sections.push(format!("STDERR:\n{stderr}"));
        }
        if !output.status.success() {
            sections.push(format!("Process exited with code {}", output.status.code().unwrap_or(-1)));
        }

        if sections.is_empty() {
            return Ok("No output produced.".to_owned());
        }

        Ok(sections.join("\n"))
    }
}
