//! Local operations the model can request.

mod list_directory;
mod read_file;
mod run_program;
mod workdir;
mod write_file;

pub use list_directory::ListDirectory;
pub use read_file::ReadFile;
pub use run_program::RunProgram;
pub use workdir::WorkDir;
pub use write_file::WriteFile;

use std::path::Path;

use gofer_lib::tools::ToolSpec;
use serde_json::{Map, Value};

use crate::error::AppError;

/// A local operation the dispatcher can route to.
pub trait Tool {
    /// Declared schema for the outbound catalog.
    fn spec(&self) -> ToolSpec;

    /// Execute with the model-supplied arguments. Recoverable misuse (bad
    /// path, wrong argument shape) is reported as an `Error: …` result
    /// string so the model can correct itself; `Err` is reserved for
    /// failures of the agent itself.
    fn run(&self, args: &Map<String, Value>) -> Result<String, AppError>;
}

/// The fixed catalog, confined to the working directory.
pub fn catalog(working_dir: &Path) -> Vec<Box<dyn Tool>> {
    let workdir = WorkDir::new(working_dir);

    vec![
        Box::new(ListDirectory::new(workdir.clone())),
        Box::new(ReadFile::new(workdir.clone())),
        Box::new(WriteFile::new(workdir.clone())),
        Box::new(RunProgram::new(workdir)),
    ]
}

/// Extract a required string argument.
pub(crate) fn string_arg<'a>(args: &'a Map<String, Value>, name: &str) -> Result<&'a str, String> {
    match args.get(name) {
        Some(Value::String(value)) => Ok(value),
        Some(_) => Err(format!("Error: \"{name}\" must be a string")),
        None => Err(format!("Error: missing required argument \"{name}\"")),
    }
}

/// Extract an optional string argument.
pub(crate) fn optional_string_arg<'a>(args: &'a Map<String, Value>, name: &str) -> Result<Option<&'a str>, String> {
    match args.get(name) {
        Some(Value::String(value)) => Ok(Some(value)),
        Some(_) => Err(format!("Error: \"{name}\" must be a string")),
        None => Ok(None),
    }
}
