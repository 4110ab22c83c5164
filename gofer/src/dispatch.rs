//! Routing of function calls to local operations.

use gofer_lib::llm::{FunctionCall, FunctionResponse};
use gofer_lib::tools::ToolSpec;
use serde_json::Value;

use crate::error::AppError;
use crate::style::TOOL;
use crate::tools::Tool;

/// Routes a function call to the matching local operation.
pub trait DispatchTools {
    /// Invoke the named operation and wrap its output into a response
    /// envelope the driver can feed back to the model.
    fn dispatch(&self, call: &FunctionCall) -> Result<FunctionResponse, AppError>;
}

/// The fixed catalog of local operations, keyed by name.
pub struct Dispatcher {
    tools: Vec<Box<dyn Tool>>,
    verbose: bool,
}

impl Dispatcher {

    /// Build the catalog. Duplicate names are a startup error: they would
    /// make dispatch ambiguous.
    pub fn new(tools: Vec<Box<dyn Tool>>, verbose: bool) -> Result<Self, AppError> {
        for (i, tool) in tools.iter().enumerate() {
            let name = tool.spec().name;
            if tools[..i].iter().any(|other| other.spec().name == name) {
                return Err(AppError::ApplicationError("duplicate tool name in the catalog"));
            }
        }

        Ok(Dispatcher { tools, verbose })
    }

    /// Declared specs, in catalog order, for the outbound tool declaration.
    pub fn specs(&self) -> Vec<ToolSpec> {
        self.tools.iter().map(|tool| tool.spec()).collect()
    }

    fn find(&self, name: &str) -> Option<&dyn Tool> {
        self.tools
            .iter()
            .find(|tool| tool.spec().name == name)
            .map(|tool| tool.as_ref())
    }
}

impl DispatchTools for Dispatcher {

    fn dispatch(&self, call: &FunctionCall) -> Result<FunctionResponse, AppError> {
        if self.verbose {
            println!("{TOOL}Calling function: {}({}){TOOL:#}", call.name, Value::Object(call.args.clone()));
        } else {
            println!("{TOOL} - Calling function: {}{TOOL:#}", call.name);
        }

        let Some(tool) = self.find(&call.name) else {
            // The model named an operation outside the catalog; report it
            // back so it can correct itself.
            return Ok(FunctionResponse::error(
                call.name.clone(),
                format!("Unknown function: {}", call.name),
            ));
        };

        let reply = match tool.run(&call.args) {
            Ok(output) => FunctionResponse::result(call.name.clone(), Value::String(output)),
            Err(err) => FunctionResponse::error(call.name.clone(), err.to_string()),
        };

        if self.verbose {
            println!("{TOOL}-> {}{TOOL:#}", Value::Object(reply.response.clone()));
        }

        Ok(reply)
    }
}
