use serde_json::{json, Number, Value};
use crate::error::Error;
use crate::tools::ToolParam;
use super::Role;

/// Get logical role by wire role.
pub fn wire_to_role(role: &str) -> Result<Role, Error> {
    match role {
        "model" => Ok(Role::Model),
        "user" => Ok(Role::User),
        _ => Err(Error::ResponseError("model returned message with an unknown role.")),
    }
}

/// Interpret value as str
#[macro_export(local_inner_macros)]
macro_rules! val_as_str {
    ($val:expr, $element:literal) => {
        $val
            .as_str()
            .ok_or(Error::ResponseError(std::concat!("can't extract ", $element, " from model API response.")))?
    }
}

pub fn set_i64_param(payload: &mut Value, key: &str, val: &Option<i64>) {
    if let Some(v) = val {
        payload[key] = Value::Number(Number::from_i128(*v as i128).unwrap());
    }
}

pub fn set_f64_param(payload: &mut Value, key: &str, val: &Option<f64>) {
    if let Some(v) = val {
        if v.is_finite() {
            payload[key] = Value::Number(Number::from_f64(*v).unwrap());
        }
    }
}

/// JSON-schema object for a tool's parameters.
pub fn tool_params_to_value(params: &[ToolParam]) -> Value {
    let mut required = Vec::with_capacity(params.len());

    let mut result = json!({
        "type": "object",
        "properties": {},
    });

    for param in params {
        result["properties"][&param.name] = json!({
            "type": param.data_type,
            "description": param.description,
        });
        if param.required {
            required.push(Value::String(param.name.clone()));
        }
    }

    result["required"] = Value::Array(required);

    result
}
