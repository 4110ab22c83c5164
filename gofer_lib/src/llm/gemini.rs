use crate::config::Config;
use crate::error::Error;
use crate::request::Client;
use crate::tools::ToolSpec;
use crate::val_as_str;
use serde_json::{json, Value};
use super::util::{self, tool_params_to_value, wire_to_role};
use super::{Chat, Content, FunctionCall, FunctionResponse, ModelResponse, Part, Usage};

pub struct GeminiChat {
    system_prompt: String,
    config: Config,
    client: Box<dyn Client>,
    tools: Vec<ToolSpec>,
}

impl GeminiChat {
    pub(super) fn new(config: Config, client: Box<dyn Client>, tools: Vec<ToolSpec>) -> Result<Self, Error> {
        Ok(GeminiChat {
            system_prompt: String::new(),
            config,
            client,
            tools,
        })
    }

    fn prep_payload(&self, history: &[Content]) -> Value {

        let mut payload = json!({
            "systemInstruction": {
                "parts":
                  { "text": self.system_prompt }
            }
        });

        let contents = history.iter().map(content_to_value).collect();
        payload["contents"] = Value::Array(contents);

        payload["generationConfig"] = json!({});

        util::set_i64_param(&mut payload["generationConfig"], "maxOutputTokens", &self.config.max_output_tokens);
        util::set_f64_param(&mut payload["generationConfig"], "temperature", &self.config.temperature);

        payload["tool_config"] = json!({
            "function_calling_config": {
                "mode": "AUTO"
            }
        });
        self.add_tools(&mut payload);

        payload
    }

    fn add_tools(&self, payload: &mut Value) {
        let mut arr = Vec::with_capacity(self.tools.len());
        for spec in self.tools.iter() {
            arr.push(json!({
                "name": spec.name,
                "description": spec.description,
                "parameters": tool_params_to_value(&spec.params)
            }));
        }
        payload["tools"] = json!([{
            "function_declarations": arr
        }]);
    }

    fn check_for_error(&self, response: &Value) -> Result<(), Error> {
        if let Some(error) = response.get("error") {
            let errmes = val_as_str!(error["message"], "error message").to_owned();
            return Err(Error::ModelErrorMessage(errmes));
        }
        Ok(())
    }

    fn process_response(&self, response: Value) -> Result<ModelResponse, Error> {

        self.check_for_error(&response)?;

        let usage = parse_usage(&response)?;

        let mut candidates = Vec::new();

        for candidate in response["candidates"]
            .as_array()
            .ok_or(Error::ResponseError("can't enumerate candidates in the response."))?
        {
            candidates.push(parse_content(&candidate["content"])?);
        }

        Ok(ModelResponse { candidates, usage })
    }
}

impl Chat for GeminiChat {

    fn generate(&mut self, history: &[Content]) -> Result<ModelResponse, Error> {

        let payload = self.prep_payload(history);

        let params = &[("key", self.config.api_key.as_ref())];

        let response = self.client.make_json_request(&self.config.api_url, payload, params)?;

        self.process_response(response)
    }

    fn set_system_prompt(&mut self, prompt: String) {
        self.system_prompt = prompt;
    }
}

fn content_to_value(content: &Content) -> Value {
    let parts: Vec<Value> = content.parts.iter().map(|part| match part {
        Part::Text(text) => json!({"text": text}),
        Part::FunctionCall(call) => json!({
            "functionCall": {
                "name": call.name,
                "args": call.args,
            }
        }),
        Part::FunctionResponse(result) => json!({
            "functionResponse": {
                "name": result.name,
                "response": result.response,
            }
        }),
    }).collect();

    json!({
        "role": content.role.as_wire(),
        "parts": parts,
    })
}

// A reply without a usageMetadata object is malformed: the whole run must
// abort rather than continue on it.
fn parse_usage(response: &Value) -> Result<Usage, Error> {
    let usage = response["usageMetadata"]
        .as_object()
        .ok_or(Error::ResponseError("response carries no usage metadata."))?;

    Ok(Usage {
        prompt_tokens: usage.get("promptTokenCount").and_then(Value::as_i64).unwrap_or(0),
        response_tokens: usage.get("candidatesTokenCount").and_then(Value::as_i64).unwrap_or(0),
    })
}

fn parse_content(content: &Value) -> Result<Content, Error> {
    let role = wire_to_role(val_as_str!(content["role"], "message role"))?;

    let mut parts = Vec::new();

    for part in content["parts"]
        .as_array()
        .ok_or(Error::ResponseError("unexpected answer format, can't enumerate message parts."))?
    {
        if part["functionCall"].is_object() {
            let name = val_as_str!(part["functionCall"]["name"], "function name").to_owned();
            let args = part["functionCall"]["args"]
                .as_object()
                .cloned()
                .ok_or(Error::ResponseError("can't enumerate function call arguments."))?;

            parts.push(Part::FunctionCall(FunctionCall { name, args }));

        } else if part["functionResponse"].is_object() {
            let name = val_as_str!(part["functionResponse"]["name"], "function name").to_owned();
            let response = part["functionResponse"]["response"]
                .as_object()
                .cloned()
                .ok_or(Error::ResponseError("can't read function response content."))?;

            parts.push(Part::FunctionResponse(FunctionResponse { name, response }));

        } else if part["text"].is_string() {
            let text = part["text"].as_str().unwrap().to_owned();
            parts.push(Part::Text(text));
        } else {
            return Err(Error::ResponseError("unexpected message part type."));
        }
    }

    Ok(Content { role, parts })
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::stub::StubClient;
    use crate::llm::Role;
    use crate::tools::{ParamType, ToolParam};
    use serde_json::Map;

    fn test_config() -> Config {
        Config {
            model: "<model-name>".to_owned(),
            api_key: "<api-key>".to_owned(),
            api_url: "<api-uri>".to_owned(),
            max_output_tokens: Some(2048),
            temperature: Some(0.2),
        }
    }

    fn base_payload(sys_msg: &str, contents: Value, declarations: Value) -> Value {
        json!({
            "systemInstruction": {
                "parts": { "text": sys_msg }
            },
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": 2048,
                "temperature": 0.2,
            },
            "tool_config": {
                "function_calling_config": {
                    "mode": "AUTO"
                }
            },
            "tools": [
                {
                    "function_declarations": declarations
                }
            ]
        })
    }

    #[test]
    fn test_text_response() {
        let config = test_config();

        let sys_msg = "test sys message";
        let user_msg = "test user message";
        let model_msg = "test resp message";

        let history = vec![Content::user_text(user_msg.to_owned())];

        let expected_payload = base_payload(
            sys_msg,
            json!([
                {"role": "user", "parts": [{"text": user_msg}]},
            ]),
            json!([]),
        );

        let response_body = json!({
            "candidates": [
              {
                "content": {
                  "parts": [
                    {
                      "text": model_msg
                    }
                  ],
                  "role": "model"
                },
                "finishReason": "STOP"
              }
            ],
            "modelVersion": config.model,
            "usageMetadata": {
              "candidatesTokenCount": 10,
              "promptTokenCount": 1744,
              "totalTokenCount": 1754
            }
        });

        let client = Box::new(StubClient::new(
            config.api_url.clone(),
            vec![("key".to_owned(), config.api_key.clone())],
            expected_payload,
            response_body,
        ));

        let mut chat = GeminiChat::new(config, client, vec![]).expect("chat initialization");
        chat.set_system_prompt(sys_msg.to_owned());

        let response = chat.generate(&history).expect("receive response");

        assert_eq!(response.candidates.len(), 1);
        assert_eq!(response.candidates[0].role, Role::Model);
        assert_eq!(response.text(), model_msg);
        assert!(response.function_calls().is_empty());
        assert_eq!(response.usage.prompt_tokens, 1744);
        assert_eq!(response.usage.response_tokens, 10);
    }

    #[test]
    fn test_tool_call_response() {
        let config = test_config();

        let tools = vec![
            ToolSpec {
                name: "read_file".to_owned(),
                description: "Reads a file.".to_owned(),
                params: vec![
                    ToolParam {
                        name: "file_path".to_string(),
                        description: "path to the file".to_string(),
                        data_type: ParamType::String,
                        required: true,
                    },
                ],
            },
        ];

        let sys_msg = "test sys message";
        let user_msg = "show me main.rs";

        let history = vec![Content::user_text(user_msg.to_owned())];

        let expected_payload = base_payload(
            sys_msg,
            json!([
                {"role": "user", "parts": [{"text": user_msg}]},
            ]),
            json!([{
                "name": "read_file",
                "description": "Reads a file.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "file_path": {
                            "type": "string",
                            "description": "path to the file"
                        },
                    },
                    "required": ["file_path"],
                }
            }]),
        );

        let response_body = json!({
            "candidates": [
              {
                "content": {
                    "parts": [
                      {
                        "functionCall": {
                          "args": {
                            "file_path": "main.rs"
                          },
                          "name": "read_file"
                        }
                      }
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
              }
            ],
            "usageMetadata": {
              "candidatesTokenCount": 7,
              "promptTokenCount": 120,
              "totalTokenCount": 127
            }
        });

        let client = Box::new(StubClient::new(
            config.api_url.clone(),
            vec![("key".to_owned(), config.api_key.clone())],
            expected_payload,
            response_body,
        ));

        let mut chat = GeminiChat::new(config, client, tools).expect("chat initialization");
        chat.set_system_prompt(sys_msg.to_owned());

        let response = chat.generate(&history).expect("receive response");

        let calls = response.function_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].name, "read_file");
        assert_eq!(calls[0].args.get("file_path"), Some(&Value::String("main.rs".to_owned())));
        assert!(response.text().is_empty());
    }

    #[test]
    fn test_tool_results_in_payload() {
        let config = test_config();

        let sys_msg = "test sys message";

        let mut result = Map::new();
        result.insert("result".to_owned(), Value::String("file contents".to_owned()));

        let history = vec![
            Content::user_text("show me main.rs".to_owned()),
            Content {
                role: Role::Model,
                parts: vec![Part::FunctionCall(FunctionCall {
                    name: "read_file".to_owned(),
                    args: {
                        let mut args = Map::new();
                        args.insert("file_path".to_owned(), Value::String("main.rs".to_owned()));
                        args
                    },
                })],
            },
            Content::tool_results(vec![FunctionResponse {
                name: "read_file".to_owned(),
                response: result,
            }]),
        ];

        let expected_payload = base_payload(
            sys_msg,
            json!([
                {"role": "user", "parts": [{"text": "show me main.rs"}]},
                {"role": "model", "parts": [{
                    "functionCall": {
                        "name": "read_file",
                        "args": {"file_path": "main.rs"}
                    }
                }]},
                {"role": "user", "parts": [{
                    "functionResponse": {
                        "name": "read_file",
                        "response": {"result": "file contents"}
                    }
                }]},
            ]),
            json!([]),
        );

        let response_body = json!({
            "candidates": [
              {
                "content": {
                  "parts": [{"text": "done"}],
                  "role": "model"
                }
              }
            ],
            "usageMetadata": {
              "candidatesTokenCount": 2,
              "promptTokenCount": 40,
              "totalTokenCount": 42
            }
        });

        let client = Box::new(StubClient::new(
            config.api_url.clone(),
            vec![("key".to_owned(), config.api_key.clone())],
            expected_payload,
            response_body,
        ));

        let mut chat = GeminiChat::new(config, client, vec![]).expect("chat initialization");
        chat.set_system_prompt(sys_msg.to_owned());

        let response = chat.generate(&history).expect("receive response");
        assert_eq!(response.text(), "done");
    }

    #[test]
    fn test_provider_error_response() {
        let config = test_config();

        let errmsg = "API key not valid. Please pass a valid API key.";

        let history = vec![Content::user_text("hello".to_owned())];

        let expected_payload = base_payload(
            "",
            json!([
                {"role": "user", "parts": [{"text": "hello"}]},
            ]),
            json!([]),
        );

        let response_body = json!({
            "error": {
                "code": 400,
                "message": errmsg,
                "status": "INVALID_ARGUMENT"
            }
        });

        let client = Box::new(StubClient::new(
            config.api_url.clone(),
            vec![("key".to_owned(), config.api_key.clone())],
            expected_payload,
            response_body,
        ));

        let mut chat = GeminiChat::new(config, client, vec![]).expect("chat initialization");

        let response = chat.generate(&history);

        if let Err(Error::ModelErrorMessage(msg)) = response {
            assert_eq!(msg, errmsg);
        } else {
            panic!("type mismatch");
        }
    }

    #[test]
    fn test_missing_usage_metadata() {
        let config = test_config();

        let history = vec![Content::user_text("hello".to_owned())];

        let expected_payload = base_payload(
            "",
            json!([
                {"role": "user", "parts": [{"text": "hello"}]},
            ]),
            json!([]),
        );

        // Well-formed candidates but no usageMetadata object.
        let response_body = json!({
            "candidates": [
              {
                "content": {
                  "parts": [{"text": "hi"}],
                  "role": "model"
                }
              }
            ]
        });

        let client = Box::new(StubClient::new(
            config.api_url.clone(),
            vec![("key".to_owned(), config.api_key.clone())],
            expected_payload,
            response_body,
        ));

        let mut chat = GeminiChat::new(config, client, vec![]).expect("chat initialization");

        let response = chat.generate(&history);

        if let Err(Error::ResponseError(msg)) = response {
            assert_eq!(msg, "response carries no usage metadata.");
        } else {
            panic!("type mismatch");
        }
    }
}
