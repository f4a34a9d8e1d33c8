//! Line-delimited JSON-RPC 2.0 server exposing the `webfetch_clean` tool.
//!
//! One request per input line, one response per output line. Messages
//! without an `id` whose method starts with `notifications/` are consumed
//! silently.

use std::io::{BufRead, Write};

use log::{debug, error};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::fetch::Retriever;
use crate::options::{RequestConfig, DEFAULT_TIMEOUT_SECS};
use crate::process::process_url_with_rules;
use crate::selector::noise::NoiseRules;

pub const JSONRPC_VERSION: &str = "2.0";
pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "webfetch-clean";
pub const TOOL_NAME: &str = "webfetch_clean";

const TOOL_DESCRIPTION: &str = "Fetch a URL, clean HTML by removing ads/scripts/styles/navigation, and convert to markdown or cleaned HTML";
const NOTIFICATION_PREFIX: &str = "notifications/";

pub const PARSE_ERROR: i64 = -32700;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;
pub const INTERNAL_ERROR: i64 = -32603;

/// Incoming request or notification.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub jsonrpc: String,

    /// `None` when the member is absent; an explicit `null` is `Some(Null)`.
    #[serde(default, deserialize_with = "present")]
    pub id: Option<Value>,

    #[serde(default)]
    pub method: String,

    #[serde(default)]
    pub params: Option<Value>,
}

/// Wrap whatever is present, `null` included, so only a missing member
/// falls back to `None`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Request {
    fn is_notification(&self) -> bool {
        self.id.is_none() && self.method.starts_with(NOTIFICATION_PREFIX)
    }
}

/// Error object of a failed response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// Outgoing response. `id` is always present, `null` when unknown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub jsonrpc: String,
    pub id: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl Response {
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    #[must_use]
    pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            result: None,
            error: Some(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    #[serde(default)]
    name: String,

    #[serde(default)]
    arguments: Map<String, Value>,
}

#[derive(Debug, Serialize)]
struct ContentItem {
    #[serde(rename = "type")]
    kind: &'static str,
    text: String,
}

#[derive(Debug, Serialize)]
struct ToolCallResult {
    content: Vec<ContentItem>,

    #[serde(rename = "isError", skip_serializing_if = "std::ops::Not::not")]
    is_error: bool,
}

/// The RPC server, generic over how pages are retrieved.
pub struct Server<R: Retriever> {
    retriever: R,
    rules: NoiseRules,
}

impl<R: Retriever> Server<R> {
    pub fn new(retriever: R) -> Self {
        Self::with_rules(retriever, NoiseRules::default())
    }

    pub fn with_rules(retriever: R, rules: NoiseRules) -> Self {
        Self { retriever, rules }
    }

    /// Serve until `reader` is exhausted.
    ///
    /// Blank lines are skipped. A line that is not valid UTF-8 is answered
    /// with a parse error like any other malformed line. Every response is
    /// flushed as soon as it is written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] when reading or writing fails.
    pub fn run(&self, mut reader: impl BufRead, mut writer: impl Write) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }

            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim_end_matches(['\n', '\r'])),
                Err(err) => {
                    debug!("input line is not valid UTF-8: {err}");
                    Some(Response::failure(Value::Null, PARSE_ERROR, "Parse error"))
                }
            };
            let Some(response) = response else {
                continue;
            };

            match serde_json::to_string(&response) {
                Ok(encoded) => {
                    writeln!(writer, "{encoded}")?;
                    writer.flush()?;
                }
                Err(err) => error!("failed to encode response: {err}"),
            }
        }
    }

    /// Handle one raw input line. `None` for notifications.
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Option<Response> {
        let request = match parse_request(line) {
            Some(request) => request,
            None => return Some(Response::failure(Value::Null, PARSE_ERROR, "Parse error")),
        };
        self.handle(&request)
    }

    /// Dispatch a parsed request. `None` for notifications.
    #[must_use]
    pub fn handle(&self, request: &Request) -> Option<Response> {
        if request.is_notification() {
            debug!("notification {}", request.method);
            return None;
        }

        debug!("request {}", request.method);
        let id = request.id.clone().unwrap_or(Value::Null);

        let response = match request.method.as_str() {
            "initialize" => Response::success(id, initialize_result()),
            "tools/list" => Response::success(id, tools_list_result()),
            "tools/call" => self.tools_call(id, request.params.as_ref()),
            _ => Response::failure(id, METHOD_NOT_FOUND, "Method not found"),
        };
        Some(response)
    }

    fn tools_call(&self, id: Value, params: Option<&Value>) -> Response {
        let params = match params.map(ToolCallParams::deserialize) {
            Some(Ok(params)) => params,
            _ => return Response::failure(id, INVALID_PARAMS, "Invalid params"),
        };

        if params.name != TOOL_NAME {
            return Response::failure(id, INVALID_PARAMS, "Unknown tool");
        }

        let Some(config) = request_config(&params.arguments) else {
            return Response::failure(id, INVALID_PARAMS, "Missing or invalid 'url' parameter");
        };

        let result = process_url_with_rules(&config, &self.retriever, &self.rules);

        let text = match serde_json::to_string(&result) {
            Ok(text) => text,
            Err(_) => return Response::failure(id, INTERNAL_ERROR, "Failed to marshal result"),
        };

        let payload = ToolCallResult {
            content: vec![ContentItem { kind: "text", text }],
            is_error: result.is_error(),
        };

        match serde_json::to_value(payload) {
            Ok(value) => Response::success(id, value),
            Err(_) => Response::failure(id, INTERNAL_ERROR, "Failed to marshal result"),
        }
    }
}

/// Parse one line; anything but a JSON object with a sane shape is `None`.
fn parse_request(line: &str) -> Option<Request> {
    let value: Value = serde_json::from_str(line).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Build a request from tool arguments. `None` when `url` is missing,
/// not a string, or empty.
///
/// Arguments of the wrong type fall back to their defaults.
fn request_config(arguments: &Map<String, Value>) -> Option<RequestConfig> {
    let url = arguments
        .get("url")
        .and_then(Value::as_str)
        .filter(|url| !url.is_empty())?;

    let mut config = RequestConfig::new(url);

    if let Some(format) = arguments.get("output_format").and_then(Value::as_str) {
        config.format = format.to_string();
    }
    if let Some(flag) = arguments.get("preserve_main_only").and_then(Value::as_bool) {
        config.options.preserve_main_only = flag;
    }
    if let Some(flag) = arguments.get("remove_images").and_then(Value::as_bool) {
        config.options.remove_images = flag;
    }
    if let Some(timeout) = arguments.get("timeout").and_then(Value::as_f64) {
        config.timeout_secs = timeout_from_number(timeout);
    }

    Some(config)
}

/// Truncate a JSON number to whole seconds. Negative values mean no timeout.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn timeout_from_number(seconds: f64) -> u64 {
    if seconds.is_finite() && seconds > 0.0 {
        seconds.trunc() as u64
    } else {
        0
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": { "list": true, "call": true },
        },
    })
}

fn tools_list_result() -> Value {
    json!({
        "tools": [{
            "name": TOOL_NAME,
            "description": TOOL_DESCRIPTION,
            "inputSchema": {
                "type": "object",
                "properties": {
                    "url": {
                        "type": "string",
                        "description": "URL to fetch and clean (required)",
                    },
                    "output_format": {
                        "type": "string",
                        "description": "Output format: 'html' or 'markdown' (default: 'markdown')",
                        "enum": ["html", "markdown"],
                        "default": "markdown",
                    },
                    "preserve_main_only": {
                        "type": "boolean",
                        "description": "Only preserve content inside <main> or <article> tags (default: false)",
                        "default": false,
                    },
                    "remove_images": {
                        "type": "boolean",
                        "description": "Remove all images from output (default: false)",
                        "default": false,
                    },
                    "timeout": {
                        "type": "integer",
                        "description": "HTTP request timeout in seconds (default: 30)",
                        "default": DEFAULT_TIMEOUT_SECS,
                    },
                },
                "required": ["url"],
            },
        }],
    })
}
