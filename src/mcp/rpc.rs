//! JSON-RPC 2.0 envelope representations
//!
//! Provides request envelope validation and the response envelope shared by
//! results and errors.

use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

pub const JSONRPC_VERSION: &str = "2.0";

/// A validated call. `id` is `None` for notifications.
#[derive(Debug, Clone, PartialEq)]
pub struct RpcCall {
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON truthiness: `null`, `false`, zero and the empty string are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Method name used for routing. Non-string methods keep their JSON text,
/// which never matches a routed name.
fn method_name(method: Value) -> String {
    match method {
        Value::String(name) => name,
        other => other.to_string(),
    }
}

/// Validates the envelope of an already parsed payload.
///
/// On failure the error is paired with the id to echo back, `null` when the
/// payload carried none.
pub fn parse_call(payload: Value) -> Result<RpcCall, (Value, AppError)> {
    let Value::Object(mut fields) = payload else {
        return Err((Value::Null, AppError::InvalidRequest));
    };

    let id = fields.remove("id").filter(|id| !id.is_null());
    let version_ok = fields.get("jsonrpc").and_then(Value::as_str) == Some(JSONRPC_VERSION);
    let method = fields.remove("method").filter(is_truthy);

    match (version_ok, method) {
        (true, Some(method)) => Ok(RpcCall {
            id,
            method: method_name(method),
            params: fields.remove("params").filter(|params| !params.is_null()),
        }),
        _ => Err((id.unwrap_or(Value::Null), AppError::InvalidRequest)),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(Value),
    Error(RpcError),
}

#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl JsonRpcResponse {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: Outcome::Result(result),
        }
    }

    pub fn error(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            outcome: Outcome::Error(RpcError {
                code,
                message: message.into(),
            }),
        }
    }
}
