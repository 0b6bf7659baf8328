//! The central Model Context Protocol engine
//!
//! Provides the method table, the `initialize` and `ping` lifecycle methods,
//! and the audit trail around every dispatched call.

use rust_mcp_sdk::schema::{
    Implementation, InitializeResult, ServerCapabilities, ServerCapabilitiesPrompts,
    ServerCapabilitiesResources, ServerCapabilitiesTools,
};
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::domain::{prompts, resources, to_result_value, tools};
use crate::errors::AppError;
use crate::mcp::rpc::{JsonRpcResponse, RpcCall};

pub const SUPPORTED_PROTOCOL_VERSION: &str = "2025-03-26";
pub const SERVER_NAME: &str = "CloudflareMCP";
pub const SERVER_VERSION: &str = "1.0.0";
pub const SERVER_INSTRUCTIONS: &str = "Welcome to the Cloudflare MCP Server";

/// A method implementation: params in, result value or typed failure out.
pub type MethodHandler = fn(Option<Value>) -> Result<Value, AppError>;

pub fn lookup_method(method: &str) -> Option<MethodHandler> {
    let handler: MethodHandler = match method {
        "initialize" => handle_initialize,
        "ping" => handle_ping,
        "resources/list" => resources::handle_resources_list,
        "resources/read" => resources::handle_resources_read,
        "resources/templates/list" => resources::handle_resource_templates_list,
        "prompts/list" => prompts::handle_prompts_list,
        "prompts/get" => prompts::handle_prompts_get,
        "tools/list" => tools::handle_tools_list,
        "tools/call" => tools::handle_tools_call,
        _ => return None,
    };
    Some(handler)
}

/// Outcome of a validated call as seen by the transport.
#[derive(Debug)]
pub enum Dispatch {
    /// Notification, acknowledged without a body.
    Acknowledged,
    Replied(JsonRpcResponse),
    Failed { id: Value, error: AppError },
}

pub fn dispatch(call: RpcCall) -> Dispatch {
    let RpcCall { id, method, params } = call;

    let Some(id) = id else {
        debug!(method = %method, "notification acknowledged");
        return Dispatch::Acknowledged;
    };

    let audit_params = redact_audit_params(params.as_ref());
    let outcome = match lookup_method(&method) {
        Some(handler) => handler(params),
        None => Err(AppError::method_not_found(method.as_str())),
    };

    info!(
        method = %method,
        params = %audit_params,
        outcome = if outcome.is_ok() { "success" } else { "failure" },
        "mcp action audited"
    );

    match outcome {
        Ok(result) => Dispatch::Replied(JsonRpcResponse::result(id, result)),
        Err(error) => Dispatch::Failed { id, error },
    }
}

pub fn handle_initialize(_params: Option<Value>) -> Result<Value, AppError> {
    let initialize_result = InitializeResult {
        server_info: Implementation {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
            title: None,
            description: None,
            icons: vec![],
            website_url: None,
        },
        capabilities: ServerCapabilities {
            logging: Some(Map::new()),
            prompts: Some(ServerCapabilitiesPrompts {
                list_changed: Some(true),
            }),
            resources: Some(ServerCapabilitiesResources {
                subscribe: Some(true),
                list_changed: Some(true),
            }),
            tools: Some(ServerCapabilitiesTools {
                list_changed: Some(true),
            }),
            ..Default::default()
        },
        protocol_version: SUPPORTED_PROTOCOL_VERSION.to_string(),
        instructions: Some(SERVER_INSTRUCTIONS.to_string()),
        meta: None,
    };

    Ok(to_result_value(&initialize_result))
}

pub fn handle_ping(_params: Option<Value>) -> Result<Value, AppError> {
    Ok(json!({}))
}

pub fn redact_audit_params(params: Option<&Value>) -> Value {
    params.map(redact_audit_value).unwrap_or(Value::Null)
}

pub fn redact_audit_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, item)| {
                    if is_sensitive_key(key) {
                        (key.clone(), Value::String("[REDACTED]".to_string()))
                    } else {
                        (key.clone(), redact_audit_value(item))
                    }
                })
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(redact_audit_value).collect()),
        _ => value.clone(),
    }
}

pub fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.trim().to_ascii_lowercase();
    matches!(
        normalized.as_str(),
        "authorization" | "bearer" | "api_key" | "apikey"
    ) || normalized.contains("token")
        || normalized.contains("secret")
        || normalized.contains("password")
        || normalized.contains("credential")
}
