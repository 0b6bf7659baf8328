use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::mcp::rpc::JsonRpcResponse;

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INVALID_PARAMS: i64 = -32602;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,
    #[error("parse error")]
    Parse,
    #[error("invalid request")]
    InvalidRequest,
    #[error("method not found: {method}")]
    MethodNotFound { method: String },
    #[error("invalid params: {message}")]
    InvalidParams { message: &'static str },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
}

impl AppError {
    pub fn method_not_found(method: impl Into<String>) -> Self {
        Self::MethodNotFound {
            method: method.into(),
        }
    }

    pub fn invalid_params(message: &'static str) -> Self {
        Self::InvalidParams { message }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Parse | Self::InvalidRequest | Self::InvalidParams { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::MethodNotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    /// JSON-RPC error code, `None` for failures reported outside the envelope.
    pub fn rpc_code(&self) -> Option<i64> {
        match self {
            Self::MethodNotAllowed => None,
            Self::Parse => Some(PARSE_ERROR),
            Self::InvalidRequest => Some(INVALID_REQUEST),
            Self::MethodNotFound { .. } => Some(METHOD_NOT_FOUND),
            Self::InvalidParams { .. } => Some(INVALID_PARAMS),
        }
    }

    pub fn rpc_message(&self) -> String {
        match self {
            Self::MethodNotAllowed => "Method not allowed".to_string(),
            Self::Parse => "Parse error".to_string(),
            Self::InvalidRequest => "Invalid Request".to_string(),
            Self::MethodNotFound { .. } => "Method not found".to_string(),
            Self::InvalidParams { message } => format!("Invalid params: {message}"),
        }
    }

    /// Renders the failure as a JSON-RPC error envelope addressed to `id`.
    pub fn into_rpc_response(self, id: Value) -> Response {
        let status = self.status();
        match self.rpc_code() {
            Some(code) => (
                status,
                Json(JsonRpcResponse::error(id, code, self.rpc_message())),
            )
                .into_response(),
            None => (
                status,
                Json(ErrorResponse {
                    error: "Method not allowed",
                }),
            )
                .into_response(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.into_rpc_response(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_failures_to_status_and_code() {
        let cases = [
            (AppError::Parse, StatusCode::BAD_REQUEST, Some(-32700)),
            (AppError::InvalidRequest, StatusCode::BAD_REQUEST, Some(-32600)),
            (
                AppError::method_not_found("foo/bar"),
                StatusCode::NOT_FOUND,
                Some(-32601),
            ),
            (
                AppError::invalid_params("tool not found"),
                StatusCode::BAD_REQUEST,
                Some(-32602),
            ),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED, None),
        ];

        for (error, status, code) in cases {
            assert_eq!(error.status(), status, "{error}");
            assert_eq!(error.rpc_code(), code, "{error}");
        }
    }

    #[test]
    fn invalid_params_message_carries_reason() {
        let error = AppError::invalid_params("resource not found");
        assert_eq!(error.rpc_message(), "Invalid params: resource not found");
    }
}
