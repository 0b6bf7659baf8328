//! Axum HTTP handlers for the web server
//!
//! Provides the single JSON-RPC endpoint, answering on any path.

use axum::{
    body::to_bytes,
    extract::Request,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use crate::errors::AppError;
use crate::mcp::rpc::parse_call;
use crate::mcp::server::{dispatch, Dispatch};

/// Largest JSON-RPC body read; anything longer is answered as a parse error.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub async fn mcp_endpoint(request: Request) -> Response {
    if *request.method() != Method::POST {
        return AppError::MethodNotAllowed.into_response();
    }

    let body = match to_bytes(request.into_body(), MAX_BODY_BYTES).await {
        Ok(body) => body,
        Err(_) => return AppError::Parse.into_response(),
    };

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return AppError::Parse.into_response(),
    };

    let call = match parse_call(payload) {
        Ok(call) => call,
        Err((id, error)) => return error.into_rpc_response(id),
    };

    match dispatch(call) {
        Dispatch::Acknowledged => StatusCode::NO_CONTENT.into_response(),
        Dispatch::Replied(response) => (StatusCode::OK, Json(response)).into_response(),
        Dispatch::Failed { id, error } => error.into_rpc_response(id),
    }
}
