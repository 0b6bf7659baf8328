use axum::{middleware, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod mcp;

pub fn build_app() -> Router {
    Router::new()
        .fallback(http::handlers::mcp_endpoint)
        .layer(middleware::from_fn(logging::request_logging_middleware))
}
