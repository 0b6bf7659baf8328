//! HTTP Transport layer for the Model Context Protocol
//!
//! Routes every request into the JSON-RPC endpoint.

pub mod handlers;
