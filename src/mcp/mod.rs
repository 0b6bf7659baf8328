//! Model Context Protocol (MCP) server handling and JSON-RPC implementations
//!
//! Provides envelope validation, response shaping and method routing.

pub mod rpc;
pub mod server;
