//! Model Context Protocol static resource catalog
//!
//! Exposes a single canned project file and the template describing project
//! file URIs.

use rust_mcp_sdk::schema::{
    ListResourcesResult, ReadResourceContent, ReadResourceResult, Resource, TextResourceContents,
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{param_str, to_result_value, NEXT_PAGE_CURSOR};
use crate::errors::AppError;

pub const MAIN_RS_URI: &str = "file:///project/src/main.rs";
pub const RUST_MIME_TYPE: &str = "text/x-rust";
pub const MAIN_RS_TEXT: &str = "fn main() {\\n    println!(\"Hello world!\");\\n}";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceTemplate {
    pub uri_template: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourceTemplatesResult {
    pub resource_templates: Vec<ResourceTemplate>,
}

pub fn build_resources_list() -> Vec<Resource> {
    vec![Resource {
        annotations: None,
        description: Some("Primary application entry point".to_string()),
        icons: vec![],
        meta: None,
        mime_type: Some(RUST_MIME_TYPE.to_string()),
        name: "main.rs".to_string(),
        size: None,
        title: None,
        uri: MAIN_RS_URI.to_string(),
    }]
}

pub fn build_resource_templates_list() -> Vec<ResourceTemplate> {
    vec![ResourceTemplate {
        uri_template: "file:///{path}",
        name: "Project Files",
        description: "Access files in the project directory",
        mime_type: "application/octet-stream",
    }]
}

pub fn handle_resources_list(_params: Option<Value>) -> Result<Value, AppError> {
    Ok(to_result_value(&ListResourcesResult {
        meta: None,
        next_cursor: Some(NEXT_PAGE_CURSOR.to_string()),
        resources: build_resources_list(),
    }))
}

pub fn handle_resources_read(params: Option<Value>) -> Result<Value, AppError> {
    if param_str(params.as_ref(), "uri") != Some(MAIN_RS_URI) {
        return Err(AppError::invalid_params("resource not found"));
    }

    Ok(to_result_value(&ReadResourceResult {
        contents: vec![ReadResourceContent::from(TextResourceContents {
            meta: None,
            mime_type: Some(RUST_MIME_TYPE.to_string()),
            text: MAIN_RS_TEXT.to_string(),
            uri: MAIN_RS_URI.to_string(),
        })],
        meta: None,
    }))
}

pub fn handle_resource_templates_list(_params: Option<Value>) -> Result<Value, AppError> {
    Ok(to_result_value(&ListResourceTemplatesResult {
        resource_templates: build_resource_templates_list(),
    }))
}
