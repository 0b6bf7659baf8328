//! Interactive tools exposed via Model Context Protocol
//!
//! Provides the `get_weather` tool, answered with a fixed placeholder forecast
//! for whatever location the caller names.

use rust_mcp_sdk::{
    macros,
    schema::{CallToolResult, ContentBlock, ListToolsResult, TextContent, Tool},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{argument_text, param_str, to_result_value, NEXT_PAGE_CURSOR};
use crate::errors::AppError;

pub const GET_WEATHER_TOOL: &str = "get_weather";

#[macros::mcp_tool(
    name = "get_weather",
    description = "Get current weather information for a location"
)]
#[derive(Debug, Deserialize, Serialize, macros::JsonSchema)]
pub struct GetWeatherTool {
    /// City name or zip code
    pub location: String,
}

pub fn build_tools_list() -> Vec<Tool> {
    vec![GetWeatherTool::tool()]
}

pub fn weather_report(location: &str) -> String {
    format!(
        "Current weather in {location}:\\n Temperature: 72°F\\n Conditions: Partly cloudy"
    )
}

pub fn handle_tools_list(_params: Option<Value>) -> Result<Value, AppError> {
    Ok(to_result_value(&ListToolsResult {
        meta: None,
        next_cursor: Some(NEXT_PAGE_CURSOR.to_string()),
        tools: build_tools_list(),
    }))
}

pub fn handle_tools_call(params: Option<Value>) -> Result<Value, AppError> {
    if param_str(params.as_ref(), "name") != Some(GET_WEATHER_TOOL) {
        return Err(AppError::invalid_params("tool not found"));
    }

    let location = argument_text(params.as_ref(), "location")
        .ok_or_else(|| AppError::invalid_params("missing required argument: location"))?;

    Ok(to_result_value(&CallToolResult {
        content: vec![ContentBlock::from(TextContent::new(
            weather_report(&location),
            None,
            None,
        ))],
        is_error: Some(false),
        meta: None,
        structured_content: None,
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn lists_weather_tool_with_input_schema() {
        let result = handle_tools_list(None).expect("tools list");

        assert_eq!(result["nextCursor"], "next-page-cursor");
        let tool = &result["tools"][0];
        assert_eq!(tool["name"], "get_weather");
        assert_eq!(
            tool["description"],
            "Get current weather information for a location"
        );
        assert_eq!(tool["inputSchema"]["type"], "object");
        assert_eq!(
            tool["inputSchema"]["properties"]["location"]["type"],
            "string"
        );
        assert_eq!(tool["inputSchema"]["required"], json!(["location"]));
    }

    #[test]
    fn weather_call_embeds_location() {
        let result = handle_tools_call(Some(json!({
            "name": "get_weather",
            "arguments": { "location": "Paris" }
        })))
        .expect("weather call");

        assert_eq!(result["isError"], false);
        assert_eq!(result["content"][0]["type"], "text");
        assert_eq!(
            result["content"][0]["text"],
            r"Current weather in Paris:\n Temperature: 72°F\n Conditions: Partly cloudy"
        );
    }

    #[test]
    fn weather_call_renders_numeric_location() {
        let result = handle_tools_call(Some(json!({
            "name": "get_weather",
            "arguments": { "location": 75001 }
        })))
        .expect("weather call");

        assert_eq!(
            result["content"][0]["text"],
            r"Current weather in 75001:\n Temperature: 72°F\n Conditions: Partly cloudy"
        );
    }

    #[test]
    fn unknown_tool_is_invalid_params() {
        let error = handle_tools_call(Some(json!({ "name": "get_time", "arguments": {} })))
            .expect_err("unknown tool");
        assert_eq!(error.rpc_message(), "Invalid params: tool not found");

        let error = handle_tools_call(Some(json!({ "arguments": {} }))).expect_err("no name");
        assert_eq!(error.rpc_message(), "Invalid params: tool not found");
    }

    #[test]
    fn weather_call_requires_location() {
        for params in [
            json!({ "name": "get_weather" }),
            json!({ "name": "get_weather", "arguments": {} }),
            json!({ "name": "get_weather", "arguments": { "location": null } }),
            json!({ "name": "get_weather", "arguments": "x" }),
        ] {
            let error = handle_tools_call(Some(params)).expect_err("missing location");
            assert_eq!(
                error.rpc_message(),
                "Invalid params: missing required argument: location"
            );
        }
    }
}
