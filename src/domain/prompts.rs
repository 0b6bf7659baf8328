//! Prompt templates exposed via Model Context Protocol
//!
//! Provides the `code_review` prompt, which embeds caller supplied code in a
//! single user message.

use serde::Serialize;
use serde_json::Value;

use crate::domain::{argument_text, param_str, to_result_value, NEXT_PAGE_CURSOR};
use crate::errors::AppError;

pub const CODE_REVIEW_PROMPT: &str = "code_review";

#[derive(Debug, Clone, Serialize)]
pub struct PromptArgument {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Prompt {
    pub name: &'static str,
    pub description: &'static str,
    pub arguments: Vec<PromptArgument>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPromptsResult {
    pub prompts: Vec<Prompt>,
    pub next_cursor: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PromptContent {
    Text { text: String },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
}

#[derive(Debug, Serialize)]
pub struct PromptMessage {
    pub role: Role,
    pub content: PromptContent,
}

#[derive(Debug, Serialize)]
pub struct GetPromptResult {
    pub description: &'static str,
    pub messages: Vec<PromptMessage>,
}

pub fn build_prompts_list() -> Vec<Prompt> {
    vec![Prompt {
        name: CODE_REVIEW_PROMPT,
        description: "Asks the LLM to analyze code quality and suggest improvements",
        arguments: vec![PromptArgument {
            name: "code",
            description: "The code to review",
            required: true,
        }],
    }]
}

pub fn render_code_review(code: &str) -> GetPromptResult {
    GetPromptResult {
        description: "Code review prompt",
        messages: vec![PromptMessage {
            role: Role::User,
            content: PromptContent::Text {
                text: format!("Please review this Python code:\\n {code}"),
            },
        }],
    }
}

pub fn handle_prompts_list(_params: Option<Value>) -> Result<Value, AppError> {
    Ok(to_result_value(&ListPromptsResult {
        prompts: build_prompts_list(),
        next_cursor: NEXT_PAGE_CURSOR,
    }))
}

pub fn handle_prompts_get(params: Option<Value>) -> Result<Value, AppError> {
    if param_str(params.as_ref(), "name") != Some(CODE_REVIEW_PROMPT) {
        return Err(AppError::invalid_params("prompt not found"));
    }

    let code = argument_text(params.as_ref(), "code")
        .ok_or_else(|| AppError::invalid_params("missing required argument: code"))?;

    Ok(to_result_value(&render_code_review(&code)))
}
