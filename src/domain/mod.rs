//! Canned MCP catalog exposed over the protocol
//!
//! Provides the static resources, prompts and tools answered by the stub
//! server, each as a pure function of the request params.

use serde::Serialize;
use serde_json::Value;

pub mod prompts;
pub mod resources;
pub mod tools;

pub const NEXT_PAGE_CURSOR: &str = "next-page-cursor";

pub fn to_result_value<T: Serialize>(result: &T) -> Value {
    serde_json::to_value(result).expect("catalog result serialization")
}

/// String member of the request params, `None` when absent or not a string.
pub fn param_str<'a>(params: Option<&'a Value>, key: &str) -> Option<&'a str> {
    params.and_then(|params| params.get(key)).and_then(Value::as_str)
}

/// `params.arguments.<name>` as display text. Strings are taken verbatim,
/// other JSON values are rendered as JSON. `null` counts as absent.
pub fn argument_text(params: Option<&Value>, name: &str) -> Option<String> {
    let value = params
        .and_then(|params| params.get("arguments"))
        .and_then(|arguments| arguments.get(name))
        .filter(|value| !value.is_null())?;

    Some(match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn argument_text_renders_scalars_and_skips_null() {
        let params = json!({
            "arguments": {"text": "Paris", "zip": 75001, "flag": true, "none": null}
        });

        assert_eq!(argument_text(Some(&params), "text").as_deref(), Some("Paris"));
        assert_eq!(argument_text(Some(&params), "zip").as_deref(), Some("75001"));
        assert_eq!(argument_text(Some(&params), "flag").as_deref(), Some("true"));
        assert_eq!(argument_text(Some(&params), "none"), None);
        assert_eq!(argument_text(Some(&params), "missing"), None);
        assert_eq!(argument_text(Some(&json!({"arguments": "x"})), "text"), None);
        assert_eq!(argument_text(None, "text"), None);
    }

    #[test]
    fn param_str_ignores_non_string_members() {
        let params = json!({"uri": "file:///a", "_meta": 5});

        assert_eq!(param_str(Some(&params), "uri"), Some("file:///a"));
        assert_eq!(param_str(Some(&params), "_meta"), None);
        assert_eq!(param_str(None, "uri"), None);
    }
}
