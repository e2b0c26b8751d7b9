//! Argument normalization and result helpers shared by the tour tools.

use rmcp::model::{CallToolResult, Content, JsonObject};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::tools::ToolError;
use crate::domains::tour::request::FLAG_YES;

/// Prefix of every error result text.
pub const ERROR_PREFIX: &str = "오류: ";

/// Deserialize raw tool arguments into the tool's parameter struct.
pub fn parse_arguments<P: DeserializeOwned>(
    tool: &str,
    arguments: JsonObject,
) -> Result<P, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))
}

/// Treat empty and whitespace-only strings as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validate a Y/N flag, defaulting to `Y` and normalizing to upper case.
pub fn yn_flag(tool: &str, name: &str, value: Option<String>) -> Result<String, ToolError> {
    let Some(value) = non_blank(value) else {
        return Ok(FLAG_YES.to_string());
    };
    let upper = value.trim().to_ascii_uppercase();
    match upper.as_str() {
        "Y" | "N" => Ok(upper),
        _ => Err(ToolError::invalid_arguments(
            tool,
            format!("{name} 값은 Y 또는 N이어야 합니다 (입력값: {value})"),
        )),
    }
}

/// Create an error result with the `오류: ` prefix.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!("Tool call failed: {}", error);
    CallToolResult::error(vec![Content::text(format!("{ERROR_PREFIX}{error}"))])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Fold a tool outcome into a call result.
pub fn into_call_result(outcome: Result<String, ToolError>) -> CallToolResult {
    match outcome {
        Ok(text) => success_result(text),
        Err(e) => error_result(&e),
    }
}

/// Text of the first content block (test helper).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> String {
    match result.content.first().map(|c| &c.raw) {
        Some(rmcp::model::RawContent::Text(text)) => text.text.clone(),
        _ => String::new(),
    }
}
