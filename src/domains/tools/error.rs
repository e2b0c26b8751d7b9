//! Tool-specific error types.

use thiserror::Error;

use crate::domains::tour::TourError;

/// Errors that can occur during tool operations.
///
/// The display text is what the client sees, after the `오류: ` prefix.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The arguments could not be turned into a typed request.
    #[error("{tool} 도구의 인자가 잘못되었습니다: {detail}")]
    InvalidArguments { tool: String, detail: String },

    /// The TourAPI side failed.
    #[error(transparent)]
    Tour(#[from] TourError),

    /// No tool with this name is registered.
    #[error("알 수 없는 도구: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            detail: detail.into(),
        }
    }

    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_texts() {
        assert_eq!(
            ToolError::invalid_arguments("get_detail_common", "missing field `contentId`")
                .to_string(),
            "get_detail_common 도구의 인자가 잘못되었습니다: missing field `contentId`"
        );
        assert_eq!(
            ToolError::unknown_tool("get_weather").to_string(),
            "알 수 없는 도구: get_weather"
        );
        assert_eq!(
            ToolError::from(TourError::upstream("status 500")).to_string(),
            "TourAPI 호출 오류: status 500"
        );
    }
}
