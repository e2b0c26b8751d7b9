//! Tool Registry - central registration and dispatch by name.
//!
//! The rmcp router handles STDIO calls; the registry serves the HTTP
//! transport and anything else that only has a tool name and raw arguments.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use std::sync::Arc;
use tracing::warn;

use super::ToolError;
use super::definitions::tour::common::error_result;
use super::definitions::{GetAreaCodeTool, GetDetailCommonTool, SearchTourInfoTool};
use crate::domains::tour::TourService;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    service: Arc<TourService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<TourService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetAreaCodeTool::NAME,
            SearchTourInfoTool::NAME,
            GetDetailCommonTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetAreaCodeTool::to_tool(),
            SearchTourInfoTool::to_tool(),
            GetDetailCommonTool::to_tool(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// An unknown name yields an error result, never a protocol error.
    pub async fn call_tool(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        match name {
            GetAreaCodeTool::NAME => GetAreaCodeTool::call(arguments, &self.service).await,
            SearchTourInfoTool::NAME => SearchTourInfoTool::call(arguments, &self.service).await,
            GetDetailCommonTool::NAME => GetDetailCommonTool::call(arguments, &self.service).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                error_result(&ToolError::unknown_tool(name))
            }
        }
    }

    /// Dispatch a call whose arguments arrived as arbitrary JSON.
    ///
    /// `null` counts as no arguments; any other non-object is rejected.
    pub async fn call_tool_json(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        match arguments {
            serde_json::Value::Object(map) => self.call_tool(name, map).await,
            serde_json::Value::Null => self.call_tool(name, JsonObject::new()).await,
            other => error_result(&ToolError::invalid_arguments(
                name,
                format!("arguments must be a JSON object, got {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::definitions::tour::common::result_text;
    use crate::domains::tour::operation::Operation;
    use crate::domains::tour::testing::StubTourApi;

    fn registry() -> (ToolRegistry, Arc<StubTourApi>) {
        let api = Arc::new(StubTourApi::new().with_areas(StubTourApi::province_areas()));
        let service = Arc::new(TourService::new(api.clone()));
        (ToolRegistry::new(service), api)
    }

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(
            names,
            vec!["get_area_code", "search_tour_info", "get_detail_common"]
        );
    }

    #[test]
    fn test_metadata_matches_names() {
        let tools = ToolRegistry::get_all_tools();
        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert_eq!(names, ToolRegistry::tool_names());
        assert!(tools.iter().all(|t| t.description.is_some()));
    }

    #[tokio::test]
    async fn test_registry_dispatches_by_name() {
        let (registry, api) = registry();

        let result = registry.call_tool("get_area_code", JsonObject::new()).await;

        assert_eq!(result.is_error, Some(false));
        assert!(result_text(&result).starts_with("[1] 서울\n"));
        assert_eq!(api.operations(), vec![Operation::AreaCode]);
    }

    #[tokio::test]
    async fn test_registry_call_unknown() {
        let (registry, api) = registry();

        let result = registry.call_tool("get_weather", JsonObject::new()).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "오류: 알 수 없는 도구: get_weather");
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_registry_json_arguments() {
        let (registry, api) = registry();

        let result = registry
            .call_tool_json("search_tour_info", serde_json::Value::Null)
            .await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(api.operations(), vec![Operation::AreaBasedList]);

        let result = registry
            .call_tool_json("search_tour_info", serde_json::json!(["서울"]))
            .await;
        assert_eq!(result.is_error, Some(true));
        assert!(
            result_text(&result)
                .starts_with("오류: search_tour_info 도구의 인자가 잘못되었습니다: ")
        );
    }
}
