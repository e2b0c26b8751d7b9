//! Area code listing tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, into_call_result, non_blank, parse_arguments};
use crate::domains::tools::ToolError;
use crate::domains::tour::TourService;

/// Parameters for `get_area_code`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetAreaCodeParams {
    /// 상위 지역코드 (선택)
    #[serde(rename = "areaCode", default)]
    pub area_code: Option<String>,
}

/// Lists provinces, or the districts below one when a parent code is given.
pub struct GetAreaCodeTool;

impl GetAreaCodeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_area_code";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "한국의 지역코드를 조회합니다. 상위 지역코드를 입력하면 하위 지역 목록을 반환하고, 입력하지 않으면 광역시/도 목록을 반환합니다.";

    #[instrument(skip_all, fields(area_code = ?params.area_code))]
    pub async fn execute(params: GetAreaCodeParams, service: &TourService) -> CallToolResult {
        info!("Area code tool called");
        let parent = non_blank(params.area_code);
        into_call_result(
            service
                .area_codes(parent.as_deref())
                .await
                .map_err(ToolError::from),
        )
    }

    /// Validate raw arguments, then execute.
    pub async fn call(arguments: JsonObject, service: &TourService) -> CallToolResult {
        match parse_arguments::<GetAreaCodeParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(params, service).await,
            Err(e) => error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetAreaCodeParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>(service: Arc<TourService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let service = service.clone();
            async move { Ok(Self::call(args, &service).await) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use crate::domains::tour::operation::Operation;
    use crate::domains::tour::testing::StubTourApi;

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().cloned().unwrap_or_default()
    }

    #[tokio::test]
    async fn test_top_level_listing() {
        let api = Arc::new(StubTourApi::new().with_areas(vec![
            StubTourApi::area("1", "서울"),
            StubTourApi::area("2", "인천"),
        ]));
        let service = TourService::new(api.clone());

        let result = GetAreaCodeTool::call(JsonObject::new(), &service).await;

        assert_eq!(result.is_error, Some(false));
        assert_eq!(result_text(&result), "[1] 서울\n[2] 인천");
        assert_eq!(api.operations(), vec![Operation::AreaCode]);
        assert!(api.calls()[0].params.is_empty());
    }

    #[tokio::test]
    async fn test_blank_parent_is_ignored() {
        let api = Arc::new(StubTourApi::new());
        let service = TourService::new(api.clone());

        let result =
            GetAreaCodeTool::call(args(serde_json::json!({ "areaCode": " " })), &service).await;

        assert_eq!(result_text(&result), "조회된 지역코드가 없습니다.");
        assert!(api.calls()[0].params.is_empty());
    }

    #[tokio::test]
    async fn test_non_string_area_code_is_rejected() {
        let api = Arc::new(StubTourApi::new());
        let service = TourService::new(api.clone());

        let result =
            GetAreaCodeTool::call(args(serde_json::json!({ "areaCode": 1 })), &service).await;

        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("오류: get_area_code 도구의 인자가 잘못되었습니다: "));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_upstream_fault_becomes_error_result() {
        let service = TourService::new(Arc::new(StubTourApi::new().with_area_error("status 503")));

        let result = GetAreaCodeTool::call(JsonObject::new(), &service).await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "오류: TourAPI 호출 오류: status 503");
    }

    #[test]
    fn test_schema_uses_wire_names() {
        let tool = GetAreaCodeTool::to_tool();
        let properties = &tool.input_schema["properties"];
        assert_eq!(
            properties["areaCode"]["description"],
            serde_json::json!("상위 지역코드 (선택)")
        );
    }
}
