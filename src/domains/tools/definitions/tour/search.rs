//! Tour information search tool.
//!
//! The arguments are normalized into a [`SearchRequest`]; the tour service
//! then lifts region and category names out of the keyword and dispatches to
//! exactly one of the location, area or keyword list operations.

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
use crate::domains::tour::{SearchRequest, TourService};

/// Parameters for `search_tour_info`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchTourInfoParams {
    /// 지역코드
    #[serde(default)]
    pub area_code: Option<String>,

    /// 관광타입(12:관광지, 14:문화시설, 15:축제공연행사, 25:여행코스, 28:레포츠, 32:숙박, 38:쇼핑, 39:음식점)
    #[serde(default)]
    pub content_type_id: Option<String>,

    /// 검색 키워드
    #[serde(default)]
    pub keyword: Option<String>,

    /// 경도 좌표
    #[serde(default)]
    pub map_x: Option<String>,

    /// 위도 좌표
    #[serde(default)]
    pub map_y: Option<String>,

    /// 거리 반경(미터)
    #[serde(default)]
    pub radius: Option<String>,
}

impl SearchTourInfoParams {
    /// Blank fields become absent; nothing else is required.
    pub fn into_request(self) -> SearchRequest {
        SearchRequest {
            area_code: non_blank(self.area_code),
            content_type_id: non_blank(self.content_type_id),
            keyword: non_blank(self.keyword),
            map_x: non_blank(self.map_x),
            map_y: non_blank(self.map_y),
            radius: non_blank(self.radius),
        }
    }
}

/// Searches tour information by area, category, keyword or location.
pub struct SearchTourInfoTool;

impl SearchTourInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_tour_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "지역, 유형, 키워드 등을 기반으로 관광 정보를 검색합니다. 지역기반, 키워드 기반, 위치기반 검색을 지원합니다.";

    #[instrument(skip_all, fields(keyword = ?params.keyword, area_code = ?params.area_code))]
    pub async fn execute(params: SearchTourInfoParams, service: &TourService) -> CallToolResult {
        info!("Tour search tool called");
        let request = params.into_request();
        into_call_result(service.search(request).await.map_err(ToolError::from))
    }

    /// Validate raw arguments, then execute.
    pub async fn call(arguments: JsonObject, service: &TourService) -> CallToolResult {
        match parse_arguments::<SearchTourInfoParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(params, service).await,
            Err(e) => error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchTourInfoParams>(),
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
