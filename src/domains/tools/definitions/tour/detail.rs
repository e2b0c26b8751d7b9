//! Common detail lookup tool.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, into_call_result, non_blank, parse_arguments, yn_flag};
use crate::domains::tools::ToolError;
use crate::domains::tour::{DetailRequest, TourService};

/// Parameters for `get_detail_common`.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetDetailCommonParams {
    /// 관광 콘텐츠 ID
    #[serde(rename = "contentId")]
    pub content_id: String,

    /// 기본정보 조회여부(Y/N)
    #[serde(rename = "defaultYN", default)]
    pub default_yn: Option<String>,

    /// 대표이미지 조회여부(Y/N)
    #[serde(rename = "firstImageYN", default)]
    pub first_image_yn: Option<String>,

    /// 지역코드 조회여부(Y/N)
    #[serde(rename = "areacodeYN", default)]
    pub areacode_yn: Option<String>,

    /// 주소정보 조회여부(Y/N)
    #[serde(rename = "addrinfoYN", default)]
    pub addrinfo_yn: Option<String>,

    /// 좌표정보 조회여부(Y/N)
    #[serde(rename = "mapinfoYN", default)]
    pub mapinfo_yn: Option<String>,

    /// 개요정보 조회여부(Y/N)
    #[serde(rename = "overviewYN", default)]
    pub overview_yn: Option<String>,
}

impl GetDetailCommonParams {
    /// `contentId` must be non-blank; every flag defaults to `Y`.
    pub fn into_request(self) -> Result<DetailRequest, ToolError> {
        let tool = GetDetailCommonTool::NAME;
        let content_id = non_blank(Some(self.content_id))
            .ok_or_else(|| ToolError::invalid_arguments(tool, "contentId 값이 비어 있습니다"))?;

        Ok(DetailRequest {
            content_id: content_id.trim().to_string(),
            default_yn: yn_flag(tool, "defaultYN", self.default_yn)?,
            first_image_yn: yn_flag(tool, "firstImageYN", self.first_image_yn)?,
            areacode_yn: yn_flag(tool, "areacodeYN", self.areacode_yn)?,
            addrinfo_yn: yn_flag(tool, "addrinfoYN", self.addrinfo_yn)?,
            mapinfo_yn: yn_flag(tool, "mapinfoYN", self.mapinfo_yn)?,
            overview_yn: yn_flag(tool, "overviewYN", self.overview_yn)?,
        })
    }
}

/// Fetches the common detail record of one content id.
pub struct GetDetailCommonTool;

impl GetDetailCommonTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_detail_common";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "특정 관광지, 축제, 숙박 등의 상세 정보를 조회합니다. contentId를 기반으로 해당 콘텐츠의 공통 상세정보(제목, 주소, 개요 등)를 제공합니다.";

    #[instrument(skip_all, fields(content_id = %params.content_id))]
    pub async fn execute(params: GetDetailCommonParams, service: &TourService) -> CallToolResult {
        info!("Detail tool called");
        let outcome = match params.into_request() {
            Ok(request) => service.detail(&request).await.map_err(ToolError::from),
            Err(e) => Err(e),
        };
        into_call_result(outcome)
    }

    /// Validate raw arguments, then execute.
    pub async fn call(arguments: JsonObject, service: &TourService) -> CallToolResult {
        match parse_arguments::<GetDetailCommonParams>(Self::NAME, arguments) {
            Ok(params) => Self::execute(params, service).await,
            Err(e) => error_result(&e),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetDetailCommonParams>(),
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
