//! MCP Server implementation and lifecycle management.
//!
//! The server exposes the tour tools only. Tool calls over STDIO go through
//! the rmcp `ToolRouter` built in `domains/tools/router.rs`; the HTTP
//! transport dispatches through `ToolRegistry`. Both share one
//! `TourService`.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::tool::{ToolCallContext, ToolRouter},
    model::*,
    service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::tools::definitions::tour::common::error_result;
use crate::domains::tools::{ToolError, ToolRegistry, build_tool_router};
use crate::domains::tour::{TourApi, TourService};

const INSTRUCTIONS: &str = "한국관광공사 TourAPI 기반 관광 정보 서버입니다. \
    get_area_code로 지역코드를, search_tour_info로 관광지/축제/숙박/음식점 등을, \
    get_detail_common으로 콘텐츠 상세정보를 조회합니다. \
    Korean tourism information from the Korea Tourism Organization TourAPI.";

/// The main MCP server handler.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Name-based tool dispatch.
    registry: Arc<ToolRegistry>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to TourAPI over HTTP.
    pub fn new(config: Config) -> Result<Self> {
        let service = TourService::from_config(&config)?;
        Ok(Self::with_service(config, Arc::new(service)))
    }

    /// Create a server on top of an arbitrary [`TourApi`] implementation.
    pub fn with_api(config: Config, api: Arc<dyn TourApi>) -> Self {
        Self::with_service(config, Arc::new(TourService::new(api)))
    }

    fn with_service(config: Config, service: Arc<TourService>) -> Self {
        Self {
            config: Arc::new(config),
            registry: Arc::new(ToolRegistry::new(service.clone())),
            tool_router: build_tool_router::<Self>(service),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Usage instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Failures are reported inside the result with `isError: true`.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> serde_json::Value {
        let result = self.registry.call_tool_json(name, arguments).await;
        serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        })
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _request, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tool_router.list_all(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        if !self.tool_router.has_route(&request.name) {
            return Ok(error_result(&ToolError::unknown_tool(request.name.as_ref())));
        }
        let tcc = ToolCallContext::new(self, request, context);
        self.tool_router.call(tcc).await
    }
}
