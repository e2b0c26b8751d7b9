//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{GetAreaCodeTool, GetDetailCommonTool, SearchTourInfoTool};
use crate::domains::tour::TourService;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<TourService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetAreaCodeTool::create_route(service.clone()))
        .with_route(SearchTourInfoTool::create_route(service.clone()))
        .with_route(GetDetailCommonTool::create_route(service))
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::domains::tour::testing::StubTourApi;

    struct TestServer {}

    fn test_service() -> Arc<TourService> {
        Arc::new(TourService::new(Arc::new(StubTourApi::new())))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let tools = router.list_all();
        assert_eq!(tools.len(), 3);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_area_code"));
        assert!(names.contains(&"search_tour_info"));
        assert!(names.contains(&"get_detail_common"));
    }

    #[test]
    fn test_registry_matches_router() {
        let registry_names = ToolRegistry::tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
            assert!(router.has_route(name));
        }
    }
}
