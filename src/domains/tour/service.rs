//! Tour service: composes resolution, dispatch, upstream calls and rendering.
//!
//! One `TourService` is shared by every tool route. It holds only the API
//! client, so concurrent tool calls need no coordination.

use std::sync::Arc;
use tracing::{debug, info};

use super::client::{HttpTourClient, TourApi};
use super::content_type::ContentType;
use super::error::TourResult;
use super::format::{NOT_FOUND, format_area_codes, format_detail, format_tour_items};
use super::intent::resolve_keyword_intent;
use super::operation::dispatch;
use super::period::fetch_event_period;
use super::request::{DetailRequest, SearchRequest};
use crate::core::config::Config;

pub struct TourService {
    api: Arc<dyn TourApi>,
}

impl TourService {
    pub fn new(api: Arc<dyn TourApi>) -> Self {
        Self { api }
    }

    /// Build a service backed by the HTTP client described in `config`.
    pub fn from_config(config: &Config) -> TourResult<Self> {
        let client = HttpTourClient::new(config.tour_api.clone(), &config.credentials)?;
        Ok(Self::new(Arc::new(client)))
    }

    /// List area codes, optionally below `parent`.
    pub async fn area_codes(&self, parent: Option<&str>) -> TourResult<String> {
        let areas = self.api.area_codes(parent).await?;
        info!("Area code listing returned {} row(s)", areas.len());
        Ok(format_area_codes(&areas))
    }

    /// Resolve keyword intent, dispatch one list query and render it.
    pub async fn search(&self, mut request: SearchRequest) -> TourResult<String> {
        let intent = resolve_keyword_intent(self.api.as_ref(), &mut request).await?;
        debug!(?intent, ?request, "Search request after keyword resolution");

        let query = dispatch(&request);
        info!("Dispatching search to {}", query.operation());

        let items = self.api.search(&query).await?;
        info!("Search returned {} item(s)", items.len());
        Ok(format_tour_items(&items))
    }

    /// Fetch and render one content record.
    ///
    /// Festival records get a second, best-effort call for their period.
    pub async fn detail(&self, request: &DetailRequest) -> TourResult<String> {
        let record = self
            .api
            .detail_common(request)
            .await?
            .filter(|r| !r.title.is_empty());

        let Some(record) = record else {
            info!(content_id = %request.content_id, "No detail record found");
            return Ok(NOT_FOUND.to_string());
        };

        let period = if record.content_type_id == ContentType::FestivalEvent.code() {
            fetch_event_period(self.api.as_ref(), &request.content_id).await
        } else {
            None
        };

        Ok(format_detail(&record, period.as_ref()))
    }
}
