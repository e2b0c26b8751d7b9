//! TourAPI client.
//!
//! [`TourApi`] is the seam between the query logic and the network. The
//! production implementation, [`HttpTourClient`], issues plain GET requests
//! against the `KorService1` REST service; tests substitute a stub.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::error::{TourError, TourResult};
use super::model::{AreaCode, DetailRecord, IntroRecord, TourItem, decode_items};
use super::operation::{Operation, SearchQuery};
use super::request::DetailRequest;
use crate::core::config::{CredentialsConfig, TourApiConfig};

/// The upstream calls the tour tools need.
#[async_trait]
pub trait TourApi: Send + Sync {
    /// `areaCode1`, optionally restricted to the children of `parent`.
    async fn area_codes(&self, parent: Option<&str>) -> TourResult<Vec<AreaCode>>;

    /// Run one dispatched list query.
    async fn search(&self, query: &SearchQuery) -> TourResult<Vec<TourItem>>;

    /// `detailCommon1`; `None` when the service returns no row.
    async fn detail_common(&self, request: &DetailRequest) -> TourResult<Option<DetailRecord>>;

    /// `detailIntro1` for one content id and type.
    async fn detail_intro(
        &self,
        content_id: &str,
        content_type_id: &str,
    ) -> TourResult<Option<IntroRecord>>;
}

/// [`TourApi`] over HTTP with `reqwest`.
pub struct HttpTourClient {
    client: reqwest::Client,
    settings: TourApiConfig,
    service_key: Option<String>,
}

impl HttpTourClient {
    /// Build the client. Fails only if the HTTP client cannot be constructed.
    pub fn new(settings: TourApiConfig, credentials: &CredentialsConfig) -> TourResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| TourError::upstream(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            settings,
            service_key: credentials.tour_api_key.clone(),
        })
    }

    fn url(&self, operation: Operation) -> String {
        format!(
            "{}/{}",
            self.settings.base_url.trim_end_matches('/'),
            operation.as_str()
        )
    }

    /// Parameters sent with every call. The key is left out when unset.
    fn default_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(6);
        if let Some(key) = &self.service_key {
            params.push(("serviceKey", key.clone()));
        }
        params.push(("MobileOS", self.settings.mobile_os.clone()));
        params.push(("MobileApp", self.settings.mobile_app.clone()));
        params.push(("_type", "json".to_string()));
        params.push(("numOfRows", self.settings.num_of_rows.to_string()));
        params.push(("pageNo", self.settings.page_no.to_string()));
        params
    }

    #[instrument(skip_all, fields(operation = %operation))]
    async fn fetch<T: DeserializeOwned>(
        &self,
        operation: Operation,
        params: Vec<(&'static str, String)>,
    ) -> TourResult<Vec<T>> {
        let mut query = self.default_params();
        query.extend(params);

        debug!("Calling TourAPI");

        let response = self
            .client
            .get(self.url(operation))
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                error!("TourAPI request failed: {}", e);
                TourError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("TourAPI returned {}", status);
            return Err(TourError::upstream(format!(
                "request failed with status {status}"
            )));
        }

        let bytes = response.bytes().await?;
        debug!("TourAPI response received: {} bytes", bytes.len());

        decode_items(&bytes)
    }
}

#[async_trait]
impl TourApi for HttpTourClient {
    async fn area_codes(&self, parent: Option<&str>) -> TourResult<Vec<AreaCode>> {
        let params = parent
            .map(|code| vec![("areaCode", code.to_string())])
            .unwrap_or_default();
        self.fetch(Operation::AreaCode, params).await
    }

    async fn search(&self, query: &SearchQuery) -> TourResult<Vec<TourItem>> {
        self.fetch(query.operation(), query.params()).await
    }

    async fn detail_common(&self, request: &DetailRequest) -> TourResult<Option<DetailRecord>> {
        let rows: Vec<DetailRecord> = self.fetch(Operation::DetailCommon, request.params()).await?;
        Ok(rows.into_iter().next())
    }

    async fn detail_intro(
        &self,
        content_id: &str,
        content_type_id: &str,
    ) -> TourResult<Option<IntroRecord>> {
        let params = vec![
            ("contentId", content_id.to_string()),
            ("contentTypeId", content_type_id.to_string()),
        ];
        let rows: Vec<IntroRecord> = self.fetch(Operation::DetailIntro, params).await?;
        Ok(rows.into_iter().next())
    }
}
