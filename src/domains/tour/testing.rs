//! Test double for [`TourApi`] that serves canned rows and records calls.

use async_trait::async_trait;
use std::sync::Mutex;

use super::client::TourApi;
use super::error::{TourError, TourResult};
use super::model::{AreaCode, DetailRecord, IntroRecord, TourItem};
use super::operation::{Operation, SearchQuery};
use super::request::DetailRequest;

/// One call received by the stub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub operation: Operation,
    pub params: Vec<(&'static str, String)>,
}

pub struct StubTourApi {
    areas: TourResult<Vec<AreaCode>>,
    items: TourResult<Vec<TourItem>>,
    detail: TourResult<Option<DetailRecord>>,
    intro: TourResult<Option<IntroRecord>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubTourApi {
    /// A stub that answers every call with an empty result.
    pub fn new() -> Self {
        Self {
            areas: Ok(Vec::new()),
            items: Ok(Vec::new()),
            detail: Ok(None),
            intro: Ok(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_areas(mut self, areas: Vec<AreaCode>) -> Self {
        self.areas = Ok(areas);
        self
    }

    pub fn with_area_error(mut self, msg: &str) -> Self {
        self.areas = Err(TourError::upstream(msg));
        self
    }

    pub fn with_items(mut self, items: Vec<TourItem>) -> Self {
        self.items = Ok(items);
        self
    }

    pub fn with_item_error(mut self, msg: &str) -> Self {
        self.items = Err(TourError::upstream(msg));
        self
    }

    pub fn with_detail(mut self, detail: DetailRecord) -> Self {
        self.detail = Ok(Some(detail));
        self
    }

    pub fn with_detail_error(mut self, msg: &str) -> Self {
        self.detail = Err(TourError::upstream(msg));
        self
    }

    pub fn with_intro(mut self, start: &str, end: &str) -> Self {
        self.intro = Ok(Some(IntroRecord {
            event_start_date: start.to_string(),
            event_end_date: end.to_string(),
        }));
        self
    }

    pub fn with_intro_error(mut self, msg: &str) -> Self {
        self.intro = Err(TourError::upstream(msg));
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn operations(&self) -> Vec<Operation> {
        self.calls().into_iter().map(|c| c.operation).collect()
    }

    fn record(&self, operation: Operation, params: Vec<(&'static str, String)>) {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { operation, params });
    }

    pub fn area(code: &str, name: &str) -> AreaCode {
        AreaCode {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    /// The top-level listing as the live service returns it.
    pub fn province_areas() -> Vec<AreaCode> {
        [
            ("1", "서울"),
            ("2", "인천"),
            ("3", "대전"),
            ("4", "대구"),
            ("5", "광주"),
            ("6", "부산"),
            ("7", "울산"),
            ("8", "세종특별자치시"),
            ("31", "경기도"),
            ("32", "강원특별자치도"),
            ("33", "충청북도"),
            ("34", "충청남도"),
            ("35", "경상북도"),
            ("36", "경상남도"),
            ("37", "전북특별자치도"),
            ("38", "전라남도"),
            ("39", "제주도"),
        ]
        .into_iter()
        .map(|(code, name)| Self::area(code, name))
        .collect()
    }

    pub fn item(
        content_id: &str,
        content_type_id: &str,
        title: &str,
        addr1: &str,
        addr2: &str,
    ) -> TourItem {
        TourItem {
            content_id: content_id.to_string(),
            content_type_id: content_type_id.to_string(),
            title: title.to_string(),
            addr1: addr1.to_string(),
            addr2: addr2.to_string(),
        }
    }
}

impl Default for StubTourApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TourApi for StubTourApi {
    async fn area_codes(&self, parent: Option<&str>) -> TourResult<Vec<AreaCode>> {
        let params = parent
            .map(|code| vec![("areaCode", code.to_string())])
            .unwrap_or_default();
        self.record(Operation::AreaCode, params);
        self.areas.clone()
    }

    async fn search(&self, query: &SearchQuery) -> TourResult<Vec<TourItem>> {
        self.record(query.operation(), query.params());
        self.items.clone()
    }

    async fn detail_common(&self, request: &DetailRequest) -> TourResult<Option<DetailRecord>> {
        self.record(Operation::DetailCommon, request.params());
        self.detail.clone()
    }

    async fn detail_intro(
        &self,
        content_id: &str,
        content_type_id: &str,
    ) -> TourResult<Option<IntroRecord>> {
        self.record(
            Operation::DetailIntro,
            vec![
                ("contentId", content_id.to_string()),
                ("contentTypeId", content_type_id.to_string()),
            ],
        );
        self.intro.clone()
    }
}
