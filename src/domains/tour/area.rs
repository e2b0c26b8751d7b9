//! Area name to area code resolution.

use tracing::debug;

use super::client::TourApi;
use super::error::{TourError, TourResult};

/// Province-level region names recognised inside search keywords, in scan
/// order. Only the first name found in a keyword is ever considered.
pub const REGION_NAMES: [&str; 17] = [
    "서울", "부산", "대구", "인천", "광주", "대전", "울산", "세종", "경기", "강원", "충북", "충남",
    "전북", "전남", "경북", "경남", "제주",
];

/// Resolves human area names against the top-level `areaCode1` listing.
pub struct AreaCodeResolver<'a> {
    api: &'a dyn TourApi,
}

impl<'a> AreaCodeResolver<'a> {
    pub fn new(api: &'a dyn TourApi) -> Self {
        Self { api }
    }

    /// Code of the first listed area whose name contains `area_name`.
    ///
    /// Matching is by substring, so "서울" finds "서울특별시". Upstream
    /// faults surface as [`TourError::Resolution`].
    pub async fn resolve(&self, area_name: &str) -> TourResult<Option<String>> {
        let areas = self
            .api
            .area_codes(None)
            .await
            .map_err(|e| TourError::resolution(&e))?;

        let code = areas
            .into_iter()
            .find(|area| area.name.contains(area_name))
            .map(|area| area.code);

        debug!(area_name, code = ?code, "Resolved area name");
        Ok(code)
    }
}

/// First region name (in [`REGION_NAMES`] order) contained in `text`.
pub fn find_region(text: &str) -> Option<&'static str> {
    REGION_NAMES.into_iter().find(|region| text.contains(*region))
}
