//! Keyword intent resolution.
//!
//! Agents tend to put everything into the keyword ("서울 축제", "제주 음식점
//! 흑돼지"). When no explicit area code was given, a region name and a
//! category name embedded in the keyword are lifted into the matching
//! filters and removed from the residual keyword text.

use tracing::debug;

use super::area::{AreaCodeResolver, find_region};
use super::client::TourApi;
use super::content_type::ContentType;
use super::error::TourResult;
use super::request::SearchRequest;

/// What was lifted out of the keyword.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIntent {
    /// Region name whose area code was adopted.
    pub region: Option<&'static str>,
    /// Category adopted from the keyword.
    pub content_type: Option<ContentType>,
}

/// Narrow `request` in place from its keyword.
///
/// Only runs when a keyword is present and no area code was supplied. The
/// first region name found (in fixed order) is resolved; the scan stops there
/// even if that name has no upstream code. The category scan runs regardless
/// and overrides any category code already set.
pub async fn resolve_keyword_intent(
    api: &dyn TourApi,
    request: &mut SearchRequest,
) -> TourResult<KeywordIntent> {
    let mut intent = KeywordIntent::default();

    if request.area_code.is_some() {
        return Ok(intent);
    }
    let Some(mut keyword) = request.keyword().map(str::to_string) else {
        return Ok(intent);
    };

    if let Some(region) = find_region(&keyword) {
        match AreaCodeResolver::new(api).resolve(region).await? {
            Some(code) => {
                request.area_code = Some(code);
                keyword = remove_first(&keyword, region);
                intent.region = Some(region);
            }
            None => debug!(region, "Region named in keyword has no area code"),
        }
    }

    if let Some((name, content_type)) = ContentType::find_in(&keyword) {
        request.content_type_id = Some(content_type.code().to_string());
        keyword = remove_first(&keyword, name);
        intent.content_type = Some(content_type);
    }

    request.keyword = Some(keyword);
    Ok(intent)
}

/// Remove the first occurrence of `needle` and trim what is left.
fn remove_first(text: &str, needle: &str) -> String {
    text.replacen(needle, "", 1).trim().to_string()
}
