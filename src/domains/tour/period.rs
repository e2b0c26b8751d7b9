//! Festival period lookup.
//!
//! Festival dates are not part of the common detail record; they come from a
//! second `detailIntro1` call. That call is best effort: any failure is logged
//! and yields no period.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use super::client::TourApi;
use super::content_type::ContentType;
use super::model::{IntroRecord, present};

static COMPACT_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})(\d{2})(\d{2})").expect("COMPACT_DATE compile failure"));

/// A festival's start and end date, already hyphenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventPeriod {
    pub start: String,
    pub end: String,
}

impl EventPeriod {
    /// Both dates must be present for a period to exist.
    pub fn from_intro(intro: &IntroRecord) -> Option<Self> {
        let start = present(&intro.event_start_date)?;
        let end = present(&intro.event_end_date)?;
        Some(Self {
            start: hyphenate_date(start),
            end: hyphenate_date(end),
        })
    }
}

/// `YYYYMMDD` to `YYYY-MM-DD` by regrouping the first eight digits.
///
/// There is no calendar validation; text without eight consecutive digits is
/// returned unchanged.
pub fn hyphenate_date(raw: &str) -> String {
    COMPACT_DATE.replace(raw, "$1-$2-$3").into_owned()
}

/// Fetch the festival period for `content_id`, swallowing any failure.
pub async fn fetch_event_period(api: &dyn TourApi, content_id: &str) -> Option<EventPeriod> {
    match api
        .detail_intro(content_id, ContentType::FestivalEvent.code())
        .await
    {
        Ok(Some(intro)) => EventPeriod::from_intro(&intro),
        Ok(None) => None,
        Err(e) => {
            warn!(content_id, "Festival period lookup failed: {}", e);
            None
        }
    }
}
