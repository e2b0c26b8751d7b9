//! TourAPI record types and response envelope decoding.
//!
//! TourAPI wraps every result set in the same envelope:
//!
//! ```json
//! {"response": {"header": {"resultCode": "0000", "resultMsg": "OK"},
//!               "body": {"items": {"item": [ ... ]}, "totalCount": 3}}}
//! ```
//!
//! The service is loose about its own encoding: an empty result set comes back
//! as `"items": ""`, a single row may be an object instead of an array, and
//! numeric-looking fields are sometimes numbers. The decoder absorbs all of
//! that so the records below only ever hold plain strings.

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::{TourError, TourResult};

/// Result code TourAPI uses for a successful call.
const RESULT_CODE_OK: &str = "0000";

// ============================================================================
// Records
// ============================================================================

/// One row of the `areaCode1` listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AreaCode {
    #[serde(default, deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}

/// One row of a list operation (area, location or keyword based).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TourItem {
    #[serde(rename = "contentid", default, deserialize_with = "lenient_string")]
    pub content_id: String,
    #[serde(rename = "contenttypeid", default, deserialize_with = "lenient_string")]
    pub content_type_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub addr1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub addr2: String,
}

/// The `detailCommon1` record. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DetailRecord {
    #[serde(rename = "contentid", default, deserialize_with = "lenient_string")]
    pub content_id: String,
    #[serde(rename = "contenttypeid", default, deserialize_with = "lenient_string")]
    pub content_type_id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub addr1: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub addr2: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tel: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub homepage: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub overview: String,
    #[serde(rename = "firstimage", default, deserialize_with = "lenient_string")]
    pub first_image: String,
}

/// The subset of the `detailIntro1` record used for festivals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IntroRecord {
    #[serde(rename = "eventstartdate", default, deserialize_with = "lenient_string")]
    pub event_start_date: String,
    #[serde(rename = "eventenddate", default, deserialize_with = "lenient_string")]
    pub event_end_date: String,
}

/// Returns `Some(value)` unless the field is empty.
pub fn present(value: &str) -> Option<&str> {
    if value.is_empty() { None } else { Some(value) }
}

/// Accepts a JSON string, number, bool or null and yields a string.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}

// ============================================================================
// Envelope
// ============================================================================

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    response: ResponseBody<T>,
}

#[derive(Debug, Deserialize)]
struct ResponseBody<T> {
    header: Option<ResponseHeader>,
    body: Option<Body<T>>,
}

#[derive(Debug, Deserialize)]
struct ResponseHeader {
    #[serde(rename = "resultCode", default, deserialize_with = "lenient_string")]
    result_code: String,
    #[serde(rename = "resultMsg", default, deserialize_with = "lenient_string")]
    result_msg: String,
}

#[derive(Debug, Deserialize)]
struct Body<T> {
    items: Option<Items<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Items<T> {
    Rows { item: Option<OneOrMany<T>> },
    Blank(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> Envelope<T> {
    fn into_items(self) -> TourResult<Vec<T>> {
        if let Some(header) = self.response.header {
            if !header.result_code.is_empty() && header.result_code != RESULT_CODE_OK {
                return Err(TourError::upstream(format!(
                    "{} (resultCode {})",
                    header.result_msg, header.result_code
                )));
            }
        }

        let items = match self.response.body.and_then(|b| b.items) {
            Some(Items::Rows {
                item: Some(OneOrMany::Many(rows)),
            }) => rows,
            Some(Items::Rows {
                item: Some(OneOrMany::One(row)),
            }) => vec![row],
            Some(Items::Rows { item: None }) | Some(Items::Blank(_)) | None => Vec::new(),
        };

        Ok(items)
    }
}

/// Decode a raw TourAPI response body into its item rows.
pub fn decode_items<T: DeserializeOwned>(bytes: &[u8]) -> TourResult<Vec<T>> {
    let envelope: Envelope<T> = serde_json::from_slice(bytes)
        .map_err(|e| TourError::upstream(format!("invalid response: {e}")))?;
    envelope.into_items()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_item_array() {
        let body = r#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
            "body":{"items":{"item":[{"code":"1","name":"서울"},{"code":"6","name":"부산"}]},
            "numOfRows":10,"pageNo":1,"totalCount":2}}}"#.as_bytes();
        let items: Vec<AreaCode> = decode_items(body).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].name, "부산");
    }

    #[test]
    fn test_decode_blank_items_as_empty() {
        let body = br#"{"response":{"header":{"resultCode":"0000","resultMsg":"OK"},
            "body":{"items":"","numOfRows":10,"pageNo":1,"totalCount":0}}}"#;
        let items: Vec<TourItem> = decode_items(body).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_decode_single_object_and_numbers() {
        let body = r#"{"response":{"body":{"items":{"item":
            {"contentid":126508,"contenttypeid":12,"title":"경복궁","addr1":"서울특별시 종로구 사직로 161"}}}}}"#.as_bytes();
        let items: Vec<TourItem> = decode_items(body).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].content_id, "126508");
        assert_eq!(items[0].content_type_id, "12");
        assert_eq!(items[0].addr2, "");
    }

    #[test]
    fn test_decode_error_result_code() {
        let body = br#"{"response":{"header":{"resultCode":"10","resultMsg":"INVALID_REQUEST_PARAMETER_ERROR"}}}"#;
        let err = decode_items::<TourItem>(body).unwrap_err();
        assert!(err.to_string().contains("INVALID_REQUEST_PARAMETER_ERROR"));
    }

    #[test]
    fn test_decode_non_json_body() {
        let body = b"<OpenAPI_ServiceResponse><cmmMsgHeader/></OpenAPI_ServiceResponse>";
        let err = decode_items::<TourItem>(body).unwrap_err();
        assert!(matches!(err, TourError::Upstream(_)));
    }

    #[test]
    fn test_present() {
        assert_eq!(present(""), None);
        assert_eq!(present("02-123-4567"), Some("02-123-4567"));
    }
}
