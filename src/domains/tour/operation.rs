//! Upstream operations and search dispatch.

use super::request::SearchRequest;

/// Radius in meters used for location search when none is given.
pub const DEFAULT_RADIUS: &str = "2000";

/// The TourAPI operations this server calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AreaCode,
    AreaBasedList,
    LocationBasedList,
    SearchKeyword,
    DetailCommon,
    DetailIntro,
}

impl Operation {
    /// Path segment under the service base URL.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AreaCode => "areaCode1",
            Self::AreaBasedList => "areaBasedList1",
            Self::LocationBasedList => "locationBasedList1",
            Self::SearchKeyword => "searchKeyword1",
            Self::DetailCommon => "detailCommon1",
            Self::DetailIntro => "detailIntro1",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exactly one upstream list query, chosen by [`dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchQuery {
    LocationBased {
        map_x: String,
        map_y: String,
        radius: String,
        content_type_id: Option<String>,
    },
    AreaBased {
        area_code: Option<String>,
        content_type_id: Option<String>,
    },
    Keyword {
        keyword: String,
        area_code: Option<String>,
        content_type_id: Option<String>,
    },
}

impl SearchQuery {
    pub fn operation(&self) -> Operation {
        match self {
            Self::LocationBased { .. } => Operation::LocationBasedList,
            Self::AreaBased { .. } => Operation::AreaBasedList,
            Self::Keyword { .. } => Operation::SearchKeyword,
        }
    }

    /// Query parameters; absent filters are left out entirely.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        match self {
            Self::LocationBased {
                map_x,
                map_y,
                radius,
                content_type_id,
            } => {
                params.push(("mapX", map_x.clone()));
                params.push(("mapY", map_y.clone()));
                params.push(("radius", radius.clone()));
                push_opt(&mut params, "contentTypeId", content_type_id);
            }
            Self::AreaBased {
                area_code,
                content_type_id,
            } => {
                push_opt(&mut params, "areaCode", area_code);
                push_opt(&mut params, "contentTypeId", content_type_id);
            }
            Self::Keyword {
                keyword,
                area_code,
                content_type_id,
            } => {
                params.push(("keyword", keyword.clone()));
                push_opt(&mut params, "areaCode", area_code);
                push_opt(&mut params, "contentTypeId", content_type_id);
            }
        }
        params
    }
}

fn push_opt(params: &mut Vec<(&'static str, String)>, key: &'static str, value: &Option<String>) {
    if let Some(v) = value {
        params.push((key, v.clone()));
    }
}

/// Select the upstream query for a normalized request.
///
/// Strict priority: coordinates, then area + type without keyword, then
/// keyword, then a plain area listing with whatever filters exist.
pub fn dispatch(request: &SearchRequest) -> SearchQuery {
    if let Some((map_x, map_y)) = request.coordinates() {
        return SearchQuery::LocationBased {
            map_x: map_x.to_string(),
            map_y: map_y.to_string(),
            radius: request
                .radius
                .clone()
                .unwrap_or_else(|| DEFAULT_RADIUS.to_string()),
            content_type_id: request.content_type_id.clone(),
        };
    }

    let keyword = request.keyword();

    if let (Some(area_code), Some(content_type_id), None) =
        (&request.area_code, &request.content_type_id, keyword)
    {
        return SearchQuery::AreaBased {
            area_code: Some(area_code.clone()),
            content_type_id: Some(content_type_id.clone()),
        };
    }

    if let Some(keyword) = keyword {
        return SearchQuery::Keyword {
            keyword: keyword.to_string(),
            area_code: request.area_code.clone(),
            content_type_id: request.content_type_id.clone(),
        };
    }

    SearchQuery::AreaBased {
        area_code: request.area_code.clone(),
        content_type_id: request.content_type_id.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(
        area: Option<&str>,
        content_type: Option<&str>,
        keyword: Option<&str>,
        geo: bool,
    ) -> SearchRequest {
        SearchRequest {
            area_code: area.map(String::from),
            content_type_id: content_type.map(String::from),
            keyword: keyword.map(String::from),
            map_x: geo.then(|| "126.9779".to_string()),
            map_y: geo.then(|| "37.5663".to_string()),
            radius: None,
        }
    }

    #[test]
    fn test_geo_overrides_everything() {
        let query = dispatch(&request(Some("1"), Some("12"), Some("궁"), true));
        assert_eq!(query.operation(), Operation::LocationBasedList);
        assert_eq!(
            query.params(),
            vec![
                ("mapX", "126.9779".to_string()),
                ("mapY", "37.5663".to_string()),
                ("radius", "2000".to_string()),
                ("contentTypeId", "12".to_string()),
            ]
        );
    }

    #[test]
    fn test_geo_keeps_explicit_radius() {
        let mut req = request(None, None, None, true);
        req.radius = Some("500".into());
        match dispatch(&req) {
            SearchQuery::LocationBased { radius, .. } => assert_eq!(radius, "500"),
            other => panic!("unexpected query: {other:?}"),
        }
    }

    #[test]
    fn test_single_coordinate_is_not_geo() {
        let mut req = request(None, None, None, false);
        req.map_x = Some("126.9779".into());
        assert_eq!(dispatch(&req).operation(), Operation::AreaBasedList);
    }

    #[test]
    fn test_area_and_type_without_keyword() {
        let query = dispatch(&request(Some("1"), Some("15"), None, false));
        assert_eq!(
            query,
            SearchQuery::AreaBased {
                area_code: Some("1".into()),
                content_type_id: Some("15".into()),
            }
        );
    }

    #[test]
    fn test_empty_keyword_is_treated_as_absent() {
        let query = dispatch(&request(Some("1"), Some("15"), Some(""), false));
        assert_eq!(query.operation(), Operation::AreaBasedList);
    }

    #[test]
    fn test_keyword_passes_resolved_filters() {
        let query = dispatch(&request(Some("39"), None, Some("흑돼지"), false));
        assert_eq!(query.operation(), Operation::SearchKeyword);
        assert_eq!(
            query.params(),
            vec![
                ("keyword", "흑돼지".to_string()),
                ("areaCode", "39".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_with_area_and_type() {
        let query = dispatch(&request(Some("1"), Some("12"), Some("궁"), false));
        assert_eq!(query.operation(), Operation::SearchKeyword);
    }

    #[test]
    fn test_bare_request_is_unfiltered_area_listing() {
        let query = dispatch(&SearchRequest::default());
        assert_eq!(
            query,
            SearchQuery::AreaBased {
                area_code: None,
                content_type_id: None,
            }
        );
        assert!(query.params().is_empty());
    }

    #[test]
    fn test_area_only_falls_back_to_area_listing() {
        let query = dispatch(&request(Some("6"), None, None, false));
        assert_eq!(query.params(), vec![("areaCode", "6".to_string())]);
    }

    #[test]
    fn test_operation_paths() {
        assert_eq!(Operation::AreaCode.as_str(), "areaCode1");
        assert_eq!(Operation::DetailIntro.to_string(), "detailIntro1");
    }
}
