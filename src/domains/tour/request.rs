//! Typed requests produced from tool arguments.

/// Default value of every detail Y/N flag.
pub const FLAG_YES: &str = "Y";

/// A normalized `search_tour_info` request.
///
/// Built once from tool arguments, then narrowed at most once by keyword
/// intent resolution before dispatch reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub area_code: Option<String>,
    pub content_type_id: Option<String>,
    pub keyword: Option<String>,
    pub map_x: Option<String>,
    pub map_y: Option<String>,
    pub radius: Option<String>,
}

impl SearchRequest {
    /// The keyword if it still holds any text.
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    /// Both coordinates, when both were supplied.
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        self.map_x.as_deref().zip(self.map_y.as_deref())
    }
}

/// A normalized `get_detail_common` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub content_id: String,
    pub default_yn: String,
    pub first_image_yn: String,
    pub areacode_yn: String,
    pub addrinfo_yn: String,
    pub mapinfo_yn: String,
    pub overview_yn: String,
}

impl DetailRequest {
    /// A request for `content_id` with every section enabled.
    pub fn new(content_id: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            default_yn: FLAG_YES.to_string(),
            first_image_yn: FLAG_YES.to_string(),
            areacode_yn: FLAG_YES.to_string(),
            addrinfo_yn: FLAG_YES.to_string(),
            mapinfo_yn: FLAG_YES.to_string(),
            overview_yn: FLAG_YES.to_string(),
        }
    }

    /// Upstream query parameters for `detailCommon1`.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("contentId", self.content_id.clone()),
            ("defaultYN", self.default_yn.clone()),
            ("firstImageYN", self.first_image_yn.clone()),
            ("areacodeYN", self.areacode_yn.clone()),
            ("addrinfoYN", self.addrinfo_yn.clone()),
            ("mapinfoYN", self.mapinfo_yn.clone()),
            ("overviewYN", self.overview_yn.clone()),
        ]
    }
}
