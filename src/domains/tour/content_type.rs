//! Content type (category) table.
//!
//! TourAPI classifies every content record with a numeric content type id.
//! Users name categories in Korean, so the table maps both ways: category names
//! found inside a free-text keyword resolve to a code, and codes on returned
//! records render as a bracketed label.

/// The content types TourAPI serves for the Korean-language service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Attraction,
    CulturalFacility,
    FestivalEvent,
    TravelCourse,
    Leisure,
    Lodging,
    Shopping,
    Restaurant,
}

/// Label used for any code outside the table.
pub const OTHER_LABEL: &str = "[기타]";

/// Category names in scan order. The first name contained in a keyword wins,
/// so this order is part of the observable behaviour.
pub const CONTENT_TYPE_NAMES: [(&str, ContentType); 10] = [
    ("관광지", ContentType::Attraction),
    ("문화시설", ContentType::CulturalFacility),
    ("축제", ContentType::FestivalEvent),
    ("행사", ContentType::FestivalEvent),
    ("축제/행사", ContentType::FestivalEvent),
    ("여행코스", ContentType::TravelCourse),
    ("레포츠", ContentType::Leisure),
    ("숙박", ContentType::Lodging),
    ("쇼핑", ContentType::Shopping),
    ("음식점", ContentType::Restaurant),
];

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        Self::Attraction,
        Self::CulturalFacility,
        Self::FestivalEvent,
        Self::TravelCourse,
        Self::Leisure,
        Self::Lodging,
        Self::Shopping,
        Self::Restaurant,
    ];

    /// The TourAPI `contentTypeId` value.
    pub fn code(self) -> &'static str {
        match self {
            Self::Attraction => "12",
            Self::CulturalFacility => "14",
            Self::FestivalEvent => "15",
            Self::TravelCourse => "25",
            Self::Leisure => "28",
            Self::Lodging => "32",
            Self::Shopping => "38",
            Self::Restaurant => "39",
        }
    }

    /// Bracketed display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Attraction => "[관광지]",
            Self::CulturalFacility => "[문화시설]",
            Self::FestivalEvent => "[축제/행사]",
            Self::TravelCourse => "[여행코스]",
            Self::Leisure => "[레포츠]",
            Self::Lodging => "[숙박]",
            Self::Shopping => "[쇼핑]",
            Self::Restaurant => "[음식점]",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Find the first category name (in table order) contained in `text`.
    pub fn find_in(text: &str) -> Option<(&'static str, ContentType)> {
        CONTENT_TYPE_NAMES
            .into_iter()
            .find(|(name, _)| text.contains(*name))
    }
}

/// Label for an arbitrary upstream code, falling back to [`OTHER_LABEL`].
pub fn label_for_code(code: &str) -> &'static str {
    ContentType::from_code(code).map_or(OTHER_LABEL, ContentType::label)
}
