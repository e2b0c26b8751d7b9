//! Korea tourism tools backed by TourAPI.
//!
//! - `get_area_code`: area code listing
//! - `search_tour_info`: area, keyword and location based search
//! - `get_detail_common`: common detail record of one content id

pub mod area_code;
pub mod common;
pub mod detail;
pub mod search;

pub use area_code::{GetAreaCodeParams, GetAreaCodeTool};
pub use detail::{GetDetailCommonParams, GetDetailCommonTool};
pub use search::{SearchTourInfoParams, SearchTourInfoTool};
