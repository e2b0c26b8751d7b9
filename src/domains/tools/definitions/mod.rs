//! Tool definitions module.
//!
//! Each tool is defined in its own file, grouped by upstream service.

pub mod tour;

pub use tour::{
    GetAreaCodeParams, GetAreaCodeTool, GetDetailCommonParams, GetDetailCommonTool,
    SearchTourInfoParams, SearchTourInfoTool,
};
