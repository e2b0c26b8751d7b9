//! Korea Tourism Organization TourAPI (KorService1) domain.
//!
//! Everything the tools need to answer a request lives here: the upstream
//! client, keyword intent resolution, search dispatch and text rendering.

pub mod area;
pub mod client;
pub mod content_type;
pub mod error;
pub mod format;
pub mod intent;
pub mod model;
pub mod operation;
pub mod period;
pub mod request;
pub mod service;

#[cfg(test)]
pub mod testing;

pub use client::{HttpTourClient, TourApi};
pub use content_type::ContentType;
pub use error::{TourError, TourResult};
pub use request::{DetailRequest, SearchRequest};
pub use service::TourService;
