//! Domains module containing business logic organized by bounded contexts.
//!
//! - `tour`: everything that talks to or reasons about TourAPI
//! - `tools`: the MCP tool surface built on the tour service

pub mod tools;
pub mod tour;
