//! Error types and handling for the MCP server.
//!
//! A unified error type over the failures that can stop the server.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
///
/// Tool failures never show up here; they are folded into the tool result.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tour domain, e.g. building the HTTP client.
    #[error("Tour error: {0}")]
    Tour(#[from] crate::domains::tour::TourError),

    /// Error originating from the transport layer.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
