//! Tools domain module.
//!
//! Tools are the functions MCP clients call. Each one validates its raw
//! arguments, hands a typed request to the tour service and renders the
//! outcome as a text result.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - rmcp ToolRouter builder for the STDIO transport
//! - `registry.rs` - Name-based dispatch for the HTTP transport
//! - `error.rs` - Tool-specific error types

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
