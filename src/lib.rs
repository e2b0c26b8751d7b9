//! Korea tourism MCP server.
//!
//! Exposes the Korea Tourism Organization's TourAPI (KorService1) to MCP
//! clients as three tools: `get_area_code`, `search_tour_info` and
//! `get_detail_common`.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **tour**: TourAPI client, keyword intent resolution, dispatch and rendering
//!   - **tools**: MCP tool definitions on top of the tour service
//!
//! # Example
//!
//! ```rust,no_run
//! use ktour_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
