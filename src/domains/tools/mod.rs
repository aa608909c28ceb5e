//! Tools domain module.
//!
//! Tools are the callable surface of the server: eight read-only queries
//! against the Bank of Thailand rate APIs.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations and their parameter types
//! - `router.rs` - Dynamic ToolRouter builder for STDIO transport
//! - `registry.rs` - Central tool registry and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Add a row to `RateTool::ALL` along with its name and endpoint. The
//! router and registry both iterate the table, so nothing else changes.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
