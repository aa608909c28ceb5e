//! Bank of Thailand Rates MCP Server Library
//!
//! This crate exposes the Bank of Thailand interbank and exchange rate APIs
//! to Model Context Protocol clients as eight read-only tools and two
//! reference resources.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Configuration, error handling, the upstream gateway, period and
//!   currency validation, the server handler and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The rate tools that clients call
//!   - **resources**: Reference documents that clients read
//!
//! # Example
//!
//! ```rust,no_run
//! use bot_rates_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
