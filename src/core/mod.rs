//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the upstream gateway, input
//! validation, server lifecycle management and transport layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;
pub mod upstream;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
pub use upstream::{RateApi, RateGateway, UpstreamError};
