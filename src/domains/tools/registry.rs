//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls
//! - Tool metadata for listing

use std::sync::Arc;

use rmcp::model::Tool;
use tracing::warn;

use crate::core::upstream::RateGateway;

use super::ToolError;
use super::definitions::RateTool;

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls
pub struct ToolRegistry {
    gateway: Arc<RateGateway>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(gateway: Arc<RateGateway>) -> Self {
        Self { gateway }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        RateTool::ALL.iter().map(|tool| tool.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    /// Both HTTP and STDIO transports use this to get tool metadata.
    pub fn get_all_tools() -> Vec<Tool> {
        RateTool::ALL.iter().map(|tool| tool.to_tool()).collect()
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// Returns the serialized `CallToolResult`. Upstream failures are inside
    /// it as an error envelope; `Err` means the call never reached upstream.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match RateTool::find(name) {
            Some(tool) => tool.http_handler(arguments, &self.gateway).await,
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
