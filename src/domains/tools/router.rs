//! Tool Router - builds the rmcp ToolRouter from the tool table.
//!
//! Each tool knows how to create its own route; this module only folds
//! `RateTool::ALL` into a router sharing one gateway.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::upstream::RateGateway;

use super::definitions::RateTool;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(gateway: Arc<RateGateway>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    RateTool::ALL
        .into_iter()
        .fold(ToolRouter::new(), |router, tool| {
            router.with_route(tool.create_route(gateway.clone()))
        })
}
