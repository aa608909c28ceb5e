//! Resource service implementation.
//!
//! The ResourceService manages resource discovery and access.
//! It maintains a registry of available resources and handles read requests.
//!
//! Resources are defined in `definitions/` and registered via `registry.rs`.
//! Adding a new resource does NOT require modifying this file.

use rmcp::model::{ReadResourceResult, Resource, ResourceContents};
use tracing::{debug, info};

use super::error::ResourceError;
use super::registry::get_all_resources;
use crate::core::config::UpstreamConfig;

/// Renders a resource document from the upstream settings.
pub type RenderFn = fn(&UpstreamConfig) -> Result<String, ResourceError>;

/// Service for managing and accessing resources.
///
/// This service maintains a registry of available resources and handles
/// resource listing and reading operations.
pub struct ResourceService {
    /// Upstream settings referenced by the generated documents.
    upstream: UpstreamConfig,

    /// Registered resources, in listing order.
    resources: Vec<ResourceEntry>,
}

/// An entry in the resource registry.
#[derive(Debug, Clone)]
pub struct ResourceEntry {
    /// The resource metadata.
    pub resource: Resource,

    /// The content provider for this resource.
    pub render: RenderFn,
}

impl ResourceService {
    /// Create a new ResourceService with the given upstream settings.
    pub fn new(upstream: UpstreamConfig) -> Self {
        info!("Initializing ResourceService");

        let mut service = Self {
            upstream,
            resources: Vec::new(),
        };

        for entry in get_all_resources() {
            service.register_resource(entry);
        }

        service
    }

    /// Register a resource.
    pub fn register_resource(&mut self, entry: ResourceEntry) {
        debug!("Registering resource: {}", entry.resource.raw.uri);
        self.resources.push(entry);
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.resources
            .iter()
            .map(|entry| entry.resource.clone())
            .collect()
    }

    /// Read a resource by URI. The document is rendered on every call.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let entry = self
            .resources
            .iter()
            .find(|entry| entry.resource.raw.uri == uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let text = (entry.render)(&self.upstream)?;

        Ok(ReadResourceResult {
            contents: vec![ResourceContents::TextResourceContents {
                uri: uri.to_string(),
                mime_type: entry.resource.raw.mime_type.clone(),
                text,
                meta: None,
            }],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &ReadResourceResult) -> (&str, Option<&str>) {
        match &result.contents[0] {
            ResourceContents::TextResourceContents {
                text, mime_type, ..
            } => (text.as_str(), mime_type.as_deref()),
            other => panic!("Expected text contents, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = ResourceService::new(UpstreamConfig::default());

        let resources = service.list_resources().await;
        assert_eq!(resources.len(), 2);
        assert_eq!(resources[0].raw.uri, "bot://currencies");
        assert_eq!(resources[1].raw.uri, "bot://api-info");
    }

    #[tokio::test]
    async fn test_read_currencies() {
        let service = ResourceService::new(UpstreamConfig::default());

        let result = service.read_resource("bot://currencies").await.unwrap();
        let (text, mime_type) = text_of(&result);
        assert_eq!(mime_type, Some("application/json"));

        let entries: Vec<serde_json::Value> = serde_json::from_str(text).unwrap();
        assert_eq!(entries.len(), 20);
    }

    #[tokio::test]
    async fn test_read_api_info() {
        let service = ResourceService::new(UpstreamConfig::default());

        let result = service.read_resource("bot://api-info").await.unwrap();
        let (text, mime_type) = text_of(&result);
        assert_eq!(mime_type, Some("text/plain"));
        assert!(text.contains("get_daily_interbank_rate"));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = ResourceService::new(UpstreamConfig::default());

        let result = service.read_resource("bot://nonexistent").await;
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }
}
