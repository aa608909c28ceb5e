//! Resource Registry - central registration of all resources.
//!
//! This module provides resource registration without modifying service.rs.
//! When adding a new resource:
//! 1. Create the resource file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it here in `get_all_resources()`

use rmcp::model::{AnnotateAble, RawResource};

use super::definitions::{ApiInfoResource, CurrenciesResource, ResourceDefinition};
use super::service::ResourceEntry;

/// Helper function to create an annotated resource from a definition.
fn build_resource<R: ResourceDefinition>() -> ResourceEntry {
    let mut raw = RawResource::new(R::URI, R::NAME);
    raw.description = Some(R::DESCRIPTION.to_string());
    raw.mime_type = Some(R::MIME_TYPE.to_string());

    ResourceEntry {
        resource: raw.no_annotation(),
        render: R::render,
    }
}

/// Get all registered resources as ResourceEntries, in listing order.
///
/// This is the central place where all resources are registered.
/// When adding a new resource, add it here.
pub fn get_all_resources() -> Vec<ResourceEntry> {
    vec![
        build_resource::<CurrenciesResource>(),
        build_resource::<ApiInfoResource>(),
    ]
}

/// Get the list of all resource URIs.
pub fn resource_uris() -> Vec<&'static str> {
    vec![CurrenciesResource::URI, ApiInfoResource::URI]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_resources() {
        let resources = get_all_resources();
        assert_eq!(resources.len(), 2);

        let uris: Vec<_> = resources
            .iter()
            .map(|r| r.resource.raw.uri.as_str())
            .collect();
        assert_eq!(uris, resource_uris());
    }

    #[test]
    fn test_resources_carry_mime_types() {
        for entry in get_all_resources() {
            assert!(entry.resource.raw.mime_type.is_some());
            assert!(entry.resource.raw.description.is_some());
        }
    }
}
