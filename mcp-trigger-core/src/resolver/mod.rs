//! Turns a catalog of tools into the selectable endpoint list.
//!
//! The resolver never fails: missing configuration and catalog faults both
//! degrade to a single placeholder option with an empty value.

use std::sync::Arc;

use crate::catalog::{EndpointCatalog, StaticCatalog};
use crate::types::{EndpointDescriptor, SelectableOption};

/// Catalog entry of the service's own entry point. Never offered as a target.
pub const TRIGGER_SENTINEL: &str = "MCP Server Trigger";
pub const NO_ENDPOINTS_LABEL: &str = "No endpoints found";
pub const ERROR_LOADING_LABEL: &str = "Error loading endpoints";

pub struct EndpointResolver {
    catalog: Arc<dyn EndpointCatalog>,
}

impl Default for EndpointResolver {
    fn default() -> Self {
        Self::new(Arc::new(StaticCatalog::builtin()))
    }
}

impl EndpointResolver {
    pub fn new(catalog: Arc<dyn EndpointCatalog>) -> Self {
        Self { catalog }
    }

    /// `workflow_id` is a precondition only; it does not filter the catalog.
    pub async fn resolve(&self, base_url: &str, workflow_id: &str) -> Vec<SelectableOption> {
        if base_url.is_empty() || workflow_id.is_empty() {
            return vec![SelectableOption::placeholder(NO_ENDPOINTS_LABEL)];
        }

        let descriptors = match self.catalog.list_descriptors().await {
            Ok(d) => d,
            Err(e) => {
                tracing::error!(error = %e, "failed to load MCP server endpoints");
                return vec![SelectableOption::placeholder(ERROR_LOADING_LABEL)];
            }
        };

        let options = to_options(&descriptors);
        if options.is_empty() {
            return vec![SelectableOption::placeholder(NO_ENDPOINTS_LABEL)];
        }
        tracing::debug!(count = options.len(), "resolved MCP server endpoints");
        options
    }
}

/// Drops the trigger sentinel and labels the remaining descriptors.
pub fn to_options(descriptors: &[EndpointDescriptor]) -> Vec<SelectableOption> {
    descriptors
        .iter()
        .filter(|d| d.name != TRIGGER_SENTINEL)
        .map(SelectableOption::from)
        .collect()
}
