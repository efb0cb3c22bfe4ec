mod document;
mod fixed;

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::types::EndpointDescriptor;

pub use document::{CatalogDocument, CatalogNode, DocumentCatalog};
pub use fixed::StaticCatalog;

/// Source of the tools registered on the MCP service.
#[async_trait]
pub trait EndpointCatalog: Send + Sync {
    async fn list_descriptors(&self) -> Result<Vec<EndpointDescriptor>, CatalogError>;
}
