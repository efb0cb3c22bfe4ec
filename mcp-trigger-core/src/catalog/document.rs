use std::path::PathBuf;

use async_trait::async_trait;

use crate::catalog::EndpointCatalog;
use crate::error::CatalogError;
use crate::types::EndpointDescriptor;

/// Workflow export listing the nodes of the MCP service:
/// `{ "nodes": [ { "name": "..." } ] }`.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub nodes: Vec<CatalogNode>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CatalogNode {
    pub name: String,
}

impl CatalogDocument {
    pub fn parse(input: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn into_descriptors(self) -> Result<Vec<EndpointDescriptor>, CatalogError> {
        self.nodes
            .into_iter()
            .map(|n| EndpointDescriptor::new(n.name))
            .collect()
    }
}

#[derive(Debug, Clone)]
enum Source {
    Inline(String),
    File(PathBuf),
}

/// Catalog backed by a [`CatalogDocument`], re-read on every listing.
#[derive(Debug, Clone)]
pub struct DocumentCatalog {
    source: Source,
}

impl DocumentCatalog {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: Source::File(path.into()),
        }
    }

    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            source: Source::Inline(json.into()),
        }
    }

    async fn load(&self) -> Result<CatalogDocument, CatalogError> {
        match &self.source {
            Source::Inline(s) => CatalogDocument::parse(s),
            Source::File(path) => {
                let content = tokio::fs::read_to_string(path).await?;
                CatalogDocument::parse(&content)
            }
        }
    }
}

#[async_trait]
impl EndpointCatalog for DocumentCatalog {
    async fn list_descriptors(&self) -> Result<Vec<EndpointDescriptor>, CatalogError> {
        self.load().await?.into_descriptors()
    }
}
