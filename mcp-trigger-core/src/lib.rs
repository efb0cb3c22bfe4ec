#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod request;
pub mod resolver;
pub mod types;

pub use crate::catalog::{DocumentCatalog, EndpointCatalog, StaticCatalog};
pub use crate::error::CatalogError;
pub use crate::request::compose_target_url;
pub use crate::resolver::{
    EndpointResolver, ERROR_LOADING_LABEL, NO_ENDPOINTS_LABEL, TRIGGER_SENTINEL,
};
pub use crate::types::{
    EndpointDescriptor, InvocationParameters, NodeParameters, SelectableOption,
    DEFAULT_BASE_URL, DEFAULT_WORKFLOW_ID,
};
