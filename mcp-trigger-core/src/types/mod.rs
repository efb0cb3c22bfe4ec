mod endpoint;
mod parameters;

pub use endpoint::{EndpointDescriptor, SelectableOption};
pub use parameters::{
    InvocationParameters, NodeParameters, BASE_URL_KEY, DATA_KEY, DEFAULT_BASE_URL,
    DEFAULT_WORKFLOW_ID, ENDPOINT_KEY, WORKFLOW_ID_KEY,
};
