pub mod events;
pub mod http;
pub mod invoker;
pub mod metrics;
pub mod request;
pub mod response;
mod result;

pub use events::{
    BatchStatus, CompositeEventSink, Event, EventSink, NoOpEventSink, StdoutEventSink,
    TracingEventSink,
};
pub use http::{HttpClient, HttpError, ReqwestHttpClient};
pub use invoker::BatchInvoker;
pub use metrics::{BatchMetrics, MetricsCollector};
pub use request::{HttpRequestParts, HttpResponseParts};
pub use result::{BatchError, ErrorRecord, OutputRecord};
