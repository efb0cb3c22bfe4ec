use async_trait::async_trait;
use serde_json::json;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    Succeeded,
    Failed,
}

impl BatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Succeeded => "succeeded",
            BatchStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Event {
    BatchStarted {
        batch_id: Uuid,
        items: usize,
    },
    ItemStarted {
        batch_id: Uuid,
        index: usize,
        endpoint: String,
        url: String,
    },
    ItemSucceeded {
        batch_id: Uuid,
        index: usize,
        endpoint: String,
        records: usize,
    },
    ItemFailed {
        batch_id: Uuid,
        index: usize,
        endpoint: String,
        message: String,
        /// True when continue-on-fail turned the failure into an error record.
        continued: bool,
    },
    BatchFinished {
        batch_id: Uuid,
        status: BatchStatus,
    },
}

impl Event {
    pub fn type_name(&self) -> &'static str {
        match self {
            Event::BatchStarted { .. } => "batch.started",
            Event::ItemStarted { .. } => "item.started",
            Event::ItemSucceeded { .. } => "item.succeeded",
            Event::ItemFailed { .. } => "item.failed",
            Event::BatchFinished { .. } => "batch.finished",
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let ty = self.type_name();
        match self {
            Event::BatchStarted { batch_id, items } => {
                json!({ "type": ty, "batch_id": batch_id.to_string(), "items": items })
            }
            Event::ItemStarted { batch_id, index, endpoint, url } => {
                json!({ "type": ty, "batch_id": batch_id.to_string(), "index": index, "endpoint": endpoint, "url": url })
            }
            Event::ItemSucceeded { batch_id, index, endpoint, records } => {
                json!({ "type": ty, "batch_id": batch_id.to_string(), "index": index, "endpoint": endpoint, "records": records })
            }
            Event::ItemFailed { batch_id, index, endpoint, message, continued } => {
                json!({ "type": ty, "batch_id": batch_id.to_string(), "index": index, "endpoint": endpoint, "message": message, "continued": continued })
            }
            Event::BatchFinished { batch_id, status } => {
                json!({ "type": ty, "batch_id": batch_id.to_string(), "status": status.as_str() })
            }
        }
    }
}

#[async_trait]
pub trait EventSink: Send + Sync {
    async fn emit(&self, event: Event);
}

pub struct CompositeEventSink {
    sinks: Vec<Box<dyn EventSink>>,
}

impl Default for CompositeEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl CompositeEventSink {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn add(&mut self, sink: Box<dyn EventSink>) {
        self.sinks.push(sink);
    }
}

#[async_trait]
impl EventSink for CompositeEventSink {
    async fn emit(&self, event: Event) {
        for sink in &self.sinks {
            sink.emit(event.clone()).await;
        }
    }
}

/// One JSON line per event on stdout.
pub struct StdoutEventSink;

#[async_trait]
impl EventSink for StdoutEventSink {
    async fn emit(&self, event: Event) {
        println!("{}", serde_json::to_string(&event.to_json()).unwrap_or_default());
    }
}

pub struct TracingEventSink;

#[async_trait]
impl EventSink for TracingEventSink {
    async fn emit(&self, event: Event) {
        match &event {
            Event::ItemFailed { batch_id, index, endpoint, message, continued } => {
                tracing::warn!(
                    %batch_id,
                    index = *index,
                    endpoint = %endpoint,
                    continued = *continued,
                    "item failed: {message}"
                );
            }
            Event::BatchFinished { batch_id, status: BatchStatus::Failed } => {
                tracing::error!(%batch_id, "batch failed");
            }
            _ => tracing::info!(event = %event.to_json(), "{}", event.type_name()),
        }
    }
}

pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: Event) {}
}
