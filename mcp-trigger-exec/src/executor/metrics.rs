use crate::executor::{BatchStatus, Event, EventSink};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone, Default)]
pub struct BatchMetrics {
    pub batch_id: Option<uuid::Uuid>,
    pub status: String,
    pub started_at: Option<Instant>,
    pub finished_at: Option<Instant>,
    pub total_duration: Option<Duration>,
    pub items_total: usize,
    pub items_succeeded: usize,
    pub items_failed: usize,
    pub items_continued: usize,
    pub records: usize,
    pub http_requests: usize,
}

impl BatchMetrics {
    pub fn start(&mut self, batch_id: uuid::Uuid, items: usize) {
        self.batch_id = Some(batch_id);
        self.items_total = items;
        self.started_at = Some(Instant::now());
    }

    pub fn record_http_request(&mut self) {
        self.http_requests += 1;
    }

    pub fn record_item_success(&mut self, records: usize) {
        self.items_succeeded += 1;
        self.records += records;
    }

    pub fn record_item_failure(&mut self, continued: bool) {
        self.items_failed += 1;
        if continued {
            self.items_continued += 1;
        }
    }

    pub fn finish(&mut self, status: BatchStatus) {
        self.status = status.as_str().to_string();
        self.finished_at = Some(Instant::now());
        if let (Some(started), Some(finished)) = (self.started_at, self.finished_at) {
            self.total_duration = Some(finished.duration_since(started));
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "batch_id": self.batch_id.map(|id| id.to_string()),
            "status": self.status,
            "duration_ms": self.total_duration.map(|d| d.as_millis() as u64),
            "items": {
                "total": self.items_total,
                "succeeded": self.items_succeeded,
                "failed": self.items_failed,
                "continued": self.items_continued,
            },
            "records": self.records,
            "http_requests": self.http_requests,
        })
    }
}

/// Aggregates [`BatchMetrics`] from invoker events, then forwards them.
pub struct MetricsCollector {
    metrics: Arc<Mutex<BatchMetrics>>,
    base: Arc<dyn EventSink>,
}

impl MetricsCollector {
    pub fn new(base: Arc<dyn EventSink>) -> Self {
        Self {
            metrics: Arc::new(Mutex::new(BatchMetrics::default())),
            base,
        }
    }

    pub async fn get_metrics(&self) -> BatchMetrics {
        self.metrics.lock().await.clone()
    }
}

#[async_trait]
impl EventSink for MetricsCollector {
    async fn emit(&self, event: Event) {
        {
            let mut m = self.metrics.lock().await;
            match &event {
                Event::BatchStarted { batch_id, items } => m.start(*batch_id, *items),
                Event::ItemStarted { .. } => m.record_http_request(),
                Event::ItemSucceeded { records, .. } => m.record_item_success(*records),
                Event::ItemFailed { continued, .. } => m.record_item_failure(*continued),
                Event::BatchFinished { status, .. } => m.finish(*status),
            }
        }

        self.base.emit(event).await;
    }
}
