use std::sync::Arc;

use mcp_trigger_core::{InvocationParameters, NodeParameters};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use crate::executor::events::{BatchStatus, Event, EventSink, NoOpEventSink};
use crate::executor::http::HttpClient;
use crate::executor::request::build_post_request;
use crate::executor::response::decode_records;
use crate::executor::result::{BatchError, OutputRecord};

/// Runs one POST per input item, strictly in order.
///
/// Each call is awaited before the next item starts and is attempted exactly
/// once. A missing endpoint always aborts the batch; call failures abort it
/// unless `continue_on_fail` is set, in which case the item's group becomes a
/// single error record.
pub struct BatchInvoker {
    http: Arc<dyn HttpClient>,
    event_sink: Arc<dyn EventSink>,
}

impl BatchInvoker {
    pub fn new(http: Arc<dyn HttpClient>, event_sink: Arc<dyn EventSink>) -> Self {
        Self { http, event_sink }
    }

    pub fn without_events(http: Arc<dyn HttpClient>) -> Self {
        Self::new(http, Arc::new(NoOpEventSink))
    }

    pub async fn invoke<I, F>(
        &self,
        items: &[I],
        params_of: F,
        continue_on_fail: bool,
    ) -> Result<Vec<Vec<OutputRecord>>, BatchError>
    where
        F: Fn(&I) -> InvocationParameters,
    {
        let batch_id = Uuid::new_v4();
        self.event_sink
            .emit(Event::BatchStarted { batch_id, items: items.len() })
            .await;

        let result = self.run_items(batch_id, items, params_of, continue_on_fail).await;

        let status = if result.is_ok() { BatchStatus::Succeeded } else { BatchStatus::Failed };
        self.event_sink.emit(Event::BatchFinished { batch_id, status }).await;
        result
    }

    /// Resolves each item against the node parameters before invoking.
    pub async fn invoke_items(
        &self,
        items: &[JsonValue],
        node: &NodeParameters,
        continue_on_fail: bool,
    ) -> Result<Vec<Vec<OutputRecord>>, BatchError> {
        self.invoke(items, |item| node.for_item(item), continue_on_fail).await
    }

    async fn run_items<I, F>(
        &self,
        batch_id: Uuid,
        items: &[I],
        params_of: F,
        continue_on_fail: bool,
    ) -> Result<Vec<Vec<OutputRecord>>, BatchError>
    where
        F: Fn(&I) -> InvocationParameters,
    {
        let mut groups = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            let params = params_of(item);
            if !params.has_endpoint() {
                return Err(BatchError::NoEndpointSelected);
            }

            match self.call(batch_id, index, &params).await {
                Ok(records) => {
                    self.event_sink
                        .emit(Event::ItemSucceeded {
                            batch_id,
                            index,
                            endpoint: params.endpoint.clone(),
                            records: records.len(),
                        })
                        .await;
                    groups.push(records.into_iter().map(OutputRecord::Json).collect());
                }
                Err(message) => {
                    self.event_sink
                        .emit(Event::ItemFailed {
                            batch_id,
                            index,
                            endpoint: params.endpoint.clone(),
                            message: message.clone(),
                            continued: continue_on_fail,
                        })
                        .await;
                    if !continue_on_fail {
                        return Err(BatchError::EndpointFailed {
                            endpoint: params.endpoint,
                            message,
                        });
                    }
                    groups.push(vec![OutputRecord::error(message)]);
                }
            }
        }

        Ok(groups)
    }

    async fn call(
        &self,
        batch_id: Uuid,
        index: usize,
        params: &InvocationParameters,
    ) -> Result<Vec<JsonValue>, String> {
        let req = build_post_request(params)?;
        tracing::debug!(%batch_id, index, url = %req.url, "triggering MCP endpoint");
        self.event_sink
            .emit(Event::ItemStarted {
                batch_id,
                index,
                endpoint: params.endpoint.clone(),
                url: req.url.to_string(),
            })
            .await;

        let resp = self.http.send(req).await.map_err(|e| e.to_string())?;
        decode_records(&resp)
    }
}
