use std::path::Path;
use std::sync::Arc;

use mcp_trigger_core::NodeParameters;
use mcp_trigger_exec::executor::{
    EventSink, MetricsCollector, NoOpEventSink, ReqwestHttpClient, StdoutEventSink,
    TracingEventSink,
};
use mcp_trigger_exec::{BatchError, BatchInvoker, OutputRecord};
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::utils::{load_items, merge_set_fields, parse_data};
use crate::{EventsMode, OutputArgs, TargetArgs};

#[derive(Serialize)]
struct InvokeResult {
    results: Vec<Vec<OutputRecord>>,
    metrics: serde_json::Value,
}

#[allow(clippy::too_many_arguments)]
pub async fn invoke_cmd(
    target: TargetArgs,
    endpoint: Option<&str>,
    data: &str,
    items_path: Option<&Path>,
    set_fields: &[String],
    continue_on_fail: bool,
    events: EventsMode,
    output: OutputArgs,
) -> i32 {
    // Event lines would interleave with the single JSON document on stdout.
    if events == EventsMode::Stdout && output.format == OutputFormat::Json && !output.quiet {
        print_error(
            output.format,
            output.quiet,
            "--events stdout cannot be combined with --format json; use --events log",
        );
        return exit_codes::CONFIG_ERROR;
    }

    let data_to_send = match parse_data(data) {
        Ok(v) => v,
        Err(e) => {
            print_error(output.format, output.quiet, &e);
            return exit_codes::CONFIG_ERROR;
        }
    };

    let mut items = match load_items(items_path) {
        Ok(v) => v,
        Err(e) => {
            print_error(output.format, output.quiet, &e);
            return exit_codes::CONFIG_ERROR;
        }
    };
    if let Err(e) = merge_set_fields(&mut items, set_fields) {
        print_error(output.format, output.quiet, &e);
        return exit_codes::CONFIG_ERROR;
    }

    let node = NodeParameters {
        mcp_base_url: target.base_url,
        mcp_workflow_id: target.workflow_id,
        endpoint_to_trigger: endpoint.unwrap_or_default().to_string(),
        data_to_send,
    };

    let base: Arc<dyn EventSink> = match events {
        EventsMode::None => Arc::new(NoOpEventSink),
        EventsMode::Stdout => Arc::new(StdoutEventSink),
        EventsMode::Log => Arc::new(TracingEventSink),
    };
    let collector = Arc::new(MetricsCollector::new(base));
    let invoker = BatchInvoker::new(Arc::new(ReqwestHttpClient::default()), collector.clone());

    match invoker.invoke_items(&items, &node, continue_on_fail).await {
        Ok(results) => {
            let metrics = collector.get_metrics().await.to_json();
            print_result(output.format, output.quiet, &InvokeResult { results, metrics });
            exit_codes::SUCCESS
        }
        Err(e @ BatchError::NoEndpointSelected) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::CONFIG_ERROR
        }
        Err(e @ BatchError::EndpointFailed { .. }) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::BATCH_FAILED
        }
    }
}
