use std::path::Path;
use std::sync::Arc;

use mcp_trigger_core::{
    DocumentCatalog, EndpointCatalog, EndpointResolver, SelectableOption, StaticCatalog,
};
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_result, OutputFormat};
use crate::{OutputArgs, TargetArgs};

#[derive(Serialize)]
struct EndpointsResult {
    options: Vec<SelectableOption>,
}

pub async fn endpoints_cmd(target: TargetArgs, catalog: Option<&Path>, output: OutputArgs) -> i32 {
    let catalog: Arc<dyn EndpointCatalog> = match catalog {
        Some(path) => Arc::new(DocumentCatalog::from_path(path)),
        None => Arc::new(StaticCatalog::builtin()),
    };
    let resolver = EndpointResolver::new(catalog);
    let options = resolver.resolve(&target.base_url, &target.workflow_id).await;

    let result = EndpointsResult { options };
    if output.format == OutputFormat::Text && !output.quiet {
        println!("Endpoints for workflow {}:", target.workflow_id);
        for o in &result.options {
            println!("  - {} ({})", o.name, o.value);
        }
    } else {
        print_result(output.format, output.quiet, &result);
    }

    exit_codes::SUCCESS
}
