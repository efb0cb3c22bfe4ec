use clap::Args;
use mcp_trigger_core::{DEFAULT_BASE_URL, DEFAULT_WORKFLOW_ID};

use crate::output::OutputFormat;

#[derive(Debug, Args, Clone)]
pub struct OutputArgs {
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// Where the MCP server lives.
#[derive(Debug, Args, Clone)]
pub struct TargetArgs {
    #[arg(long = "base-url", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[arg(long = "workflow-id", default_value = DEFAULT_WORKFLOW_ID)]
    pub workflow_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EventsMode {
    None,
    Stdout,
    Log,
}
