use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the endpoints that can be triggered.
    Endpoints {
        #[command(flatten)]
        target: TargetArgs,
        /// JSON workflow export (`{"nodes": [{"name": ...}]}`) to list instead of the built-in tools.
        #[arg(long)]
        catalog: Option<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// POST each input item to the selected endpoint.
    Invoke {
        #[command(flatten)]
        target: TargetArgs,
        #[arg(long)]
        endpoint: Option<String>,
        #[arg(long, default_value = "{}")]
        data: String,
        #[arg(long)]
        items: Option<PathBuf>,
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set_fields: Vec<String>,
        #[arg(long)]
        continue_on_fail: bool,
        #[arg(long, value_enum, default_value_t = EventsMode::None)]
        events: EventsMode,
        #[command(flatten)]
        output: OutputArgs,
    },
}
