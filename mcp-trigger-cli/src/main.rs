use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "mcp-trigger", version, about = "Trigger MCP server endpoints")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("error: failed to create tokio runtime: {e}");
            std::process::exit(exit_codes::RUNTIME_ERROR);
        }
    };

    let exit_code = rt.block_on(run_command(cli.command));
    std::process::exit(exit_code);
}

// Logs go to stderr; stdout carries results only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run_command(command: Command) -> i32 {
    match command {
        Command::Endpoints {
            target,
            catalog,
            output,
        } => cmd::endpoints::endpoints_cmd(target, catalog.as_deref(), output).await,
        Command::Invoke {
            target,
            endpoint,
            data,
            items,
            set_fields,
            continue_on_fail,
            events,
            output,
        } => {
            cmd::invoke::invoke_cmd(
                target,
                endpoint.as_deref(),
                &data,
                items.as_deref(),
                &set_fields,
                continue_on_fail,
                events,
                output,
            )
            .await
        }
    }
}
