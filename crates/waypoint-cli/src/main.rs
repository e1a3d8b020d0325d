//! Waypoint CLI Application
//!
//! Command-line interface and MCP server for the waypoint itinerary companion.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{WaypointMcpServer, run_stdio_server};
use renderer::TerminalRenderer;
use waypoint_core::CompanionBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let companion = CompanionBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize companion")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Using database {}", companion.database_path().display());

    match command {
        Some(Trip { command }) => {
            Cli::new(companion, renderer)
                .handle_trip_command(command)
                .await
        }
        Some(Plan { command }) => {
            Cli::new(companion, renderer)
                .handle_plan_command(command)
                .await
        }
        Some(Comment { command }) => {
            Cli::new(companion, renderer)
                .handle_comment_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(companion))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(companion, renderer).overview().await,
    }
}
