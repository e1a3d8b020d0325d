use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CommentCommands, PlanCommands, TripCommands};

/// Travel itinerary companion
///
/// Waypoint follows you through a packaged multi-day trip. Mark plans as
/// completed as you go; when you run late, every later plan moves with you.
/// Plans that would slip past 23:00 are never dropped silently: you decide
/// which of them to keep. It can also run as an MCP (Model Context Protocol)
/// server for integration with AI assistants.
///
/// Without a subcommand, shows the active trip or lists the available trips.
#[derive(Parser)]
#[command(version, about, name = "waypoint")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/waypoint/waypoint.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Waypoint CLI
///
/// - `trip`: Browse, start, show and reset trips
/// - `plan`: Complete plans, decide on late plans, check progress
/// - `comment`: Rate and comment on plans
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Browse and manage trips
    #[command(alias = "t")]
    Trip {
        #[command(subcommand)]
        command: TripCommands,
    },
    /// Follow the plans of the active trip
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Rate and comment on plans
    #[command(alias = "c")]
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Start the MCP server
    Serve,
}
