//! MCP server implementation for Waypoint
//!
//! Exposes the itinerary companion to AI assistants over the Model Context
//! Protocol. Every tool maps onto one [`Companion`] operation and returns the
//! same markdown the CLI prints.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use tokio::signal::unix::{SignalKind, signal};
use waypoint_core::Companion;

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{
    AddComment, ListComments, McpHandlers, McpResult, ResolvePlans, StartTrip, TogglePlan,
    TripRef, UpcomingReminders,
};

const INSTRUCTIONS: &str = r#"Waypoint is a travel itinerary companion that follows a traveller through a packaged multi-day trip.

## Core Concepts
- **Trips**: Packaged itineraries such as `shanghai-japan-3days`, listed by `list_trips`
- **Plans**: Timed stops in a trip (transport, accommodation, food, activity), addressed by their zero-based index
- **Active trip**: The most recently started trip; every tool that takes an optional `trip_id` defaults to it

## Workflow
1. Start a trip with `start_trip`, then review it with `show_trip`
2. As plans finish, call `toggle_plan` with the plan index and the completion time (`at`, HH:MM)
3. Finishing late moves every later plan by the same delay so the gaps between plans are kept
4. If a plan would be moved to 23:00 or later, nothing is dropped automatically: the result lists the late plans. Ask the traveller which ones to keep, then call `resolve_late_plans` with `keep`, or `dismiss_resolution` to leave them all in place
5. While late plans await a decision, `toggle_plan` is refused

## Other Tools
- `trip_progress`: completed and total plans
- `upcoming_reminders`: the plans still ahead today
- `add_comment` / `list_comments`: rate a plan (1-5) and read earlier comments
- `reset_trip`: forget all progress and restore the original itinerary"#;

/// MCP server for Waypoint
#[derive(Clone)]
pub struct WaypointMcpServer {
    companion: Companion,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl WaypointMcpServer {
    pub fn new(companion: Companion) -> Self {
        Self {
            companion,
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> McpHandlers {
        McpHandlers::new(self.companion.clone())
    }

    #[tool(
        name = "list_trips",
        description = "List the packaged trips with their identifiers, routes, number of days and plans. Started trips include their progress and the active trip is marked."
    )]
    async fn list_trips(&self) -> McpResult {
        self.handlers().list_trips().await
    }

    #[tool(
        name = "start_trip",
        description = "Start a trip by its identifier and make it the active trip. A trip that was started before is resumed with its progress intact. Returns the itinerary grouped by day."
    )]
    async fn start_trip(&self, params: Parameters<StartTrip>) -> McpResult {
        self.handlers().start_trip(params).await
    }

    #[tool(
        name = "show_trip",
        description = "Show the live itinerary of a started trip: every plan with its index, time, location and completion marker, the current plan, moved times and any late plans awaiting a decision. Defaults to the active trip."
    )]
    async fn show_trip(&self, params: Parameters<TripRef>) -> McpResult {
        self.handlers().show_trip(params).await
    }

    #[tool(
        name = "toggle_plan",
        description = "Toggle the completion of a plan by index. Completing a plan also completes every earlier plan and, if `at` (HH:MM, defaults to now) is later than the plan's original time, moves all later plans by the delay. Toggling a completed plan marks it and every later plan as not completed. May return late plans that need a decision via resolve_late_plans or dismiss_resolution."
    )]
    async fn toggle_plan(&self, params: Parameters<TogglePlan>) -> McpResult {
        self.handlers().toggle_plan(params).await
    }

    #[tool(
        name = "resolve_late_plans",
        description = "Decide on the plans pushed past 23:00 by the last completion. Plans listed in `keep` (their indices) stay; every other late plan is removed along with its comments. Omit `keep` to keep them all, or pass an empty list to remove them all."
    )]
    async fn resolve_late_plans(&self, params: Parameters<ResolvePlans>) -> McpResult {
        self.handlers().resolve_late_plans(params).await
    }

    #[tool(
        name = "dismiss_resolution",
        description = "Close the pending late-plan decision without removing anything. Times that were already moved stay as they are."
    )]
    async fn dismiss_resolution(&self, params: Parameters<TripRef>) -> McpResult {
        self.handlers().dismiss_resolution(params).await
    }

    #[tool(
        name = "trip_progress",
        description = "Report how many plans of a started trip are completed. Defaults to the active trip."
    )]
    async fn trip_progress(&self, params: Parameters<TripRef>) -> McpResult {
        self.handlers().trip_progress(params).await
    }

    #[tool(
        name = "reset_trip",
        description = "Forget all progress on a trip: completion, moved times, removed plans and comments. The trip is no longer active; start it again to begin from its original itinerary. This cannot be undone."
    )]
    async fn reset_trip(&self, params: Parameters<TripRef>) -> McpResult {
        self.handlers().reset_trip(params).await
    }

    #[tool(
        name = "add_comment",
        description = "Rate a plan from 1 to 5 stars and leave a comment on it. The trip must have been started."
    )]
    async fn add_comment(&self, params: Parameters<AddComment>) -> McpResult {
        self.handlers().add_comment(params).await
    }

    #[tool(
        name = "list_comments",
        description = "List the comments on a plan, newest first, with the average rating."
    )]
    async fn list_comments(&self, params: Parameters<ListComments>) -> McpResult {
        self.handlers().list_comments(params).await
    }

    #[tool(
        name = "upcoming_reminders",
        description = "List reminders for the uncompleted plans of the current trip day scheduled after `at` (HH:MM, defaults to now), with minutes until each plan starts."
    )]
    async fn upcoming_reminders(&self, params: Parameters<UpcomingReminders>) -> McpResult {
        self.handlers().upcoming_reminders(params).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for WaypointMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "waypoint".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: WaypointMcpServer) -> Result<()> {
    use rmcp::{ServiceExt, transport::stdio};

    info!("Starting Waypoint MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
