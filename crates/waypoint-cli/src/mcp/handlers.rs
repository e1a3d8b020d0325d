//! MCP tool handlers implementation

use log::debug;
use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::Deserialize;
use waypoint_core::{
    Companion,
    display::{
        CreateResult, OperationStatus, Reminders, ResolutionResult, ToggleResult, Trips,
    },
    params as core,
};

use super::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Wraps a core parameter type in a transparent serde container so tool
// arguments deserialize straight into it, with the schema taken from the core
// type's `schema` feature derive.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type StartTrip = McpParams<core::StartTrip>;
pub type TripRef = McpParams<core::TripRef>;
pub type TogglePlan = McpParams<core::TogglePlan>;
pub type ResolvePlans = McpParams<core::ResolvePlans>;
pub type AddComment = McpParams<core::AddComment>;
pub type ListComments = McpParams<core::ListComments>;
pub type UpcomingReminders = McpParams<core::UpcomingReminders>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(output: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(
        output.to_string(),
    )]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    companion: Companion,
}

impl McpHandlers {
    pub fn new(companion: Companion) -> Self {
        Self { companion }
    }

    pub async fn list_trips(&self) -> McpResult {
        debug!("list_trips");

        let trips = self
            .companion
            .list_trips()
            .await
            .map_err(|e| to_mcp_error("Failed to list trips", &e))?;

        text(format!("# Trips\n\n{}", Trips(trips)))
    }

    pub async fn start_trip(&self, Parameters(params): Parameters<StartTrip>) -> McpResult {
        debug!("start_trip: {params:?}");

        let view = self
            .companion
            .start_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to start trip", &e))?;

        text(view)
    }

    pub async fn show_trip(&self, Parameters(params): Parameters<TripRef>) -> McpResult {
        debug!("show_trip: {params:?}");

        let view = self
            .companion
            .show_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to show trip", &e))?;

        text(view)
    }

    pub async fn toggle_plan(&self, Parameters(params): Parameters<TogglePlan>) -> McpResult {
        debug!("toggle_plan: {params:?}");

        let outcome = self
            .companion
            .toggle_plan(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle plan", &e))?;

        text(ToggleResult::new(outcome))
    }

    pub async fn resolve_late_plans(
        &self,
        Parameters(params): Parameters<ResolvePlans>,
    ) -> McpResult {
        debug!("resolve_late_plans: {params:?}");

        let removed = self
            .companion
            .resolve_late_plans(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to resolve late plans", &e))?;

        text(ResolutionResult::new(removed))
    }

    pub async fn dismiss_resolution(&self, Parameters(params): Parameters<TripRef>) -> McpResult {
        debug!("dismiss_resolution: {params:?}");

        let request = self
            .companion
            .dismiss_resolution(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to dismiss late plans", &e))?;

        text(OperationStatus::success(format!(
            "Left {} late plan(s) in the itinerary",
            request.items.len()
        )))
    }

    pub async fn trip_progress(&self, Parameters(params): Parameters<TripRef>) -> McpResult {
        debug!("trip_progress: {params:?}");

        let progress = self
            .companion
            .trip_progress(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get trip progress", &e))?;

        text(progress)
    }

    pub async fn reset_trip(&self, Parameters(params): Parameters<TripRef>) -> McpResult {
        debug!("reset_trip: {params:?}");

        let trip_id = self
            .companion
            .reset_trip(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to reset trip", &e))?;

        text(OperationStatus::success(format!(
            "Trip '{trip_id}' is back to its original itinerary. Use 'start_trip' to begin again."
        )))
    }

    pub async fn add_comment(&self, Parameters(params): Parameters<AddComment>) -> McpResult {
        debug!("add_comment: {params:?}");

        let comment = self
            .companion
            .add_comment(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add comment", &e))?;

        text(CreateResult::new(comment))
    }

    pub async fn list_comments(&self, Parameters(params): Parameters<ListComments>) -> McpResult {
        debug!("list_comments: {params:?}");

        let thread = self
            .companion
            .list_comments(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list comments", &e))?;

        text(thread)
    }

    pub async fn upcoming_reminders(
        &self,
        Parameters(params): Parameters<UpcomingReminders>,
    ) -> McpResult {
        debug!("upcoming_reminders: {params:?}");

        let reminders = self
            .companion
            .upcoming_reminders(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get reminders", &e))?;

        text(Reminders(reminders))
    }
}
