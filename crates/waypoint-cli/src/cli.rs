//! Command-line argument wrappers and command handlers
//!
//! The argument structs carry the clap-specific concerns (flags, help text,
//! delimiters) and convert into the interface-agnostic core parameter types
//! with `From`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Companion → Display → Renderer
//! ```
//!
//! Every handler formats its result with the core `Display` implementations
//! and hands the markdown to the [`TerminalRenderer`].

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use waypoint_core::{
    Companion,
    display::{
        CreateResult, OperationStatus, Reminders, ResolutionResult, ToggleResult, Trips,
    },
    params::*,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Trip selection shared by commands that act on a whole trip.
#[derive(Args)]
pub struct TripArgs {
    /// Trip to operate on; defaults to the active trip
    #[arg(long = "trip", value_name = "ID")]
    pub trip_id: Option<String>,
}

impl From<TripArgs> for TripRef {
    fn from(val: TripArgs) -> Self {
        TripRef {
            trip_id: val.trip_id,
        }
    }
}

/// Start a trip, or resume it if it was started before
#[derive(Args)]
pub struct StartTripArgs {
    #[arg(help = "Trip identifier as shown by 'trip list'")]
    pub trip_id: String,
}

impl From<StartTripArgs> for StartTrip {
    fn from(val: StartTripArgs) -> Self {
        StartTrip {
            trip_id: val.trip_id,
        }
    }
}

#[derive(Subcommand)]
pub enum TripCommands {
    /// List the available trips
    #[command(aliases = ["l", "ls"])]
    List,
    /// Start or resume a trip and make it the active one
    #[command(alias = "s")]
    Start(StartTripArgs),
    /// Show the itinerary of a started trip
    Show(TripArgs),
    /// Forget all progress on a trip and restore its original itinerary
    Reset(TripArgs),
}

/// Toggle the completion of a plan
///
/// Completing a plan also completes every earlier plan and moves later plans
/// by however late you are. Running the command on a completed plan marks it
/// and every later plan as not completed.
#[derive(Args)]
pub struct TogglePlanArgs {
    #[arg(help = "Position of the plan in the itinerary, as shown by 'trip show'")]
    pub index: usize,
    /// Completion time (HH:MM); defaults to now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,
    /// Trip to operate on; defaults to the active trip
    #[arg(long = "trip", value_name = "ID")]
    pub trip_id: Option<String>,
}

impl From<TogglePlanArgs> for TogglePlan {
    fn from(val: TogglePlanArgs) -> Self {
        TogglePlan {
            trip_id: val.trip_id,
            index: val.index,
            at: val.at,
        }
    }
}

/// Decide on the plans that were pushed past 23:00
///
/// Late plans listed with --keep stay in the itinerary; every other late plan
/// is removed. Without --keep or --drop-all, every late plan stays.
#[derive(Args)]
pub struct ResolvePlansArgs {
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Late plans to keep, as a comma-separated list of positions"
    )]
    pub keep: Option<Vec<usize>>,
    /// Remove every late plan
    #[arg(long, conflicts_with = "keep")]
    pub drop_all: bool,
    /// Trip to operate on; defaults to the active trip
    #[arg(long = "trip", value_name = "ID")]
    pub trip_id: Option<String>,
}

impl From<ResolvePlansArgs> for ResolvePlans {
    fn from(val: ResolvePlansArgs) -> Self {
        ResolvePlans {
            trip_id: val.trip_id,
            keep: if val.drop_all { Some(Vec::new()) } else { val.keep },
        }
    }
}

/// Show the plans still ahead today
#[derive(Args)]
pub struct RemindersArgs {
    /// Current time (HH:MM); defaults to now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<String>,
    /// Trip to operate on; defaults to the active trip
    #[arg(long = "trip", value_name = "ID")]
    pub trip_id: Option<String>,
}

impl From<RemindersArgs> for UpcomingReminders {
    fn from(val: RemindersArgs) -> Self {
        UpcomingReminders {
            trip_id: val.trip_id,
            at: val.at,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// Toggle the completion of a plan and move later plans
    #[command(aliases = ["c", "toggle"])]
    Complete(TogglePlanArgs),
    /// Keep or remove the plans pushed past 23:00
    #[command(alias = "r")]
    Resolve(ResolvePlansArgs),
    /// Leave late plans as they are without removing any
    Dismiss(TripArgs),
    /// Show how many plans are completed
    Progress(TripArgs),
    /// Show the plans still ahead today
    Reminders(RemindersArgs),
}

/// Rate and comment on a plan
#[derive(Args)]
pub struct AddCommentArgs {
    #[arg(help = "Position of the plan in the itinerary")]
    pub index: usize,
    /// The comment text
    pub content: String,
    #[arg(short, long, help = "Rating from 1 to 5 stars")]
    pub rating: u8,
    /// Trip to operate on; defaults to the active trip
    #[arg(long = "trip", value_name = "ID")]
    pub trip_id: Option<String>,
}

impl From<AddCommentArgs> for AddComment {
    fn from(val: AddCommentArgs) -> Self {
        AddComment {
            trip_id: val.trip_id,
            index: val.index,
            rating: val.rating,
            content: val.content,
        }
    }
}

#[derive(Args)]
pub struct ListCommentsArgs {
    #[arg(help = "Position of the plan in the itinerary")]
    pub index: usize,
    /// Trip to operate on; defaults to the active trip
    #[arg(long = "trip", value_name = "ID")]
    pub trip_id: Option<String>,
}

impl From<ListCommentsArgs> for ListComments {
    fn from(val: ListCommentsArgs) -> Self {
        ListComments {
            trip_id: val.trip_id,
            index: val.index,
        }
    }
}

#[derive(Subcommand)]
pub enum CommentCommands {
    /// Rate and comment on a plan
    #[command(alias = "a")]
    Add(AddCommentArgs),
    /// Show the comments on a plan
    #[command(aliases = ["l", "ls"])]
    List(ListCommentsArgs),
}

// ============================================================================
// Command Handlers
// ============================================================================

/// Runs CLI commands against a [`Companion`] and renders the results.
pub struct Cli {
    companion: Companion,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(companion: Companion, renderer: TerminalRenderer) -> Self {
        Self {
            companion,
            renderer,
        }
    }

    /// Shows the active trip, or the trip list when no trip is active.
    pub async fn overview(&self) -> Result<()> {
        match self
            .companion
            .active_trip()
            .await
            .context("Failed to load the active trip")?
        {
            Some(view) => self.renderer.render(&view.to_string()),
            None => self.list_trips().await,
        }
    }

    async fn list_trips(&self) -> Result<()> {
        let trips = self
            .companion
            .list_trips()
            .await
            .context("Failed to list trips")?;
        self.renderer.render(&Trips(trips).to_string())
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::List => self.list_trips().await,
            TripCommands::Start(args) => {
                let params: StartTrip = args.into();
                let view = self
                    .companion
                    .start_trip(&params)
                    .await
                    .with_context(|| format!("Failed to start trip '{}'", params.trip_id))?;
                self.renderer.render(&view.to_string())
            }
            TripCommands::Show(args) => {
                let view = self
                    .companion
                    .show_trip(&args.into())
                    .await
                    .context("Failed to show trip")?;
                self.renderer.render(&view.to_string())
            }
            TripCommands::Reset(args) => {
                let trip_id = self
                    .companion
                    .reset_trip(&args.into())
                    .await
                    .context("Failed to reset trip")?;
                let status = OperationStatus::success(format!(
                    "Trip '{trip_id}' is back to its original itinerary"
                ));
                self.renderer.render(&status.to_string())
            }
        }
    }

    pub async fn handle_plan_command(&self, command: PlanCommands) -> Result<()> {
        match command {
            PlanCommands::Complete(args) => {
                let outcome = self
                    .companion
                    .toggle_plan(&args.into())
                    .await
                    .context("Failed to toggle plan")?;
                self.renderer.render(&ToggleResult::new(outcome).to_string())
            }
            PlanCommands::Resolve(args) => {
                let removed = self
                    .companion
                    .resolve_late_plans(&args.into())
                    .await
                    .context("Failed to resolve late plans")?;
                self.renderer
                    .render(&ResolutionResult::new(removed).to_string())
            }
            PlanCommands::Dismiss(args) => {
                let request = self
                    .companion
                    .dismiss_resolution(&args.into())
                    .await
                    .context("Failed to dismiss late plans")?;
                let status = OperationStatus::success(format!(
                    "Left {} late plan(s) in the itinerary",
                    request.items.len()
                ));
                self.renderer.render(&status.to_string())
            }
            PlanCommands::Progress(args) => {
                let progress = self
                    .companion
                    .trip_progress(&args.into())
                    .await
                    .context("Failed to get trip progress")?;
                self.renderer.render(&format!("{progress}\n"))
            }
            PlanCommands::Reminders(args) => {
                let reminders = self
                    .companion
                    .upcoming_reminders(&args.into())
                    .await
                    .context("Failed to get reminders")?;
                self.renderer.render(&Reminders(reminders).to_string())
            }
        }
    }

    pub async fn handle_comment_command(&self, command: CommentCommands) -> Result<()> {
        match command {
            CommentCommands::Add(args) => {
                let comment = self
                    .companion
                    .add_comment(&args.into())
                    .await
                    .context("Failed to add comment")?;
                self.renderer.render(&CreateResult::new(comment).to_string())
            }
            CommentCommands::List(args) => {
                let thread = self
                    .companion
                    .list_comments(&args.into())
                    .await
                    .context("Failed to list comments")?;
                self.renderer.render(&thread.to_string())
            }
        }
    }
}
