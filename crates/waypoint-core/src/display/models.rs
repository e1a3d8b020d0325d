//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the data types stay free of
//! presentation concerns. Everything here renders markdown for the terminal
//! renderer and the MCP tools.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{
        Comment, CommentThread, LatePlan, PlanItem, PlanKind, Progress, ResolutionRequest,
        TimeOfDay, TripSummary, TripView,
    },
    reminders::Reminder,
};

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minutes())
    }
}

impl fmt::Display for PlanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} **{}**",
            self.scheduled_time,
            self.kind.with_icon(),
            self.title
        )?;
        if !self.location.is_empty() {
            write!(f, " @ {}", self.location)?;
        }
        if self.is_shifted() {
            write!(f, " (moved from {})", self.baseline())?;
        }
        Ok(())
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} plans completed ({:.0}%)",
            self.completed,
            self.total,
            self.percentage()
        )
    }
}

/// Formats a projected time, folding hours past midnight into the next day.
struct Projected(TimeOfDay);

impl fmt::Display for Projected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_next_day() {
            let wrapped = TimeOfDay::from_total_minutes(self.0.total_minutes() - 24 * 60);
            write!(f, "{wrapped} (next day)")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl fmt::Display for LatePlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. **{}** ({}): {} -> {}",
            self.index,
            self.title,
            self.kind,
            self.time,
            Projected(self.projected_time)
        )
    }
}

impl fmt::Display for ResolutionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Late plans")?;
        writeln!(f)?;
        writeln!(
            f,
            "Finishing plan {} {} minutes late pushes these plans past 23:00:",
            self.completed_index, self.delta_minutes
        )?;
        writeln!(f)?;
        for plan in &self.items {
            writeln!(f, "- {plan}")?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "Choose which of them to keep; the others will be removed from the itinerary."
        )
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rating = usize::from(self.rating.min(5));
        writeln!(
            f,
            "- {}{} {} _({})_",
            "★".repeat(rating),
            "☆".repeat(5 - rating),
            self.content,
            LocalDateTime(&self.created_at)
        )
    }
}

impl fmt::Display for CommentThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Comments on {}. {}", self.plan_index, self.plan_title)?;
        writeln!(f)?;

        match self.average_rating() {
            Some(average) => {
                writeln!(
                    f,
                    "Average rating: {average:.1}/5 from {} comment(s)",
                    self.comments.len()
                )?;
                writeln!(f)?;
                for comment in &self.comments {
                    write!(f, "{comment}")?;
                }
                Ok(())
            }
            None => writeln!(f, "No comments yet."),
        }
    }
}

impl fmt::Display for TripSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = if self.active { " (active)" } else { "" };
        writeln!(f, "## {} (`{}`){active}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Route**: {}", self.route)?;
        writeln!(f, "- **Days**: {}", self.days)?;
        writeln!(f, "- **Plans**: {}", self.plans)?;
        if let Some(progress) = &self.progress {
            writeln!(f, "- **Progress**: {progress}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TripView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.summary.name)?;
        writeln!(f)?;
        writeln!(f, "- Route: {}", self.summary.route)?;
        writeln!(f, "- Progress: {}", self.state.progress())?;
        writeln!(f)?;
        write!(f, "{}", super::Timeline(&self.state))
    }
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- {} (in {} min) {}: {}",
            self.time,
            self.minutes_until,
            self.kind.with_icon(),
            self.message
        )
    }
}
