//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep presentation concerns out
//! of the data types. All output is markdown for rich terminal rendering.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::{
    models::{Plan, PlanStatus, PlanSummary, ProgressStats, ReadingDay},
    presets::PresetDef,
};

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.as_str())?;
        writeln!(f, "- Source: {}", self.source.kind())?;
        writeln!(f, "- Start date: {}", self.start_date)?;
        writeln!(f, "- Days: {}", self.total_days)?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if !self.days.is_empty() {
            writeln!(f, "\n## Days")?;
            writeln!(f)?;
            for day in &self.days {
                write!(f, "{}", day)?;
            }
        } else {
            writeln!(f, "\nNo days in this plan.")?;
        }

        Ok(())
    }
}

impl ReadingDay {
    fn status_icon(&self) -> &'static str {
        if self.completed { "✓" } else { "○" }
    }
}

impl fmt::Display for ReadingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### Day {}: {} ({})",
            self.day_index,
            self.date,
            self.status_icon()
        )?;
        writeln!(f)?;

        for reading in &self.readings {
            writeln!(f, "- {reading}")?;
        }
        writeln!(f)?;

        if let Some(theme) = &self.meditation_theme {
            writeln!(f, "- **Méditation**: {theme}")?;
        }
        if let Some(verse) = &self.memory_verse {
            writeln!(f, "- **Verset**: {verse}")?;
        }
        if let Some(subjects) = &self.prayer_subjects {
            writeln!(f, "- **Prière**:")?;
            for subject in subjects {
                writeln!(f, "  - {}: {}", subject.theme, subject.subject)?;
            }
        }
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        if let Some(notes) = &self.notes {
            if !notes.is_empty() {
                writeln!(f, "- Notes: {notes}")?;
            }
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for PlanSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let progress = if self.total_days > 0 {
            format!(" ({}/{})", self.completed_days, self.total_days)
        } else {
            String::new()
        };

        writeln!(f, "## {} (ID: {}){progress}", self.name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Status**: {}", self.status)?;
        writeln!(f, "- **Source**: {}", self.source_kind)?;
        writeln!(f, "- **Start date**: {}", self.start_date)?;
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?; // Add blank line after each plan

        Ok(())
    }
}

impl fmt::Display for ProgressStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} days completed ({}%), {} remaining",
            self.completed_days, self.total_days, self.percent, self.remaining_days
        )
    }
}

impl fmt::Display for PresetDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (`{}`)", self.name, self.slug)?;
        writeln!(f)?;
        writeln!(f, "- {}", self.description)?;
        writeln!(f, "- Books: {}", self.books.join(", "))?;
        writeln!(
            f,
            "- Duration: {} days ({} days intensive)",
            self.standard_days, self.intensive_days
        )?;
        if !self.rest_days.is_empty() {
            let mask: Vec<String> = self.rest_days.iter().map(|d| d.to_string()).collect();
            writeln!(f, "- Rest days: {}", mask.join(", "))?;
        }
        writeln!(f)?;

        Ok(())
    }
}
