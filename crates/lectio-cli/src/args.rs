use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{DayCommands, PlanCommands};

/// Main command-line interface for the Lectio reading plan manager
///
/// Lectio manages Bible reading plans: it can generate plans fully locally,
/// fetch them from a third-party generator site, build them from named
/// presets, or import them from ICS calendars, and then track day-by-day
/// reading progress.
#[derive(Parser)]
#[command(version, about, name = "lectio")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/lectio/lectio.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Lectio CLI
///
/// The CLI is organized into two main command categories:
/// - `plan`: Operations on whole plans (create, generate, import, list, ...)
/// - `day`: Operations on individual reading days (list, complete, reset)
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plans
    #[command(alias = "p")]
    Plan {
        #[command(subcommand)]
        command: PlanCommands,
    },
    /// Manage reading days within plans
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
}
