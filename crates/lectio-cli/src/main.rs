//! Lectio CLI Application
//!
//! Command-line interface for the Lectio Bible reading plan manager.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use lectio_core::{params::ListPlans, PlannerBuilder};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Lectio started");

    let cli = Cli::new(planner, renderer);
    match command {
        Some(Plan { command }) => cli.handle_plan_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        None => cli.list_plans(&ListPlans::default()).await,
    }
}
