//! Fasal CLI Application
//!
//! Command-line interface for the seasonal crop calendar and farm planner.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use fasal_core::{models::Month, PlannerBuilder, Settings};
use handlers::{Cli, SeasonView};
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())
        .context("Failed to load configuration")?
        .merge(args.overrides());

    let renderer = TerminalRenderer::new(!args.no_color);
    let locale = settings.locale();

    info!("Fasal started (user {}, locale {locale})", settings.user_id());

    match args.command {
        Some(Commands::Season { command }) => SeasonView::new(locale, renderer).handle(command),
        Some(Commands::Plan { command }) => {
            let planner = PlannerBuilder::new()
                .with_user(settings.user_id())
                .with_api_url(settings.api_url().map(str::to_string))
                .with_database_path(settings.database_file.as_ref())
                .build()
                .await
                .context("Failed to initialize planner")?;

            Cli::new(planner, renderer).handle_plan_command(command).await
        }
        None => SeasonView::new(locale, renderer).month_guide(Month::of(handlers::today())),
    }
}
