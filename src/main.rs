//! admin-tui - A terminal admin console
//!
//! This is the main entry point for the admin-tui application.
//! It uses the Component Architecture pattern from ratatui.

mod action;
mod app;
mod component;
mod components;
mod config;
mod error;
mod logging;
mod model;
mod services;
mod tui;
mod util;

use crate::action::Action;
use crate::app::App;
use crate::component::Component;
use crate::config::Config;
use crate::services::{DemoRowSource, FileRowSource, RowSource};
use crate::tui::{Ticker, Tui};
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::Event;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "admin-tui")]
#[command(version)]
#[command(about = "Terminal admin console with paged tables, batch actions and toasts")]
struct Args {
    /// Directory with <section>.csv or <section>.json row files (demo data if unset)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Rows per page
    #[arg(short, long)]
    page_size: Option<usize>,

    /// Config file (default: ~/.admin-tui/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args
        .config
        .clone()
        .or_else(Config::config_path)
        .context("cannot locate config file: HOME is not set and --config was not given")?;
    let mut config = Config::load_or_init(&config_path)?;
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }

    // Initialize logging; the guard flushes the file writer on exit
    let log_dir = config_path
        .parent()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"));
    let _logging = logging::init(&log_dir, &config.log_level);

    let data_dir = args
        .data_dir
        .or_else(|| config.data_dir.as_ref().map(PathBuf::from));
    let source: Box<dyn RowSource> = match data_dir {
        Some(dir) => Box::new(FileRowSource::new(dir)),
        None => Box::new(DemoRowSource::default()),
    };

    // Setup terminal
    let mut tui = Tui::new()?;
    tui.enter()?;

    // Create app state
    let mut app = App::new(config, source);
    let result = app.init().and_then(|_| run_app(&mut tui, &mut app));

    // Cleanup terminal, then report; returning lets the log guard flush
    let restored = tui.exit();
    finish(result, restored)
}

/// Combine the run outcome with terminal restoration. The run's own error
/// takes precedence; a restore failure is logged either way.
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    if let Err(e) = &restored {
        tracing::error!(error = ?e, "failed to restore terminal");
    }
    match result {
        Err(err) => {
            tracing::error!(error = ?err, "admin-tui exited with an error");
            Err(err)
        }
        Ok(()) => restored,
    }
}

/// Run the main application loop
fn run_app(tui: &mut Tui, app: &mut App) -> Result<()> {
    let mut ticker = Ticker::new(app.config.tick_rate(), Instant::now());

    while !app.should_quit {
        // Draw the UI
        tui.draw(|frame| {
            if let Err(e) = app.draw(frame, frame.area()) {
                tracing::warn!(error = %e, "draw failed");
            }
        })?;

        // Poll for events, never waiting past the next tick
        if let Some(event) = tui.next_event(ticker.timeout(Instant::now()))? {
            // Convert event to action
            let action = match event {
                Event::Key(key) => app.handle_key_event(key)?,
                Event::Resize(w, h) => Some(Action::Resize(w, h)),
                _ => None,
            };

            // Process the action
            if let Some(action) = action {
                // Action might produce a follow-up action
                let mut current_action = Some(action);
                while let Some(a) = current_action {
                    current_action = app.update(a)?;
                }
            }
        }

        // Ticks keep their schedule even under continuous input
        if ticker.due(Instant::now()) {
            app.update(Action::Tick)?;
        }
    }

    Ok(())
}
