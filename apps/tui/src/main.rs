//! Termfolio - a terminal-style SRE portfolio.

use std::io::stdout;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use tracing::info;

use termfolio_core::Shell;
use termfolio_tui::app::App;
use termfolio_tui::cli::Args;
use termfolio_tui::config::TuiConfig;
use termfolio_tui::{exec, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = match args.config {
        Some(ref path) => path.clone(),
        None => TuiConfig::config_path()?,
    };
    let mut config = if args.config.is_some() {
        TuiConfig::load_from(&config_path)?
    } else {
        TuiConfig::load()?
    };
    args.apply(&mut config);
    config.validate()?;

    let log_dir = config_path.parent().map(ToOwned::to_owned).unwrap_or_default();
    logging::init(&log_dir)?;

    let data = Arc::new(config.load_profile()?);
    let mut shell = Shell::new(data, &config.shell);
    info!(locale = %shell.session().locale(), exec = args.exec.len(), "starting termfolio");

    if !args.exec.is_empty() {
        return exec::run_lines(&mut shell, &args.exec, args.plain, &mut stdout().lock());
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(shell, &config);
    let result = app.run(&mut terminal).await;

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
