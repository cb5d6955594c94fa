use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueHint};
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;
use trajview_core::locator::{self, LocateError};
use trajview_core::model::{RunLogs, TrajectoryViewer};
use trajview_ui::TrajViewApp;

const WINDOW_TITLE: &str = "trajview";
const WINDOW_SIZE: [f32; 2] = [900.0, 700.0];
const DEFAULT_LOG_FILTER: &str = "warn,trajview_core=info,trajview_ui=info";

#[derive(Parser, Debug)]
#[command(version, about = "Plot logged trajectories and scrub through their time steps")]
struct Cli {
    /// Directory containing the trajectory logs (default: newest
    /// `trajectory_*` directory under ~/.ros/log)
    #[arg(long, value_hint = ValueHint::DirPath)]
    directory: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing();

    let Some(directory) = find_run(cli.directory)? else {
        eprintln!("No trajectory directory found.");
        return Ok(ExitCode::FAILURE);
    };

    let run = RunLogs::load(&directory)
        .with_context(|| format!("failed to load run {}", directory.display()))?;
    let viewer = TrajectoryViewer::new(run)?;
    info!(run = %directory.display(), "opening viewer");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TrajViewApp::new(cc, viewer)))),
    )
    .map_err(|e| anyhow!("viewer window failed: {e}"))?;

    Ok(ExitCode::SUCCESS)
}

/// The run to open, or `None` when auto-locating found nothing.
fn find_run(explicit: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if explicit.is_some() {
        return Ok(explicit);
    }
    let Some(root) = locator::default_log_root() else {
        return Ok(None);
    };
    match locator::locate(None, &root) {
        Ok(dir) => Ok(Some(dir)),
        Err(LocateError::NoRunFound { .. }) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
