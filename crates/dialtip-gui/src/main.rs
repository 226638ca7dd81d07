//! Dialtip demo - a row of dials with value tooltips.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use dialtip_config::{LoadOutcome, Settings, default_settings_path, load_from};
use dialtip_core::NotifyMode;
use dialtip_gui::{DemoOptions, DialDemoApp};
use eframe::egui;

/// When dials report value changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Notify {
    /// On every change while dragging.
    Continuous,
    /// Once, when the button is released.
    OnRelease,
}

impl From<Notify> for NotifyMode {
    fn from(notify: Notify) -> Self {
        match notify {
            Notify::Continuous => NotifyMode::Continuous,
            Notify::OnRelease => NotifyMode::OnRelease,
        }
    }
}

/// Dial and value-tooltip demo.
#[derive(Parser, Debug)]
#[command(name = "dialtip-demo")]
#[command(about = "Rotary dials with delayed value tooltips")]
#[command(version)]
struct Args {
    /// Settings file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of dials to show
    #[arg(long, default_value = "4")]
    dials: usize,

    /// When dials report changes
    #[arg(long, value_enum, default_value = "continuous")]
    notify: Notify,
}

fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // Initialize tracing subscriber; bridge log:: calls from eframe/egui
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    tracing_log::LogTracer::init().ok();

    let args = Args::parse();
    tracing::info!("Starting dialtip demo");

    let path = args.config.clone().unwrap_or_else(default_settings_path);
    let settings = match load_from(&path) {
        LoadOutcome::Loaded(settings) => {
            tracing::info!(path = %path.display(), "settings loaded");
            settings
        }
        LoadOutcome::Missing => {
            tracing::info!(path = %path.display(), "no settings file, using defaults");
            Settings::default()
        }
        LoadOutcome::Invalid(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring settings file");
            Settings::default()
        }
    };

    let options = DemoOptions {
        dials: args.dials,
        notify: args.notify.into(),
        config: settings.dial_config(),
    };

    let native = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 420.0])
            .with_min_inner_size([360.0, 300.0])
            .with_title("dialtip"),
        ..Default::default()
    };

    eframe::run_native(
        "dialtip",
        native,
        Box::new(move |cc| Ok(Box::new(DialDemoApp::new(&cc.egui_ctx, options)))),
    )
}
