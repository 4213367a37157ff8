#![allow(non_snake_case)]

mod app;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Duration;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

use crate::context::AppConfig;

/// Global configuration, set once from the command line
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Get the application configuration (command line or defaults)
pub fn get_config() -> AppConfig {
    CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| AppConfig::new(default_summary_path(), None))
}

/// `<data dir>/wellspring/community.json`
fn default_summary_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wellspring")
        .join("community.json")
}

/// Wellspring - Community dashboard
#[derive(Parser, Debug)]
#[command(name = "wellspring-desktop")]
#[command(about = "Wellspring - community activity at a glance")]
struct Args {
    /// JSON file holding the community summary
    #[arg(short, long)]
    summary: Option<PathBuf>,

    /// Re-read the summary every N seconds (0 disables refresh)
    #[arg(short, long, default_value_t = 0)]
    refresh_secs: u64,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    wellspring_core::logging::init(&args.log_level);

    let summary_path = args.summary.unwrap_or_else(default_summary_path);
    let refresh = (args.refresh_secs > 0).then(|| Duration::from_secs(args.refresh_secs));

    tracing::info!(
        "Starting Wellspring with summary file {:?} (refresh: {:?})",
        summary_path,
        refresh
    );

    let _ = CONFIG.set(AppConfig::new(summary_path, refresh));

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Wellspring")
            .with_inner_size(dioxus::desktop::LogicalSize::new(560.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
