//! Radio Overlay - geometry replay entry point

use clap::Parser;
use radio_overlay::model::AppError;
use std::path::PathBuf;
use tracing::info;

/// Replay radio refresh ticks and resize events through the overlay
/// geometry engine, printing one JSON report per step.
#[derive(Parser, Debug)]
#[command(name = "radio-overlay")]
#[command(version)]
#[command(about = "Aspect-locked geometry engine for the radio overlay window")]
pub struct Args {
    /// Path to a JSON replay script
    pub script: PathBuf,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Close instead of minimise (overlay hidden from taskbar)
    #[arg(long)]
    pub taskbar_hide: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args)?;
    Ok(())
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = radio_overlay::config::load_config_with_precedence(args.config.clone())?;
        let merged = radio_overlay::config::merge_config(config_file);
        let with_env = radio_overlay::config::apply_env_overrides(merged);

        // Only override if the flag was explicitly set
        let taskbar_hide_override = if args.taskbar_hide { Some(true) } else { None };
        radio_overlay::config::apply_cli_overrides(with_env, taskbar_hide_override)
    };
    config.geometry.validate()?;

    radio_overlay::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let script = radio_overlay::source::load_script(&args.script)?;
    let reports = radio_overlay::integration::replay(&script, &config);
    info!(steps = reports.len(), "Replay finished");

    let stdout = std::io::stdout();
    radio_overlay::integration::write_reports(&reports, stdout.lock())?;

    Ok(())
}
