use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use gallery::prelude::*;
use gallery::runtime::app::print_listing;
use gallery::runtime::settings::GallerySettings;
use gallery::runtime::storage;

#[derive(Parser, Debug)]
#[command(name = "sketches", about = "A gallery of generative-art sketches")]
struct Cli {
    /// Reuse this seed on every reset instead of drawing a fresh one
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Directory exported images are written to
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Override every sketch's frame rate
    #[arg(long, global = true)]
    fps: Option<f32>,

    /// Write the resolved settings back to the settings file
    #[arg(long, global = true)]
    save_settings: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List registered sketches, most recent first
    List,
    /// Open the interactive selector, optionally starting on a sketch
    Run { name: Option<String> },
    /// Render a sketch without pacing and export it as `<name>.png`
    Render {
        name: String,
        /// Frames to advance after the first draw (looping sketches only)
        #[arg(long, default_value_t = 0)]
        frames: u64,
    },
}

fn main() {
    init_logger();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        error!("{}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut registry = sketches::registry()?;
    let settings = resolve_settings(&cli)?;

    match cli.command.unwrap_or(Command::Run { name: None }) {
        Command::List => {
            print_listing(&registry);
            Ok(())
        }
        Command::Run { name } => {
            gallery::run_registry(registry, name.as_deref(), &settings)
        }
        Command::Render { name, frames } => {
            let path = gallery::render_headless(
                &mut registry,
                &name,
                frames,
                &settings,
            )?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

/// Stored settings with command-line flags layered on top, persisted again
/// when `--save-settings` is given.
fn resolve_settings(cli: &Cli) -> Result<GallerySettings> {
    let config_dir = storage::config_dir();
    let mut settings = match &config_dir {
        Some(dir) => {
            storage::load_settings_if_exists(dir)?.unwrap_or_default()
        }
        None => GallerySettings::default(),
    };

    apply_overrides(cli, &mut settings);
    debug!("Settings: {:?}", settings);

    if cli.save_settings {
        match &config_dir {
            Some(dir) => {
                let path = storage::save_settings(dir, &settings)?;
                info!("Saved settings to {}", path.display());
            }
            None => warn!("No config directory; settings not saved"),
        }
    }

    Ok(settings)
}

fn apply_overrides(cli: &Cli, settings: &mut GallerySettings) {
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    if let Some(out) = &cli.out {
        settings.images_dir = out.to_string_lossy().into_owned();
    }
    if cli.fps.is_some() {
        settings.fps_override = cli.fps;
    }
}
