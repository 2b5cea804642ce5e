// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Wizard engine collision CLI.
//!
//! # Usage
//! ```text
//! wze-cli run <scene.json> [--ticks N] [--epsilon E] [--format table|json] [--reports]
//! wze-cli config show
//! wze-cli config init [--force]
//! ```
//!
//! Logs go to stderr; `RUST_LOG` controls verbosity (default `warn`).

// The CLI is expected to print to stdout/stderr.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use wze_app_core::config::{CollisionSettings, ConfigError};
use wze_cli::render::outcome_table;
use wze_cli::{Scene, Simulation};
use wze_collision::CollisionConfig;
use wze_config_fs::FsConfigStore;

#[derive(Parser, Debug)]
#[command(name = "wze-cli", author, version, about = "Wizard engine collision developer CLI")]
struct Cli {
    /// Config directory (defaults to the platform config dir)
    #[arg(long, global = true)]
    config_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a JSON scene through the collision solver
    Run {
        /// Path to the scene file
        scene: PathBuf,
        /// Ticks to run (overrides the scene; default 1)
        #[arg(long)]
        ticks: Option<u64>,
        /// Separation epsilon (overrides scene and stored config)
        #[arg(long, allow_negative_numbers = true)]
        epsilon: Option<f64>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Keep every per-layer pass report (JSON output only)
        #[arg(long)]
        reports: bool,
    },
    /// Inspect or create the stored solver config
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the effective config as JSON
    Show,
    /// Write the default config
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run {
            scene,
            ticks,
            epsilon,
            format,
            reports,
        } => run(cli.config_dir.as_deref(), &scene, ticks, epsilon, format, reports),
        Command::Config { action } => config(cli.config_dir.as_deref(), action),
    }
}

fn open_store(dir: Option<&Path>) -> Result<FsConfigStore> {
    match dir {
        Some(dir) => Ok(FsConfigStore::at(dir)),
        None => FsConfigStore::new().context("open config store"),
    }
}

/// Stored settings; an unreachable store falls back to the defaults, an
/// invalid document is an error.
fn stored_config(dir: Option<&Path>) -> Result<CollisionConfig> {
    let store = match open_store(dir) {
        Ok(store) => store,
        Err(err) => {
            warn!("using default collision config: {err:#}");
            return Ok(CollisionConfig::default());
        }
    };
    CollisionSettings::new(store)
        .load()
        .context("load collision config")
}

fn run(
    config_dir: Option<&Path>,
    scene_path: &Path,
    ticks: Option<u64>,
    epsilon: Option<f64>,
    format: Format,
    keep_reports: bool,
) -> Result<()> {
    let scene = Scene::load(scene_path)
        .with_context(|| format!("load scene {}", scene_path.display()))?;

    let mut config = stored_config(config_dir)?;
    if let Some(epsilon) = epsilon.or(scene.epsilon) {
        config.epsilon = epsilon;
    }
    let ticks = ticks.or(scene.ticks).unwrap_or(1);

    let mut sim = Simulation::new(&scene, config).context("build simulation")?;
    let outcome = if keep_reports {
        sim.run_recorded(ticks)
    } else {
        sim.run(ticks)
    };
    info!(
        ticks,
        actors = outcome.actors.len(),
        corrections = outcome.totals.corrections,
        "scene complete"
    );

    match format {
        Format::Table => println!("{}", outcome_table(&outcome)),
        Format::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
    }
    Ok(())
}

fn config(config_dir: Option<&Path>, action: ConfigAction) -> Result<()> {
    let settings = CollisionSettings::new(open_store(config_dir)?);
    match action {
        ConfigAction::Show => {
            let config = settings.load().context("load collision config")?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Init { force } => match settings.init(force) {
            Ok(_) => println!("wrote {}", settings.location()),
            Err(ConfigError::AlreadyExists(at)) => {
                bail!("{at} already exists; pass --force to overwrite")
            }
            Err(err) => return Err(err).context("write collision config"),
        },
    }
    Ok(())
}
