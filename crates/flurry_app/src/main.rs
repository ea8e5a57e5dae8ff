//! Flurry CLI
//!
//! Run the particle engine against a scripted headless host.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use flurry_app::{AppConfig, ParticleApp, SceneScript};
use flurry_platform::ScriptedEventLoop;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "flurry")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Decorative particle engine", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scene on the headless host and print a summary
    Run {
        /// Configuration file (defaults to ./flurry.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Scene script (defaults to the built-in demo scene)
        #[arg(short, long)]
        scene: Option<PathBuf>,

        /// Override the number of frames to run
        #[arg(short, long)]
        frames: Option<u64>,

        /// Override the random seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Configuration file (defaults to ./flurry.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Run {
            config,
            scene,
            frames,
            seed,
        } => cmd_run(config.as_deref(), scene.as_deref(), frames, seed),

        Commands::Config { config } => cmd_config(config.as_deref()),
    }
}

fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => AppConfig::load_from_dir(Path::new("."))
            .context("Failed to load config from the current directory"),
    }
}

fn cmd_run(
    config_path: Option<&Path>,
    scene_path: Option<&Path>,
    frames: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    if seed.is_some() {
        config.engine.seed = seed;
    }

    let control = config.control.bounds();
    let mut scene = match scene_path {
        Some(path) => SceneScript::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => SceneScript::demo(control),
    };
    if let Some(frames) = frames {
        scene.frames = frames;
        scene.events.retain(|event| event.frame < frames);
    }

    info!(
        "Running {} frames at {}x{} with {} scripted events",
        scene.frames,
        config.window.width,
        config.window.height,
        scene.events.len()
    );

    let mut event_loop = ScriptedEventLoop::new(config.window_config(), scene.frames)
        .context("Failed to create headless window")?;
    event_loop
        .schedule_all(scene.to_host_events(control))
        .context("Invalid scene")?;

    let app = ParticleApp::new(&config).context("Failed to start the particle engine")?;
    let totals = app.run(event_loop).context("Event loop failed")?;

    println!("frames     {}", totals.frames);
    println!("spawned    {}", totals.spawned);
    println!("rendered   {}", totals.rendered);
    println!("drawn      {}", totals.drawn);
    println!("pruned     {}", totals.pruned);
    println!("peak live  {}", totals.peak_live);
    println!("live       {}", totals.live);

    Ok(())
}

fn cmd_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let text = config.to_toml().context("Failed to serialize config")?;
    print!("{}", text);
    Ok(())
}
