use std::fs::{self, File};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skeletonable_core::{AppConfig, SkeletonKind};

mod commands;

#[derive(Parser)]
#[command(name = "skeletonable")]
#[command(author, version, about = "Skeleton loading overlay for terminal list views")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive demo table
    Demo {
        /// Skeleton style shown first (solid, solid-animated, gradient, gradient-animated)
        #[arg(short, long)]
        style: Option<SkeletonKind>,
        /// Simulated content load delay in milliseconds
        #[arg(long)]
        load_ms: Option<u64>,
    },
    /// Print the configuration in effect
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    let command = cli.command.unwrap_or(Commands::Demo {
        style: None,
        load_ms: None,
    });

    match command {
        Commands::Demo { style, load_ms } => {
            // The terminal UI owns stdout and stderr, so logs go to a file
            init_file_logging(&config)?;

            if let Some(style) = style {
                config.skeleton.kind = style;
            }
            if let Some(load_ms) = load_ms {
                config.demo.load_delay_ms = load_ms;
            }
            commands::demo::run(Arc::new(config)).await
        }
        Commands::Config { init } => {
            init_stderr_logging(&config);
            commands::config::run(&config, init)
        }
    }
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.general.log_level))
}

fn init_file_logging(config: &AppConfig) -> Result<()> {
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = File::options().create(true).append(true).open(&log_path)?;

    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
