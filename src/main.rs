use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dori_debug::config::DisplayConfig;
use dori_debug::display::console::ConsoleRenderer;
use dori_debug::display::StatusDisplay;
use dori_debug::dump::FrameDump;
use dori_debug::labels::Locale;
use dori_debug::{demo, logging, new_shared_command_log, new_shared_status};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dori-debug")]
#[command(about = "Live status and command-log display for AutoDori", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the display against a simulated automation host
    Demo {
        /// Use the plain console display even if the terminal UI is available
        #[arg(long)]
        console: bool,

        /// Path to a display config file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write logs here instead of the cache directory
        #[arg(long)]
        log_file: Option<PathBuf>,

        /// Delay between simulated host steps, in milliseconds
        #[arg(long, default_value_t = 700)]
        period_ms: u64,
    },

    /// Print one console frame from a JSON dump of the shared state
    Frame {
        /// Path to the dump: {"status": {...}, "commands": [{"cmd": .., "cost": ..}]}
        file: PathBuf,

        /// Caption language (zh or en)
        #[arg(long, default_value = "zh")]
        locale: Locale,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            console,
            config,
            log_file,
            period_ms,
        } => run_demo(console, config, log_file, period_ms),
        Commands::Frame { file, locale } => print_frame(file, locale),
    }
}

fn run_demo(
    console: bool,
    config_path: Option<PathBuf>,
    log_file: Option<PathBuf>,
    period_ms: u64,
) -> Result<()> {
    let log_path =
        logging::init("info", log_file.as_deref()).context("Failed to initialize logging")?;

    let mut config = DisplayConfig::load(config_path.as_deref())
        .context("Failed to load display config")?;
    if console {
        config.force_console = true;
    }

    let status = new_shared_status();
    let log = new_shared_command_log();

    let mut display =
        StatusDisplay::new(status.clone(), log.clone(), config).with_interrupt_handler();
    let stop = display.stop_handle();
    let producer = demo::spawn_producer(status, log, stop, Duration::from_millis(period_ms));

    display.run();

    if producer.join().is_err() {
        anyhow::bail!("Demo producer panicked");
    }
    println!("Logs written to {}", log_path.display());
    Ok(())
}

fn print_frame(file: PathBuf, locale: Locale) -> Result<()> {
    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let dump = FrameDump::from_json(&content)
        .with_context(|| format!("Failed to parse {}", file.display()))?;

    let config = DisplayConfig {
        locale,
        ..DisplayConfig::default()
    };
    let (status, log) = dump.into_shared();
    let renderer = ConsoleRenderer::stdout(&config).without_clear();
    let mut display = StatusDisplay::with_renderer(status, log, config, Box::new(renderer));
    display.tick().context("Failed to render frame")?;
    Ok(())
}
