//! Pagebar - a page navigation toolbar for the terminal
//!
//! Click to select pages, drag them to reorder, hover between them to
//! insert new ones, and right-click for the page menu.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod tui;

use config::PagebarConfig;

/// Pagebar - page navigation toolbar
#[derive(Parser)]
#[command(name = "pagebar")]
#[command(about = "A page navigation toolbar for the terminal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (defaults to ~/.pagebar/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Theme name, overrides the config file
    #[arg(short, long)]
    theme: Option<String>,

    /// Disable the starfield background
    #[arg(long)]
    no_stars: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the toolbar (default)
    Run,

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableMouseCapture,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}

/// Send logs to a file so they never draw over the TUI
fn init_logging() {
    let log_dir = config::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let Ok(log_file) = std::fs::File::create(log_dir.join("pagebar.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PagebarConfig::load_from_path(path)?,
        None => PagebarConfig::load()?,
    };
    if let Some(theme) = cli.theme {
        config.theme = theme;
    }
    if cli.no_stars {
        config.starfield.enabled = false;
    }

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Run) | None => {
            let theme = tui::THEME_REGISTRY.get_or_default(&config.theme);
            tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

            let mut app = tui::App::new(&config);
            app.run().await?;
        }
    }

    Ok(())
}
