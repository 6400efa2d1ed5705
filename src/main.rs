//! blocklaunch - launcher shell
//!
//! A terminal front for a block-game launcher.
//!
//! Features:
//! - Account identity (name + account type) kept in local storage
//! - Theme primary color and language picked up from local storage
//! - Tabbed body: Home, Servers, Tools, Mods, Settings
//! - Onboarding (--welcome) and opening (--opening) screens
//!
//! Usage: blocklaunch [--welcome] [--opening] [--strings FILE]

mod account;
mod app;
mod body;
mod config;
mod i18n;
mod snackbar;
mod storage;
mod types;
mod ui;
mod views;

use anyhow::{bail, Context, Result};
use app::{App, AppProps};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use storage::{LocalStorage, SessionStorage};
use tracing_subscriber::EnvFilter;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    welcome: bool,
    opening: bool,
    strings: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args::default();
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--welcome" | "-w" => parsed.welcome = true,
            "--opening" | "-o" => parsed.opening = true,
            "--strings" | "-s" => {
                let path = iter.next().context("--strings needs a file path")?;
                parsed.strings = Some(PathBuf::from(path));
            }
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok(parsed)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    if args.iter().any(|a| a == "--version" || a == "-v") {
        println!("blocklaunch {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Run the application
    let result = parse_args(&args).and_then(run_app);

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"blocklaunch - launcher shell

USAGE:
    blocklaunch [OPTIONS]

OPTIONS:
    -w, --welcome         Show the onboarding screen
    -o, --opening         Show the opening screen
    -s, --strings FILE    Message catalog (JSON object of id -> text)
    -h, --help            Print help information
    -v, --version         Print version information

KEYBINDINGS:
    1-5              Switch tabs
    h/l, Tab         Previous/next tab
    j/k              Navigate up/down
    Enter            Select/confirm
    Esc              Cancel editing
    F5, Ctrl+R       Reload
    q                Quit

TABS:
    [1] Home         Greeting and quick actions
    [2] Servers
    [3] Tools
    [4] Mods
    [5] Settings     Account, language and theme color

FILES:
    ~/.config/blocklaunch/config.toml
    <data dir>/blocklaunch/local_storage.json
    <data dir>/blocklaunch/blocklaunch.log
"#
    );
}

/// Send tracing output to a log file so it does not draw over the UI
fn init_logging(dir: &Path, level: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create data directory {:?}", dir))?;

    let path = dir.join("blocklaunch.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Failed to initialize logging")
}

fn run_app(args: Args) -> Result<()> {
    // Load configuration
    let config = config::Config::load()
        .context("Failed to load configuration")?;

    let data_dir = config.data_dir()?;
    init_logging(&data_dir, &config.log_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting");

    let strings = args
        .strings
        .as_deref()
        .map(i18n::load_catalog)
        .transpose()?;

    let props = AppProps {
        welcome: args.welcome,
        opening: args.opening,
        strings,
    };

    let local = LocalStorage::open(&data_dir)
        .context("Failed to open local storage")?;

    // Create application state
    let mut app = App::new(props, config, local, SessionStorage::new())
        .context("Failed to initialize application")?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .context("Failed to create terminal")?;

    // Run main loop
    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    if let Err(e) = &result {
        tracing::error!(error = %format!("{:#}", e), "shell stopped");
    } else {
        tracing::info!("quit");
    }

    result
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Render UI
        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        // Spinner frames and snackbar expiry
        app.on_tick(Instant::now());

        // Poll for events with timeout (for timer updates)
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        // Check if should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("blocklaunch")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_help_does_not_panic() {
        print_help();
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(&argv(&[])).unwrap(), Args::default());

        let args = parse_args(&argv(&["--welcome", "-o", "--strings", "en.json"])).unwrap();
        assert!(args.welcome);
        assert!(args.opening);
        assert_eq!(args.strings, Some(PathBuf::from("en.json")));
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&argv(&["--strings"])).is_err());
        assert!(parse_args(&argv(&["--bogus"])).is_err());
    }
}
