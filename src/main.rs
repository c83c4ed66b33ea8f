//! Chipfield - pick people as chips from a terminal autocomplete field.
//!
//! Type to filter, Enter or click to add, Backspace twice or click `×` to
//! remove. The chosen people can be printed as JSON on exit.

mod app;
mod autocomplete;
mod config;
mod data;
mod error;
mod events;
mod logging;
mod ui;

use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use std::sync::Once;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info, warn};

use crate::app::App;
use crate::config::Config;
use crate::data::Candidate;
use crate::error::AppError;
use crate::events::EventHandler;

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(name = "chipfield", version, about = "Terminal chip autocomplete for picking people")]
struct Cli {
    /// JSON file of people to pick from (defaults to the bundled sample).
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Match names case-sensitively.
    #[arg(long)]
    case_sensitive: bool,

    /// Print the selected people as JSON on exit.
    #[arg(short, long)]
    print_selection: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init() {
        eprintln!("Warning: could not initialize logging: {e}");
    }

    let result = run(&cli);
    if let Err(e) = &result {
        error!(error = %e, "Exiting with error");
    }
    logging::shutdown();
    result
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli).map_err(report)?;
    if cli.case_sensitive {
        config.settings.case_sensitive = true;
    }
    let candidates = load_people(cli, &config).map_err(report)?;

    let mut terminal = setup_terminal().context("Failed to set up terminal")?;
    let mut app = App::new(candidates, &config);
    let loop_result = event_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal).context("Failed to restore terminal")?;
    loop_result?;

    let selection = app.selection();
    info!(count = selection.len(), "Session finished");
    if cli.print_selection {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    }
    Ok(())
}

/// Attach the friendly message and hint to an error before it reaches the user.
fn report(e: AppError) -> anyhow::Error {
    let message = match e.suggested_action() {
        Some(hint) => format!("{}\nHint: {hint}", e.user_message()),
        None => e.user_message(),
    };
    anyhow::Error::new(e).context(message)
}

fn load_config(cli: &Cli) -> error::Result<Config> {
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    match loaded.map_err(AppError::from) {
        Ok(config) => Ok(config),
        Err(e) if !e.is_critical() => {
            warn!(error = %e, "Failed to load config, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Command line path first, then the configured path, then the bundled sample.
fn load_people(cli: &Cli, config: &Config) -> error::Result<Vec<Candidate>> {
    let path = cli.data.as_ref().or(config.settings.data_path.as_ref());
    let candidates = match path {
        Some(path) => data::load_candidates(path)?,
        None => data::sample_candidates()?,
    };
    Ok(candidates)
}

type Backend = CrosstermBackend<Stdout>;

fn setup_terminal() -> io::Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    ) {
        reset_terminal();
        return Err(e);
    }
    install_panic_hook();
    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        reset_terminal();
        e
    })
}

/// Best-effort undo of everything [`setup_terminal`] turned on.
fn reset_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
}

/// Restore the terminal before the default hook prints the panic.
fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            reset_terminal();
            error!(%info, "Panic");
            default_panic(info);
        }));
    });
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()
}

fn event_loop(terminal: &mut Terminal<Backend>, app: &mut App) -> error::Result<()> {
    let events = EventHandler::new();
    while !app.should_quit() {
        terminal
            .draw(|frame| app.view(frame))
            .map_err(|e| AppError::terminal(e.to_string()))?;
        app.update(events.next()?);
    }
    Ok(())
}
