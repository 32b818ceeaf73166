use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use common::{GameConfig, DEFAULT_POLL_INTERVAL_MS};
use terminal::app::{App, AppCommand};

fn main() -> Result<()> {
    // Log to a file so the TUI stays clean; `log` records from the core are bridged in
    let log_path = std::env::temp_dir().join("supersnake.log");
    let log_file = File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    // Optional config file as the first argument
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => GameConfig::load(&path)?,
        None => GameConfig::default(),
    };
    tracing::info!(?config, "starting supersnake");

    let mut app = App::new(config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    println!("Final score: {}", app.session().score().score());
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.update();

        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(DEFAULT_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(command) = app.handle_input(key) {
                    match command {
                        AppCommand::Quit => return Ok(()),
                        _ => app.handle_command(command),
                    }
                }
            }
        }
    }
}
