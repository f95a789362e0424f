//! Terminal UI for Strictly Versus

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use strictly_versus::{FileScoreStore, GameConfig, Session, TurnController};
use tokio::sync::mpsc;
use tokio::time::{Duration, interval};
use tracing::{debug, error, info, instrument};

use app::App;
use input::Action;

/// Run the TUI game
pub async fn run_tui(config: GameConfig) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("strictly_versus_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!("Starting Strictly Versus TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_game(&mut terminal, config).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }

    res
}

/// Game loop: draw, then wait for a key, a timer, or a redraw tick.
#[instrument(skip_all)]
async fn run_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: GameConfig,
) -> Result<()> {
    let app = App::new(config.message_ttl(), *config.terminal_bell());
    let store = FileScoreStore::new(config.score_file());
    let controller = TurnController::from_config(app, store, &config);
    let mut session = Session::new(controller);
    session.start();

    let mut keys = spawn_key_reader();
    // Redraw tick so expired messages disappear.
    let mut tick = interval(Duration::from_millis(250));

    loop {
        terminal.draw(|f| {
            let controller = session.controller();
            ui::draw(f, controller.frontend(), controller.state());
        })?;

        tokio::select! {
            Some(event) = session.recv() => session.handle(event),
            key = keys.recv() => {
                let Some(key) = key else {
                    info!("Key reader closed");
                    return Ok(());
                };
                let cursor = session.controller().frontend().cursor();
                match input::action_for(key, cursor) {
                    Action::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    Action::Cursor(pos) => session.controller_mut().frontend_mut().set_cursor(pos),
                    Action::Game(event) => {
                        debug!(?event, "Input event");
                        session.handle(event);
                    }
                    Action::None => {}
                }
            }
            _ = tick.tick() => {}
        }
    }
}

/// Reads key presses on a blocking thread and forwards them.
fn spawn_key_reader() -> mpsc::UnboundedReceiver<KeyCode> {
    let (tx, rx) = mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        loop {
            match event::poll(std::time::Duration::from_millis(100)) {
                Ok(true) => match event::read() {
                    Ok(TermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx.send(key.code).is_err() {
                            return;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => {
                        error!(error = %e, "Failed to read terminal event");
                        return;
                    }
                },
                Ok(false) if tx.is_closed() => return,
                Ok(false) => {}
                Err(e) => {
                    error!(error = %e, "Failed to poll terminal");
                    return;
                }
            }
        }
    });
    rx
}
