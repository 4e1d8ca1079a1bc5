//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictactoe_duel::{AppConfig, ComputerTurn, Mode};
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

use app::App;

/// Run the TUI, optionally starting straight into a game in `mode`.
pub async fn run_tui(config: AppConfig, mode: Option<Mode>) -> Result<()> {
    // Log to a file so output does not tear up the terminal
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(delay = ?config.computer_delay(), "Starting tic-tac-toe TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (turn_tx, mut turn_rx) = mpsc::unbounded_channel();
    let mut app = App::new(config.computer_delay(), turn_tx);
    if let Some(mode) = mode {
        app.start(mode);
    }

    let res = run_app(&mut terminal, &mut app, &mut turn_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }

    res
}

#[instrument(skip_all)]
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    turn_rx: &mut mpsc::UnboundedReceiver<ComputerTurn>,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // Computer turns whose delay has elapsed
        while let Ok(turn) = turn_rx.try_recv() {
            app.on_computer_turn(turn);
        }

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && !app.handle_key(key.code)
        {
            return Ok(());
        }

        // Let the timer tasks run
        tokio::task::yield_now().await;
    }
}
