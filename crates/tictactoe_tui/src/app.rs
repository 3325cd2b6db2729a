//! Terminal lifecycle and the UI loop.

use crate::config::AppConfig;
use crate::controller::{Controller, Flow};
use crate::input::{self, KeyCommand};
use crate::scheduler::ControlEvent;
use crate::ui::TerminalPresenter;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::Path;
use std::time::Duration;
use tictactoe_core::Presenter;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// Sends tracing output to `path` so it does not interfere with the TUI.
pub fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

/// Runs the game until the user quits.
#[instrument(skip_all, fields(mode = %config.default_mode()))]
pub async fn run(config: AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut controller = Controller::new(&config, event_tx);

    let res = {
        let _screen = RestoreGuard::new(restore_terminal);
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut presenter = TerminalPresenter::new(Terminal::new(backend)?);

        event_loop(&mut presenter, &mut controller, &mut event_rx).await
    };

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(score = ?controller.session().score(), "Exiting");
    res
}

/// Runs `restore` when dropped, on success and early return alike.
struct RestoreGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

/// Leaves raw mode and the alternate screen. Safe to call when neither is on.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        error!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        error!(error = %e, "Failed to leave alternate screen");
    }
}

async fn event_loop<P>(
    presenter: &mut TerminalPresenter<P>,
    controller: &mut Controller,
    events: &mut mpsc::UnboundedReceiver<ControlEvent>,
) -> Result<()>
where
    P: ratatui::backend::Backend,
{
    loop {
        presenter.render(&controller.render_state())?;

        while let Ok(event) = events.try_recv() {
            controller.on_event(event)?;
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match input::interpret(key.code, presenter.cursor()) {
                    KeyCommand::Cursor(position) => presenter.set_cursor(position),
                    KeyCommand::Action(action) => {
                        if controller.handle(action) == Flow::Quit {
                            return Ok(());
                        }
                    }
                    KeyCommand::Ignored => {}
                }
            }
        } else {
            tokio::task::yield_now().await;
        }
    }
}
