//! Terminal UI host for the game.

mod app;
mod input;
pub mod ui;

use crate::config::GameConfig;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use tracing::{error, info, instrument, warn};

pub use app::App;

/// Runs the game in the terminal until the player quits.
#[instrument(skip_all, fields(variant = ?config.variant()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(*config.variant(), *config.move_order());
    let res = run_app(&mut terminal, &mut app);
    drop(terminal);
    guard.leave()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(status = %app.game().status(), "Terminal UI closed");
    res
}

/// Raw mode plus alternate screen, undone when dropped.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, an early return restores the terminal in `drop`.
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }

    /// Restores the terminal, reporting the first failure.
    fn leave(mut self) -> Result<()> {
        self.active = false;
        restore_terminal(&mut io::stdout()).context("Failed to restore terminal")
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = restore_terminal(&mut io::stdout()) {
                warn!(error = %e, "Failed to restore terminal");
            }
        }
    }
}

/// Leaves raw mode and the alternate screen.
///
/// Both steps run even if the first fails.
fn restore_terminal(out: &mut impl Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show);
    raw.and(screen)
}

/// Draw, wait for one event, apply it; repeat.
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let mut layout = None;
        terminal.draw(|f| layout = Some(ui::render(f, app)))?;
        if let Some(layout) = layout {
            app.set_layout(layout);
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}
