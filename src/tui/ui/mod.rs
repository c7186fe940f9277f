//! UI rendering using ratatui.
//!
//! State flows down into the render functions; the returned
//! [`GameLayout`] lets input handling route clicks back up to the game.

mod board;
mod cell;
mod game;

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::Paragraph,
};

pub use board::{BOARD_HEIGHT, BOARD_WIDTH, BoardLayout, render_board};

const HELP: &str = "arrows/1-9/click: play  [ ]: step  Home/End  r: restart  q: quit";

/// Where the last frame drew the clickable parts of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Board squares.
    pub board: BoardLayout,
    /// Rows of the move list, when one is shown.
    pub moves: Option<Rect>,
}

impl GameLayout {
    /// Index of the move-list row at (`column`, `row`), if any.
    pub fn move_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let moves = self.moves?;
        moves
            .contains(ratatui::layout::Position::new(column, row))
            .then(|| usize::from(row - moves.y))
    }
}

/// Draws the whole screen and returns its clickable layout.
pub fn render(f: &mut Frame, app: &App) -> GameLayout {
    let game = app.game();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new(format!("Tic-Tac-Toe: {}", game.variant().label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 4), Constraint::Min(20)])
        .split(chunks[1]);

    let board = BoardLayout::new(body[0]);
    render_board(
        f,
        &board,
        game.board(),
        Some(app.cursor()),
        game.winning_line(),
    );

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    game::render_status(f, info[0], game.status());

    let entries = game.moves(app.order());
    let moves = if entries.is_empty() {
        game::render_no_history(f, info[1]);
        None
    } else {
        Some(game::render_moves(f, info[1], &entries, app.order()))
    };

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[2]);

    GameLayout { board, moves }
}
