//! Application state and input handling.

use super::input::{digit_position, move_cursor};
use super::ui::GameLayout;
use crate::games::tictactoe::{AnyGame, GameVariant, MoveOrder, Position};
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Owns the single game value; every update replaces it wholesale.
#[derive(Debug)]
pub struct App {
    game: AnyGame,
    cursor: Position,
    order: MoveOrder,
    layout: Option<GameLayout>,
    quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument]
    pub fn new(variant: GameVariant, order: MoveOrder) -> Self {
        Self {
            game: AnyGame::new(variant),
            cursor: Position::Center,
            order,
            layout: None,
            quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &AnyGame {
        &self.game
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Order of the move list.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// Returns true once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Records where the last frame put the board and move list.
    pub fn set_layout(&mut self, layout: GameLayout) {
        self.layout = Some(layout);
    }

    /// Clicks the square at `pos`.
    pub fn click(&mut self, pos: Position) {
        self.cursor = pos;
        self.game = self.game.click(pos);
    }

    /// Displays history step `step`; unknown steps are ignored.
    pub fn jump(&mut self, step: usize) {
        match self.game.jump_to(step) {
            Ok(game) => self.game = game,
            Err(e) => debug!(error = %e, "Jump ignored"),
        }
    }

    /// Starts a new game of the same variant.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.game = AnyGame::new(self.game.variant());
        self.cursor = Position::Center;
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            KeyCode::Char('[') => {
                if let Some(step) = self.game.step().checked_sub(1) {
                    self.jump(step);
                }
            }
            KeyCode::Char(']') => self.jump(self.game.step() + 1),
            KeyCode::Home => self.jump(0),
            KeyCode::End => self.jump(self.game.latest_step()),
            KeyCode::Char('s') => self.order = self.order.toggle(),
            KeyCode::Char('r') => self.restart(),
            code => {
                if let Some(pos) = digit_position(code) {
                    self.click(pos);
                }
            }
        }
    }

    /// Handles a mouse event against the last rendered layout.
    ///
    /// A left click on a square places a mark; on a move-list row it jumps.
    #[instrument(skip(self), fields(column = mouse.column, row = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (square, move_row) = match &self.layout {
            Some(layout) => (
                layout.board.position_at(mouse.column, mouse.row),
                layout.move_row_at(mouse.column, mouse.row),
            ),
            None => return,
        };

        if let Some(pos) = square {
            self.click(pos);
        } else if let Some(row) = move_row {
            let entries = self.game.moves(self.order);
            if let Some(entry) = entries.get(row) {
                self.jump(entry.step);
            }
        }
    }
}
