//! Tic-tac-toe board rendering and hit-testing.

use super::cell::{CellProps, render_cell};
use crate::games::tictactoe::{Board, Position, rules::Line};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

/// Width of the drawn board in columns.
pub const BOARD_WIDTH: u16 = 23;
/// Height of the drawn board in rows.
pub const BOARD_HEIGHT: u16 = 11;

/// Screen rectangles of the board's squares and grid lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    cells: [Rect; 9],
    rules: [Rect; 2],
    bars: [Rect; 6],
}

impl BoardLayout {
    /// Lays out the board centered in `area`.
    pub fn new(area: Rect) -> Self {
        let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(board_area);

        let mut cells = [Rect::default(); 9];
        let mut bars = [Rect::default(); 6];
        for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Length(7),
                    Constraint::Length(1),
                    Constraint::Length(7),
                    Constraint::Length(1),
                    Constraint::Length(7),
                ])
                .split(row_area);
            for (c, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
                cells[r * 3 + c] = col_area;
            }
            bars[r * 2] = cols[1];
            bars[r * 2 + 1] = cols[3];
        }

        Self {
            cells,
            rules: [rows[1], rows[3]],
            bars,
        }
    }

    /// Rectangle of the square at `pos`.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// The square drawn at terminal cell (`column`, `row`), if any.
    pub fn position_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cell(*pos).contains(point))
    }
}

/// Renders the board, highlighting `cursor` and any winning line.
pub fn render_board(
    f: &mut Frame,
    layout: &BoardLayout,
    board: &Board,
    cursor: Option<Position>,
    winning: Option<Line>,
) {
    for pos in Position::ALL {
        let props = CellProps {
            position: pos,
            square: board.get(pos),
            focused: cursor == Some(pos),
            winning: winning.is_some_and(|line| line.contains(pos)),
        };
        render_cell(f, layout.cell(pos), props);
    }

    for rule in layout.rules {
        let sep = Paragraph::new("─".repeat(rule.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(sep, rule);
    }
    for bar in layout.bars {
        let sep = Paragraph::new("│\n".repeat(bar.height as usize))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(sep, bar);
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
