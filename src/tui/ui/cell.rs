//! A single board square.

use crate::games::tictactoe::{Player, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Paragraph},
};

/// What a square needs to know to draw itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellProps {
    /// Which square this is.
    pub position: Position,
    /// What the square holds.
    pub square: Square,
    /// Keyboard cursor is on this square.
    pub focused: bool,
    /// Square belongs to the winning line.
    pub winning: bool,
}

impl CellProps {
    /// Text shown in the square: the mark, or the digit key for an empty one.
    pub fn symbol(&self) -> String {
        match self.square {
            Square::Empty => (self.position.to_index() + 1).to_string(),
            Square::Occupied(player) => player.to_string(),
        }
    }

    fn style(&self) -> Style {
        let base = match self.square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            Square::Occupied(Player::O) => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };

        if self.focused {
            base.bg(Color::White).fg(Color::Black)
        } else if self.winning {
            base.bg(Color::Green)
        } else {
            base
        }
    }
}

/// Renders one square, with its symbol on the middle line.
pub fn render_cell(f: &mut Frame, area: Rect, props: CellProps) {
    let style = props.style();
    f.render_widget(Block::default().style(style), area);

    let middle = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph = Paragraph::new(props.symbol())
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, middle);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_for_empty_and_marked() {
        let mut props = CellProps {
            position: Position::MiddleRight,
            square: Square::Empty,
            focused: false,
            winning: false,
        };
        assert_eq!(props.symbol(), "6");

        props.square = Square::Occupied(Player::O);
        assert_eq!(props.symbol(), "O");
    }

    #[test]
    fn test_focus_wins_over_highlight() {
        let props = CellProps {
            position: Position::Center,
            square: Square::Occupied(Player::X),
            focused: true,
            winning: true,
        };
        assert_eq!(props.style().bg, Some(Color::White));
    }
}
