//! Status line and move list beside the board.

use crate::games::tictactoe::{MoveEntry, MoveOrder, Status};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, List, ListItem, Paragraph},
};

/// Renders the status line in a bordered box.
pub fn render_status(f: &mut Frame, area: Rect, status: Status) {
    let style = match status {
        Status::Winner(_) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Tie => Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        Status::NextPlayer(_) => Style::default().fg(Color::Yellow),
    };
    let paragraph = Paragraph::new(status.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered().title("Status"));
    f.render_widget(paragraph, area);
}

/// Renders the jump-to-move list and returns the area holding its rows.
pub fn render_moves(f: &mut Frame, area: Rect, entries: &[MoveEntry], order: MoveOrder) -> Rect {
    let block = Block::bordered().title(format!("Moves ({}, s to sort)", order.label()));
    let inner = block.inner(area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if entry.current {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
            } else {
                Style::default()
            };
            ListItem::new(Line::styled(entry.to_string(), style))
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
    inner
}

/// Placeholder for variants without history.
pub fn render_no_history(f: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new("Classic mode keeps no history")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::bordered().title("Moves"));
    f.render_widget(paragraph, area);
}
