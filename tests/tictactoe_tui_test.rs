//! Tests for the terminal host: rendering and click routing.

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend};
use strictly_tictactoe::{
    App, GameLayout, GameVariant, MoveOrder, Player, Position, Square, render,
};

/// Draws one frame, hands its layout to the app, and returns the screen text.
fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) -> (String, GameLayout) {
    let mut layout = None;
    terminal
        .draw(|f| layout = Some(render(f, app)))
        .expect("draw to test backend");
    let layout = layout.expect("render returns a layout");
    app.set_layout(layout);

    let screen = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    (screen, layout)
}

fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn test_initial_screen_shows_status_and_start_entry() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = App::new(GameVariant::TimeTravel, MoveOrder::Ascending);

    let (screen, _) = draw(&mut terminal, &mut app);
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to game start"));
}

#[test]
fn test_mouse_click_on_square_places_mark() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = App::new(GameVariant::TimeTravel, MoveOrder::Ascending);
    let (_, layout) = draw(&mut terminal, &mut app);

    let cell = layout.board.cell(Position::BottomLeft);
    app.handle_mouse(left_click(cell.x + 1, cell.y + 1));

    assert_eq!(
        app.game().board().get(Position::BottomLeft),
        Square::Occupied(Player::X)
    );
    let (screen, _) = draw(&mut terminal, &mut app);
    assert!(screen.contains("Next player: O"));
    assert!(screen.contains("Go to move #1 (1, 3)"));
}

#[test]
fn test_mouse_click_on_move_list_jumps() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = App::new(GameVariant::TimeTravel, MoveOrder::Ascending);
    app.click(Position::Center);
    app.click(Position::TopLeft);

    let (_, layout) = draw(&mut terminal, &mut app);

    let rows = layout.moves.expect("time travel shows a move list");
    app.handle_mouse(left_click(rows.x + 2, rows.y));
    assert_eq!(app.game().step(), 0);

    app.handle_mouse(left_click(rows.x + 2, rows.y + 1));
    assert_eq!(app.game().step(), 1);
    assert_eq!(app.game().latest_step(), 2);
}

#[test]
fn test_classic_screen_has_no_move_list() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = App::new(GameVariant::Classic, MoveOrder::Ascending);

    let (screen, layout) = draw(&mut terminal, &mut app);
    assert_eq!(layout.moves, None);
    assert!(screen.contains("Classic mode keeps no history"));
    assert!(!screen.contains("Go to game start"));
}

#[test]
fn test_winning_screen() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let mut app = App::new(GameVariant::Classic, MoveOrder::Ascending);
    for pos in [
        Position::TopLeft,
        Position::TopCenter,
        Position::Center,
        Position::TopRight,
        Position::BottomRight,
    ] {
        app.click(pos);
    }

    let (screen, _) = draw(&mut terminal, &mut app);
    assert!(screen.contains("Winner: X"));
}
