use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// High-level input events consumed by the host loop.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    Start,
    Quit,
}

/// Maps a terminal key event to a game input.
///
/// Arrow keys steer, space starts, `q` and Esc quit. Key releases and every
/// other key map to nothing.
#[must_use]
pub fn map_key_event(event: KeyEvent) -> Option<GameInput> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    match event.code {
        KeyCode::Up => Some(GameInput::Direction(Direction::Up)),
        KeyCode::Down => Some(GameInput::Direction(Direction::Down)),
        KeyCode::Left => Some(GameInput::Direction(Direction::Left)),
        KeyCode::Right => Some(GameInput::Direction(Direction::Right)),
        KeyCode::Char(' ') => Some(GameInput::Start),
        KeyCode::Char('q') | KeyCode::Esc => Some(GameInput::Quit),
        _ => None,
    }
}
