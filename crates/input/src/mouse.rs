//! Mouse event filtering.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// A primary-button press at terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub column: u16,
    pub row: u16,
}

/// Extract a left-button press from a mouse event.
///
/// Drags, releases, moves, scrolls and other buttons are ignored so one
/// physical click yields exactly one move request.
pub fn click_position(event: MouseEvent) -> Option<Click> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Click {
            column: event.column,
            row: event.row,
        }),
        _ => None,
    }
}
