//! Test utilities for doorcheck components
//!
//! Provides constructors for synthetic key and mouse events plus
//! [`RenderHarness`], a wrapper over ratatui's `TestBackend` that renders a
//! frame and returns the buffer contents as plain text for assertions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::backend::TestBackend;
use ratatui::{Frame, Terminal};

use crate::event::EventKind;

/// Create a `KeyEvent` for a key code with no modifiers.
pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Create a `KeyEvent` for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Create an [`EventKind`] for a key code.
pub fn key_event(code: KeyCode) -> EventKind {
    EventKind::Key(key(code))
}

/// Create an [`EventKind`] for a character key.
pub fn char_event(c: char) -> EventKind {
    EventKind::Key(char_key(c))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> EventKind {
    EventKind::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}

/// Left button press at a terminal cell.
pub fn mouse_down(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Left button drag to a terminal cell.
pub fn mouse_drag(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

/// Left button release at a terminal cell.
pub fn mouse_up(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}

/// Scroll wheel down at a terminal cell.
pub fn mouse_scroll_down(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::ScrollDown, column, row)
}

/// Scroll wheel up at a terminal cell.
pub fn mouse_scroll_up(column: u16, row: u16) -> EventKind {
    mouse(MouseEventKind::ScrollUp, column, row)
}

/// Render harness over ratatui's `TestBackend`.
///
/// # Example
///
/// ```ignore
/// let mut render = RenderHarness::new(40, 10);
/// let output = render.render_to_string_plain(|frame| {
///     view.render(frame, frame.area(), props);
/// });
/// assert!(output.contains("Wallet"));
/// ```
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// Create a harness with a test terminal of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("test terminal");
        Self { terminal }
    }

    /// Render one frame and return the buffer as plain text, one line per
    /// terminal row, styling stripped.
    pub fn render_to_string_plain<F>(&mut self, draw: F) -> String
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(draw).expect("draw frame");
        let buffer = self.terminal.backend().buffer();
        let area = *buffer.area();
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }
}
