//! Test utilities
//!
//! Key-event constructors for exercising `handle_event`, and a render
//! harness over ratatui's `TestBackend` for asserting on visible output.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use ratatui::{Frame, Terminal, backend::TestBackend};

/// A key press for a plain character.
pub fn char_key(c: char) -> KeyEvent {
    code_key(KeyCode::Char(c))
}

/// A key press for a character with Ctrl held.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(c),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// A key press for a function key.
pub fn fn_key(n: u8) -> KeyEvent {
    code_key(KeyCode::F(n))
}

/// A key press for any key code with no modifiers.
pub fn code_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Renders into an in-memory terminal and exposes the buffer as plain text.
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    pub fn new(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        Self {
            terminal: Terminal::new(backend).expect("test terminal"),
        }
    }

    /// Draw one frame and return the buffer contents, rows joined with
    /// newlines, styling stripped.
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        self.terminal.draw(draw).expect("draw to test backend");
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            if y > area.top() {
                out.push('\n');
            }
            for x in area.left()..area.right() {
                out.push_str(buffer[(x, y)].symbol());
            }
        }
        out
    }
}
