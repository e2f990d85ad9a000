//! The editable form: wishlist fields plus item fields
//!
//! Operation keys and focus traversal are handled before any key reaches
//! the field editor, so F-keys never end up as field text.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, FieldEditor};
use crate::action::{Action, Operation};
use crate::event::EventKind;
use crate::state::{AppState, FormField};

const LABEL_WIDTH: usize = 14;

pub struct FormPanelProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

#[derive(Default)]
pub struct FormPanel {
    editor: FieldEditor,
}

impl FormPanel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Component for FormPanel {
    type Props<'a> = FormPanelProps<'a>;

    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        if !props.is_focused {
            return Vec::new();
        }
        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('l') => return vec![Action::FormClear],
                KeyCode::Char('c') | KeyCode::Char('q') => return vec![Action::Quit],
                _ => {}
            }
        }

        match key.code {
            KeyCode::F(2) => return vec![Action::Submit(Operation::Create)],
            KeyCode::F(3) => return vec![Action::Submit(Operation::Update)],
            KeyCode::F(4) => return vec![Action::Submit(Operation::Retrieve)],
            KeyCode::F(5) => return vec![Action::Submit(Operation::Search)],
            KeyCode::F(6) => return vec![Action::Submit(Operation::AddItem)],
            KeyCode::F(7) => return vec![Action::Submit(Operation::Purchase)],
            KeyCode::F(8) => return vec![Action::Submit(Operation::Delete)],
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Tab | KeyCode::Down => return vec![Action::FocusNext],
            KeyCode::BackTab | KeyCode::Up => return vec![Action::FocusPrev],
            _ => {}
        }

        let field = props.state.focus;
        match self.editor.handle_key(key, props.state.form.read(field)) {
            Some(value) => vec![Action::FieldChange(field, value)],
            None => Vec::new(),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;

        let pending = if state.in_flight > 0 { " ◌" } else { "" };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
            .title(format!(" Wishlist{} ", pending))
            .title_style(Style::default().fg(Color::Cyan).bold());
        let inner = outer.inner(area);
        frame.render_widget(outer, area);

        let mut lines = Vec::with_capacity(FormField::ALL.len());
        for field in FormField::ALL {
            let label_style = if props.is_focused && field == state.focus {
                Style::default().fg(Color::Cyan).bold()
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", field.label(), width = LABEL_WIDTH),
                    label_style,
                ),
                Span::raw(state.form.read(field).to_string()),
            ]));
        }
        frame.render_widget(Paragraph::new(lines), inner);

        if props.is_focused {
            if let Some(row) = FormField::ALL.iter().position(|f| *f == state.focus) {
                let value = state.form.read(state.focus);
                let cursor = self.editor.cursor_for(value);
                let x = inner.x + (LABEL_WIDTH as u16 + 1) + cursor as u16;
                let y = inner.y + row as u16;
                if x < inner.right() && y < inner.bottom() {
                    frame.set_cursor_position((x, y));
                }
            }
        }
    }
}
