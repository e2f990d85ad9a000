use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;

pub struct HelpBar;

pub struct HelpBarProps;

impl Component for HelpBar {
    type Props<'a> = HelpBarProps;

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let entries = [
            ("F2", "create"),
            ("F3", "update"),
            ("F4", "retrieve"),
            ("F5", "search"),
            ("F6", "add item"),
            ("F7", "purchase"),
            ("F8", "delete"),
            ("^L", "clear"),
            ("esc", "quit"),
        ];
        let mut spans = Vec::with_capacity(entries.len() * 2);
        for (key, label) in entries {
            spans.push(Span::styled(
                format!(" {key}"),
                Style::default().fg(Color::Cyan).bold(),
            ));
            spans.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans).centered()), area);
    }
}
