//! The single-slot status line
//!
//! Each action replaces whatever the previous one wrote; an empty slot
//! renders as a blank line.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style, Stylize},
    widgets::Paragraph,
};

use super::Component;
use crate::state::{Flash, FlashLevel};

pub struct FlashBarProps<'a> {
    pub flash: Option<&'a Flash>,
}

#[derive(Default)]
pub struct FlashBar;

impl Component for FlashBar {
    type Props<'a> = FlashBarProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let Some(flash) = props.flash else {
            return;
        };
        let style = match flash.level {
            FlashLevel::Success => Style::default().fg(Color::Green),
            FlashLevel::Error => Style::default().fg(Color::Red).bold(),
        };
        frame.render_widget(Paragraph::new(format!(" {}", flash.text)).style(style), area);
    }
}
