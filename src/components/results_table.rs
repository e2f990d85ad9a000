//! Search results table
//!
//! One row per wishlist. The items column shows the first item's id, or
//! stays blank for a wishlist without items. Rendering is a pure function
//! of the result set, so redrawing the same set replaces the view instead
//! of appending to it.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, Borders, Cell, Row, Table},
};

use super::Component;
use crate::state::Wishlist;

pub struct ResultsTableProps<'a> {
    pub results: &'a [Wishlist],
}

#[derive(Default)]
pub struct ResultsTable;

impl Component for ResultsTable {
    type Props<'a> = ResultsTableProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let header = Row::new(["ID", "Name", "Type", "User ID", "Created Date", "Items"])
            .style(Style::default().fg(Color::Cyan).bold());

        let rows = props.results.iter().map(|wishlist| {
            Row::new([
                Cell::from(wishlist.id.clone()),
                Cell::from(wishlist.name.clone()),
                Cell::from(wishlist.kind.clone()),
                Cell::from(wishlist.user_id.clone()),
                Cell::from(wishlist.created_date.clone()),
                Cell::from(
                    wishlist
                        .items
                        .first()
                        .map(|item| item.id.clone())
                        .unwrap_or_default(),
                ),
            ])
        });

        let widths = [
            Constraint::Length(6),
            Constraint::Min(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(20),
            Constraint::Length(8),
        ];

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Rgb(80, 80, 100)))
                .title(" Results ")
                .title_style(Style::default().fg(Color::Cyan).bold()),
        );
        frame.render_widget(table, area);
    }
}
