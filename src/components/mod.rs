//! UI components
//!
//! Components render from read-only props and answer events with actions;
//! data mutations only ever happen through the reducer. Internal UI state
//! (the editor cursor) lives in `&mut self`.

use ratatui::{Frame, layout::Rect};

use crate::action::Action;
use crate::event::EventKind;

pub mod field_editor;
pub mod flash_bar;
pub mod form_panel;
pub mod help_bar;
pub mod results_table;

pub use field_editor::FieldEditor;
pub use flash_bar::{FlashBar, FlashBarProps};
pub use form_panel::{FormPanel, FormPanelProps};
pub use help_bar::{HelpBar, HelpBarProps};
pub use results_table::{ResultsTable, ResultsTableProps};

pub trait Component {
    /// Data required to render the component (read-only).
    type Props<'a>;

    /// Handle an event and return actions to dispatch. Default: none.
    #[allow(unused_variables)]
    fn handle_event(&mut self, event: &EventKind, props: Self::Props<'_>) -> Vec<Action> {
        Vec::new()
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>);
}
