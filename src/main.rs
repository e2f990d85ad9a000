//! Wishlist console - terminal client for the wishlist REST service
//!
//! Binds the editable form to the service: F-keys dispatch the REST
//! operations, responses flow back into the form, search results render
//! as a table whose first row is promoted into the form for editing.

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wishlist_tui::components::{
    Component, FlashBar, FlashBarProps, FormPanel, FormPanelProps, HelpBar, HelpBarProps,
    ResultsTable, ResultsTableProps,
};
use wishlist_tui::{Action, ApiClient, AppState, EventKind, Runtime};

#[derive(Parser, Debug)]
#[command(name = "wishlist")]
#[command(about = "A terminal client for the wishlist REST service")]
struct Args {
    /// Base URL of the wishlist service
    #[arg(long, short, default_value = "http://localhost:8080")]
    base_url: String,

    /// Append tracing output to this file (stdout belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &args.base_url).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

struct AppUi {
    form: FormPanel,
    flash: FlashBar,
    results: ResultsTable,
    help: HelpBar,
}

impl AppUi {
    fn new() -> Self {
        Self {
            form: FormPanel::new(),
            flash: FlashBar,
            results: ResultsTable,
            help: HelpBar,
        }
    }

    fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let chunks = Layout::vertical([
            Constraint::Length(13), // form: 11 field rows + border
            Constraint::Length(1),  // flash slot
            Constraint::Min(4),     // search results
            Constraint::Length(1),  // help bar
        ])
        .split(frame.area());

        self.form.render(
            frame,
            chunks[0],
            FormPanelProps {
                state,
                is_focused: true,
            },
        );
        self.flash.render(
            frame,
            chunks[1],
            FlashBarProps {
                flash: state.flash.as_ref(),
            },
        );
        self.results.render(
            frame,
            chunks[2],
            ResultsTableProps {
                results: &state.results,
            },
        );
        self.help.render(frame, chunks[3], HelpBarProps);
    }

    fn map_event(&mut self, event: &EventKind, state: &AppState) -> Vec<Action> {
        if let EventKind::Resize(_, _) = event {
            return vec![Action::Redraw];
        }
        self.form.handle_event(
            event,
            FormPanelProps {
                state,
                is_focused: true,
            },
        )
    }
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    base_url: &str,
) -> io::Result<()> {
    info!(base_url, "starting wishlist console");

    let client = ApiClient::new(base_url);
    let mut runtime = Runtime::new(AppState::default(), client);
    let ui = RefCell::new(AppUi::new());

    runtime
        .run(
            terminal,
            |frame, state| ui.borrow_mut().render(frame, state),
            |event, state| ui.borrow_mut().map_event(event, state),
        )
        .await
}
