//! Folio TUI - interactive portfolio browser
//!
//! Four tabs over the portfolio api:
//! - Profile: contact, education, skills, and work history
//! - Projects: filterable by skill
//! - Skills: usage dashboard; Enter jumps to matching projects
//! - Search: keyword search with highlighted matches
//!
//! A status line tracks the periodic health probe.

mod app;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use folio_core::api::{ApiStatus, HealthProbe, PortfolioApi, SimulatedApi};
use folio_core::config::Config;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{mpsc, watch};
use tracing::info;

use app::{App, Request, Response};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logging is opt-in via RUST_LOG while the alternate screen is up
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_writer(io::stderr)
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("folio=info".parse()?),
            )
            .init();
    }

    let config = Config::load()?;
    let view = config.display.default_view()?;
    let api: Arc<dyn PortfolioApi> = Arc::new(SimulatedApi::from_config(&config));
    let (status_rx, probe) = HealthProbe::new(Arc::clone(&api), config.health.interval()).spawn();
    info!(%view, "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, App::new(view), api, status_rx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    probe.abort();
    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    api: Arc<dyn PortfolioApi>,
    mut status_rx: watch::Receiver<ApiStatus>,
) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    for request in app.startup_requests() {
        spawn_request(&api, request, &tx);
    }

    loop {
        while let Ok(response) = rx.try_recv() {
            app.on_response(response);
        }
        if status_rx.has_changed().unwrap_or(false) {
            app.api_status = *status_rx.borrow_and_update();
        }

        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(request) = app.handle_key(key) {
                        spawn_request(&api, request, &tx);
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Run a request on the runtime and post its response back to the loop
fn spawn_request(
    api: &Arc<dyn PortfolioApi>,
    request: Request,
    tx: &mpsc::UnboundedSender<Response>,
) {
    let api = Arc::clone(api);
    let tx = tx.clone();
    tokio::spawn(async move {
        let response = match request {
            Request::Profile => Response::Profile(api.get_profile().await),
            Request::Projects(filter) => {
                let result = api.get_projects_by_skill(&filter).await;
                Response::Projects { filter, result }
            }
            Request::TopSkills => Response::TopSkills(api.get_top_skills().await),
            Request::Search(query) => {
                let result = api.search(&query).await;
                Response::Search { query, result }
            }
        };
        // The loop may already have exited
        let _ = tx.send(response);
    });
}
