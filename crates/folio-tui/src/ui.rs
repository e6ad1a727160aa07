//! Frame layout and per-view widgets

use folio_core::api::ApiStatus;
use folio_core::render::{
    self, DashboardStats, EMPTY_QUERY_MESSAGE, NO_RESULTS_MESSAGE, SEARCHING_MESSAGE,
    highlight_spans, skill_count_label, skill_name_width,
};
use folio_core::view::View;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
};

use crate::app::App;

const HELP: &str = "1-4/Tab: Views | /: Search | f: Filter | Enter: Select | r: Refresh | q: Quit";

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status line
        ])
        .split(frame.area());

    draw_tabs(frame, app, chunks[0]);

    // Search keeps its input box up and loads in the results panel
    if app.is_loading() && app.state.current_view != View::Search {
        let loading = Paragraph::new("Loading...")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel(app.state.current_view.title()));
        frame.render_widget(loading, chunks[1]);
    } else {
        match app.state.current_view {
            View::Profile => draw_profile(frame, app, chunks[1]),
            View::Projects => draw_projects(frame, app, chunks[1]),
            View::Skills => draw_skills(frame, app, chunks[1]),
            View::Search => draw_search(frame, app, chunks[1]),
        }
    }

    draw_status(frame, app, chunks[2]);
}

fn panel(title: &str) -> Block<'_> {
    Block::default().borders(Borders::ALL).title(title)
}

fn draw_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = View::all()
        .iter()
        .map(|v| format!("{} {}", v.index() + 1, v.title()))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.state.current_view.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Folio"));
    frame.render_widget(tabs, area);
}

fn draw_profile(frame: &mut Frame, app: &App, area: Rect) {
    let body = match &app.profile {
        Some(profile) => render::render_profile(profile),
        None => String::new(),
    };
    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(panel("Profile"));
    frame.render_widget(paragraph, area);
}

fn draw_projects(frame: &mut Frame, app: &App, area: Rect) {
    let skills = app.profile.as_ref().map(|p| p.skills.as_slice()).unwrap_or(&[]);
    let projects: Vec<_> = app.projects.iter().collect();
    let body = render::render_projects(&projects, skills, &app.state.skill_filter);
    let title = format!("Projects ({})", app.state.skill_filter);
    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(panel(&title));
    frame.render_widget(paragraph, area);
}

fn draw_skills(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let stats = app
        .profile
        .as_ref()
        .map(DashboardStats::from_profile)
        .unwrap_or_default();
    let totals = Paragraph::new(format!(
        "Total skills: {}   Total projects: {}",
        stats.total_skills, stats.total_projects
    ))
    .block(panel("Skills Dashboard"));
    frame.render_widget(totals, chunks[0]);

    let width = skill_name_width(&app.top_skills);
    let items: Vec<ListItem> = app
        .top_skills
        .iter()
        .map(|skill| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<width$}  ", skill.name, width = width),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(skill_count_label(skill.count)),
            ]))
        })
        .collect();
    let list = List::new(items)
        .block(panel("Top Skills"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.selected_skill));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}

fn draw_search(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    let input_style = if app.search_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let cursor = if app.search_focused { "_" } else { "" };
    let input = Paragraph::new(format!("{}{}", app.search_input, cursor))
        .style(input_style)
        .block(panel("Search"));
    frame.render_widget(input, chunks[0]);

    let text = match &app.search {
        _ if app.is_loading() => Text::from(SEARCHING_MESSAGE),
        None => Text::from(EMPTY_QUERY_MESSAGE),
        Some(outcome) if outcome.results.is_empty() => Text::from(NO_RESULTS_MESSAGE),
        Some(outcome) => {
            let mut lines = Vec::new();
            for result in &outcome.results {
                let mut title = vec![Span::styled(
                    format!("{} | ", result.kind()),
                    Style::default().fg(Color::DarkGray),
                )];
                title.extend(marked(result.title(), &outcome.query, Modifier::BOLD));
                lines.push(Line::from(title));

                let mut content = vec![Span::raw("  ")];
                content.extend(marked(result.content(), &outcome.query, Modifier::empty()));
                lines.push(Line::from(content));

                if let Some(skills) = result.skills() {
                    lines.push(Line::from(format!("  Skills: {}", skills.join(", "))));
                }
                lines.push(Line::default());
            }
            Text::from(lines)
        }
    };
    let results = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(panel("Results"));
    frame.render_widget(results, chunks[1]);
}

/// Spans for `text` with matches of `query` highlighted
fn marked<'a>(text: &'a str, query: &str, base: Modifier) -> Vec<Span<'a>> {
    highlight_spans(text, query)
        .into_iter()
        .map(|(run, hit)| {
            if hit {
                Span::styled(
                    run,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(base),
                )
            } else {
                Span::styled(run, Style::default().add_modifier(base))
            }
        })
        .collect()
}

fn draw_status(frame: &mut Frame, app: &App, area: Rect) {
    let color = match app.api_status {
        ApiStatus::Online => Color::Green,
        ApiStatus::Offline => Color::Red,
        ApiStatus::Unknown => Color::Yellow,
    };
    let mut spans = vec![
        Span::styled(
            format!("API: {}", app.api_status),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    match &app.error {
        Some(error) => spans.push(Span::styled(error.clone(), Style::default().fg(Color::Red))),
        None => spans.push(Span::styled(HELP, Style::default().fg(Color::DarkGray))),
    }
    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}
