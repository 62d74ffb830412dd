//! Terminal UI rendering.
//!
//! All drawing logic lives here, separated from application state ([`App`])
//! and input handling ([`crate::input`]).  This makes it easy to change the
//! visual layout without touching triage logic.
//!
//! ## For contributors
//!
//! * The layout is a two-row split — a scrollable list on top and a
//!   one-line status bar at the bottom — with an extra banner row on top
//!   while the popup-blocked alert is showing.
//! * Colours and styles are defined inline — feel free to extract them into
//!   constants or a theme struct if the palette grows.
//! * [`ratatui`] is the TUI framework; see its docs for widget details.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::App;
use crate::state::View;

/// Draw the complete UI for one frame.
///
/// Called once per tick from the main loop.  Delegates to helper functions
/// for each screen region.
pub fn draw(app: &mut App, frame: &mut Frame) {
    if app.state.popup_blocked_alert {
        let [alert_area, main_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        draw_alert_banner(frame, alert_area);
        draw_story_list(app, frame, main_area);
        draw_status_bar(app, frame, status_area);
    } else {
        let [main_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        draw_story_list(app, frame, main_area);
        draw_status_bar(app, frame, status_area);
    }
}

/// One-line banner shown while links refuse to open.
fn draw_alert_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            " Could not open the link in your browser.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  a: dismiss this notice"),
    ]));
    frame.render_widget(banner, area);
}

/// Render the current view's scrollable story list.
fn draw_story_list(app: &mut App, frame: &mut Frame, area: Rect) {
    let list_items: Vec<ListItem> = app
        .state
        .current_list()
        .iter()
        .map(|story| {
            let date_str = story
                .published
                .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_else(|| "no date".into());

            let line = Line::from(vec![
                Span::styled(
                    format!("{date_str:<18}"),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(" "),
                Span::styled(&story.title, Style::default().fg(Color::White)),
            ]);

            ListItem::new(line)
        })
        .collect();

    let (title, highlight) = match app.state.current_view {
        View::Active => (
            format!(" Stories ({}) ", app.state.active_stories.len()),
            Color::Blue,
        ),
        View::Dismissed => (
            format!(" Dismissed ({}) ", app.state.dismissed_stories.len()),
            Color::Red,
        ),
    };

    let list = List::new(list_items)
        .block(Block::default().title(title).borders(Borders::ALL))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD).bg(highlight))
        .highlight_symbol("▸ ");

    // Remember where the list landed so clicks can be mapped to rows.
    app.list_area = area;
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

/// Render the bottom status bar.
fn draw_status_bar(app: &App, frame: &mut Frame, area: Rect) {
    let status = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(&app.status, Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(
            format!(
                "{} active / {} dismissed",
                app.state.active_stories.len(),
                app.state.dismissed_stories.len()
            ),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  j/k: move  f: open  c: comments  x: dismiss  v: view  r: refresh  e: export  q: quit"),
    ]));
    frame.render_widget(status, area);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
