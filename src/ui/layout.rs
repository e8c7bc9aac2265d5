//! Layout components (sidebar, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::platform::{SUBMIT_SHORTCUT, THEME_SHORTCUT};
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 20;

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(area);

    // Reserve bottom line for status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(chunks[1]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar content
            Constraint::Length(1), // Status bar continuation
        ])
        .split(chunks[0]);

    (sidebar_chunks[0], main_chunks[0])
}

/// Draw the sidebar with boxed view buttons.
///
/// Buttons are top-aligned so [`sidebar_item_at`] can map clicks with plain
/// row division.
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Welcome
            Constraint::Length(BUTTON_HEIGHT), // Tally
            Constraint::Length(BUTTON_HEIGHT), // FAQ
            Constraint::Length(BUTTON_HEIGHT), // Register
            Constraint::Min(0),                // Bottom padding (flex)
        ])
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        let is_selected = app.state.current_view == *view;
        render_button(frame, chunks[idx], view.label(), is_selected, &theme);
    }
}

/// Map a click position to a sidebar item index
pub fn sidebar_item_at(column: u16, row: u16) -> Option<usize> {
    if column >= SIDEBAR_WIDTH {
        return None;
    }
    let idx = (row / BUTTON_HEIGHT) as usize;
    if idx < View::ALL.len() {
        Some(idx)
    } else {
        None
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let theme = app.state.theme();
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![
        Span::styled(
            format!(" Theme: {} ", app.state.theme_mode.label()),
            Style::default().fg(theme.accent),
        ),
        Span::raw("| "),
        Span::styled(
            get_view_hints(&app.state.current_view),
            Style::default().fg(theme.fg),
        ),
    ];

    if app.state.current_view == View::Tally {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Tally: {}", app.state.tally),
            Style::default().fg(theme.accent),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bar_bg));
    frame.render_widget(status, status_area);

    // Global shortcuts on the right
    let global_hint = format!(" ^C:quit  {THEME_SHORTCUT}:theme ");
    let hint_area = Rect {
        x: area.width.saturating_sub(global_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (global_hint.len() as u16).min(area.width),
        height: 1,
    };
    let hint_widget =
        Paragraph::new(global_hint).style(Style::default().bg(theme.bar_bg).fg(theme.muted));
    frame.render_widget(hint_widget, hint_area);
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::Welcome => "type+Enter:echo  click:greet  Tab:next view".to_string(),
        View::Tally => "+/-:count  click buttons  Tab:next view".to_string(),
        View::Faq => "j/k:nav  Enter:toggle  Tab:next view".to_string(),
        View::Register => format!("Tab:next field  {SUBMIT_SHORTCUT}:register  Esc:back"),
    }
}
