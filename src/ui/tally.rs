//! Tally view: visitor counter with clickable buttons

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Section rectangles of the tally view, shared with mouse hit-testing
pub struct TallySections {
    pub value: Rect,
    pub decrement: Rect,
    pub increment: Rect,
}

/// Compute the section rectangles within the main content area
pub fn sections(area: Rect) -> TallySections {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Value display
            Constraint::Length(BUTTON_HEIGHT), // Buttons row
            Constraint::Min(0),                // Remaining space
        ])
        .margin(1)
        .split(area);

    let button_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9), // [-]
            Constraint::Length(1), // gap
            Constraint::Length(9), // [+]
            Constraint::Min(0),
        ])
        .split(chunks[1]);

    TallySections {
        value: chunks[0],
        decrement: button_chunks[0],
        increment: button_chunks[2],
    }
}

/// Draw the tally view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme();
    let sections = sections(area);

    let outer = Block::default()
        .title(" Visitor Tally ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));
    frame.render_widget(outer, area);

    let value_widget = Paragraph::new(app.state.tally.to_string())
        .style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Count ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        );
    frame.render_widget(value_widget, sections.value);

    render_button(frame, sections.decrement, "  -  ", false, &theme);
    render_button(frame, sections.increment, "  +  ", false, &theme);
}
