//! Welcome view: greeting button, hover box and keyboard echo input

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{HOVER_ACTIVE, HOVER_IDLE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Section rectangles of the welcome view.
///
/// Shared between drawing and mouse hit-testing so the two can never disagree.
pub struct WelcomeSections {
    pub message: Rect,
    pub greet_button: Rect,
    pub hover_box: Rect,
    pub echo_input: Rect,
    pub echo_message: Rect,
}

/// Compute the section rectangles within the main content area
pub fn sections(area: Rect) -> WelcomeSections {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Message display
            Constraint::Length(BUTTON_HEIGHT), // Greet button
            Constraint::Length(3),             // Hover box
            Constraint::Length(3),             // Echo input
            Constraint::Length(2),             // Echo message
            Constraint::Min(0),                // Remaining space
        ])
        .margin(1)
        .split(area);

    // The button doesn't span the full width
    let greet_button = Rect {
        width: chunks[1].width.min(22),
        ..chunks[1]
    };

    WelcomeSections {
        message: chunks[0],
        greet_button,
        hover_box: chunks[2],
        echo_input: chunks[3],
        echo_message: chunks[4],
    }
}

/// Draw the welcome view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme();
    let sections = sections(area);

    let outer = Block::default()
        .title(" Welcome ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));
    frame.render_widget(outer, area);

    // Message display
    let message = app.state.greeting.as_deref().unwrap_or("");
    let message_widget = Paragraph::new(message)
        .style(Style::default().fg(theme.accent))
        .block(
            Block::default()
                .title(" Message ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        );
    frame.render_widget(message_widget, sections.message);

    // Greet button (mouse)
    render_button(frame, sections.greet_button, "Click to greet", false, &theme);

    // Hover box
    let (hover_text, hover_style) = if app.state.hover_active {
        (
            HOVER_ACTIVE,
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (HOVER_IDLE, Style::default().fg(theme.fg))
    };
    let hover_border = if app.state.hover_active {
        Style::default().fg(theme.success)
    } else {
        Style::default().fg(theme.muted)
    };
    let hover_widget = Paragraph::new(hover_text).style(hover_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(hover_border),
    );
    frame.render_widget(hover_widget, sections.hover_box);

    // Echo input with cursor
    let input_widget = Paragraph::new(Line::from(vec![
        Span::styled(app.state.echo_input.as_str(), Style::default().fg(theme.fg)),
        Span::styled("▌", Style::default().fg(theme.accent)),
    ]))
    .block(
        Block::default()
            .title(" Type and press Enter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );
    frame.render_widget(input_widget, sections.echo_input);

    // Echo message
    if let Some(msg) = &app.state.echo_message {
        let echo_widget = Paragraph::new(msg.as_str()).style(Style::default().fg(theme.success));
        frame.render_widget(echo_widget, sections.echo_message);
    }
}
