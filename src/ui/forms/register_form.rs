//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Form, RegisterField, Theme};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Success banner text
const SUCCESS_TEXT: &str = "Registration successful!";

/// Section rectangles of the register view, shared with mouse hit-testing
pub struct RegisterSections {
    pub banner: Rect,
    pub fields: [Rect; 5],
    pub register_button: Rect,
    pub help: Rect,
}

/// Compute the section rectangles within the main content area
pub fn sections(area: Rect) -> RegisterSections {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Success banner (blank while hidden)
            Constraint::Length(3),             // Full name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Password
            Constraint::Length(3),             // Confirm password
            Constraint::Length(3),             // Terms checkbox
            Constraint::Length(BUTTON_HEIGHT), // Buttons row
            Constraint::Length(2),             // Help text
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    RegisterSections {
        banner: chunks[0],
        fields: [chunks[1], chunks[2], chunks[3], chunks[4], chunks[5]],
        register_button: Rect {
            width: chunks[6].width.min(14),
            ..chunks[6]
        },
        help: chunks[7],
    }
}

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme();
    let form = &app.state.register_form;
    let sections = sections(area);

    let outer = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.muted));
    frame.render_widget(outer, area);

    if form.success_banner_visible() {
        draw_success_banner(frame, sections.banner, &theme);
    }

    for (idx, kind) in RegisterField::ALL.iter().enumerate() {
        let Some(field) = form.get_field(idx) else {
            continue;
        };
        let message = field.error().map(|reason| kind.error_message(reason));
        draw_field(
            frame,
            sections.fields[idx],
            field,
            message,
            form.active_field_index == idx,
            &theme,
        );
    }

    render_button(
        frame,
        sections.register_button,
        "Register",
        form.is_buttons_row_active(),
        &theme,
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(theme.accent)),
        Span::raw(": next field  "),
        Span::styled("Space", Style::default().fg(theme.accent)),
        Span::raw(": toggle terms  "),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(theme.accent)),
        Span::raw(": register  "),
        Span::styled("Esc", Style::default().fg(theme.accent)),
        Span::raw(": back"),
    ]))
    .style(Style::default().fg(theme.muted));
    frame.render_widget(help, sections.help);
}

fn draw_success_banner(frame: &mut Frame, area: Rect, theme: &Theme) {
    let banner = Paragraph::new(SUCCESS_TEXT)
        .style(
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.success)),
        );
    frame.render_widget(banner, area);
}
