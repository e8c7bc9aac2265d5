//! Field rendering utilities for forms

use crate::state::{FieldValue, FormField, Theme};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a form field with its error slot.
///
/// An invalid field gets an error-colored border and its message rendered as
/// the bottom border title; a valid field clears both.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    error_message: Option<&'static str>,
    is_active: bool,
    theme: &Theme,
) {
    let text_style = if is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.fg)
    };

    let border_style = if error_message.is_some() {
        Style::default().fg(theme.error)
    } else if is_active {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.muted)
    };

    let is_text = matches!(field.value, FieldValue::Text(_));
    let cursor = if is_active && is_text { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(field.display_value(), text_style),
        Span::styled(cursor, Style::default().fg(theme.accent)),
    ]));

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    if let Some(message) = error_message {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(theme.error),
            ))
            .left_aligned(),
        );
    }

    frame.render_widget(content.block(block), area);
}
