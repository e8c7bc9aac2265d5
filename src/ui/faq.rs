//! FAQ view: collapsible question/answer list

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Draw the FAQ view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.state.theme();

    let items: Vec<ListItem> = app
        .state
        .faq
        .entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let is_selected = idx == app.state.faq.selected;
            let marker = if entry.expanded { "▾ " } else { "▸ " };

            let question_style = if is_selected {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.fg)
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(marker, question_style),
                Span::styled(entry.question, question_style),
            ])];

            if entry.expanded {
                lines.push(Line::from(Span::styled(
                    format!("  {}", entry.answer),
                    Style::default().fg(theme.muted),
                )));
            }
            lines.push(Line::from(""));

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" FAQ ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.muted)),
    );

    // Stateful render keeps the selected entry scrolled into view
    let mut list_state = ListState::default().with_selected(Some(app.state.faq.selected));
    frame.render_stateful_widget(list, area, &mut list_state);
}
