//! UI module for rendering the TUI

pub mod components;
mod faq;
pub mod forms;
pub mod layout;
pub mod tally;
pub mod welcome;

use crate::app::App;
use crate::state::View;
use ratatui::{style::Style, widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.state.theme();
    let area = frame.area();

    // Themed backdrop behind everything
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        area,
    );

    let (sidebar_area, main_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Welcome => welcome::draw(frame, main_area, app),
        View::Tally => tally::draw(frame, main_area, app),
        View::Faq => faq::draw(frame, main_area, app),
        View::Register => forms::draw_register(frame, main_area, app),
    }

    layout::draw_status_bar(frame, app);
}
