//! Application state and core logic

use crate::prefs::PreferenceStore;
use crate::state::{AppState, Form, View, BUTTONS_ROW_INDEX};
use crate::ui::{forms, layout, tally, welcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Preference store for the persisted theme choice
    store: Box<dyn PreferenceStore>,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance, restoring the stored theme preference
    pub async fn new(store: Box<dyn PreferenceStore>) -> Self {
        let mut state = AppState::default();

        // Absence of a stored preference means light mode
        if let Some(mode) = store.load_theme().await {
            state.theme_mode = mode;
        }
        tracing::info!(theme = state.theme_mode.label(), "starting up");

        Self {
            state,
            store,
            terminal_size: None,
        }
    }

    /// Advance time-based state; called once per event-loop iteration
    pub fn tick(&mut self) {
        self.state.register_form.tick();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Global theme toggle
        if key.code == KeyCode::Char('t') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.toggle_theme().await;
            return Ok(());
        }

        match self.state.current_view {
            View::Welcome => self.handle_welcome_key(key),
            View::Tally => self.handle_tally_key(key),
            View::Faq => self.handle_faq_key(key),
            View::Register => self.handle_register_key(key),
        }

        Ok(())
    }

    /// Flip light/dark and persist the choice. A failed write only loses the
    /// preference, never the interaction.
    async fn toggle_theme(&mut self) {
        let mode = self.state.toggle_theme();
        if let Err(err) = self.store.save_theme(mode).await {
            tracing::warn!(%err, "failed to persist theme preference");
        }
    }

    /// Handle keys in the Welcome view
    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.current_view = self.state.current_view.next(),
            KeyCode::BackTab => self.state.current_view = self.state.current_view.prev(),
            KeyCode::Enter => self.state.echo_submit(),
            KeyCode::Backspace => self.state.echo_backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.echo_push(c);
            }
            _ => {}
        }
    }

    /// Handle keys in the Tally view
    fn handle_tally_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.current_view = self.state.current_view.next(),
            KeyCode::BackTab => self.state.current_view = self.state.current_view.prev(),
            KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
                self.state.increment_tally();
            }
            KeyCode::Char('-') | KeyCode::Char('_') | KeyCode::Left => {
                self.state.decrement_tally();
            }
            _ => {}
        }
    }

    /// Handle keys in the FAQ view
    fn handle_faq_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.state.current_view = self.state.current_view.next(),
            KeyCode::BackTab => self.state.current_view = self.state.current_view.prev(),
            KeyCode::Char('j') | KeyCode::Down => self.state.faq.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.faq.select_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => self.state.faq.toggle_selected(),
            _ => {}
        }
    }

    /// Handle keys in the Register view
    fn handle_register_key(&mut self, key: KeyEvent) {
        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.state.register_form.submit();
            return;
        }

        if key.code == KeyCode::Esc {
            self.state.current_view = View::Welcome;
            return;
        }

        let form = &mut self.state.register_form;
        match key.code {
            KeyCode::Tab => form.focus_next(),
            KeyCode::BackTab => form.focus_prev(),
            KeyCode::Enter => {
                if form.is_buttons_row_active() {
                    form.submit();
                } else {
                    form.focus_next();
                }
            }
            KeyCode::Char(' ') if form.active_field_index == 4 => form.toggle_terms(),
            KeyCode::Backspace => {
                if !form.is_buttons_row_active() {
                    form.get_active_field_mut().pop_char();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !form.is_buttons_row_active() {
                    form.get_active_field_mut().push_char(c);
                }
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let Some((height, width)) = self.terminal_size else {
            return Ok(());
        };
        let area = Rect::new(0, 0, width, height);
        let (_sidebar_area, main_area) = layout::create_layout(area);
        let pos = Position::new(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Moved => {
                if self.state.current_view == View::Welcome {
                    let sections = welcome::sections(main_area);
                    self.state.set_hover(sections.hover_box.contains(pos));
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = layout::sidebar_item_at(mouse.column, mouse.row) {
                    self.state.current_view = View::ALL[idx];
                    return Ok(());
                }
                self.handle_main_area_click(main_area, pos);
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_main_area_click(&mut self, main_area: Rect, pos: Position) {
        match self.state.current_view {
            View::Welcome => {
                let sections = welcome::sections(main_area);
                if sections.greet_button.contains(pos) {
                    self.state.greet();
                }
            }
            View::Tally => {
                let sections = tally::sections(main_area);
                if sections.decrement.contains(pos) {
                    self.state.decrement_tally();
                } else if sections.increment.contains(pos) {
                    self.state.increment_tally();
                }
            }
            View::Faq => {}
            View::Register => {
                let sections = forms::register_sections(main_area);
                let form = &mut self.state.register_form;
                if sections.register_button.contains(pos) {
                    form.focus_field(BUTTONS_ROW_INDEX);
                    form.submit();
                    return;
                }
                for (idx, field_area) in sections.fields.iter().enumerate() {
                    if field_area.contains(pos) {
                        form.focus_field(idx);
                        // Clicking the checkbox also toggles it
                        if idx == 4 {
                            form.toggle_terms();
                        }
                        break;
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MockPreferenceStore;
    use crate::state::{RegisterField, ThemeMode};
    use crate::validation::ValidationError;
    use mockall::predicate;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn app_with_empty_store() -> App {
        let mut store = MockPreferenceStore::new();
        store.expect_load_theme().returning(|| None);
        App::new(Box::new(store)).await
    }

    mod startup {
        use super::*;

        #[tokio::test]
        async fn test_missing_preference_defaults_to_light() {
            let app = app_with_empty_store().await;
            assert_eq!(app.state.theme_mode, ThemeMode::Light);
            assert_eq!(app.state.theme_mode.label(), "Light");
        }

        #[tokio::test]
        async fn test_stored_dark_preference_is_applied() {
            let mut store = MockPreferenceStore::new();
            store
                .expect_load_theme()
                .returning(|| Some(ThemeMode::Dark));
            let app = App::new(Box::new(store)).await;
            assert_eq!(app.state.theme_mode, ThemeMode::Dark);
        }
    }

    mod theme_toggle {
        use super::*;

        #[tokio::test]
        async fn test_first_toggle_stores_dark() {
            let mut store = MockPreferenceStore::new();
            store.expect_load_theme().returning(|| None);
            store
                .expect_save_theme()
                .with(predicate::eq(ThemeMode::Dark))
                .times(1)
                .returning(|_| Ok(()));
            let mut app = App::new(Box::new(store)).await;

            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(app.state.theme_mode, ThemeMode::Dark);
            assert_eq!(app.state.theme_mode.label(), "Dark");
        }

        #[tokio::test]
        async fn test_every_toggle_is_persisted() {
            let mut store = MockPreferenceStore::new();
            store.expect_load_theme().returning(|| None);
            store
                .expect_save_theme()
                .times(2)
                .returning(|_| Ok(()));
            let mut app = App::new(Box::new(store)).await;

            app.handle_key(ctrl('t')).await.unwrap();
            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(app.state.theme_mode, ThemeMode::Light);
        }

        #[tokio::test]
        async fn test_failed_save_keeps_new_mode() {
            let mut store = MockPreferenceStore::new();
            store.expect_load_theme().returning(|| None);
            store
                .expect_save_theme()
                .returning(|_| Err(anyhow::anyhow!("disk full")));
            let mut app = App::new(Box::new(store)).await;

            app.handle_key(ctrl('t')).await.unwrap();
            assert_eq!(app.state.theme_mode, ThemeMode::Dark);
        }
    }

    mod welcome_keys {
        use super::*;

        #[tokio::test]
        async fn test_typing_and_enter_echoes() {
            let mut app = app_with_empty_store().await;
            app.handle_key(key(KeyCode::Char('h'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(
                app.state.echo_message.as_deref(),
                Some("You typed: \"hi\" and pressed Enter!")
            );
            assert_eq!(app.state.echo_input, "");
        }

        #[tokio::test]
        async fn test_tab_cycles_views() {
            let mut app = app_with_empty_store().await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(app.state.current_view, View::Tally);
            app.handle_key(key(KeyCode::BackTab)).await.unwrap();
            assert_eq!(app.state.current_view, View::Welcome);
        }
    }

    mod tally_keys {
        use super::*;

        #[tokio::test]
        async fn test_plus_and_minus_adjust_tally() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Tally;
            app.handle_key(key(KeyCode::Char('+'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('+'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('-'))).await.unwrap();
            assert_eq!(app.state.tally, 1);
        }

        #[tokio::test]
        async fn test_decrement_below_zero() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Tally;
            app.handle_key(key(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.tally, -1);
        }
    }

    mod faq_keys {
        use super::*;

        #[tokio::test]
        async fn test_navigate_and_toggle() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Faq;
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.state.faq.entries[1].expanded);
            assert!(!app.state.faq.entries[0].expanded);
        }
    }

    mod register_keys {
        use super::*;

        async fn fill_form_via_keys(app: &mut App, values: [&str; 4]) {
            for (i, value) in values.iter().enumerate() {
                for c in value.chars() {
                    app.handle_key(key(KeyCode::Char(c))).await.unwrap();
                }
                // Move to the next field (blur-validates the one we leave)
                app.handle_key(key(KeyCode::Tab)).await.unwrap();
                assert_eq!(app.state.register_form.active_field_index, i + 1);
            }
        }

        #[tokio::test]
        async fn test_typing_goes_to_active_field() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('l'))).await.unwrap();
            assert_eq!(app.state.register_form.full_name.as_text(), "Al");
        }

        #[tokio::test]
        async fn test_tab_blur_validates_short_name() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert_eq!(
                app.state.register_form.full_name.error(),
                Some(ValidationError::TooShort)
            );
        }

        #[tokio::test]
        async fn test_space_toggles_terms_when_active() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            app.state.register_form.set_active_field(4);
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            assert!(app.state.register_form.terms.is_checked());
        }

        #[tokio::test]
        async fn test_space_types_into_text_fields() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            app.handle_key(key(KeyCode::Char('a'))).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Char('b'))).await.unwrap();
            assert_eq!(app.state.register_form.full_name.as_text(), "a b");
        }

        #[tokio::test]
        async fn test_submit_shortcut_rejects_empty_form() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            app.handle_key(ctrl('s')).await.unwrap();
            let form = &app.state.register_form;
            assert!(!form.success_banner_visible());
            for kind in RegisterField::ALL {
                assert!(!form.field(kind).is_valid());
            }
        }

        #[tokio::test]
        async fn test_full_keyboard_registration_is_accepted() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            fill_form_via_keys(
                &mut app,
                ["Alice Smith", "alice@example.com", "Abcdefg1", "Abcdefg1"],
            )
            .await;
            // Terms checkbox, then on to the buttons row
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert!(app.state.register_form.is_buttons_row_active());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            let form = &app.state.register_form;
            assert!(form.success_banner_visible());
            assert_eq!(form.full_name.as_text(), "");
            assert!(!form.terms.is_checked());
        }

        #[tokio::test]
        async fn test_esc_returns_to_welcome_keeping_input() {
            let mut app = app_with_empty_store().await;
            app.state.current_view = View::Register;
            app.handle_key(key(KeyCode::Char('A'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Welcome);
            assert_eq!(app.state.register_form.full_name.as_text(), "A");
        }
    }

    mod mouse {
        use super::*;

        fn mouse_at(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        fn main_area_for(app: &App) -> Rect {
            let (height, width) = app.terminal_size.unwrap();
            let (_sidebar, main_area) = layout::create_layout(Rect::new(0, 0, width, height));
            main_area
        }

        #[tokio::test]
        async fn test_sidebar_click_switches_view() {
            let mut app = app_with_empty_store().await;
            app.terminal_size = Some((24, 80));
            // Second sidebar button occupies rows 3..6
            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), 2, 4))
                .await
                .unwrap();
            assert_eq!(app.state.current_view, View::Tally);
        }

        #[tokio::test]
        async fn test_hover_box_enter_and_leave() {
            let mut app = app_with_empty_store().await;
            app.terminal_size = Some((24, 80));
            let sections = welcome::sections(main_area_for(&app));
            let inside = (sections.hover_box.x + 1, sections.hover_box.y + 1);

            app.handle_mouse(mouse_at(MouseEventKind::Moved, inside.0, inside.1))
                .await
                .unwrap();
            assert!(app.state.hover_active);

            app.handle_mouse(mouse_at(MouseEventKind::Moved, inside.0, 0))
                .await
                .unwrap();
            assert!(!app.state.hover_active);
        }

        #[tokio::test]
        async fn test_greet_button_click_shows_message() {
            let mut app = app_with_empty_store().await;
            app.terminal_size = Some((24, 80));
            let sections = welcome::sections(main_area_for(&app));
            let (x, y) = (sections.greet_button.x + 1, sections.greet_button.y + 1);

            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), x, y))
                .await
                .unwrap();
            assert_eq!(
                app.state.greeting.as_deref(),
                Some(crate::state::GREETING)
            );
        }

        #[tokio::test]
        async fn test_tally_button_clicks() {
            let mut app = app_with_empty_store().await;
            app.terminal_size = Some((24, 80));
            app.state.current_view = View::Tally;
            let sections = tally::sections(main_area_for(&app));

            let (x, y) = (sections.increment.x + 1, sections.increment.y + 1);
            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), x, y))
                .await
                .unwrap();
            let (x, y) = (sections.decrement.x + 1, sections.decrement.y + 1);
            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), x, y))
                .await
                .unwrap();
            assert_eq!(app.state.tally, 0);
        }

        #[tokio::test]
        async fn test_clicking_field_moves_focus_and_blur_validates() {
            let mut app = app_with_empty_store().await;
            app.terminal_size = Some((30, 80));
            app.state.current_view = View::Register;
            let sections = forms::register_sections(main_area_for(&app));

            let email_field = sections.fields[1];
            let (x, y) = (email_field.x + 1, email_field.y + 1);
            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), x, y))
                .await
                .unwrap();
            assert_eq!(app.state.register_form.active_field_index, 1);
            // The empty name field was blur-validated on the way out
            assert_eq!(
                app.state.register_form.full_name.error(),
                Some(ValidationError::Required)
            );
        }

        #[tokio::test]
        async fn test_clicking_terms_checkbox_toggles_it() {
            let mut app = app_with_empty_store().await;
            app.terminal_size = Some((30, 80));
            app.state.current_view = View::Register;
            let sections = forms::register_sections(main_area_for(&app));

            let terms_field = sections.fields[4];
            let (x, y) = (terms_field.x + 1, terms_field.y + 1);
            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), x, y))
                .await
                .unwrap();
            assert!(app.state.register_form.terms.is_checked());
        }

        #[tokio::test]
        async fn test_mouse_ignored_without_terminal_size() {
            let mut app = app_with_empty_store().await;
            app.handle_mouse(mouse_at(MouseEventKind::Down(MouseButton::Left), 2, 4))
                .await
                .unwrap();
            assert_eq!(app.state.current_view, View::Welcome);
        }
    }
}
