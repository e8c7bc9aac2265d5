//! Application state definitions

use super::faq::FaqState;
use super::forms::RegisterForm;
use super::theme::{Theme, ThemeMode};

/// Greeting shown when the welcome button is pressed
pub const GREETING: &str = "Welcome, user! You clicked the button!";

/// Hover box text while the pointer is outside
pub const HOVER_IDLE: &str = "Hover over me!";

/// Hover box text while the pointer is inside
pub const HOVER_ACTIVE: &str = "You're hovering!";

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Welcome,
    Tally,
    Faq,
    Register,
}

impl View {
    /// Sidebar order
    pub const ALL: [View; 4] = [View::Welcome, View::Tally, View::Faq, View::Register];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Tally => "Tally",
            Self::Faq => "FAQ",
            Self::Register => "Register",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Welcome => Self::Tally,
            Self::Tally => Self::Faq,
            Self::Faq => Self::Register,
            Self::Register => Self::Welcome,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Welcome => Self::Register,
            Self::Tally => Self::Welcome,
            Self::Faq => Self::Tally,
            Self::Register => Self::Faq,
        }
    }
}

/// Main application state
///
/// Everything the page shows lives here as an explicit field; displays are
/// re-derived from this struct on every frame.
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    pub theme_mode: ThemeMode,

    // Welcome view
    pub greeting: Option<String>,
    pub hover_active: bool,
    pub echo_input: String,
    pub echo_message: Option<String>,

    // Tally view
    pub tally: i64,

    // FAQ view
    pub faq: FaqState,

    // Register view
    pub register_form: RegisterForm,
}

impl AppState {
    /// Palette for the active theme
    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    /// Flip light/dark and return the new mode
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme_mode = self.theme_mode.toggle();
        tracing::info!(mode = self.theme_mode.label(), "theme switched");
        self.theme_mode
    }

    /// Show the greeting message
    pub fn greet(&mut self) {
        self.greeting = Some(GREETING.to_string());
        tracing::info!("greeting displayed");
    }

    /// Update the hover flag; logs only on edges
    pub fn set_hover(&mut self, inside: bool) {
        if self.hover_active != inside {
            self.hover_active = inside;
            if inside {
                tracing::info!("pointer entered hover box");
            } else {
                tracing::info!("pointer left hover box");
            }
        }
    }

    /// Append a character to the echo input
    pub fn echo_push(&mut self, c: char) {
        self.echo_input.push(c);
    }

    /// Remove the last character from the echo input
    pub fn echo_backspace(&mut self) {
        self.echo_input.pop();
    }

    /// Enter pressed in the echo input: report the text and clear the field
    pub fn echo_submit(&mut self) {
        self.echo_message = Some(format!(
            "You typed: \"{}\" and pressed Enter!",
            self.echo_input
        ));
        tracing::info!(text = %self.echo_input, "echo input submitted");
        self.echo_input.clear();
    }

    /// Increment the tally
    pub fn increment_tally(&mut self) {
        self.tally += 1;
        tracing::info!(tally = self.tally, "tally incremented");
    }

    /// Decrement the tally (may go negative)
    pub fn decrement_tally(&mut self) {
        self.tally -= 1;
        tracing::info!(tally = self.tally, "tally decremented");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod view {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_welcome() {
            assert_eq!(View::default(), View::Welcome);
        }

        #[test]
        fn test_next_cycles_through_all_views() {
            let mut view = View::Welcome;
            for expected in [View::Tally, View::Faq, View::Register, View::Welcome] {
                view = view.next();
                assert_eq!(view, expected);
            }
        }

        #[test]
        fn test_prev_is_inverse_of_next() {
            for view in View::ALL {
                assert_eq!(view.next().prev(), view);
            }
        }
    }

    mod tally {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_at_zero() {
            let state = AppState::default();
            assert_eq!(state.tally, 0);
        }

        #[test]
        fn test_increment_and_decrement() {
            let mut state = AppState::default();
            state.increment_tally();
            state.increment_tally();
            state.decrement_tally();
            assert_eq!(state.tally, 1);
        }

        #[test]
        fn test_may_go_negative() {
            let mut state = AppState::default();
            state.decrement_tally();
            assert_eq!(state.tally, -1);
        }
    }

    mod welcome {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_greet_sets_message() {
            let mut state = AppState::default();
            assert!(state.greeting.is_none());
            state.greet();
            assert_eq!(state.greeting.as_deref(), Some(GREETING));
        }

        #[test]
        fn test_echo_submit_reports_and_clears() {
            let mut state = AppState::default();
            for c in "hello".chars() {
                state.echo_push(c);
            }
            state.echo_submit();
            assert_eq!(
                state.echo_message.as_deref(),
                Some("You typed: \"hello\" and pressed Enter!")
            );
            assert_eq!(state.echo_input, "");
        }

        #[test]
        fn test_echo_backspace() {
            let mut state = AppState::default();
            state.echo_push('h');
            state.echo_push('i');
            state.echo_backspace();
            assert_eq!(state.echo_input, "h");
        }

        #[test]
        fn test_hover_edges() {
            let mut state = AppState::default();
            state.set_hover(true);
            assert!(state.hover_active);
            state.set_hover(true); // no edge
            assert!(state.hover_active);
            state.set_hover(false);
            assert!(!state.hover_active);
        }
    }

    mod theme {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::state::ThemeMode;

        #[test]
        fn test_defaults_to_light() {
            let state = AppState::default();
            assert_eq!(state.theme_mode, ThemeMode::Light);
            assert_eq!(state.theme_mode.label(), "Light");
        }

        #[test]
        fn test_toggle_returns_new_mode() {
            let mut state = AppState::default();
            assert_eq!(state.toggle_theme(), ThemeMode::Dark);
            assert_eq!(state.theme_mode.label(), "Dark");
            assert_eq!(state.toggle_theme(), ThemeMode::Light);
        }
    }
}
