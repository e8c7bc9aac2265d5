//! Collapsible FAQ state

/// One question/answer pair with its own visibility flag
#[derive(Debug, Clone)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub expanded: bool,
}

impl FaqEntry {
    fn new(question: &'static str, answer: &'static str) -> Self {
        Self {
            question,
            answer,
            expanded: false,
        }
    }
}

/// FAQ list with keyboard selection
#[derive(Debug, Clone)]
pub struct FaqState {
    pub entries: Vec<FaqEntry>,
    pub selected: usize,
}

impl Default for FaqState {
    fn default() -> Self {
        Self {
            entries: vec![
                FaqEntry::new(
                    "How do I register?",
                    "Open the Register view, fill in all five fields and press the Register button. Fields are checked as you leave them, so mistakes show up early.",
                ),
                FaqEntry::new(
                    "What makes a valid password?",
                    "At least 8 characters with at least one digit, one lowercase and one uppercase letter.",
                ),
                FaqEntry::new(
                    "Is my registration stored anywhere?",
                    "No. Entered values live only for the current session; the only thing written to disk is your light/dark theme preference.",
                ),
                FaqEntry::new(
                    "How do I switch between light and dark mode?",
                    "Press Ctrl+T anywhere. The choice is saved and restored the next time the kiosk starts.",
                ),
            ],
            selected: 0,
        }
    }
}

impl FaqState {
    /// Move selection down
    pub fn select_next(&mut self) {
        if !self.entries.is_empty() && self.selected < self.entries.len() - 1 {
            self.selected += 1;
        }
    }

    /// Move selection up
    pub fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Flip the selected entry between expanded and collapsed
    pub fn toggle_selected(&mut self) {
        if let Some(entry) = self.entries.get_mut(self.selected) {
            entry.expanded = !entry.expanded;
            tracing::info!(question = entry.question, expanded = entry.expanded, "faq entry toggled");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_entries_start_collapsed() {
        let faq = FaqState::default();
        assert!(!faq.entries.is_empty());
        assert!(faq.entries.iter().all(|e| !e.expanded));
        assert_eq!(faq.selected, 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut faq = FaqState::default();
        faq.select_prev();
        assert_eq!(faq.selected, 0);
        for _ in 0..100 {
            faq.select_next();
        }
        assert_eq!(faq.selected, faq.entries.len() - 1);
    }

    #[test]
    fn test_toggle_flips_only_selected() {
        let mut faq = FaqState::default();
        faq.select_next();
        faq.toggle_selected();
        assert!(faq.entries[1].expanded);
        assert!(!faq.entries[0].expanded);
        faq.toggle_selected();
        assert!(!faq.entries[1].expanded);
    }

    #[test]
    fn test_entries_toggle_independently() {
        let mut faq = FaqState::default();
        faq.toggle_selected();
        faq.select_next();
        faq.toggle_selected();
        assert!(faq.entries[0].expanded);
        assert!(faq.entries[1].expanded);
    }
}
