//! Form field value objects

use crate::validation::ValidationError;

/// Type-safe field values
#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    Checkbox(bool),
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// A single form field: its configuration, current raw value and error slot.
///
/// A field is valid exactly when its error slot is empty.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: FieldValue,
    /// Render the value masked (password fields)
    pub is_secret: bool,
    error: Option<ValidationError>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_secret: false,
            error: None,
        }
    }

    /// Create a new masked text field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Text(String::new()),
            is_secret: true,
            error: None,
        }
    }

    /// Create a new checkbox field, initially unchecked
    pub fn checkbox(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: FieldValue::Checkbox(false),
            is_secret: false,
            error: None,
        }
    }

    /// Get the text value (returns empty string for checkbox fields)
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checkbox(_) => "",
        }
    }

    /// Get the checkbox value (returns false for text fields)
    pub fn is_checked(&self) -> bool {
        match &self.value {
            FieldValue::Checkbox(b) => *b,
            FieldValue::Text(_) => false,
        }
    }

    /// Flip the checkbox value
    pub fn toggle_checked(&mut self) {
        if let FieldValue::Checkbox(b) = &mut self.value {
            *b = !*b;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if let FieldValue::Text(s) = &mut self.value {
            s.push(c);
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value and error slot
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Checkbox(b) => *b = false,
        }
        self.error = None;
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => {
                if self.is_secret {
                    "•".repeat(s.chars().count())
                } else {
                    s.clone()
                }
            }
            FieldValue::Checkbox(b) => {
                if *b {
                    "[x]".to_string()
                } else {
                    "[ ]".to_string()
                }
            }
        }
    }

    /// Current rejection reason, if any
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    /// True when the error slot is empty
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Record a validation outcome, updating the error slot either way
    pub fn set_outcome(&mut self, outcome: Result<(), ValidationError>) {
        self.error = outcome.err();
    }
}
