//! Registration form state management

use super::field::FormField;
use crate::validation::{
    validate_confirm_password, validate_email, validate_full_name, validate_password,
    validate_terms, ValidationError,
};
use std::time::{Duration, Instant};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_active_field_mut(&mut self) -> &mut FormField;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The five validated fields, in submit-validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

impl RegisterField {
    /// Fixed order in which validators run on submit
    pub const ALL: [RegisterField; 5] = [
        RegisterField::FullName,
        RegisterField::Email,
        RegisterField::Password,
        RegisterField::ConfirmPassword,
        RegisterField::Terms,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Terms => "I agree to the Terms & Conditions",
        }
    }

    /// Human-readable message for a rejection of this field
    pub fn error_message(&self, reason: ValidationError) -> &'static str {
        match (self, reason) {
            (Self::FullName, ValidationError::Required) => "Full Name is required.",
            (Self::FullName, ValidationError::TooShort) => {
                "Full Name must be at least 3 characters."
            }
            (Self::Email, ValidationError::Required) => "Email is required.",
            (Self::Email, ValidationError::InvalidFormat) => {
                "Please enter a valid email address."
            }
            (Self::Password, ValidationError::Required) => "Password is required.",
            (Self::Password, ValidationError::TooShort) => {
                "Password must be at least 8 characters long."
            }
            (Self::Password, ValidationError::WeakPassword) => {
                "Password needs 1 uppercase, 1 lowercase, 1 number."
            }
            (Self::ConfirmPassword, ValidationError::Required) => "Please confirm your password.",
            (Self::ConfirmPassword, ValidationError::Mismatch) => "Passwords do not match.",
            (Self::Terms, ValidationError::NotAccepted) => {
                "You must agree to the Terms & Conditions."
            }
            _ => "Invalid value.",
        }
    }
}

/// Overall form phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Accepting input; per-field errors may be visible
    Editing,
    /// Submission accepted; success banner visible until it expires
    Accepted { since: Instant },
}

/// Registration form
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub confirm_password: FormField,
    pub terms: FormField,
    pub active_field_index: usize,
    pub phase: FormPhase,
}

/// Focus index of the buttons row (after the five fields)
pub const BUTTONS_ROW_INDEX: usize = 5;

impl RegisterForm {
    /// How long the success banner stays up after an accepted submission
    pub const SUCCESS_BANNER_TTL: Duration = Duration::from_millis(5000);

    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", RegisterField::FullName.label()),
            email: FormField::text("email", RegisterField::Email.label()),
            password: FormField::secret("password", RegisterField::Password.label()),
            confirm_password: FormField::secret(
                "confirm_password",
                RegisterField::ConfirmPassword.label(),
            ),
            terms: FormField::checkbox("terms", RegisterField::Terms.label()),
            active_field_index: 0,
            phase: FormPhase::Editing,
        }
    }

    /// Returns true if the buttons row is currently active
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW_INDEX
    }

    /// Field state for a given field kind
    pub fn field(&self, kind: RegisterField) -> &FormField {
        match kind {
            RegisterField::FullName => &self.full_name,
            RegisterField::Email => &self.email,
            RegisterField::Password => &self.password,
            RegisterField::ConfirmPassword => &self.confirm_password,
            RegisterField::Terms => &self.terms,
        }
    }

    fn field_mut(&mut self, kind: RegisterField) -> &mut FormField {
        match kind {
            RegisterField::FullName => &mut self.full_name,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
            RegisterField::ConfirmPassword => &mut self.confirm_password,
            RegisterField::Terms => &mut self.terms,
        }
    }

    /// Field kind at a focus index (the buttons row has none)
    pub fn field_kind_at(index: usize) -> Option<RegisterField> {
        RegisterField::ALL.get(index).copied()
    }

    /// Move focus forward, validating the text field being left
    pub fn focus_next(&mut self) {
        self.validate_on_leave();
        self.next_field();
    }

    /// Move focus backward, validating the text field being left
    pub fn focus_prev(&mut self) {
        self.validate_on_leave();
        self.prev_field();
    }

    /// Focus loss is the blur trigger for text fields; the checkbox validates
    /// on toggle instead.
    fn validate_on_leave(&mut self) {
        if let Some(kind) = Self::field_kind_at(self.active_field_index) {
            if kind != RegisterField::Terms {
                self.validate_field(kind);
            }
        }
    }

    /// Move focus directly to a field (mouse click), validating the text
    /// field being left
    pub fn focus_field(&mut self, index: usize) {
        if index != self.active_field_index {
            self.validate_on_leave();
            self.set_active_field(index);
        }
    }

    /// Flip the terms checkbox and validate it (change event)
    pub fn toggle_terms(&mut self) {
        self.terms.toggle_checked();
        self.validate_field(RegisterField::Terms);
        tracing::debug!(checked = self.terms.is_checked(), "terms checkbox toggled");
    }

    /// Run one field's validator against the current raw value and record the
    /// outcome in that field's error slot. Returns whether the field passed.
    pub fn validate_field(&mut self, kind: RegisterField) -> bool {
        let outcome = match kind {
            RegisterField::FullName => validate_full_name(self.full_name.as_text()),
            RegisterField::Email => validate_email(self.email.as_text()),
            RegisterField::Password => validate_password(self.password.as_text()),
            RegisterField::ConfirmPassword => {
                validate_confirm_password(self.confirm_password.as_text(), self.password.as_text())
            }
            RegisterField::Terms => validate_terms(self.terms.is_checked()),
        };
        let ok = outcome.is_ok();
        self.field_mut(kind).set_outcome(outcome);
        ok
    }

    /// Run all five validators in the fixed order, updating every field's
    /// error slot regardless of earlier failures. Returns true iff all five
    /// passed. This alone gates submission.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for kind in RegisterField::ALL {
            let ok = self.validate_field(kind);
            all_valid = all_valid && ok;
        }
        all_valid
    }

    /// Submit-intent: validate everything, and on acceptance reset the form
    /// and raise the success banner. Returns whether the submission was
    /// accepted.
    pub fn submit(&mut self) -> bool {
        if self.validate_all() {
            tracing::info!("registration accepted");
            self.reset_fields();
            self.active_field_index = 0;
            self.phase = FormPhase::Accepted {
                since: Instant::now(),
            };
            true
        } else {
            let rejected = RegisterField::ALL
                .iter()
                .filter(|kind| !self.field(**kind).is_valid())
                .count();
            tracing::info!(rejected, "registration rejected");
            // Any failure hides a banner left over from an earlier submission
            self.phase = FormPhase::Editing;
            false
        }
    }

    /// Expire the success banner. Called on every event-loop tick; the banner
    /// is fire-and-forget, so a re-submission simply restarts the window.
    pub fn tick(&mut self) {
        if let FormPhase::Accepted { since } = self.phase {
            if since.elapsed() >= Self::SUCCESS_BANNER_TTL {
                self.phase = FormPhase::Editing;
            }
        }
    }

    /// Whether the success banner should be drawn
    pub fn success_banner_visible(&self) -> bool {
        matches!(self.phase, FormPhase::Accepted { .. })
    }

    fn reset_fields(&mut self) {
        self.full_name.clear();
        self.email.clear();
        self.password.clear();
        self.confirm_password.clear();
        self.terms.clear();
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for RegisterForm {
    fn field_count(&self) -> usize {
        6 // five fields plus the buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTONS_ROW_INDEX);
    }
    fn get_active_field_mut(&mut self) -> &mut FormField {
        match self.active_field_index {
            0 => &mut self.full_name,
            1 => &mut self.email,
            2 => &mut self.password,
            3 => &mut self.confirm_password,
            // Buttons row (index 5) returns terms as dummy (not used for text input)
            _ => &mut self.terms,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.full_name),
            1 => Some(&self.email),
            2 => Some(&self.password),
            3 => Some(&self.confirm_password),
            4 => Some(&self.terms),
            // Index 5 is the buttons row, no FormField for it
            _ => None,
        }
    }
}
