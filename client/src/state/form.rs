//! Submission form state.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use board::config::GuestbookConfig;
use board::entry::Submission;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Message,
}

/// Raw input values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub message: String,
}

impl FormState {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.message.clear();
    }

    /// Submission built from the current inputs, defaults applied.
    #[must_use]
    pub fn submission(&self, image: Option<String>, config: &GuestbookConfig) -> Submission {
        Submission::resolve(&self.name, &self.message, image, config)
    }
}
