use strum::{Display, EnumIter, IntoEnumIterator};

use crate::{core::state::ui::TextAreaState, domain::contact::ContactMessage};

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Email service is not configured. Please contact me directly.";
pub const SENT_MESSAGE: &str = "Your message was sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum ContactField {
    #[default]
    Name,
    Email,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        let fields: Vec<ContactField> = ContactField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + 1) % fields.len()]
    }

    pub fn previous(self) -> Self {
        let fields: Vec<ContactField> = ContactField::iter().collect();
        let index = fields.iter().position(|f| *f == self).unwrap_or(0);
        fields[(index + fields.len() - 1) % fields.len()]
    }

    /// Whether Enter inserts a newline instead of moving on
    pub fn is_multiline(self) -> bool {
        self == ContactField::Message
    }
}

/// Outcome shown under the contact form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn message(&self) -> &str {
        match self {
            FormStatus::Success(m) | FormStatus::Error(m) => m,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormStatus::Error(_))
    }
}

/// Contact form fields, focus and submission status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub name: TextAreaState,
    pub email: TextAreaState,
    pub message: TextAreaState,
    pub focus: ContactField,
    pub is_submitting: bool,
    pub status: Option<FormStatus>,
}

impl ContactFormState {
    pub fn field(&self, field: ContactField) -> &TextAreaState {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut TextAreaState {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }

    pub fn focused(&self) -> &TextAreaState {
        self.field(self.focus)
    }

    /// Snapshot of the current field values
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage::new(
            self.name.content.trim(),
            self.email.content.trim(),
            self.message.content.trim_end(),
        )
    }

    /// Empty all fields and return focus to the first one
    pub fn clear(&mut self) {
        self.name = TextAreaState::empty();
        self.email = TextAreaState::empty();
        self.message = TextAreaState::empty();
        self.focus = ContactField::default();
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(FormStatus::Error(message.into()));
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.status = Some(FormStatus::Success(message.into()));
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::ui::CursorPosition;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::default();
        form.name = TextAreaState::new(" Ada ".into(), CursorPosition::default(), None);
        form.email = TextAreaState::new("ada@example.com".into(), CursorPosition::default(), None);
        form.message = TextAreaState::new("Hello\n".into(), CursorPosition::default(), None);
        form
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(ContactField::Name.next(), ContactField::Email);
        assert_eq!(ContactField::Message.next(), ContactField::Name);
        assert_eq!(ContactField::Name.previous(), ContactField::Message);
    }

    #[test]
    fn test_to_message_trims() {
        assert_eq!(
            filled().to_message(),
            ContactMessage::new("Ada", "ada@example.com", "Hello")
        );
    }

    #[test]
    fn test_clear_empties_fields() {
        let mut form = filled();
        form.focus = ContactField::Message;
        form.clear();
        assert_eq!(form.to_message(), ContactMessage::default());
        assert_eq!(form.focus, ContactField::Name);
    }

    #[test]
    fn test_status_helpers() {
        let mut form = ContactFormState::default();
        form.set_error(FAILED_MESSAGE);
        assert!(form.status.as_ref().is_some_and(FormStatus::is_error));
        form.set_success(SENT_MESSAGE);
        assert_eq!(
            form.status.as_ref().map(FormStatus::message),
            Some(SENT_MESSAGE)
        );
    }
}
