use crate::domain::ui::{CursorPosition, TextSelection};

/// Complete state representation of a TextArea component
/// Preserved across TextArea recreation so the update path stays pure
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    pub fn empty() -> Self {
        Default::default()
    }

    pub fn has_content(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// High-level UI mode for keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Normal,
    /// Keys go to the focused contact form field
    Editing,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub current_mode: UiMode,
}

impl UiState {
    pub fn is_editing(&self) -> bool {
        self.current_mode == UiMode::Editing
    }

    pub fn is_normal(&self) -> bool {
        self.current_mode == UiMode::Normal
    }
}
