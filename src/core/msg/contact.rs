use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Messages specific to the contact form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ContactMsg {
    // Editing lifecycle
    StartEditing,
    StopEditing,
    FocusNext,
    FocusPrevious,
    Input(KeyEvent),

    // Delivery
    Submit,
    Delivered,
    Failed(String),
}

impl ContactMsg {
    pub fn is_frequent(&self) -> bool {
        matches!(self, ContactMsg::Input(_))
    }
}
