use crate::{
    core::{cmd::Cmd, msg::theme::ThemeMsg},
    domain::theme::Theme,
};

/// Active colour theme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub current: Theme,
}

impl ThemeState {
    pub fn new(current: Theme) -> Self {
        Self { current }
    }

    pub fn is_dark(&self) -> bool {
        self.current.is_dark()
    }

    /// Flip between dark and light, returning the new theme
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        self.current
    }

    /// Theme-specific update function
    /// Every toggle asks for the new value to be persisted
    pub fn update(&mut self, msg: ThemeMsg) -> Vec<Cmd> {
        match msg {
            ThemeMsg::Toggle => vec![Cmd::PersistTheme(self.toggle())],
            ThemeMsg::SaveFailed(reason) => vec![Cmd::LogError {
                message: format!("Failed to save theme preference: {reason}"),
            }],
        }
    }
}
