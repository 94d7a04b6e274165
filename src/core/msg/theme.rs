use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeMsg {
    Toggle,
    /// Writing the preference failed; the in-memory theme is kept
    SaveFailed(String),
}
