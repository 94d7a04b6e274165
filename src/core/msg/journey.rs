use serde::{Deserialize, Serialize};

use crate::domain::content::JourneyTab;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JourneyMsg {
    NextTab,
    PreviousTab,
    SelectTab(JourneyTab),
}
