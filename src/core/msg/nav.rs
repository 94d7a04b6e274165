use serde::{Deserialize, Serialize};

use crate::core::state::nav::Section;

/// Movement between the portfolio sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavMsg {
    Next,
    Previous,
    Select(Section),
}
