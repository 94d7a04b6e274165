use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectsMsg {
    // Category filter
    NextCategory,
    PreviousCategory,
    SelectCategory(String),

    // Selection within the filtered list
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,

    // Details modal
    OpenDetails,
    CloseDetails,
}
