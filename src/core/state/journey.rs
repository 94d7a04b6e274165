use strum::IntoEnumIterator;

use crate::{
    core::{cmd::Cmd, msg::journey::JourneyMsg},
    domain::content::JourneyTab,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JourneyState {
    pub tab: JourneyTab,
}

impl JourneyState {
    pub fn update(&mut self, msg: JourneyMsg) -> Vec<Cmd> {
        let tabs: Vec<JourneyTab> = JourneyTab::iter().collect();
        let index = tabs.iter().position(|t| *t == self.tab).unwrap_or(0);
        self.tab = match msg {
            JourneyMsg::NextTab => tabs[(index + 1) % tabs.len()],
            JourneyMsg::PreviousTab => tabs[(index + tabs.len() - 1) % tabs.len()],
            JourneyMsg::SelectTab(tab) => tab,
        };
        vec![]
    }
}
