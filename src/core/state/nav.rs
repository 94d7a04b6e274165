use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::core::{cmd::Cmd, msg::nav::NavMsg};

/// Portfolio sections in page order
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
)]
pub enum Section {
    #[default]
    Home,
    About,
    Skills,
    Services,
    Projects,
    Journey,
    Testimonials,
    Contact,
}

impl Section {
    pub fn all() -> Vec<Section> {
        Section::iter().collect()
    }

    pub fn index(self) -> usize {
        Section::iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::iter().nth(index)
    }

    pub fn next(self) -> Section {
        Section::from_index(self.index() + 1).unwrap_or(Section::Home)
    }

    pub fn previous(self) -> Section {
        match self.index() {
            0 => Section::Contact,
            i => Section::from_index(i - 1).unwrap_or(Section::Home),
        }
    }
}

/// Which section is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub current: Section,
}

impl NavState {
    pub fn is(&self, section: Section) -> bool {
        self.current == section
    }

    pub fn update(&mut self, msg: NavMsg) -> Vec<Cmd> {
        self.current = match msg {
            NavMsg::Next => self.current.next(),
            NavMsg::Previous => self.current.previous(),
            NavMsg::Select(section) => section,
        };
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_sections_in_page_order() {
        let titles: Vec<String> = Section::all().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            titles,
            vec![
                "Home",
                "About",
                "Skills",
                "Services",
                "Projects",
                "Journey",
                "Testimonials",
                "Contact"
            ]
        );
    }

    #[rstest]
    #[case(Section::Home, Section::About)]
    #[case(Section::Testimonials, Section::Contact)]
    #[case(Section::Contact, Section::Home)]
    fn test_next_wraps(#[case] from: Section, #[case] to: Section) {
        assert_eq!(from.next(), to);
    }

    #[rstest]
    #[case(Section::About, Section::Home)]
    #[case(Section::Home, Section::Contact)]
    fn test_previous_wraps(#[case] from: Section, #[case] to: Section) {
        assert_eq!(from.previous(), to);
    }

    #[test]
    fn test_select_jumps() {
        let mut nav = NavState::default();
        nav.update(NavMsg::Select(Section::Journey));
        assert!(nav.is(Section::Journey));
        nav.update(NavMsg::Next);
        assert!(nav.is(Section::Testimonials));
    }
}
