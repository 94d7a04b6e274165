use crate::{
    core::{cmd::Cmd, msg::projects::ProjectsMsg, state::carousel::Carousel},
    domain::content::{Content, Project, ALL_CATEGORIES},
};

/// Project gallery: category filter, selected card and the details modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectsState {
    /// `"All"` followed by the distinct categories of the content
    pub categories: Vec<String>,
    pub category: Carousel,
    /// Index into the filtered list
    pub selected: usize,
    /// Project id whose details are open
    pub modal: Option<u32>,
}

impl ProjectsState {
    pub fn new(content: &Content) -> Self {
        let categories = content.project_categories();
        Self {
            category: Carousel::new(categories.len()),
            categories,
            selected: 0,
            modal: None,
        }
    }

    pub fn active_category(&self) -> &str {
        self.categories
            .get(self.category.index())
            .map_or(ALL_CATEGORIES, String::as_str)
    }

    /// Projects matching the active filter
    pub fn visible<'a>(&self, content: &'a Content) -> Vec<&'a Project> {
        content.projects_in(self.active_category())
    }

    pub fn selected_project<'a>(&self, content: &'a Content) -> Option<&'a Project> {
        self.visible(content).get(self.selected).copied()
    }

    pub fn open_project<'a>(&self, content: &'a Content) -> Option<&'a Project> {
        self.modal.and_then(|id| content.project(id))
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn update(&mut self, msg: ProjectsMsg, content: &Content) -> Vec<Cmd> {
        let visible = self.visible(content).len();
        match msg {
            ProjectsMsg::NextCategory => {
                self.category.next();
                self.reset_selection();
            }
            ProjectsMsg::PreviousCategory => {
                self.category.previous();
                self.reset_selection();
            }
            ProjectsMsg::SelectCategory(name) => {
                if let Some(index) = self.categories.iter().position(|c| *c == name) {
                    self.category.select(index);
                    self.reset_selection();
                }
            }

            ProjectsMsg::SelectNext => {
                if self.selected + 1 < visible {
                    self.selected += 1;
                }
            }
            ProjectsMsg::SelectPrevious => {
                self.selected = self.selected.saturating_sub(1);
            }
            ProjectsMsg::SelectFirst => self.selected = 0,
            ProjectsMsg::SelectLast => self.selected = visible.saturating_sub(1),

            ProjectsMsg::OpenDetails => {
                self.modal = self.selected_project(content).map(|p| p.id);
            }
            ProjectsMsg::CloseDetails => self.modal = None,
        }
        vec![]
    }

    fn reset_selection(&mut self) {
        self.selected = 0;
        self.modal = None;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn titles(state: &ProjectsState, content: &Content) -> Vec<String> {
        state
            .visible(content)
            .iter()
            .map(|p| p.title.clone())
            .collect()
    }

    #[test]
    fn test_all_shows_every_project() {
        let content = Content::builtin();
        let state = ProjectsState::new(&content);
        assert_eq!(state.visible(&content).len(), content.projects.len());
    }

    #[test]
    fn test_category_filter() {
        let content = Content::builtin();
        let mut state = ProjectsState::new(&content);
        state.update(
            ProjectsMsg::SelectCategory("Web Development".to_string()),
            &content,
        );
        assert_eq!(state.active_category(), "Web Development");
        assert!(state
            .visible(&content)
            .iter()
            .all(|p| p.category == "Web Development"));
        assert_eq!(titles(&state, &content).len(), 2);
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let content = Content::builtin();
        let mut state = ProjectsState::new(&content);
        state.update(ProjectsMsg::SelectCategory("Games".to_string()), &content);
        assert_eq!(state.active_category(), ALL_CATEGORIES);
    }

    #[test]
    fn test_category_cycle_wraps_back_to_all() {
        let content = Content::builtin();
        let mut state = ProjectsState::new(&content);
        state.update(ProjectsMsg::PreviousCategory, &content);
        assert_eq!(
            state.active_category(),
            state.categories.last().map(String::as_str).unwrap_or_default()
        );
        state.update(ProjectsMsg::NextCategory, &content);
        assert_eq!(state.active_category(), ALL_CATEGORIES);
    }

    #[test]
    fn test_selection_is_clamped() {
        let content = Content::builtin();
        let mut state = ProjectsState::new(&content);
        state.update(ProjectsMsg::SelectPrevious, &content);
        assert_eq!(state.selected, 0);
        for _ in 0..10 {
            state.update(ProjectsMsg::SelectNext, &content);
        }
        assert_eq!(state.selected, content.projects.len() - 1);
    }

    #[test]
    fn test_open_and_close_details() {
        let content = Content::builtin();
        let mut state = ProjectsState::new(&content);
        state.update(ProjectsMsg::SelectNext, &content);
        state.update(ProjectsMsg::OpenDetails, &content);
        assert_eq!(state.modal, Some(content.projects[1].id));
        assert_eq!(
            state.open_project(&content).map(|p| p.title.as_str()),
            Some(content.projects[1].title.as_str())
        );
        state.update(ProjectsMsg::CloseDetails, &content);
        assert!(!state.is_modal_open());
    }

    #[test]
    fn test_changing_filter_resets_selection_and_modal() {
        let content = Content::builtin();
        let mut state = ProjectsState::new(&content);
        state.update(ProjectsMsg::SelectLast, &content);
        state.update(ProjectsMsg::OpenDetails, &content);
        state.update(ProjectsMsg::NextCategory, &content);
        assert_eq!(state.selected, 0);
        assert_eq!(state.modal, None);
    }
}
