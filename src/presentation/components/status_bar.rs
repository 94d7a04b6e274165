use ratatui::prelude::*;

use crate::{
    core::state::AppState,
    presentation::{
        config::{keybindings::Action, Palette},
        widgets::status_bar::StatusBarWidget,
    },
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn view(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let hints = hints(state);
        let mode = if state.ui.is_editing() { "EDITING" } else { "NORMAL" };
        let widget = StatusBarWidget::new(
            state.system.status_message.as_deref(),
            &hints,
            mode,
            *palette,
        );
        frame.render_widget(widget, area);
    }
}

/// Key hints for the current mode, built from the active keybindings
pub fn hints(state: &AppState) -> String {
    if state.ui.is_editing() {
        return "C-s send  Tab next field  Esc stop editing".to_string();
    }

    let keybindings = &state.config.config.keybindings;
    let mut actions = vec![
        (Action::NextSection, "section"),
        (Action::NextItem, "next"),
        (Action::ToggleTheme, "theme"),
    ];
    if state.projects.is_modal_open() {
        actions = vec![(Action::Close, "close")];
    }
    actions.push((Action::Quit, "quit"));

    actions
        .into_iter()
        .filter_map(|(action, label)| {
            keybindings
                .keys_for(&action)
                .into_iter()
                .next()
                .map(|key| format!("{key} {label}"))
        })
        .collect::<Vec<_>>()
        .join("  ")
}
