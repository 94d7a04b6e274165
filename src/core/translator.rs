use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::presentation::config::keybindings::Action;
use crate::{
    core::{
        msg::{
            contact::ContactMsg, journey::JourneyMsg, nav::NavMsg, projects::ProjectsMsg,
            system::SystemMsg, testimonials::TestimonialsMsg, theme::ThemeMsg, Msg,
        },
        state::{nav::Section, AppState},
    },
    raw_msg::RawMsg,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],
        RawMsg::Tick => vec![Msg::System(SystemMsg::Tick)],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Side-effect results
        RawMsg::ContactDelivered => vec![Msg::Contact(ContactMsg::Delivered)],
        RawMsg::ContactFailed(reason) => vec![Msg::Contact(ContactMsg::Failed(reason))],
        RawMsg::ThemeSaveFailed(reason) => vec![Msg::Theme(ThemeMsg::SaveFailed(reason))],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Rendering is driven by the runner
        RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    // Context-sensitive key bindings
    if state.ui.is_editing() {
        translate_editing_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// Key bindings while a contact form field has focus
fn translate_editing_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key {
        KeyEvent {
            code: KeyCode::Char('s'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => vec![Msg::Contact(ContactMsg::Submit)],

        KeyEvent {
            code: KeyCode::Esc, ..
        } => vec![Msg::Contact(ContactMsg::StopEditing)],

        KeyEvent {
            code: KeyCode::Tab, ..
        } => vec![Msg::Contact(ContactMsg::FocusNext)],

        KeyEvent {
            code: KeyCode::BackTab,
            ..
        } => vec![Msg::Contact(ContactMsg::FocusPrevious)],

        // Single-line fields move on instead of inserting a newline
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } if !state.contact.focus.is_multiline() => vec![Msg::Contact(ContactMsg::FocusNext)],

        // Everything else is text input for the focused field
        _ => vec![Msg::Contact(ContactMsg::Input(key))],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Get keybindings from config state (flat mapping)
    if let Some(action) = state.config.config.keybindings.get(&vec![key]) {
        return translate_action_to_msg(action, state);
    }

    vec![] // No matching keybinding found
}

fn translate_action_to_msg(action: &Action, state: &AppState) -> Vec<Msg> {
    // The details modal captures everything except app-level actions
    if state.projects.is_modal_open() {
        return match action {
            Action::Quit => vec![Msg::System(SystemMsg::Quit)],
            Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
            Action::ToggleTheme => vec![Msg::Theme(ThemeMsg::Toggle)],
            Action::Close | Action::Open => vec![Msg::Projects(ProjectsMsg::CloseDetails)],
            _ => vec![],
        };
    }

    let section = state.nav.current;
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::ToggleTheme => vec![Msg::Theme(ThemeMsg::Toggle)],

        Action::NextSection => vec![Msg::Nav(NavMsg::Next)],
        Action::PreviousSection => vec![Msg::Nav(NavMsg::Previous)],
        Action::GoTo(target) => vec![Msg::Nav(NavMsg::Select(*target))],

        Action::NextItem => match section {
            Section::Projects => vec![Msg::Projects(ProjectsMsg::NextCategory)],
            Section::Journey => vec![Msg::Journey(JourneyMsg::NextTab)],
            Section::Testimonials => vec![Msg::Testimonials(TestimonialsMsg::Next)],
            _ => vec![],
        },
        Action::PreviousItem => match section {
            Section::Projects => vec![Msg::Projects(ProjectsMsg::PreviousCategory)],
            Section::Journey => vec![Msg::Journey(JourneyMsg::PreviousTab)],
            Section::Testimonials => vec![Msg::Testimonials(TestimonialsMsg::Previous)],
            _ => vec![],
        },

        Action::SelectDown if section == Section::Projects => {
            vec![Msg::Projects(ProjectsMsg::SelectNext)]
        }
        Action::SelectUp if section == Section::Projects => {
            vec![Msg::Projects(ProjectsMsg::SelectPrevious)]
        }
        Action::SelectFirst => match section {
            Section::Projects => vec![Msg::Projects(ProjectsMsg::SelectFirst)],
            Section::Testimonials => vec![Msg::Testimonials(TestimonialsMsg::Select(0))],
            _ => vec![],
        },
        Action::SelectLast => match section {
            Section::Projects => vec![Msg::Projects(ProjectsMsg::SelectLast)],
            Section::Testimonials => vec![Msg::Testimonials(TestimonialsMsg::Select(
                state.testimonials.len().saturating_sub(1),
            ))],
            _ => vec![],
        },
        Action::SelectDown | Action::SelectUp => vec![],

        Action::Open => match section {
            Section::Projects => vec![Msg::Projects(ProjectsMsg::OpenDetails)],
            Section::Contact => vec![Msg::Contact(ContactMsg::StartEditing)],
            _ => vec![],
        },
        Action::Close => vec![Msg::System(SystemMsg::ClearStatusMessage)],

        Action::Compose => vec![Msg::Contact(ContactMsg::StartEditing)],
        Action::Submit if section == Section::Contact => vec![Msg::Contact(ContactMsg::Submit)],
        Action::Submit => vec![],
    }
}
