use std::sync::Arc;

use crate::{
    core::cmd::Cmd,
    core::msg::{
        contact::ContactMsg, nav::NavMsg, system::SystemMsg, testimonials::TestimonialsMsg,
        theme::ThemeMsg, Msg,
    },
    core::state::{
        contact::{FAILED_MESSAGE, NOT_CONFIGURED_MESSAGE, SENT_MESSAGE},
        nav::Section,
        ui::UiMode,
        AppState,
    },
    core::textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Collaborators the pure update path may call into
pub struct UpdateContext<'a> {
    pub text_area: &'a (dyn TextAreaEngine + Sync),
}

impl Default for UpdateContext<'static> {
    fn default() -> Self {
        static ENGINE: NoopTextAreaEngine = NoopTextAreaEngine;
        Self { text_area: &ENGINE }
    }
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(msg, state, &UpdateContext::default())
}

/// Same as [`update`], with an explicit textarea engine for contact form input
pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        Msg::Nav(nav_msg) => {
            let commands = state.nav.update(nav_msg);
            if !state.nav.is(Section::Contact) {
                state.ui.current_mode = UiMode::Normal;
            }
            (state, commands)
        }

        Msg::Theme(ThemeMsg::SaveFailed(reason)) => {
            state.system.status_message = Some(format!("[Theme] Could not save: {reason}"));
            let commands = state.theme.update(ThemeMsg::SaveFailed(reason));
            (state, commands)
        }

        Msg::Theme(theme_msg) => {
            let commands = state.theme.update(theme_msg);
            state.system.status_message = Some(format!("[Theme] {}", state.theme.current));
            (state, commands)
        }

        Msg::Projects(projects_msg) => {
            let content = Arc::clone(&state.content);
            let commands = state.projects.update(projects_msg, &content);
            (state, commands)
        }

        Msg::Journey(journey_msg) => {
            let commands = state.journey.update(journey_msg);
            (state, commands)
        }

        Msg::Testimonials(testimonials_msg) => {
            match testimonials_msg {
                TestimonialsMsg::Next => state.testimonials.next(),
                TestimonialsMsg::Previous => state.testimonials.previous(),
                TestimonialsMsg::Select(index) => state.testimonials.select(index),
            }
            (state, vec![])
        }

        Msg::Contact(contact_msg) => update_contact(contact_msg, state, ctx),
    }
}

fn update_contact(
    msg: ContactMsg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        ContactMsg::StartEditing => {
            state.nav.update(NavMsg::Select(Section::Contact));
            state.ui.current_mode = UiMode::Editing;
            (state, vec![])
        }

        ContactMsg::StopEditing => {
            state.ui.current_mode = UiMode::Normal;
            (state, vec![])
        }

        ContactMsg::FocusNext => {
            state.contact.focus = state.contact.focus.next();
            (state, vec![])
        }

        ContactMsg::FocusPrevious => {
            state.contact.focus = state.contact.focus.previous();
            (state, vec![])
        }

        ContactMsg::Input(key) => {
            if state.ui.is_editing() && !state.contact.is_submitting {
                let focus = state.contact.focus;
                let next = ctx.text_area.apply_keys(state.contact.field(focus), &[key]);
                *state.contact.field_mut(focus) = next;
            }
            (state, vec![])
        }

        ContactMsg::Submit => submit_contact(state),

        ContactMsg::Delivered => {
            state.contact.is_submitting = false;
            state.contact.clear();
            state.contact.set_success(SENT_MESSAGE);
            let commands = vec![Cmd::LogInfo {
                message: "Contact message delivered".to_string(),
            }];
            (state, commands)
        }

        ContactMsg::Failed(reason) => {
            state.contact.is_submitting = false;
            state.contact.set_error(FAILED_MESSAGE);
            let commands = vec![Cmd::LogError {
                message: format!("Failed to send contact message: {reason}"),
            }];
            (state, commands)
        }
    }
}

/// Validate the form, then hand the message to the email provider when it is configured.
/// Field values are kept until delivery succeeds.
fn submit_contact(mut state: AppState) -> (AppState, Vec<Cmd>) {
    if state.contact.is_submitting {
        return (state, vec![]);
    }

    let message = state.contact.to_message();
    if let Err(e) = message.validate() {
        state.contact.set_error(e.message());
        return (state, vec![]);
    }

    let Some(credentials) = state.config.config.emailjs.credentials() else {
        state.contact.set_error(NOT_CONFIGURED_MESSAGE);
        return (state, vec![]);
    };

    state.contact.is_submitting = true;
    state.contact.status = None;
    state.ui.current_mode = UiMode::Normal;
    let cmd = Cmd::SendContactMessage {
        credentials: Arc::new(credentials),
        message,
    };
    (state, vec![cmd])
}
