use std::sync::Arc;

use crate::{domain::content::Content, domain::theme::Theme, infrastructure::config::Config};

pub mod carousel;
pub mod contact;
pub mod journey;
pub mod nav;
pub mod projects;
pub mod system;
pub mod theme;
pub mod ui;

use carousel::Carousel;
use contact::ContactFormState;
use journey::JourneyState;
use nav::NavState;
use projects::ProjectsState;
use system::SystemState;
use theme::ThemeState;
use ui::UiState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Read-only portfolio content shared with the presentation layer
    pub content: Arc<Content>,
    pub config: ConfigState,
    pub theme: ThemeState,
    pub nav: NavState,
    pub projects: ProjectsState,
    pub journey: JourneyState,
    pub testimonials: Carousel,
    pub contact: ContactFormState,
    pub ui: UiState,
    pub system: SystemState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Build the initial state for the given content, configuration and starting theme
    pub fn new(content: Arc<Content>, config: Config, theme: Theme) -> Self {
        Self {
            projects: ProjectsState::new(&content),
            testimonials: Carousel::new(content.testimonials.len()),
            content,
            config: ConfigState { config },
            theme: ThemeState::new(theme),
            nav: NavState::default(),
            journey: JourneyState::default(),
            contact: ContactFormState::default(),
            ui: UiState::default(),
            system: SystemState::default(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(
            Arc::new(Content::builtin()),
            Config::default(),
            Theme::default(),
        )
    }
}
