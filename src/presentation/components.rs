//! Component collection and management
//!
//! Components are stateless renderers that receive state as parameters.
//! Each portfolio section has its own component; [`Components::render`]
//! lays out the navigation bar, the active section, the footer and the
//! status bar.

use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::{
    core::state::{nav::Section, AppState},
    domain::{content::Content, text::column_width, theme::Theme},
    presentation::{config::Palette, widgets::tab_bar::TabBarWidget},
};

pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod journey;
pub mod projects;
pub mod services;
pub mod skills;
pub mod status_bar;
pub mod testimonials;

pub use about::AboutComponent;
pub use contact::ContactComponent;
pub use footer::FooterComponent;
pub use hero::HeroComponent;
pub use journey::JourneyComponent;
pub use projects::ProjectsComponent;
pub use services::ServicesComponent;
pub use skills::SkillsComponent;
pub use status_bar::StatusBarComponent;
pub use testimonials::TestimonialsComponent;

/// Bordered block with a section title, shared by every section
pub fn section_block<'a>(title: impl Into<Line<'a>>, palette: &Palette) -> Block<'a> {
    Block::bordered()
        .title(title.into().style(palette.title))
        .border_style(palette.border)
        .style(palette.base)
}

/// Nav titles, numbered by their jump key
pub fn nav_titles() -> Vec<String> {
    Section::all()
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{} {section}", i + 1))
        .collect()
}

/// Collection of all components
#[derive(Debug, Default)]
pub struct Components {
    content: Arc<Content>,
    pub hero: HeroComponent,
    pub about: AboutComponent,
    pub skills: SkillsComponent,
    pub services: ServicesComponent,
    pub projects: ProjectsComponent,
    pub journey: JourneyComponent,
    pub testimonials: TestimonialsComponent,
    pub contact: ContactComponent,
    pub footer: FooterComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    /// Every section renders from the same content the state was built with
    pub fn new(content: Arc<Content>) -> Self {
        Self {
            hero: HeroComponent::new(Arc::clone(&content)),
            about: AboutComponent::new(Arc::clone(&content)),
            skills: SkillsComponent::new(Arc::clone(&content)),
            services: ServicesComponent::new(Arc::clone(&content)),
            projects: ProjectsComponent::new(Arc::clone(&content)),
            journey: JourneyComponent::new(Arc::clone(&content)),
            testimonials: TestimonialsComponent::new(Arc::clone(&content)),
            contact: ContactComponent::new(Arc::clone(&content)),
            footer: FooterComponent::new(Arc::clone(&content)),
            status_bar: StatusBarComponent,
            content,
        }
    }

    /// Render all components
    ///
    /// This is the main rendering entry point that delegates to individual components.
    pub fn render(&mut self, frame: &mut Frame, state: &AppState) {
        let palette = state
            .config
            .config
            .styles
            .palette(state.theme.current);
        let area = frame.area();
        frame.render_widget(Block::default().style(palette.base), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Length(1), // Navigation
                Constraint::Min(0),    // Active section
                Constraint::Length(2), // Footer
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        self.render_nav(state, &palette, frame, layout[0]);

        let main = layout[1];
        match state.nav.current {
            Section::Home => self.hero.view(&palette, frame, main),
            Section::About => self.about.view(&palette, frame, main),
            Section::Skills => self.skills.view(&palette, frame, main),
            Section::Services => self.services.view(&palette, frame, main),
            Section::Projects => self.projects.view(state, &palette, frame, main),
            Section::Journey => self.journey.view(state, &palette, frame, main),
            Section::Testimonials => self.testimonials.view(state, &palette, frame, main),
            Section::Contact => self.contact.view(state, &palette, frame, main),
        }

        self.footer.view(&palette, frame, layout[2]);
        self.status_bar.view(state, &palette, frame, layout[3]);
    }

    /// Brand on the left, section tabs, theme indicator on the right
    fn render_nav(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let brand = format!(" {} ", self.content.personal_info.full_name);
        let indicator = theme_indicator(state.theme.current);
        let [brand_area, tabs_area, theme_area] = Layout::horizontal([
            Constraint::Length(column_width(&brand)),
            Constraint::Min(0),
            Constraint::Length(column_width(&indicator)),
        ])
        .areas(area);

        frame.render_widget(Paragraph::new(Span::styled(brand, palette.title)), brand_area);
        let tabs = TabBarWidget::new(nav_titles(), state.nav.current.index(), *palette);
        frame.render_widget(tabs, tabs_area);
        frame.render_widget(
            Paragraph::new(Span::styled(indicator, palette.accent)),
            theme_area,
        );
    }
}

/// Right-hand nav label naming the active theme
pub fn theme_indicator(theme: Theme) -> String {
    let glyph = if theme.is_dark() { "☾" } else { "☀" };
    format!(" {glyph} {theme} ")
}
