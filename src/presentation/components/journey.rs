use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::content::{Certification, Content, Experience, JourneyTab},
    presentation::{
        components::section_block, config::Palette, widgets::tab_bar::TabBarWidget,
    },
};

/// Education, experience and certifications, one tab at a time
#[derive(Debug, Clone, Default)]
pub struct JourneyComponent {
    content: Arc<Content>,
}

impl JourneyComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let block = section_block(" My Journey ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        let tabs: Vec<JourneyTab> = JourneyTab::iter().collect();
        let selected = tabs.iter().position(|t| *t == state.journey.tab).unwrap_or(0);
        let titles = tabs.iter().map(ToString::to_string).collect();
        frame.render_widget(TabBarWidget::new(titles, selected, *palette), layout[0]);

        let journey = &self.content.journey;
        let lines = match state.journey.tab {
            JourneyTab::Education => experience_lines(&journey.education, palette),
            JourneyTab::Experience => experience_lines(&journey.experience, palette),
            JourneyTab::Certifications => certification_lines(&journey.certifications, palette),
        };
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), layout[2]);
    }
}

fn experience_lines<'a>(entries: &[Experience], palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    for entry in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", entry.icon.glyph()), palette.accent),
            Span::styled(entry.title.clone(), palette.title),
            Span::styled(format!("  {}", entry.period), palette.muted),
        ]));
        lines.push(Line::styled(
            format!("  {}, {}", entry.organization, entry.location),
            palette.accent,
        ));
        lines.push(Line::raw(format!("  {}", entry.description)));
        lines.extend(
            entry
                .achievements
                .iter()
                .map(|a| Line::from(vec![Span::styled("  ✓ ", palette.success), Span::raw(a.clone())])),
        );
        lines.push(Line::default());
    }
    lines
}

fn certification_lines<'a>(entries: &[Certification], palette: &Palette) -> Vec<Line<'a>> {
    entries
        .iter()
        .map(|cert| {
            Line::from(vec![
                Span::styled(format!("{} ", cert.icon.glyph()), palette.accent),
                Span::styled(cert.title.clone(), palette.title),
                Span::raw(format!("  {}", cert.issuer)),
                Span::styled(format!("  {}", cert.date), palette.muted),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::state::nav::Section, presentation::components::tests::render_text};

    #[test]
    fn test_each_tab_renders_its_entries() {
        let mut state = AppState::default();
        state.nav.current = Section::Journey;
        let journey = state.content.journey.clone();

        state.journey.tab = JourneyTab::Education;
        let text = render_text(&state, 140, 50);
        assert!(text.contains("Certifications"));
        if let Some(entry) = journey.education.first() {
            assert!(text.contains(&entry.title));
        }

        state.journey.tab = JourneyTab::Certifications;
        let text = render_text(&state, 140, 50);
        if let Some(cert) = journey.certifications.first() {
            assert!(text.contains(&cert.issuer));
        }
    }
}
