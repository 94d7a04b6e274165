use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    domain::{content::Content, icon::Icon},
    presentation::{components::section_block, config::Palette},
};

/// Landing section: who, what, where and how to reach out
#[derive(Debug, Clone, Default)]
pub struct HeroComponent {
    content: Arc<Content>,
}

impl HeroComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let info = &self.content.personal_info;
        let mut lines = vec![
            Line::default(),
            Line::styled(format!("Hi, I'm {}", info.full_name), palette.title),
            Line::styled(info.title.clone(), palette.accent),
            Line::default(),
            Line::raw(info.description.clone()),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{} ", Icon::MapMarker.glyph()), palette.accent),
                Span::raw(info.location.clone()),
                Span::raw("   "),
                Span::styled(format!("{} ", Icon::Envelope.glyph()), palette.accent),
                Span::raw(info.email.clone()),
            ]),
            Line::default(),
        ];
        lines.extend(info.social_links.iter().map(|link| {
            Line::from(vec![
                Span::styled(format!("{} ", link.kind.icon().glyph()), palette.accent),
                Span::styled(format!("{:<9}", link.kind.to_string()), palette.muted),
                Span::raw(link.url.clone()),
            ])
        }));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Press 5 to see my work or 8 to get in touch",
            palette.muted,
        ));

        let hero = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(section_block(" Home ", palette));
        frame.render_widget(hero, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::state::{nav::Section, AppState},
        presentation::components::tests::render_text,
    };

    #[test]
    fn test_shows_name_and_links() {
        let mut state = AppState::default();
        state.nav.current = Section::Home;
        let text = render_text(&state, 120, 30);
        assert!(text.contains(&state.content.personal_info.full_name));
        assert!(text.contains("GitHub"));
    }
}
