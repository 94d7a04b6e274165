use std::sync::Arc;

use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    domain::{
        content::Content,
        text::{ellipsize, level_bar},
    },
    presentation::{components::section_block, config::Palette},
};

const BAR_WIDTH: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct SkillsComponent {
    content: Arc<Content>,
}

impl SkillsComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let categories = &self.content.skills;
        let block = section_block(" Skills ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if categories.is_empty() {
            return;
        }

        let columns = Layout::horizontal(
            categories
                .iter()
                .map(|_| Constraint::Ratio(1, categories.len() as u32)),
        )
        .split(inner);

        for (category, column) in categories.iter().zip(columns.iter()) {
            let name_width = usize::from(column.width).saturating_sub(BAR_WIDTH + 8);
            let mut lines = vec![Line::styled(category.name.clone(), palette.title), Line::default()];
            for skill in &category.skills {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", skill.icon.glyph()), palette.accent),
                    Span::raw(format!(
                        "{:<width$}",
                        ellipsize(&skill.name, name_width),
                        width = name_width
                    )),
                ]));
                lines.push(Line::from(vec![
                    Span::styled(level_bar(skill.level, BAR_WIDTH), palette.accent),
                    Span::styled(format!(" {:>3}%", skill.level), palette.muted),
                ]));
            }
            frame.render_widget(Paragraph::new(lines), *column);
        }
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
    fn test_shows_categories_and_bars() {
        let mut state = AppState::default();
        state.nav.current = Section::Skills;
        let text = render_text(&state, 150, 40);
        if let Some(category) = state.content.skills.first() {
            assert!(text.contains(&category.name));
        }
        assert!(text.contains('█'));
    }
}
