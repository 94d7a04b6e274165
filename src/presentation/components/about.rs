use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    domain::content::Content,
    presentation::{components::section_block, config::Palette},
};

#[derive(Debug, Clone, Default)]
pub struct AboutComponent {
    content: Arc<Content>,
}

impl AboutComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let content = &self.content;
        let block = section_block(" About Me ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(content.personal_info.description.clone())
                .wrap(Wrap { trim: true })
                .style(palette.base),
            layout[0],
        );

        let highlights: Vec<Line> = content
            .highlights
            .iter()
            .flat_map(|h| {
                [
                    Line::from(vec![
                        Span::styled(format!("{} ", h.icon.glyph()), palette.accent),
                        Span::styled(h.title.clone(), palette.title),
                    ]),
                    Line::styled(format!("   {}", h.description), palette.muted),
                ]
            })
            .collect();
        frame.render_widget(
            Paragraph::new(highlights).wrap(Wrap { trim: false }),
            layout[1],
        );

        // Stats side by side
        if !content.stats.is_empty() {
            let columns = Layout::horizontal(
                content
                    .stats
                    .iter()
                    .map(|_| Constraint::Ratio(1, content.stats.len() as u32)),
            )
            .split(layout[2]);
            for (stat, column) in content.stats.iter().zip(columns.iter()) {
                let lines = vec![
                    Line::styled(stat.value.clone(), palette.accent.add_modifier(Modifier::BOLD)),
                    Line::styled(stat.label.clone(), palette.muted),
                ];
                frame.render_widget(
                    Paragraph::new(lines).alignment(Alignment::Center),
                    *column,
                );
            }
        }
    }
}
