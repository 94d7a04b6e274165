use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};

use crate::{
    domain::content::Content,
    presentation::{components::section_block, config::Palette},
};

#[derive(Debug, Clone, Default)]
pub struct ServicesComponent {
    content: Arc<Content>,
}

impl ServicesComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let services = &self.content.services;
        let block = section_block(" Services ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if services.is_empty() {
            return;
        }

        // Two cards per row
        let rows = services.len().div_ceil(2);
        let row_areas =
            Layout::vertical((0..rows).map(|_| Constraint::Ratio(1, rows as u32))).split(inner);
        for (row, pair) in row_areas.iter().zip(services.chunks(2)) {
            let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(*row);
            for (service, cell) in pair.iter().zip(cells.iter()) {
                let mut lines = vec![Line::raw(service.description.clone()), Line::default()];
                lines.extend(
                    service
                        .features
                        .iter()
                        .map(|f| Line::from(vec![Span::styled("• ", palette.accent), Span::raw(f.clone())])),
                );
                let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                    Block::bordered()
                        .border_style(palette.border)
                        .title(Line::from(vec![
                            Span::styled(format!(" {} ", service.icon.glyph()), palette.accent),
                            Span::styled(format!("{} ", service.name), palette.title),
                        ])),
                );
                frame.render_widget(card, *cell);
            }
        }
    }
}
