use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::presentation::config::Palette;

/// Slide indicator dots, `● ○ ○`
pub struct IndicatorsWidget {
    count: usize,
    active: usize,
    palette: Palette,
}

impl IndicatorsWidget {
    pub fn new(count: usize, active: usize, palette: Palette) -> Self {
        Self {
            count,
            active,
            palette,
        }
    }

    pub fn line(&self) -> Line<'static> {
        let spans: Vec<Span<'static>> = (0..self.count)
            .flat_map(|i| {
                let dot = if i == self.active {
                    Span::styled("●", self.palette.accent)
                } else {
                    Span::styled("○", self.palette.muted)
                };
                [dot, Span::raw(" ")]
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for IndicatorsWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
