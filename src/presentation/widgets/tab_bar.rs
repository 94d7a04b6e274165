use ratatui::prelude::*;
use ratatui::widgets::{Tabs, Widget};

use crate::presentation::config::Palette;

/// One-line row of titles with the selected one highlighted.
/// Used for the section navigation, project filters and journey tabs.
#[derive(Clone)]
pub struct TabBarWidget {
    titles: Vec<String>,
    selected: usize,
    palette: Palette,
}

impl TabBarWidget {
    pub fn new(titles: Vec<String>, selected: usize, palette: Palette) -> Self {
        Self {
            titles,
            selected,
            palette,
        }
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }
}

impl Widget for TabBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Tabs::new(self.titles)
            .select(self.selected)
            .style(self.palette.muted)
            .highlight_style(self.palette.highlight)
            .divider(Span::styled("│", self.palette.border))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::Theme;

    fn widget() -> TabBarWidget {
        TabBarWidget::new(
            vec!["All".to_string(), "AI/ML".to_string()],
            1,
            Palette::fallback(Theme::Dark),
        )
    }

    #[test]
    fn test_render_shows_titles() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);
        widget().render(area, &mut buffer);
        let content: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(content.contains("All"));
        assert!(content.contains("AI/ML"));
    }

    #[test]
    fn test_selected_title_is_highlighted() {
        let area = Rect::new(0, 0, 40, 1);
        let mut buffer = Buffer::empty(area);
        widget().render(area, &mut buffer);
        let highlight = Palette::fallback(Theme::Dark).highlight;
        let cell = buffer
            .content()
            .iter()
            .find(|c| c.symbol() == "A" && c.bg == highlight.bg.unwrap_or_default());
        assert!(cell.is_some());
    }

    #[test]
    fn test_render_zero_height() {
        let area = Rect::new(0, 0, 40, 0);
        let mut buffer = Buffer::empty(area);
        widget().render(area, &mut buffer);
    }
}
