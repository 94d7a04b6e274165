use ratatui::{prelude::*, widgets::Paragraph};

use crate::presentation::config::Palette;

/// Bottom line: the current status message, or key hints when there is none
pub struct StatusBarWidget<'a> {
    message: Option<&'a str>,
    hints: &'a str,
    mode: &'a str,
    palette: Palette,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(message: Option<&'a str>, hints: &'a str, mode: &'a str, palette: Palette) -> Self {
        Self {
            message,
            hints,
            mode,
            palette,
        }
    }

    pub fn text(&self) -> &str {
        self.message.unwrap_or(self.hints)
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = if self.message.is_some() {
            self.palette.accent
        } else {
            self.palette.muted
        };
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.mode), self.palette.highlight),
            Span::raw(" "),
            Span::styled(self.text().to_string(), style),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::theme::Theme;

    fn rendered(widget: StatusBarWidget<'_>) -> String {
        let area = Rect::new(0, 0, 60, 1);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_hints_without_message() {
        let widget =
            StatusBarWidget::new(None, "q quit", "NORMAL", Palette::fallback(Theme::Dark));
        let line = rendered(widget);
        assert!(line.contains("NORMAL"));
        assert!(line.contains("q quit"));
    }

    #[test]
    fn test_message_replaces_hints() {
        let widget = StatusBarWidget::new(
            Some("[Theme] light"),
            "q quit",
            "NORMAL",
            Palette::fallback(Theme::Dark),
        );
        let line = rendered(widget);
        assert!(line.contains("[Theme] light"));
        assert!(!line.contains("q quit"));
    }
}
