use std::sync::Arc;

use chrono::{Datelike, Local};
use ratatui::{prelude::*, widgets::Paragraph};

use crate::{
    core::state::nav::Section,
    domain::content::Content,
    presentation::config::Palette,
};

/// Brand, quick links to every section and the copyright line
#[derive(Debug, Clone, Default)]
pub struct FooterComponent {
    content: Arc<Content>,
}

impl FooterComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, palette: &Palette, frame: &mut Frame, area: Rect) {
        let name = &self.content.personal_info.full_name;
        let mut links = vec![Span::styled(format!("{name}  "), palette.title)];
        links.extend(
            Section::all()
                .into_iter()
                .map(|section| Span::styled(format!("{section} "), palette.muted)),
        );
        let lines = vec![
            Line::from(links),
            Line::styled(copyright_line(name, Local::now().year()), palette.muted),
        ];
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(palette.base),
            area,
        );
    }
}

pub fn copyright_line(name: &str, year: i32) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line("Ada Lovelace", 2025),
            "© 2025 Ada Lovelace. All rights reserved."
        );
    }
}
