use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

use crate::{
    core::state::{contact::ContactField, AppState},
    domain::{content::Content, icon::Icon},
    presentation::{components::section_block, config::Palette},
};

/// Contact details next to the message form
#[derive(Debug, Clone, Default)]
pub struct ContactComponent {
    content: Arc<Content>,
}

impl ContactComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let block = section_block(" Get In Touch ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let columns = Layout::horizontal([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);
        self.render_info(state, palette, frame, columns[0]);
        self.render_form(state, palette, frame, columns[1]);
    }

    fn render_info(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let info = &self.content.personal_info;
        let mut lines = vec![
            Line::styled("Let's work together", palette.title),
            Line::default(),
            Line::from(vec![
                Span::styled(format!("{} ", Icon::Envelope.glyph()), palette.accent),
                Span::raw(info.email.clone()),
            ]),
        ];
        if let Some(phone) = &info.phone {
            lines.push(Line::from(vec![
                Span::styled("☎ ", palette.accent),
                Span::raw(phone.clone()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", Icon::MapMarker.glyph()), palette.accent),
            Span::raw(info.location.clone()),
        ]));
        if !state.config.config.emailjs.is_configured() {
            lines.push(Line::default());
            lines.push(Line::styled(
                "Sending from here is disabled; write to the address above.",
                palette.muted,
            ));
        }
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn render_form(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let form = &state.contact;
        let editing = state.ui.is_editing();
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

        for (field, field_area) in ContactField::iter().zip(layout.iter()) {
            let focused = field == form.focus;
            let border = if focused && editing {
                palette.accent
            } else {
                palette.border
            };
            let text = &form.field(field).content;
            let body = if text.is_empty() && !(focused && editing) {
                Paragraph::new(Line::styled(placeholder(field), palette.muted))
            } else {
                Paragraph::new(text.clone()).style(palette.base)
            };
            frame.render_widget(
                body.block(
                    Block::bordered()
                        .border_style(border)
                        .title(Line::styled(format!(" {field} "), palette.title)),
                ),
                *field_area,
            );

            if focused && editing && !form.is_submitting {
                let cursor = form.field(field).cursor_position;
                let column = u16::try_from(cursor.column).unwrap_or(u16::MAX);
                let line = u16::try_from(cursor.line).unwrap_or(u16::MAX);
                let x = field_area.x.saturating_add(1).saturating_add(column);
                let y = field_area.y.saturating_add(1).saturating_add(line);
                let max_x = field_area.right().saturating_sub(2);
                let max_y = field_area.bottom().saturating_sub(2);
                frame.set_cursor_position((x.min(max_x), y.min(max_y)));
            }
        }

        let status = if form.is_submitting {
            Line::styled("Sending...", palette.accent)
        } else {
            match &form.status {
                Some(status) if status.is_error() => {
                    Line::styled(status.message().to_string(), palette.error)
                }
                Some(status) => Line::styled(status.message().to_string(), palette.success),
                None => Line::default(),
            }
        };
        frame.render_widget(Paragraph::new(status), layout[3]);

        let hints = if editing {
            "Tab: next field  Ctrl+S: send  Esc: stop editing"
        } else {
            "i: write a message"
        };
        frame.render_widget(Paragraph::new(Line::styled(hints, palette.muted)), layout[4]);
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Your Name",
        ContactField::Email => "your.email@example.com",
        ContactField::Message => "Tell me about your project...",
    }
}
