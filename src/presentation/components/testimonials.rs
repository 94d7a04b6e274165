use std::sync::Arc;

use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::{
    core::state::AppState,
    domain::{content::Content, icon::Icon},
    presentation::{
        components::section_block, config::Palette, widgets::indicators::IndicatorsWidget,
    },
};

/// One testimonial at a time with position dots underneath
#[derive(Debug, Clone, Default)]
pub struct TestimonialsComponent {
    content: Arc<Content>,
}

impl TestimonialsComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let block = section_block(" Testimonials ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let carousel = &state.testimonials;
        let Some(testimonial) = self.content.testimonials.get(carousel.index()) else {
            frame.render_widget(
                Paragraph::new(Line::styled("No testimonials yet", palette.muted))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        };

        let layout = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(inner);
        let mut lines = vec![
            Line::default(),
            Line::styled(Icon::Quote.glyph(), palette.accent),
            Line::styled(testimonial.quote.clone(), palette.base.add_modifier(Modifier::ITALIC)),
            Line::default(),
            Line::styled(testimonial.name.clone(), palette.title),
            Line::styled(
                format!("{}, {}", testimonial.title, testimonial.company),
                palette.muted,
            ),
        ];
        if let Some(profile) = &testimonial.linkedin_profile {
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", Icon::LinkedIn.glyph()), palette.accent),
                Span::raw(profile.clone()),
            ]));
        }
        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            layout[0],
        );

        let dots = IndicatorsWidget::new(carousel.len(), carousel.index(), *palette);
        frame.render_widget(
            Paragraph::new(dots.line()).alignment(Alignment::Center),
            layout[1],
        );
    }
}
