use std::sync::Arc;

use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::{
    core::state::AppState,
    domain::{
        content::{Content, Project},
        icon::Icon,
    },
    presentation::{
        components::section_block, config::Palette, widgets::tab_bar::TabBarWidget,
    },
};

/// Project gallery with a category filter and a details modal
#[derive(Debug, Clone, Default)]
pub struct ProjectsComponent {
    content: Arc<Content>,
}

impl ProjectsComponent {
    pub fn new(content: Arc<Content>) -> Self {
        Self { content }
    }

    pub fn view(&self, state: &AppState, palette: &Palette, frame: &mut Frame, area: Rect) {
        let projects = &state.projects;
        let block = section_block(" Projects ", palette);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);
        let filter = TabBarWidget::new(
            projects.categories.clone(),
            projects.category.index(),
            *palette,
        );
        frame.render_widget(filter, layout[0]);

        let columns = Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(layout[1]);

        let visible = projects.visible(&self.content);
        let items: Vec<ListItem> = visible
            .iter()
            .map(|p| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", Icon::Laptop.glyph()), palette.accent),
                    Span::raw(p.title.clone()),
                ]))
            })
            .collect();
        let list = List::new(items)
            .block(Block::bordered().border_style(palette.border))
            .highlight_style(palette.highlight)
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(
            (!visible.is_empty()).then_some(projects.selected.min(visible.len().saturating_sub(1))),
        );
        frame.render_stateful_widget(list, columns[0], &mut list_state);

        let details = match projects.selected_project(&self.content) {
            Some(project) => Paragraph::new(summary_lines(project, palette)),
            None => Paragraph::new(Line::styled("No projects in this category", palette.muted)),
        };
        frame.render_widget(
            details
                .wrap(Wrap { trim: true })
                .block(Block::bordered().border_style(palette.border)),
            columns[1],
        );

        if let Some(project) = projects.open_project(&self.content) {
            render_modal(project, palette, frame, area);
        }
    }
}

fn summary_lines<'a>(project: &Project, palette: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::styled(project.title.clone(), palette.title),
        Line::styled(project.category.clone(), palette.muted),
        Line::default(),
        Line::raw(project.short_description.clone()),
        Line::default(),
        technologies_line(project, palette),
        Line::default(),
        Line::styled("Enter: details", palette.muted),
    ]
}

fn technologies_line<'a>(project: &Project, palette: &Palette) -> Line<'a> {
    let spans: Vec<Span> = project
        .technologies
        .iter()
        .flat_map(|tech| {
            [
                Span::styled(format!("{} ", Icon::for_technology(tech).glyph()), palette.accent),
                Span::raw(format!("{tech}  ")),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_modal(project: &Project, palette: &Palette, frame: &mut Frame, area: Rect) {
    let popup = centered(area, 80, 80);
    let mut lines = vec![
        Line::styled(project.category.clone(), palette.muted),
        Line::default(),
        Line::raw(project.full_description.clone()),
        Line::default(),
        Line::styled("Technologies", palette.title),
        technologies_line(project, palette),
        Line::default(),
    ];
    let links = [("GitHub", Icon::GitHub, &project.github_link), ("Live", Icon::ExternalLink, &project.live_link)];
    for (label, icon, link) in links {
        if let Some(url) = link {
            lines.push(Line::from(vec![
                Span::styled(format!("{} {label}: ", icon.glyph()), palette.accent),
                Span::raw(url.clone()),
            ]));
        }
    }
    lines.push(Line::default());
    lines.push(Line::styled("Esc: close", palette.muted));

    let modal = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(section_block(format!(" {} ", project.title), palette));
    frame.render_widget(Clear, popup);
    frame.render_widget(modal, popup);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{core::state::nav::Section, presentation::components::tests::render_text};

    fn projects_state() -> AppState {
        let mut state = AppState::default();
        state.nav.current = Section::Projects;
        state
    }

    #[test]
    fn test_lists_projects_and_filter() {
        let state = projects_state();
        let text = render_text(&state, 140, 40);
        assert!(text.contains("All"));
        if let Some(project) = state.content.projects.first() {
            assert!(text.contains(&project.title));
        }
    }

    #[test]
    fn test_modal_shows_full_details() {
        let mut state = projects_state();
        let Some(project) = state.content.projects.first().cloned() else {
            return;
        };
        state.projects.modal = Some(project.id);
        let text = render_text(&state, 160, 50);
        assert!(text.contains("Technologies"));
        assert!(text.contains("Esc: close"));
    }

    #[test]
    fn test_centered_is_inside_area() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered(area, 80, 80);
        assert_eq!(popup, Rect::new(10, 5, 80, 40));
    }
}
