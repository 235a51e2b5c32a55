use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::page::wrap_text;

use super::{content_width, indented, section_heading};

pub struct ProjectsSection;

impl ProjectsSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let mut lines = section_heading("Featured Projects", theme, width);

        let text_width = content_width(width).saturating_sub(2);
        for project in &app.portfolio.projects {
            lines.push(indented(vec![
                Span::styled("▶ ", Style::default().fg(theme.accent)),
                Span::styled(
                    project.title.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]));

            if !project.tech.is_empty() {
                let tags = project
                    .tech
                    .iter()
                    .map(|t| format!("[{t}]"))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(indented(vec![
                    Span::raw("  "),
                    Span::styled(tags, Style::default().fg(theme.accent)),
                ]));
            }

            for row in wrap_text(&project.description, text_width) {
                lines.push(indented(vec![
                    Span::raw("  "),
                    Span::styled(row, Style::default().fg(theme.fg1)),
                ]));
            }
            lines.push(Line::default());
        }

        lines
    }
}
