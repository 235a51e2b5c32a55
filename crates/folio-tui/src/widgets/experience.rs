use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::page::wrap_text;

use super::{content_width, indented, section_heading};

pub struct ExperienceSection;

impl ExperienceSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let mut lines = section_heading("Experience & Education", theme, width);

        let text_width = content_width(width).saturating_sub(2);

        lines.push(indented(vec![
            Span::styled(
                "01. ",
                Style::default()
                    .fg(theme.accent_alt)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Work History",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());

        for entry in &app.portfolio.experience {
            lines.push(indented(vec![
                Span::styled("● ", Style::default().fg(theme.accent_alt)),
                Span::styled(
                    entry.role.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(indented(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} | {}", entry.company, entry.period),
                    Style::default().fg(theme.accent),
                ),
            ]));
            for row in wrap_text(&entry.summary, text_width) {
                lines.push(indented(vec![
                    Span::raw("  "),
                    Span::styled(row, Style::default().fg(theme.fg1)),
                ]));
            }
            lines.push(Line::default());
        }

        lines.push(indented(vec![
            Span::styled(
                "02. ",
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "Education",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::default());

        for entry in &app.portfolio.education {
            lines.push(indented(vec![
                Span::styled("● ", Style::default().fg(theme.accent)),
                Span::styled(
                    entry.degree.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(indented(vec![
                Span::raw("  "),
                Span::styled(entry.school.clone(), Style::default().fg(theme.fg1)),
            ]));
            lines.push(indented(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} · {}", entry.period, entry.status),
                    Style::default().fg(theme.muted),
                ),
            ]));
            lines.push(Line::default());
        }

        lines
    }
}
