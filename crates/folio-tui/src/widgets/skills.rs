use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;

use super::{indented, section_heading};

pub struct SkillsSection;

impl SkillsSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let mut lines = section_heading("Technical Skills", theme, width);

        for group in &app.portfolio.skills {
            lines.push(indented(vec![
                Span::styled("◆ ", Style::default().fg(theme.accent)),
                Span::styled(
                    group.category.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
            ]));
            for item in &group.items {
                lines.push(indented(vec![
                    Span::styled("  • ", Style::default().fg(theme.muted)),
                    Span::styled(item.clone(), Style::default().fg(theme.fg1)),
                ]));
            }
            lines.push(Line::default());
        }

        lines
    }
}
