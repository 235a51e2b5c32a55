use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::page::wrap_text;

use super::{content_width, indented, section_heading};

pub struct AboutSection;

impl AboutSection {
    pub fn lines(app: &App, width: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let mut lines = section_heading("About Me", theme, width);

        let text_width = content_width(width);
        for paragraph in &app.portfolio.about.paragraphs {
            for row in wrap_text(paragraph, text_width) {
                lines.push(indented(vec![Span::styled(
                    row,
                    Style::default().fg(theme.fg1),
                )]));
            }
            lines.push(Line::default());
        }

        for card in &app.portfolio.about.cards {
            lines.push(indented(vec![
                Span::styled("▪ ", Style::default().fg(theme.accent_alt)),
                Span::styled(
                    card.title.clone(),
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" · {}", card.detail),
                    Style::default().fg(theme.fg1),
                ),
            ]));
        }
        if !app.portfolio.about.cards.is_empty() {
            lines.push(Line::default());
        }

        lines
    }
}
