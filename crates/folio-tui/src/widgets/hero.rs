use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::app::App;
use crate::page::wrap_text;

use super::{centered, content_width};

pub struct HeroSection;

impl HeroSection {
    /// Build the hero banner, padded to fill the first screen.
    pub fn lines(app: &App, width: u16, min_height: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let info = &app.portfolio.info;
        let mut lines: Vec<Line<'static>> = vec![Line::default(), Line::default()];

        if let Some(badge) = &app.portfolio.hero.badge {
            lines.push(centered(
                vec![
                    Span::styled("● ", Style::default().fg(theme.success)),
                    Span::styled(badge.clone(), Style::default().fg(theme.accent)),
                ],
                width,
            ));
            lines.push(Line::default());
        }

        lines.push(centered(
            vec![
                Span::styled(
                    "Hi, I'm ",
                    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    info.name.clone(),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ],
            width,
        ));
        lines.push(Line::default());

        // Cursor dims while the animator is deleting
        let cursor_style = if app.typing.is_deleting() {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.accent)
        };
        lines.push(centered(
            vec![
                Span::styled("I am a ", Style::default().fg(theme.fg1)),
                Span::styled(
                    app.typing.displayed().to_string(),
                    Style::default()
                        .fg(theme.accent_alt)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("|", cursor_style),
            ],
            width,
        ));
        lines.push(Line::default());

        let tagline_width = content_width(width).min(64);
        for row in wrap_text(&app.portfolio.hero.tagline, tagline_width) {
            lines.push(centered(
                vec![Span::styled(row, Style::default().fg(theme.fg1))],
                width,
            ));
        }
        lines.push(Line::default());
        lines.push(centered(
            vec![Span::styled(
                "1-6 jump to a section · j/k scroll · ? help".to_string(),
                Style::default().fg(theme.muted),
            )],
            width,
        ));

        // Fill the rest of the first screen, ending with a scroll hint
        while lines.len() + 1 < min_height as usize {
            lines.push(Line::default());
        }
        lines.push(centered(
            vec![Span::styled("▼", Style::default().fg(theme.muted))],
            width,
        ));
        lines
    }
}
