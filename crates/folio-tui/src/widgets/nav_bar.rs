use folio_core::Section;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;

        let mut spans = vec![
            Span::styled(
                " folio ",
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", Style::default().fg(theme.border)),
        ];

        for (i, section) in Section::ALL.iter().enumerate() {
            let active = app.active_section() == *section;
            let style = if active {
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.fg1)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, section.title()), style));
        }

        let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.bg1));
        frame.render_widget(paragraph, area);
    }
}
