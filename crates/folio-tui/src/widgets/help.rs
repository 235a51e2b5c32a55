use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Render the keybinding overlay over the whole page
    pub fn render(frame: &mut Frame, app: &App) {
        let theme = &app.theme;
        let area = frame.area();

        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = 12u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let inner_area = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let rows = [
            ("j / k", "scroll one line"),
            ("Ctrl-d / Ctrl-u", "scroll half page"),
            ("Ctrl-f / Ctrl-b", "scroll full page"),
            ("gg / G", "jump to top / bottom"),
            ("1-6", "jump to a section"),
            ("Tab / Shift-Tab", "next / previous section"),
            ("?", "toggle this help"),
            ("q", "quit"),
        ];

        let lines: Vec<Line> = rows
            .iter()
            .map(|(keys, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {keys:<16}"),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), inner_area);
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
