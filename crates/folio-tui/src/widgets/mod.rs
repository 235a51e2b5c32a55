pub mod about;
pub mod contact;
pub mod experience;
pub mod help;
pub mod hero;
pub mod nav_bar;
pub mod projects;
pub mod skills;
pub mod status_bar;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use help::HelpWidget;
pub use hero::HeroSection;
pub use nav_bar::NavBarWidget;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use status_bar::StatusBarWidget;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

/// Left margin of section content, in columns.
pub(crate) const MARGIN: usize = 2;

/// Columns available to wrapped section text.
pub(crate) fn content_width(width: u16) -> u16 {
    width.saturating_sub((MARGIN * 2) as u16)
}

/// Center spans within the given width.
pub(crate) fn centered(spans: Vec<Span<'static>>, width: u16) -> Line<'static> {
    let content: usize = spans.iter().map(|s| s.content.as_ref().width()).sum();
    let pad = (width as usize).saturating_sub(content) / 2;
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::raw(" ".repeat(pad)));
    all.extend(spans);
    Line::from(all)
}

/// Indent spans by the section margin.
pub(crate) fn indented(spans: Vec<Span<'static>>) -> Line<'static> {
    let mut all = Vec::with_capacity(spans.len() + 1);
    all.push(Span::raw(" ".repeat(MARGIN)));
    all.extend(spans);
    Line::from(all)
}

/// Section heading with a trailing horizontal rule.
pub(crate) fn section_heading(title: &str, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let used = MARGIN + 3 + title.width() + 1 + MARGIN;
    let rule = "─".repeat((width as usize).saturating_sub(used));
    vec![
        Line::default(),
        indented(vec![
            Span::styled("── ", Style::default().fg(theme.border)),
            Span::styled(
                title.to_string(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {rule}"), Style::default().fg(theme.border)),
        ]),
        Line::default(),
    ]
}
