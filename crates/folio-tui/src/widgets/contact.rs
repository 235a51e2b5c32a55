use chrono::Datelike;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::app::App;

use super::{centered, indented, section_heading};

pub struct ContactSection;

impl ContactSection {
    /// Build the contact section, padded to `min_height` so the bottom of
    /// the document still activates it in the navigation bar.
    pub fn lines(app: &App, width: u16, min_height: u16) -> Vec<Line<'static>> {
        let theme = &app.theme;
        let info = &app.portfolio.info;
        let mut lines = section_heading("Get In Touch", theme, width);

        let mut rows: Vec<(String, String)> = vec![("Email".into(), info.email.clone())];
        if let Some(phone) = &info.phone {
            rows.push(("Phone".into(), phone.clone()));
        }
        rows.push(("Location".into(), info.location.clone()));
        for link in &app.portfolio.links {
            rows.push((link.label.clone(), link.url.clone()));
        }

        for (label, value) in rows {
            lines.push(indented(vec![
                Span::styled(format!("{label:<10}"), Style::default().fg(theme.muted)),
                Span::styled(value, Style::default().fg(theme.fg0)),
            ]));
        }
        lines.push(Line::default());

        // Pad so the footer sits at the bottom of the last screen
        while lines.len() + 1 < min_height as usize {
            lines.push(Line::default());
        }

        let year = chrono::Local::now().year();
        lines.push(centered(
            vec![Span::styled(
                format!("© {year} {} · built with folio", info.name),
                Style::default().fg(theme.muted),
            )],
            width,
        ));

        lines
    }
}
