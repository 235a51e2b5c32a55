//! Document layout
//!
//! The portfolio renders as one long column of styled lines; the viewport
//! shows a window of it. Building the page also records each section's top
//! offset and height, which is the geometry the scroll tracker queries.

use folio_core::{Section, SectionBounds, SectionLayout};
use ratatui::text::Line;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::widgets::{
    AboutSection, ContactSection, ExperienceSection, HeroSection, ProjectsSection, SkillsSection,
};

/// The fully laid out document for one terminal width.
///
/// Rebuilt each frame; geometry is never cached across reflows.
pub struct Page {
    lines: Vec<Line<'static>>,
    bounds: Vec<(Section, SectionBounds)>,
}

impl Page {
    /// Lay the whole document out for the given content area.
    pub fn build(app: &App, width: u16, viewport_height: u16) -> Self {
        let mut lines: Vec<Line<'static>> = Vec::new();
        let mut bounds = Vec::new();

        // The hero fills the first screen; the last section is padded so
        // the bottom of the document can still activate it under the
        // tracker's activation offset.
        let offset = u16::try_from(app.config.scroll.activation_offset).unwrap_or(u16::MAX);
        let contact_min = viewport_height.saturating_sub(offset);

        for section in Section::ALL {
            let top = lines.len() as u32;
            let mut body = match section {
                Section::Home => HeroSection::lines(app, width, viewport_height),
                Section::About => AboutSection::lines(app, width),
                Section::Skills => SkillsSection::lines(app, width),
                Section::Projects => ProjectsSection::lines(app, width),
                Section::Experience => ExperienceSection::lines(app, width),
                Section::Contact => ContactSection::lines(app, width, contact_min),
            };
            let height = body.len() as u32;
            lines.append(&mut body);
            bounds.push((section, SectionBounds::new(top, height)));
        }

        Self { lines, bounds }
    }

    /// Total document height in rows.
    pub fn total_height(&self) -> u32 {
        self.lines.len() as u32
    }

    /// Largest useful scroll offset for the given viewport.
    pub fn max_scroll(&self, viewport_height: u16) -> u32 {
        self.total_height().saturating_sub(u32::from(viewport_height))
    }

    /// Top offset of a section, used as its jump target.
    pub fn top_of(&self, section: Section) -> u32 {
        self.bounds
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, b)| b.top)
            .unwrap_or(0)
    }

    /// The slice of document lines visible at the given scroll offset.
    pub fn visible(&self, scroll: u32, viewport_height: u16) -> &[Line<'static>] {
        let start = (scroll as usize).min(self.lines.len());
        let end = (start + viewport_height as usize).min(self.lines.len());
        &self.lines[start..end]
    }
}

impl SectionLayout for Page {
    fn bounds(&self, section: Section) -> Option<SectionBounds> {
        self.bounds
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, b)| *b)
    }
}

/// Greedy word wrap to the given column width.
///
/// Words wider than the full width are hard-split so no output line ever
/// exceeds it.
pub fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let width = (width as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        for piece in split_at_width(word, width) {
            let piece_width = piece.width();
            let current_width = current.width();

            if current.is_empty() {
                current = piece;
            } else if current_width + 1 + piece_width <= width {
                current.push(' ');
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Split a single word into pieces no wider than `width` columns.
fn split_at_width(word: &str, width: usize) -> Vec<String> {
    if word.width() <= width {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;
    for ch in word.chars() {
        let w = ch.to_string().width();
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(ch);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes;
    use folio_core::config::ThemeConfig;
    use folio_core::{AppConfig, Portfolio};

    fn test_app() -> App {
        App::new(
            AppConfig::default(),
            Portfolio::sample(),
            themes::load_theme(&ThemeConfig::default()),
        )
        .unwrap()
    }

    #[test]
    fn test_sections_tile_the_document() {
        let app = test_app();
        let page = Page::build(&app, 80, 40);

        let mut expected_top = 0;
        for section in Section::ALL {
            let bounds = page.bounds(section).unwrap();
            assert_eq!(bounds.top, expected_top, "section {} top", section.id());
            assert!(bounds.height > 0, "section {} is empty", section.id());
            expected_top += bounds.height;
        }
        assert_eq!(expected_top, page.total_height());
    }

    #[test]
    fn test_hero_fills_first_screen() {
        let app = test_app();
        let page = Page::build(&app, 80, 40);
        assert!(page.bounds(Section::Home).unwrap().height >= 40);
    }

    #[test]
    fn test_bottom_of_document_activates_last_section() {
        let mut app = test_app();
        app.viewport_height = 40;
        let page = Page::build(&app, 80, 40);

        app.jump_to_bottom(&page);
        assert_eq!(app.active_section(), Section::Contact);
    }

    #[test]
    fn test_visible_window_is_clipped() {
        let app = test_app();
        let page = Page::build(&app, 80, 40);

        assert_eq!(page.visible(0, 40).len(), 40);

        let max = page.max_scroll(40);
        assert_eq!(page.visible(max, 40).len(), 40);

        // Never panics past the end
        assert!(page.visible(page.total_height() + 10, 40).is_empty());
    }

    #[test]
    fn test_reflow_changes_geometry() {
        let app = test_app();
        let narrow = Page::build(&app, 40, 40);
        let wide = Page::build(&app, 120, 40);
        // Narrower columns wrap to more rows
        assert!(narrow.total_height() > wide.total_height());
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let text = "Securing digital infrastructure through proactive threat hunting";
        for line in wrap_text(text, 20) {
            assert!(line.width() <= 20, "line too wide: {line:?}");
        }
        assert_eq!(wrap_text(text, 200).len(), 1);
    }

    #[test]
    fn test_wrap_text_hard_splits_long_words() {
        let lines = wrap_text("https://example.com/a/very/long/path/component", 10);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= 10);
        }
    }

    #[test]
    fn test_wrap_text_empty_yields_one_blank_line() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }
}
