use folio_core::animate::TypingAnimator;
use folio_core::{AppConfig, Portfolio, ScrollTracker, Section};

use crate::page::Page;
use crate::theme::Theme;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Normal browsing mode
    Normal,
    /// Help overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: AppConfig,
    /// Portfolio content being presented
    pub portfolio: Portfolio,
    /// Active theme
    pub theme: Theme,
    /// Current application mode
    pub mode: Mode,
    /// Vertical scroll offset of the viewport within the document, in rows
    pub scroll: u32,
    /// Viewport height from the last layout pass
    pub viewport_height: u16,
    /// Scroll-spy publishing the active section
    pub tracker: ScrollTracker,
    /// Hero typewriter animation
    pub typing: TypingAnimator,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(config: AppConfig, portfolio: Portfolio, theme: Theme) -> folio_core::Result<Self> {
        let typing = TypingAnimator::new(portfolio.titles.clone(), config.typing.clone())?;
        let tracker = ScrollTracker::new(config.scroll.activation_offset);
        Ok(Self {
            config,
            portfolio,
            theme,
            mode: Mode::Normal,
            scroll: 0,
            viewport_height: 0,
            tracker,
            typing,
            should_quit: false,
            status_message: None,
            pending_key: None,
        })
    }

    /// Section currently highlighted in the navigation bar.
    pub fn active_section(&self) -> Section {
        self.tracker.active()
    }

    /// Move the viewport to `row` and notify the tracker.
    ///
    /// Every change of the scroll offset goes through here, so the tracker
    /// sees one notification per scroll and re-queries the layout each
    /// time.
    pub fn scroll_to(&mut self, row: u32, page: &Page) {
        self.scroll = row.min(page.max_scroll(self.viewport_height));
        let _ = self.tracker.on_scroll(self.scroll, page);
    }

    pub fn scroll_by(&mut self, delta: i64, page: &Page) {
        let target = (self.scroll as i64 + delta).max(0) as u32;
        self.scroll_to(target, page);
    }

    pub fn scroll_down(&mut self, page: &Page) {
        self.scroll_by(1, page);
    }

    pub fn scroll_up(&mut self, page: &Page) {
        self.scroll_by(-1, page);
    }

    pub fn scroll_half_page_down(&mut self, page: &Page) {
        self.scroll_by((self.viewport_height as i64 / 2).max(1), page);
    }

    pub fn scroll_half_page_up(&mut self, page: &Page) {
        self.scroll_by(-((self.viewport_height as i64 / 2).max(1)), page);
    }

    pub fn scroll_page_down(&mut self, page: &Page) {
        self.scroll_by((self.viewport_height as i64).max(1), page);
    }

    pub fn scroll_page_up(&mut self, page: &Page) {
        self.scroll_by(-(self.viewport_height as i64).max(1), page);
    }

    pub fn jump_to_top(&mut self, page: &Page) {
        self.scroll_to(0, page);
    }

    pub fn jump_to_bottom(&mut self, page: &Page) {
        self.scroll_to(page.max_scroll(self.viewport_height), page);
    }

    /// Scroll so the given section starts at the top of the viewport.
    pub fn jump_to_section(&mut self, section: Section, page: &Page) {
        tracing::debug!(section = section.id(), "jump to section");
        self.scroll_to(page.top_of(section), page);
    }

    /// Jump to the section after the active one.
    pub fn next_section(&mut self, page: &Page) {
        let idx = self.active_section().index();
        if let Some(section) = Section::ALL.get(idx + 1) {
            self.jump_to_section(*section, page);
        }
    }

    /// Jump to the section before the active one.
    pub fn prev_section(&mut self, page: &Page) {
        let idx = self.active_section().index();
        if idx > 0 {
            self.jump_to_section(Section::ALL[idx - 1], page);
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Clear the pending key
    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes;
    use folio_core::config::ThemeConfig;

    fn app() -> App {
        let config = AppConfig::default();
        let theme = themes::load_theme(&ThemeConfig::default());
        App::new(config, Portfolio::sample(), theme).unwrap()
    }

    #[test]
    fn test_new_starts_at_home() {
        let app = app();
        assert_eq!(app.active_section(), Section::Home);
        assert_eq!(app.scroll, 0);
    }

    #[test]
    fn test_empty_titles_rejected_at_construction() {
        let mut portfolio = Portfolio::sample();
        portfolio.titles.clear();
        let theme = themes::load_theme(&ThemeConfig::default());
        assert!(App::new(AppConfig::default(), portfolio, theme).is_err());
    }

    #[test]
    fn test_scrolling_tracks_sections() {
        let mut app = app();
        app.viewport_height = 40;
        let page = Page::build(&app, 80, 40);

        app.jump_to_section(Section::Projects, &page);
        assert_eq!(app.scroll, page.top_of(Section::Projects));
        assert_eq!(app.active_section(), Section::Projects);

        app.jump_to_top(&page);
        assert_eq!(app.scroll, 0);
        assert_eq!(app.active_section(), Section::Home);
    }

    #[test]
    fn test_scroll_clamps_to_document() {
        let mut app = app();
        app.viewport_height = 40;
        let page = Page::build(&app, 80, 40);

        app.scroll_by(-10, &page);
        assert_eq!(app.scroll, 0);

        app.scroll_by(1_000_000, &page);
        assert_eq!(app.scroll, page.max_scroll(40));
    }

    #[test]
    fn test_next_and_prev_section() {
        let mut app = app();
        app.viewport_height = 40;
        let page = Page::build(&app, 80, 40);

        app.next_section(&page);
        assert_eq!(app.active_section(), Section::About);

        app.prev_section(&page);
        assert_eq!(app.active_section(), Section::Home);

        // Clamped at the last section
        app.jump_to_section(Section::Contact, &page);
        let before = app.scroll;
        app.next_section(&page);
        assert_eq!(app.scroll, before);
    }
}
