//! Scroll-spy section tracking
//!
//! Follows the viewport's vertical position through the page and publishes
//! which section is currently in view, so the navigation bar can highlight
//! it.

use tracing::debug;

use crate::section::Section;

/// Geometry of one rendered section within the document, in rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// Top offset from the start of the document
    pub top: u32,
    /// Rendered height
    pub height: u32,
}

impl SectionBounds {
    pub fn new(top: u32, height: u32) -> Self {
        Self { top, height }
    }

    /// Half-open containment test: `top <= row < top + height`.
    #[inline]
    pub fn contains(&self, row: u32) -> bool {
        self.top <= row && row < self.top + self.height
    }
}

/// Layout query answered by the presentation layer.
///
/// Geometry may change between calls as the page reflows, so the tracker
/// re-queries on every notification and never caches bounds.
pub trait SectionLayout {
    fn bounds(&self, section: Section) -> Option<SectionBounds>;
}

/// Determines the active section from the scroll position.
///
/// An activation offset is added to the scroll position before the
/// containment test, compensating for the navigation bar overlapping the
/// top of the content. Sections are tested in document order and the last
/// match wins; when nothing matches, the previously published section is
/// retained.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    activation_offset: u32,
    active: Section,
}

impl ScrollTracker {
    pub fn new(activation_offset: u32) -> Self {
        Self {
            activation_offset,
            active: Section::Home,
        }
    }

    /// The currently published section.
    pub fn active(&self) -> Section {
        self.active
    }

    /// Process one scroll notification against the current layout.
    ///
    /// Returns the newly active section when it changed, `None` otherwise.
    pub fn on_scroll(&mut self, scroll: u32, layout: &impl SectionLayout) -> Option<Section> {
        let probe = scroll + self.activation_offset;

        let mut hit = None;
        for section in Section::ALL {
            if let Some(bounds) = layout.bounds(section) {
                if bounds.contains(probe) {
                    // Keep iterating: the last matching section in document
                    // order wins
                    hit = Some(section);
                }
            }
        }

        match hit {
            Some(section) if section != self.active => {
                self.active = section;
                debug!(section = section.id(), scroll, "active section changed");
                Some(section)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLayout(Vec<(Section, SectionBounds)>);

    impl SectionLayout for FixedLayout {
        fn bounds(&self, section: Section) -> Option<SectionBounds> {
            self.0
                .iter()
                .find(|(s, _)| *s == section)
                .map(|(_, b)| *b)
        }
    }

    fn two_sections() -> FixedLayout {
        FixedLayout(vec![
            (Section::Home, SectionBounds::new(0, 800)),
            (Section::About, SectionBounds::new(800, 600)),
        ])
    }

    #[test]
    fn test_offset_pushes_position_into_next_section() {
        let mut tracker = ScrollTracker::new(100);
        // 750 + 100 = 850, inside about's [800, 1400)
        assert_eq!(
            tracker.on_scroll(750, &two_sections()),
            Some(Section::About)
        );
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_position_within_first_section() {
        let mut tracker = ScrollTracker::new(100);
        tracker.on_scroll(750, &two_sections());
        // 650 + 100 = 750, inside home's [0, 800)
        assert_eq!(
            tracker.on_scroll(650, &two_sections()),
            Some(Section::Home)
        );
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_no_change_reports_none() {
        let mut tracker = ScrollTracker::new(100);
        assert_eq!(tracker.on_scroll(0, &two_sections()), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_no_match_retains_previous() {
        let mut tracker = ScrollTracker::new(100);
        tracker.on_scroll(750, &two_sections());
        assert_eq!(tracker.active(), Section::About);

        // Past the end of every section: nothing matches, value retained
        assert_eq!(tracker.on_scroll(5000, &two_sections()), None);
        assert_eq!(tracker.active(), Section::About);
    }

    #[test]
    fn test_last_match_wins_on_overlap() {
        // Rounding during layout can briefly overlap adjacent sections
        let layout = FixedLayout(vec![
            (Section::Home, SectionBounds::new(0, 500)),
            (Section::About, SectionBounds::new(400, 500)),
        ]);
        let mut tracker = ScrollTracker::new(0);
        assert_eq!(tracker.on_scroll(450, &layout), Some(Section::About));
    }

    #[test]
    fn test_zero_height_section_never_matches() {
        let layout = FixedLayout(vec![
            (Section::Home, SectionBounds::new(0, 300)),
            (Section::About, SectionBounds::new(100, 0)),
        ]);
        let mut tracker = ScrollTracker::new(0);
        assert_eq!(tracker.on_scroll(100, &layout), None);
        assert_eq!(tracker.active(), Section::Home);
    }

    #[test]
    fn test_missing_geometry_skipped() {
        let layout = FixedLayout(vec![(Section::Contact, SectionBounds::new(0, 100))]);
        let mut tracker = ScrollTracker::new(0);
        assert_eq!(tracker.on_scroll(50, &layout), Some(Section::Contact));
    }

    #[test]
    fn test_configurable_offset() {
        let mut tracker = ScrollTracker::new(0);
        assert_eq!(tracker.on_scroll(750, &two_sections()), None);
        assert_eq!(tracker.active(), Section::Home);
    }
}
