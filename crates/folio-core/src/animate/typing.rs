//! Typewriter state machine for the hero banner

use std::time::Instant;

use super::timer::OneShot;
use crate::config::TypingConfig;
use crate::error::{Error, Result};

/// Loops over a fixed list of titles, typing each out one character at a
/// time, holding at the full title, then deleting it and moving on.
///
/// The machine owns two one-shot timers: `tick` paces the per-character
/// steps (type spacing while typing, delete spacing while deleting) and
/// `hold` is armed exactly once when a title is fully typed. While the hold
/// is pending the tick timer stays disarmed, so a title of N characters
/// takes N ticks to appear, pauses, then takes N ticks to disappear.
pub struct TypingAnimator {
    titles: Vec<String>,
    config: TypingConfig,
    /// Completed cycles; grows without bound and is reduced modulo
    /// `titles.len()` whenever a title is selected
    cycle: usize,
    /// Character prefix of the current title
    displayed: String,
    deleting: bool,
    tick: OneShot,
    hold: OneShot,
}

impl TypingAnimator {
    pub fn new(titles: Vec<String>, config: TypingConfig) -> Result<Self> {
        if titles.is_empty() {
            return Err(Error::Content(
                "typing animation requires at least one title".into(),
            ));
        }
        Ok(Self {
            titles,
            config,
            cycle: 0,
            displayed: String::new(),
            deleting: false,
            tick: OneShot::new(),
            hold: OneShot::new(),
        })
    }

    /// Arm the first tick. Calling after [`shutdown`](Self::shutdown)
    /// resumes from the current text.
    pub fn start(&mut self, now: Instant) {
        self.tick.schedule(now, self.config.type_delay());
    }

    /// The currently displayed prefix of the active title.
    pub fn displayed(&self) -> &str {
        &self.displayed
    }

    /// True while characters are being deleted (the cursor style follows
    /// this).
    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Earliest pending deadline across both timers, if any. The host loop
    /// uses this to size its poll timeout.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.tick.deadline(), self.hold.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Cancel both pending timers. No state mutates afterwards until
    /// [`start`](Self::start) is called again.
    pub fn shutdown(&mut self) {
        self.tick.cancel();
        self.hold.cancel();
    }

    fn current_title(&self) -> &str {
        &self.titles[self.cycle % self.titles.len()]
    }

    /// Advance whichever timers are due at `now`. Returns true when the
    /// animation state changed and the banner needs a redraw.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut advanced = false;

        if self.hold.fire(now) {
            self.deleting = true;
            self.tick.schedule(now, self.config.delete_delay());
            advanced = true;
        }

        if self.tick.fire(now) {
            self.step(now);
            advanced = true;
        }

        advanced
    }

    /// One character of progress in the current direction.
    fn step(&mut self, now: Instant) {
        let full_len = self.current_title().chars().count();

        if self.deleting {
            let keep = self.displayed.chars().count().saturating_sub(1);
            self.displayed = self.current_title().chars().take(keep).collect();

            if self.displayed.is_empty() {
                // Fully deleted: advance to the next title in the same tick
                self.deleting = false;
                self.cycle = self.cycle.wrapping_add(1);
                self.tick.schedule(now, self.config.type_delay());
            } else {
                self.tick.schedule(now, self.config.delete_delay());
            }
        } else {
            let want = (self.displayed.chars().count() + 1).min(full_len);
            self.displayed = self.current_title().chars().take(want).collect();

            if self.displayed.chars().count() == full_len {
                // Fully typed: suspend the tick and hold before deleting
                self.hold.schedule(now, self.config.hold_delay());
            } else {
                self.tick.schedule(now, self.config.type_delay());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn animator(titles: &[&str]) -> TypingAnimator {
        TypingAnimator::new(
            titles.iter().map(|t| t.to_string()).collect(),
            TypingConfig::default(),
        )
        .unwrap()
    }

    /// Drive the animator to its next deadline, returning the instant that
    /// was polled.
    fn advance(typing: &mut TypingAnimator) -> Instant {
        let deadline = typing.next_deadline().expect("animator should be armed");
        assert!(typing.poll(deadline));
        deadline
    }

    #[test]
    fn test_empty_titles_rejected() {
        let result = TypingAnimator::new(Vec::new(), TypingConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_not_armed_until_started() {
        let typing = animator(&["Analyst"]);
        assert!(typing.next_deadline().is_none());
        assert_eq!(typing.displayed(), "");
    }

    #[test]
    fn test_types_one_char_per_tick_at_type_spacing() {
        let mut typing = animator(&["AB"]);
        let t0 = Instant::now();
        typing.start(t0);

        // Nothing due before the first tick
        assert!(!typing.poll(t0 + Duration::from_millis(149)));
        assert_eq!(typing.displayed(), "");

        assert!(typing.poll(t0 + Duration::from_millis(150)));
        assert_eq!(typing.displayed(), "A");

        // Next tick is one type delay later
        assert_eq!(
            typing.next_deadline(),
            Some(t0 + Duration::from_millis(300))
        );
        assert!(typing.poll(t0 + Duration::from_millis(300)));
        assert_eq!(typing.displayed(), "AB");
    }

    #[test]
    fn test_full_title_arms_hold_and_suspends_tick() {
        let mut typing = animator(&["AB"]);
        let t0 = Instant::now();
        typing.start(t0);
        let t_full = {
            advance(&mut typing);
            advance(&mut typing)
        };
        assert_eq!(typing.displayed(), "AB");
        assert!(!typing.is_deleting());

        // The only pending deadline is the 2000ms hold
        assert_eq!(
            typing.next_deadline(),
            Some(t_full + Duration::from_millis(2000))
        );
    }

    #[test]
    fn test_delete_phase_runs_at_delete_spacing() {
        let mut typing = animator(&["AB"]);
        let t0 = Instant::now();
        typing.start(t0);
        advance(&mut typing); // "A"
        let t_full = advance(&mut typing); // "AB"

        let t_hold = t_full + Duration::from_millis(2000);
        assert!(typing.poll(t_hold));
        assert!(typing.is_deleting());
        assert_eq!(typing.displayed(), "AB");

        // L ticks at delete spacing to reach empty
        assert!(typing.poll(t_hold + Duration::from_millis(30)));
        assert_eq!(typing.displayed(), "A");
        assert!(typing.poll(t_hold + Duration::from_millis(60)));
        assert_eq!(typing.displayed(), "");
        assert!(!typing.is_deleting());
    }

    #[test]
    fn test_single_title_cycles_forever() {
        let mut typing = animator(&["AB"]);
        typing.start(Instant::now());

        // Two full cycles of: "A", "AB", (hold), "A", ""
        let expected = ["A", "AB", "AB", "A", "", "A", "AB", "AB", "A", ""];
        for want in expected {
            advance(&mut typing);
            assert_eq!(typing.displayed(), want);
        }
    }

    #[test]
    fn test_two_titles_advance_and_wrap() {
        let mut typing = animator(&["A", "BB"]);
        typing.start(Instant::now());

        // First cycle: type "A", hold, delete -> index advances to "BB"
        let first = ["A", "A", ""];
        for want in first {
            advance(&mut typing);
            assert_eq!(typing.displayed(), want);
        }

        // Second cycle types the second title
        let second = ["B", "BB", "BB", "B", ""];
        for want in second {
            advance(&mut typing);
            assert_eq!(typing.displayed(), want);
        }

        // Wrapped back to the first title
        advance(&mut typing);
        assert_eq!(typing.displayed(), "A");
    }

    #[test]
    fn test_prefix_invariant_holds_over_many_ticks() {
        let mut typing = animator(&["Analyst", "Defender", "日本語タイトル"]);
        typing.start(Instant::now());

        for _ in 0..500 {
            advance(&mut typing);
            let full = typing.current_title().to_string();
            let shown = typing.displayed().chars().count();
            assert!(shown <= full.chars().count());
            assert!(full.starts_with(typing.displayed()));
        }
    }

    #[test]
    fn test_index_advances_exactly_once_per_cycle() {
        let mut typing = animator(&["A", "B", "C"]);
        typing.start(Instant::now());

        // One full cycle per title: 1 type tick + hold + 1 delete tick
        for expected_cycle in 0..6usize {
            assert_eq!(typing.cycle % 3, expected_cycle % 3);
            advance(&mut typing); // typed
            advance(&mut typing); // hold fires
            advance(&mut typing); // deleted, index advances
            assert_eq!(typing.cycle % 3, (expected_cycle + 1) % 3);
        }
    }

    #[test]
    fn test_shutdown_cancels_both_timers() {
        let mut typing = animator(&["AB"]);
        let t0 = Instant::now();
        typing.start(t0);
        advance(&mut typing);
        advance(&mut typing); // full, hold armed

        typing.shutdown();
        assert!(typing.next_deadline().is_none());

        // Nothing mutates after disposal, however late we poll
        assert!(!typing.poll(t0 + Duration::from_secs(60)));
        assert_eq!(typing.displayed(), "AB");
        assert!(!typing.is_deleting());
    }

    #[test]
    fn test_shutdown_mid_pause_then_restart() {
        let mut typing = animator(&["AB"]);
        let t0 = Instant::now();
        typing.start(t0);
        advance(&mut typing);
        let t_full = advance(&mut typing);

        typing.shutdown();

        // Restarting re-arms the tick; the old hold deadline is gone
        let t1 = t_full + Duration::from_secs(5);
        typing.start(t1);
        assert_eq!(
            typing.next_deadline(),
            Some(t1 + Duration::from_millis(150))
        );
    }
}
