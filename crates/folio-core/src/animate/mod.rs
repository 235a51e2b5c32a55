//! Hero typewriter animation
//!
//! The animator is a cooperative state machine driven by the host event
//! loop: the loop sleeps until [`TypingAnimator::next_deadline`] and calls
//! [`TypingAnimator::poll`] with the current instant. Two independently
//! cancellable one-shot timers belong to the machine (the per-character
//! tick, and the hold at the fully typed title) and both are released by
//! [`TypingAnimator::shutdown`].
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use folio_core::animate::TypingAnimator;
//! use folio_core::config::TypingConfig;
//!
//! let mut typing = TypingAnimator::new(titles, TypingConfig::default())?;
//! typing.start(Instant::now());
//!
//! // In the main loop: wake at the next deadline, then advance
//! let timeout = typing.next_deadline();
//! if typing.poll(Instant::now()) {
//!     // displayed() changed, redraw the hero banner
//! }
//! ```

pub mod timer;
pub mod typing;

pub use timer::OneShot;
pub use typing::TypingAnimator;
