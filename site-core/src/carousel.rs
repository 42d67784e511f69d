//! Testimonial carousel state.
//!
//! The carousel shows a window of `visible_count` consecutive items starting
//! at `start_index`. Stepping forward wraps back to the first window, stepping
//! backward stops at it. Manual steps pause auto-advance for a while.
//!
//! The type knows nothing about timers. Every transition returns the
//! [`TimerCommand`]s a host has to carry out (a browser interval in the
//! landing page, a virtual clock in [`crate::timeline`]), so the index
//! arithmetic stays testable without either.

use crate::SiteError;
use serde::Deserialize;
use std::ops::Range;
use std::time::Duration;

/// Number of testimonials shown side by side.
pub const VISIBLE_COUNT: usize = 3;

/// Timing knobs for the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// How many items are on screen at once.
    pub visible_count: usize,
    /// Period of the auto-advance timer, in milliseconds.
    pub auto_advance_ms: u64,
    /// How long a step keeps auto-advance paused, in milliseconds.
    pub resume_after_ms: u64,
    /// Whether an automatic step also arms the pause.
    ///
    /// On by default: with the default timings this stretches the automatic
    /// cadence from 5s to 15s (10s pause, then one 5s period).
    pub pause_on_auto_advance: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: VISIBLE_COUNT,
            auto_advance_ms: 5_000,
            resume_after_ms: 10_000,
            pause_on_auto_advance: true,
        }
    }
}

impl CarouselConfig {
    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    pub fn resume_after(&self) -> Duration {
        Duration::from_millis(self.resume_after_ms)
    }

    /// Reject values that would hide every item or spin a timer with no delay.
    pub fn validate(&self) -> Result<(), SiteError> {
        let settings = [
            ("carousel.visible_count", self.visible_count as u64),
            ("carousel.auto_advance_ms", self.auto_advance_ms),
            ("carousel.resume_after_ms", self.resume_after_ms),
        ];
        match settings.into_iter().find(|(_, value)| *value == 0) {
            Some((key, _)) => Err(SiteError::ZeroSetting { key }),
            None => Ok(()),
        }
    }
}

/// Something that happened to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselEvent {
    /// User pressed "next".
    Next,
    /// User pressed "previous".
    Previous,
    /// The auto-advance timer fired.
    AutoAdvance,
    /// A pause armed by an earlier step ran out.
    Resume,
}

/// Work the timer host must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    /// (Re)arm the repeating auto-advance timer, replacing any existing one.
    ScheduleAutoAdvance(Duration),
    /// Drop the auto-advance timer if one is armed.
    CancelAutoAdvance,
    /// Deliver [`CarouselEvent::Resume`] once after the delay.
    ScheduleResume(Duration),
}

/// Rotation state for a fixed-length list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    start_index: usize,
    paused: bool,
    config: CarouselConfig,
}

impl Carousel {
    /// Fresh state for `len` items: first window, not paused.
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            len,
            start_index: 0,
            paused: false,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn start_index(&self) -> usize {
        self.start_index
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Largest valid `start_index`. Zero when the list fits on screen.
    pub fn max_start(&self) -> usize {
        self.len.saturating_sub(self.config.visible_count)
    }

    /// Step forward one item, wrapping to the first window after the last.
    pub fn next(&mut self) {
        // max_start + 1 is never zero, so short and empty lists stay at 0
        self.start_index = (self.start_index + 1) % (self.max_start() + 1);
    }

    /// Step back one item, stopping at the first window.
    pub fn previous(&mut self) {
        self.start_index = self.start_index.saturating_sub(1);
    }

    pub fn can_go_previous(&self) -> bool {
        self.start_index != 0
    }

    pub fn can_go_next(&self) -> bool {
        self.start_index < self.max_start()
    }

    /// Indices of the items currently on screen.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.start_index.min(self.len);
        let end = (start + self.config.visible_count).min(self.len);
        start..end
    }

    /// The on-screen slice of `items`.
    ///
    /// `items` should be the list the carousel was built for; a shorter slice
    /// is clamped rather than indexed out of bounds.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.visible_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    /// Timer commands for a freshly mounted carousel.
    pub fn mount(&self) -> Vec<TimerCommand> {
        if self.paused {
            Vec::new()
        } else {
            vec![TimerCommand::ScheduleAutoAdvance(self.config.auto_advance())]
        }
    }

    /// Apply `event` and return what the timer host has to do about it.
    pub fn handle(&mut self, event: CarouselEvent) -> Vec<TimerCommand> {
        let before = (self.start_index, self.paused);
        let mut resume = None;

        match event {
            CarouselEvent::Next => {
                self.next();
                resume = Some(self.pause());
            }
            CarouselEvent::Previous => {
                self.previous();
                resume = Some(self.pause());
            }
            CarouselEvent::AutoAdvance => {
                if self.paused {
                    return Vec::new();
                }
                self.next();
                if self.config.pause_on_auto_advance {
                    resume = Some(self.pause());
                }
            }
            CarouselEvent::Resume => self.paused = false,
        }

        let mut commands = Vec::new();
        if before != (self.start_index, self.paused) {
            tracing::debug!(
                ?event,
                start_index = self.start_index,
                paused = self.paused,
                "carousel transition"
            );
            commands.push(TimerCommand::CancelAutoAdvance);
            if !self.paused {
                commands.push(TimerCommand::ScheduleAutoAdvance(
                    self.config.auto_advance(),
                ));
            }
        }
        commands.extend(resume);
        commands
    }

    fn pause(&mut self) -> TimerCommand {
        self.paused = true;
        TimerCommand::ScheduleResume(self.config.resume_after())
    }
}
