//! Deterministic timer host for a [`Carousel`].
//!
//! Interprets [`TimerCommand`]s against a virtual clock, the same way the
//! landing page interprets them against browser timers. Time only moves when
//! [`Timeline::advance`] is called.

use crate::carousel::{Carousel, CarouselEvent, TimerCommand};
use crate::timers::TimerSlots;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Interval {
    period: Duration,
    due: Duration,
}

/// Virtual clock with at most one repeating auto-advance timer and any number
/// of one-shot resume timers.
///
/// The landing page's `CarouselDriver` interprets the same commands against
/// browser timers through the same [`TimerSlots`]; keep the two in step.
#[derive(Debug, Default)]
pub struct Timeline {
    now: Duration,
    slots: TimerSlots<Interval, Duration>,
}

impl Timeline {
    /// Start a timeline at t=0 for a just-mounted carousel.
    pub fn mount(carousel: &Carousel) -> Self {
        let mut timeline = Self::default();
        timeline.apply(carousel.mount());
        timeline
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Armed timers (auto-advance plus pending resumes).
    pub fn pending(&self) -> usize {
        self.slots.pending()
    }

    pub fn is_auto_advance_armed(&self) -> bool {
        self.slots.auto_advance().is_some()
    }

    /// Deliver a user event at the current instant.
    pub fn dispatch(&mut self, carousel: &mut Carousel, event: CarouselEvent) {
        if self.slots.is_torn_down() {
            return;
        }
        let commands = carousel.handle(event);
        self.apply(commands);
    }

    /// Move the clock forward, firing every timer that falls due on the way.
    ///
    /// Timers due at the same instant fire resume-first.
    pub fn advance(&mut self, carousel: &mut Carousel, by: Duration) {
        let target = self.now + by;
        while !self.slots.is_torn_down() {
            let next_resume = self
                .slots
                .resumes()
                .min_by_key(|(_, due)| **due)
                .map(|(id, due)| (id, *due));
            let next_auto = self.slots.auto_advance().map(|interval| interval.due);

            let fire_resume = match (next_resume, next_auto) {
                (Some((_, resume)), Some(auto)) => resume <= auto,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };

            let event = if fire_resume {
                let Some((id, due)) = next_resume else { break };
                if due > target {
                    break;
                }
                self.now = due;
                self.slots.take_resume(id);
                CarouselEvent::Resume
            } else {
                let Some(interval) = self.slots.auto_advance_mut() else { break };
                if interval.due > target {
                    break;
                }
                self.now = interval.due;
                interval.due += interval.period;
                CarouselEvent::AutoAdvance
            };

            let commands = carousel.handle(event);
            self.apply(commands);
        }
        if !self.slots.is_torn_down() {
            self.now = target;
        }
    }

    /// Cancel every timer. Nothing fires afterwards.
    pub fn teardown(&mut self) {
        self.slots.teardown();
    }

    fn apply(&mut self, commands: Vec<TimerCommand>) {
        for command in commands {
            match command {
                TimerCommand::ScheduleAutoAdvance(period) => {
                    self.slots.arm_auto_advance(Interval {
                        period,
                        due: self.now + period,
                    });
                }
                TimerCommand::CancelAutoAdvance => {
                    self.slots.cancel_auto_advance();
                }
                TimerCommand::ScheduleResume(delay) => {
                    let id = self.slots.reserve_resume();
                    self.slots.arm_resume(id, self.now + delay);
                }
            }
        }
    }
}
