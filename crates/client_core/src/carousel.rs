//! Slide rotation state: active index, hover pause, autoplay, and the
//! navigation cooldown that keeps overlapping triggers from double-advancing.

use std::time::{Duration, Instant};

use thiserror::Error;
use tracing::debug;

pub const AUTOPLAY_INTERVAL: Duration = Duration::from_millis(3500);
pub const NAVIGATION_COOLDOWN: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one slide")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselInput {
    Previous,
    Next,
    Select(usize),
    PointerEntered,
    PointerLeft,
    Tick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowLeft,
    ArrowRight,
}

impl NavKey {
    pub fn input(self) -> CarouselInput {
        match self {
            Self::ArrowLeft => CarouselInput::Previous,
            Self::ArrowRight => CarouselInput::Next,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    active: usize,
    paused: bool,
    interval: Duration,
    cooldown: Duration,
    next_tick: Instant,
    last_advance: Option<Instant>,
}

impl Carousel {
    pub fn new(len: usize, now: Instant) -> Result<Self, CarouselError> {
        Self::with_timing(len, AUTOPLAY_INTERVAL, NAVIGATION_COOLDOWN, now)
    }

    pub fn with_timing(
        len: usize,
        interval: Duration,
        cooldown: Duration,
        now: Instant,
    ) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            len,
            active: 0,
            paused: false,
            interval,
            cooldown,
            next_tick: now + interval,
            last_advance: None,
        })
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn next(&mut self, now: Instant) -> bool {
        self.navigate(now, |active, len| (active + 1) % len)
    }

    pub fn previous(&mut self, now: Instant) -> bool {
        self.navigate(now, |active, len| (active + len - 1) % len)
    }

    pub fn select(&mut self, index: usize, now: Instant) -> bool {
        self.navigate(now, |_, len| index % len)
    }

    /// Pointer enter/leave. A change restarts the autoplay phase.
    pub fn set_paused(&mut self, paused: bool, now: Instant) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        self.next_tick = now + self.interval;
    }

    /// Autoplay step; returns whether the active slide moved.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.paused || now < self.next_tick {
            return false;
        }

        // Re-arm from `now` when more than a whole interval was missed.
        let behind = now.duration_since(self.next_tick);
        self.next_tick = if behind >= self.interval {
            now + self.interval
        } else {
            self.next_tick + self.interval
        };

        if self.in_cooldown(now) {
            debug!(active = self.active, "autoplay tick skipped during cooldown");
            return false;
        }
        self.advance_to((self.active + 1) % self.len, now);
        true
    }

    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        (!self.paused).then(|| self.next_tick.saturating_duration_since(now))
    }

    pub fn apply(&mut self, input: CarouselInput, now: Instant) -> bool {
        match input {
            CarouselInput::Previous => self.previous(now),
            CarouselInput::Next => self.next(now),
            CarouselInput::Select(index) => self.select(index, now),
            CarouselInput::PointerEntered => {
                self.set_paused(true, now);
                false
            }
            CarouselInput::PointerLeft => {
                self.set_paused(false, now);
                false
            }
            CarouselInput::Tick => self.tick(now),
        }
    }

    fn navigate(&mut self, now: Instant, target: impl FnOnce(usize, usize) -> usize) -> bool {
        if self.in_cooldown(now) {
            debug!(active = self.active, "navigation ignored during cooldown");
            return false;
        }
        let target = target(self.active, self.len);
        self.advance_to(target, now);
        true
    }

    fn advance_to(&mut self, index: usize, now: Instant) {
        self.active = index;
        self.last_advance = Some(now);
    }

    fn in_cooldown(&self, now: Instant) -> bool {
        self.last_advance
            .is_some_and(|at| now.saturating_duration_since(at) < self.cooldown)
    }
}

#[cfg(test)]
#[path = "tests/carousel_tests.rs"]
mod tests;
