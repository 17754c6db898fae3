// src/annotate/debounce.rs

use std::time::{Duration, Instant};

/// One resettable deadline. Every signal inside the window pushes the
/// deadline out instead of stacking another timer, so a burst of change
/// notifications collapses into a single fire.
#[derive(Clone, Copy, Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// A change batch arrived; (re)arm the timer.
    pub fn signal(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// True exactly once per armed window, when the deadline has passed.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(d) if now >= d => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
