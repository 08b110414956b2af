// SPDX-License-Identifier: MPL-2.0
//! Cancelable one-shot auto-hide timer.
//!
//! The timer is armed with a delay once its overlay is fully visible. Its
//! deadline is fixed by the first poll after arming, so the delay is
//! measured from the frame on which the overlay finished appearing.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoHideTimer {
    delay: Option<Duration>,
    deadline: Option<Instant>,
}

impl AutoHideTimer {
    /// Arms the timer, replacing any pending deadline. A zero delay disarms it.
    pub fn arm(&mut self, delay: Duration) {
        self.deadline = None;
        self.delay = (!delay.is_zero()).then_some(delay);
    }

    /// Arms the timer with a deadline measured from `now`.
    ///
    /// A delay too long to be represented as an `Instant` never fires.
    pub fn arm_at(&mut self, delay: Duration, now: Instant) {
        self.arm(delay);
        if self.delay.is_some() {
            self.deadline = now.checked_add(delay);
            if self.deadline.is_none() {
                self.cancel();
            }
        }
    }

    pub fn cancel(&mut self) {
        self.delay = None;
        self.deadline = None;
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.delay.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns `true` exactly once, when `now` reaches the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(delay) = self.delay else {
            return false;
        };
        let deadline = match self.deadline {
            Some(deadline) => deadline,
            None => {
                let Some(deadline) = now.checked_add(delay) else {
                    self.cancel();
                    return false;
                };
                *self.deadline.insert(deadline)
            }
        };
        if now >= deadline {
            self.cancel();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm(Duration::from_secs(3));

        assert!(!timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(2999)));
        assert!(timer.poll(start + Duration::from_secs(3)));
        assert!(!timer.poll(start + Duration::from_secs(4)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn cancel_prevents_firing() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm_at(Duration::from_secs(1), start);
        timer.cancel();
        assert!(!timer.poll(start + Duration::from_secs(5)));
    }

    #[test]
    fn zero_delay_never_fires() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm(Duration::ZERO);
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(60)));
    }

    #[test]
    fn unrepresentable_deadline_never_fires() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm_at(Duration::MAX, start);
        assert!(!timer.is_armed());
        assert!(!timer.poll(start + Duration::from_secs(3600)));

        timer.arm(Duration::MAX);
        assert!(!timer.poll(start));
        assert!(!timer.is_armed());
        assert_eq!(timer.deadline(), None);
    }

    #[test]
    fn rearming_moves_the_deadline() {
        let start = Instant::now();
        let mut timer = AutoHideTimer::default();
        timer.arm_at(Duration::from_secs(1), start);
        timer.arm_at(Duration::from_secs(5), start + Duration::from_millis(900));

        assert!(!timer.poll(start + Duration::from_secs(2)));
        assert_eq!(
            timer.deadline(),
            Some(start + Duration::from_millis(5900))
        );
    }
}
