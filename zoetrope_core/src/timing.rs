// Copyright 2025 the Zoetrope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host-agnostic timer queue.
//!
//! The queue does not read a wall clock. The host owns real time and calls
//! [`Timers::poll`] with a monotonic `now` (a [`Duration`] since an arbitrary
//! host epoch); the queue drains tokens whose deadline has passed, re-arming
//! repeating timers. The host then delivers each fired token to whoever
//! scheduled it, for a carousel via
//! [`Carousel::on_timer`](crate::Carousel::on_timer).
//!
//! Tokens are generational, like scene node ids: canceling a timer makes its
//! token stale, and a stale token delivered after cancellation is a safe
//! no-op at the receiver. That is what makes synchronous cancellation sound
//! even when a tick is already "in flight" in the host's event queue.

use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

/// Identifier for a scheduled timer.
///
/// Copyable and generational: a canceled or already-fired one-shot timer
/// leaves its token stale, and stale tokens never alias a newer timer in the
/// same slot. Repeating timers keep their token across fires until canceled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TimerToken(u32, u32);

impl TimerToken {
    const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }

    const fn generation(self) -> u32 {
        self.1
    }

    const fn sort_key(self) -> (u32, u32) {
        (self.0, self.1)
    }
}

#[derive(Debug)]
struct Slot {
    generation: u32,
    entry: Option<Entry>,
}

#[derive(Debug)]
struct Entry {
    deadline: Duration,
    period: Option<Duration>,
}

/// A queue of one-shot and repeating timers, driven by the host's clock.
///
/// All deadlines are instants on the host's monotonic timeline, expressed as
/// [`Duration`] since an arbitrary epoch chosen by the host. The queue keeps
/// the largest `now` it has been polled with; the relative helpers
/// ([`Timers::schedule_in`], [`Timers::schedule_every`]) measure from there.
pub struct Timers {
    slots: Vec<Slot>,
    free: Vec<u32>,
    now: Duration,
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Timers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.slots.iter().filter(|s| s.entry.is_some()).count();
        f.debug_struct("Timers")
            .field("live", &live)
            .field("now", &self.now)
            .field("next_deadline", &self.next_deadline())
            .finish_non_exhaustive()
    }
}

impl Timers {
    /// Creates an empty queue at time zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            now: Duration::ZERO,
        }
    }

    /// The queue's current time: the largest `now` it has been polled with.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedules a timer for an absolute deadline.
    ///
    /// With `period = None` the timer fires once and its token goes stale.
    /// With `period = Some(p)` it fires, re-arms, and keeps the same token
    /// until canceled.
    pub fn schedule_at(&mut self, deadline: Duration, period: Option<Duration>) -> TimerToken {
        let entry = Entry { deadline, period };
        match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.generation = slot.generation.wrapping_add(1);
                slot.entry = Some(entry);
                TimerToken::new(idx, slot.generation)
            }
            None => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "hosts schedule far fewer than u32::MAX concurrent timers"
                )]
                let idx = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 1,
                    entry: Some(entry),
                });
                TimerToken::new(idx, 1)
            }
        }
    }

    /// Schedules a one-shot timer `delay` after the queue's current time.
    pub fn schedule_in(&mut self, delay: Duration) -> TimerToken {
        self.schedule_at(self.now + delay, None)
    }

    /// Schedules a repeating timer firing every `period`, first at
    /// `now + period`.
    pub fn schedule_every(&mut self, period: Duration) -> TimerToken {
        self.schedule_at(self.now + period, Some(period))
    }

    /// Cancels a timer. Returns `true` if the token was live.
    pub fn cancel(&mut self, token: TimerToken) -> bool {
        let Some(slot) = self.slots.get_mut(token.idx()) else {
            return false;
        };
        if slot.generation != token.generation() || slot.entry.is_none() {
            return false;
        }
        slot.entry = None;
        self.free.push(token.0);
        true
    }

    /// Returns `true` if the token refers to a scheduled timer.
    #[must_use]
    pub fn is_live(&self, token: TimerToken) -> bool {
        self.slots
            .get(token.idx())
            .is_some_and(|slot| slot.generation == token.generation() && slot.entry.is_some())
    }

    /// The earliest pending deadline, if any timer is scheduled.
    ///
    /// Hosts that sleep between events can use this to bound the sleep.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.slots
            .iter()
            .filter_map(|slot| slot.entry.as_ref().map(|entry| entry.deadline))
            .min()
    }

    /// Advances the queue to `now` and appends every expired token to `out`,
    /// in deadline order.
    ///
    /// One-shot timers go stale as they fire. Repeating timers fire at most
    /// once per poll and re-arm from `now`, not from the missed deadline, so
    /// a late poll does not produce a burst of catch-up ticks. A `now`
    /// earlier than a previous poll is treated as the previous time.
    pub fn poll(&mut self, now: Duration, out: &mut Vec<TimerToken>) {
        self.now = self.now.max(now);
        let now = self.now;

        let mut expired: Vec<(Duration, TimerToken)> = Vec::new();
        for (idx, slot) in self.slots.iter().enumerate() {
            if let Some(entry) = &slot.entry {
                if entry.deadline <= now {
                    #[expect(
                        clippy::cast_possible_truncation,
                        reason = "slot indices fit in u32 by construction"
                    )]
                    let token = TimerToken::new(idx as u32, slot.generation);
                    expired.push((entry.deadline, token));
                }
            }
        }
        expired.sort_unstable_by_key(|(deadline, token)| (*deadline, token.sort_key()));

        for (_, token) in expired {
            let slot = &mut self.slots[token.idx()];
            let Some(entry) = &mut slot.entry else {
                continue;
            };
            match entry.period {
                Some(period) => entry.deadline = now + period,
                None => {
                    slot.entry = None;
                    self.free.push(token.0);
                }
            }
            out.push(token);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn polled(timers: &mut Timers, now: Duration) -> Vec<TimerToken> {
        let mut out = Vec::new();
        timers.poll(now, &mut out);
        out
    }

    #[test]
    fn one_shot_fires_once_and_goes_stale() {
        let mut timers = Timers::new();
        let token = timers.schedule_in(ms(100));
        assert!(timers.is_live(token));

        assert!(polled(&mut timers, ms(50)).is_empty());
        assert_eq!(polled(&mut timers, ms(100)), [token]);
        assert!(!timers.is_live(token));
        assert!(polled(&mut timers, ms(500)).is_empty());
    }

    #[test]
    fn cancel_prevents_firing() {
        let mut timers = Timers::new();
        let token = timers.schedule_in(ms(100));
        assert!(timers.cancel(token));
        assert!(!timers.is_live(token));
        assert!(!timers.cancel(token), "second cancel must report stale");
        assert!(polled(&mut timers, ms(1_000)).is_empty());
    }

    #[test]
    fn repeating_keeps_its_token_and_rearms() {
        let mut timers = Timers::new();
        let token = timers.schedule_every(ms(100));

        assert_eq!(polled(&mut timers, ms(100)), [token]);
        assert!(timers.is_live(token));
        assert_eq!(timers.next_deadline(), Some(ms(200)));
        assert_eq!(polled(&mut timers, ms(200)), [token]);
    }

    #[test]
    fn late_poll_fires_a_repeater_once_and_rearms_from_now() {
        let mut timers = Timers::new();
        let token = timers.schedule_every(ms(100));

        // Three periods elapse unobserved; only one tick is reported.
        assert_eq!(polled(&mut timers, ms(350)), [token]);
        assert_eq!(timers.next_deadline(), Some(ms(450)));
    }

    #[test]
    fn expiry_is_reported_in_deadline_order() {
        let mut timers = Timers::new();
        let late = timers.schedule_in(ms(300));
        let early = timers.schedule_in(ms(100));
        assert_eq!(polled(&mut timers, ms(300)), [early, late]);
    }

    #[test]
    fn slot_reuse_bumps_the_generation() {
        let mut timers = Timers::new();
        let old = timers.schedule_in(ms(100));
        timers.cancel(old);

        let new = timers.schedule_in(ms(100));
        assert_ne!(old, new);
        assert!(!timers.is_live(old));
        assert!(timers.is_live(new));
    }

    #[test]
    fn time_never_runs_backwards() {
        let mut timers = Timers::new();
        let _ = polled(&mut timers, ms(500));
        assert_eq!(timers.now(), ms(500));

        let token = timers.schedule_in(ms(100));
        // An out-of-order poll does not rewind the clock.
        let _ = polled(&mut timers, ms(200));
        assert_eq!(timers.now(), ms(500));
        assert_eq!(polled(&mut timers, ms(600)), [token]);
    }

    #[test]
    fn relative_scheduling_measures_from_polled_now() {
        let mut timers = Timers::new();
        let _ = polled(&mut timers, ms(1_000));
        let token = timers.schedule_every(ms(250));
        assert!(polled(&mut timers, ms(1_249)).is_empty());
        assert_eq!(polled(&mut timers, ms(1_250)), [token]);
    }
}
