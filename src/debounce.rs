// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Debounced query scheduling.
//!
//! A [`Debounce`] holds at most one pending query term. Each call to
//! [`Debounce::schedule`] replaces the pending term and restarts the quiet
//! period, so a burst of keystrokes yields a single fired query carrying the
//! final text. The main loop drives expiry by calling [`Debounce::poll`] on
//! every tick.
//!
//! Fired queries carry a monotonically increasing generation. The HTTP
//! request itself is never cancelled; instead, a response whose generation no
//! longer matches [`Debounce::is_current`] is discarded, so a late response
//! from a superseded query can never overwrite newer results.

use std::time::{Duration, Instant};

pub(crate) struct Debounce {
    quiet_period: Duration,
    pending: Option<Pending>,
    generation: u64,
}

struct Pending {
    term: String,
    deadline: Instant,
    generation: u64,
}

/// A query whose quiet period has elapsed, ready to dispatch.
#[derive(Debug, PartialEq)]
pub(crate) struct ScheduledQuery {
    pub generation: u64,
    pub term: String,
}

impl Debounce {
    pub(crate) fn new(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: None,
            generation: 0,
        }
    }

    /// Schedules `term` to fire once the quiet period elapses, atomically
    /// replacing any pending term and restarting the timer.
    ///
    /// Scheduling also advances the generation, so results still in flight
    /// for an earlier term become stale immediately.
    pub(crate) fn schedule(&mut self, term: String, now: Instant) {
        self.generation += 1;
        self.pending = Some(Pending {
            term,
            deadline: now + self.quiet_period,
            generation: self.generation,
        });
    }

    /// Drops any pending term and invalidates results still in flight.
    pub(crate) fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Returns the pending query if its quiet period has elapsed, at most
    /// once per scheduled term.
    pub(crate) fn poll(&mut self, now: Instant) -> Option<ScheduledQuery> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|pending| pending.deadline <= now);

        if !due {
            return None;
        }

        self.pending.take().map(|pending| ScheduledQuery {
            generation: pending.generation,
            term: pending.term,
        })
    }

    /// Whether a fired query's generation is still the latest. Stale
    /// generations belong to superseded or cancelled queries.
    pub(crate) fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUIET: Duration = Duration::from_millis(500);

    #[test]
    fn rapid_keystrokes_fire_a_single_query_with_the_final_text() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        // Simulate typing "Queen" one key at a time, 100ms apart
        let mut now = start;
        for prefix in ["Q", "Qu", "Que", "Quee", "Queen"] {
            debounce.schedule(prefix.to_string(), now);
            now += Duration::from_millis(100);
            assert!(debounce.poll(now).is_none());
        }

        now += QUIET;
        let fired = debounce.poll(now).expect("query should have fired");
        assert_eq!(fired.term, "Queen");

        // Fired exactly once
        assert!(debounce.poll(now + QUIET).is_none());
    }

    #[test]
    fn each_keystroke_restarts_the_quiet_period() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        debounce.schedule("a".to_string(), start);

        // Rescheduling just before expiry pushes the deadline out
        let almost = start + QUIET - Duration::from_millis(1);
        debounce.schedule("ab".to_string(), almost);

        assert!(debounce.poll(start + QUIET).is_none());
        assert!(debounce.poll(almost + QUIET).is_some());
    }

    #[test]
    fn cancel_drops_the_pending_query() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        debounce.schedule("Queen".to_string(), start);
        debounce.cancel();

        assert!(debounce.poll(start + QUIET * 2).is_none());
    }

    #[test]
    fn a_fired_generation_is_current_until_superseded() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        debounce.schedule("Queen".to_string(), start);
        let fired = debounce.poll(start + QUIET).unwrap();
        assert!(debounce.is_current(fired.generation));

        // Typing again supersedes the in-flight query
        debounce.schedule("Queens".to_string(), start + QUIET);
        assert!(!debounce.is_current(fired.generation));
    }

    #[test]
    fn cancel_invalidates_results_in_flight() {
        let mut debounce = Debounce::new(QUIET);
        let start = Instant::now();

        debounce.schedule("Queen".to_string(), start);
        let fired = debounce.poll(start + QUIET).unwrap();

        debounce.cancel();
        assert!(!debounce.is_current(fired.generation));
    }
}
