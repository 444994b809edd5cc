//! Timer APIs
//!
//! setTimeout/clearTimeout against a virtual clock. The host advances
//! time explicitly, so deferred callbacks run deterministically.

use crate::Document;
use std::collections::BTreeMap;
use std::time::Duration;

/// Timer handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

pub(crate) type TimerCallback = Box<dyn FnOnce(&mut Document)>;

/// Pending timeouts keyed by (deadline, id); equal deadlines fire in
/// scheduling order.
#[derive(Default)]
pub(crate) struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, TimerId), TimerCallback>,
}

impl TimerQueue {
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn set_timeout(&mut self, delay: Duration, callback: TimerCallback) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.insert((self.now + delay, id), callback);
        id
    }

    pub fn clear(&mut self, id: TimerId) -> bool {
        let key = self.pending.keys().find(|(_, t)| *t == id).copied();
        key.and_then(|k| self.pending.remove(&k)).is_some()
    }

    /// Pop the earliest timer due at or before `until`, moving the clock
    /// to its deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerCallback> {
        let (&(deadline, id), _) = self.pending.first_key_value()?;
        if deadline > until {
            return None;
        }
        self.now = self.now.max(deadline);
        self.pending.remove(&(deadline, id))
    }

    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Time until the next timer fires
    pub fn time_until_next(&self) -> Option<Duration> {
        self.pending
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(self.now))
    }
}
