//! Cancellable deferred actions
//!
//! A tiny deadline table keyed by interaction. Scheduling a key that is
//! already pending replaces its deadline, so a fresh event atomically
//! supersedes a stale one. Nothing runs on its own: the owner polls
//! [`Deferred::tick`] with the current time and handles whatever came due.

use std::time::{Duration, Instant};

/// Pending deadlines keyed by `K`
#[derive(Debug, Clone)]
pub struct Deferred<K> {
    pending: Vec<(K, Instant)>,
}

impl<K> Default for Deferred<K> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> Deferred<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `key` to fire `delay` after `now`, replacing any pending deadline
    pub fn schedule(&mut self, key: K, delay: Duration, now: Instant) {
        let deadline = now + delay;
        match self.pending.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = deadline,
            None => self.pending.push((key, deadline)),
        }
    }

    /// Disarm `key`, returns true if it was pending
    pub fn cancel(&mut self, key: K) -> bool {
        let before = self.pending.len();
        self.pending.retain(|(k, _)| *k != key);
        self.pending.len() != before
    }

    pub fn is_pending(&self, key: K) -> bool {
        self.pending.iter().any(|(k, _)| *k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every key whose deadline is at or before `now`,
    /// earliest first
    pub fn tick(&mut self, now: Instant) -> Vec<K> {
        let mut due: Vec<(K, Instant)> = Vec::new();
        self.pending.retain(|&(key, deadline)| {
            if deadline <= now {
                due.push((key, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(_, deadline)| deadline);
        due.into_iter().map(|(key, _)| key).collect()
    }

    /// Time until the earliest deadline, used to size the event loop's wait
    pub fn next_deadline(&self, now: Instant) -> Option<Duration> {
        self.pending
            .iter()
            .map(|&(_, deadline)| deadline.saturating_duration_since(now))
            .min()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Key {
        A,
        B,
    }

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_fires_only_after_deadline() {
        let start = Instant::now();
        let mut timers = Deferred::new();
        timers.schedule(Key::A, 100 * MS, start);

        assert!(timers.tick(start + 99 * MS).is_empty());
        assert_eq!(timers.tick(start + 100 * MS), vec![Key::A]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut timers = Deferred::new();
        timers.schedule(Key::A, 100 * MS, start);
        assert!(timers.cancel(Key::A));
        assert!(!timers.cancel(Key::A));
        assert!(timers.tick(start + 500 * MS).is_empty());
    }

    #[test]
    fn test_reschedule_replaces_deadline() {
        let start = Instant::now();
        let mut timers = Deferred::new();
        timers.schedule(Key::A, 100 * MS, start);
        timers.schedule(Key::A, 100 * MS, start + 80 * MS);

        assert!(timers.tick(start + 150 * MS).is_empty());
        assert_eq!(timers.tick(start + 180 * MS), vec![Key::A]);
    }

    #[test]
    fn test_due_keys_in_deadline_order() {
        let start = Instant::now();
        let mut timers = Deferred::new();
        timers.schedule(Key::B, 300 * MS, start);
        timers.schedule(Key::A, 100 * MS, start);

        assert_eq!(timers.next_deadline(start), Some(100 * MS));
        assert_eq!(timers.tick(start + 400 * MS), vec![Key::A, Key::B]);
    }
}
