//! Delayed state transitions on a logical clock.
//!
//! The engines are single-threaded and never block. Anything that should
//! happen "later" (turning a mismatched pair back over, announcing victory)
//! is queued here with the generation of the session that asked for it. The
//! host advances the clock; due entries pop out in due order, oldest first
//! among ties, and the engine decides whether they still apply.

use serde::{Deserialize, Serialize};

use crate::core::Generation;

/// A transition waiting for its due time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled<T> {
    /// Clock time at which the transition fires.
    pub due_ms: u64,
    /// Session that scheduled it.
    pub generation: Generation,
    pub payload: T,
}

/// Due-ordered queue of scheduled transitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TimerQueue<T> {
    now_ms: u64,
    entries: Vec<Scheduled<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> TimerQueue<T> {
    /// Create an empty queue at time 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Number of transitions not yet fired.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Due time of the next transition.
    #[must_use]
    pub fn next_due(&self) -> Option<u64> {
        self.entries.first().map(|entry| entry.due_ms)
    }

    /// Queue `payload` to fire `delay_ms` from now.
    pub fn schedule(&mut self, delay_ms: u64, generation: Generation, payload: T) -> u64 {
        let due_ms = self.now_ms.saturating_add(delay_ms);
        let position = self.entries.partition_point(|entry| entry.due_ms <= due_ms);
        self.entries.insert(
            position,
            Scheduled {
                due_ms,
                generation,
                payload,
            },
        );
        due_ms
    }

    /// Move the clock forward.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
    }

    /// Remove and return the next transition if it is due.
    pub fn pop_due(&mut self) -> Option<Scheduled<T>> {
        if self.next_due()? <= self.now_ms {
            Some(self.entries.remove(0))
        } else {
            None
        }
    }

    /// Pending transitions in firing order.
    pub fn iter(&self) -> impl Iterator<Item = &Scheduled<T>> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_in_due_order() {
        let mut queue = TimerQueue::new();
        let gen = Generation::new(1);
        queue.schedule(1500, gen, "flip");
        queue.schedule(400, gen, "victory");

        queue.advance(399);
        assert!(queue.pop_due().is_none());

        queue.advance(1);
        assert_eq!(queue.pop_due().unwrap().payload, "victory");
        assert!(queue.pop_due().is_none());

        queue.advance(2000);
        let flip = queue.pop_due().unwrap();
        assert_eq!(flip.payload, "flip");
        assert_eq!(flip.due_ms, 1500);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = TimerQueue::new();
        queue.schedule(10, Generation::new(1), 'a');
        queue.schedule(10, Generation::new(2), 'b');
        queue.schedule(5, Generation::new(3), 'c');

        queue.advance(10);
        let order: Vec<char> = std::iter::from_fn(|| queue.pop_due().map(|s| s.payload)).collect();
        assert_eq!(order, vec!['c', 'a', 'b']);
    }

    #[test]
    fn test_schedule_is_relative_to_now() {
        let mut queue = TimerQueue::new();
        queue.advance(1000);
        let due = queue.schedule(500, Generation::new(1), ());
        assert_eq!(due, 1500);
        assert_eq!(queue.next_due(), Some(1500));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.iter().next().unwrap().generation, Generation::new(1));
    }
}
