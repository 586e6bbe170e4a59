use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::core::{DelayMs, TimeMs, TimerId};

/// The deferred-callback capability. Fire-and-forget: once scheduled there
/// is no cancellation; expiry is delivered back by the host.
pub trait Scheduler {
    fn schedule(&mut self, delay: DelayMs) -> TimerId;
}

/// Deterministic scheduler driven by a virtual clock. The heap key is
/// (due, insertion order), so timers with the same due instant fire in the
/// order they were scheduled.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: TimeMs,
    next_id: u64,
    queue: BinaryHeap<Reverse<(TimeMs, u64, TimerId)>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> TimeMs {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn next_due(&self) -> Option<TimeMs> {
        self.queue.peek().map(|entry| entry.0.0)
    }

    /// Advances the clock to `t` (never backwards) and returns the timers
    /// that came due, in firing order.
    pub fn advance_to(&mut self, t: TimeMs) -> Vec<TimerId> {
        let mut fired = Vec::new();
        while let Some(Reverse((due, _, _))) = self.queue.peek() {
            if *due > t {
                break;
            }
            let Reverse((_, _, id)) = self.queue.pop().expect("peeked entry");
            fired.push(id);
        }
        if t > self.now {
            self.now = t;
        }
        fired
    }

    pub fn advance_by(&mut self, delay: DelayMs) -> Vec<TimerId> {
        self.advance_to(self.now.after(delay))
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: DelayMs) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.queue.push(Reverse((self.now.after(delay), id.0, id)));
        id
    }
}
