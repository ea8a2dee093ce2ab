//! Time-ordered queue of deferred mission events.
//!
//! Events are ordered by `(fire_time, seq)`: strictly by due minute, FIFO
//! among events due the same minute. `drain` removes everything due at or
//! before the current clock, so an event fires exactly once and never
//! early. Callers pick delays of at least one tick; nothing is scheduled
//! in the past.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use signal_core::events::{EventAction, ScheduledEvent};

/// Heap ordering wrapper: smallest `(fire_time, seq)` first.
#[derive(Debug, Clone, Eq, PartialEq)]
struct OrderedEvent(ScheduledEvent);

impl PartialOrd for OrderedEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderedEvent {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .fire_time
            .cmp(&other.0.fire_time)
            .then_with(|| self.0.seq.cmp(&other.0.seq))
    }
}

/// Min-heap of scheduled events keyed by due minute.
#[derive(Debug, Clone, Default)]
pub struct EventScheduler {
    queue: BinaryHeap<Reverse<OrderedEvent>>,
    next_seq: u64,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action to fire at an absolute minute.
    pub fn schedule(&mut self, fire_time: u32, action: EventAction) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(OrderedEvent(ScheduledEvent {
            fire_time,
            seq,
            action,
        })));
    }

    /// Remove and return every event due at or before `now`, in fire order.
    pub fn drain(&mut self, now: u32) -> Vec<ScheduledEvent> {
        let mut due = Vec::new();
        while let Some(Reverse(head)) = self.queue.peek() {
            if head.0.fire_time > now {
                break;
            }
            if let Some(Reverse(event)) = self.queue.pop() {
                due.push(event.0);
            }
        }
        due
    }

    /// Number of events still pending.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Inspect pending events without consuming them (unordered).
    pub fn pending(&self) -> impl Iterator<Item = &ScheduledEvent> {
        self.queue.iter().map(|Reverse(event)| &event.0)
    }
}
