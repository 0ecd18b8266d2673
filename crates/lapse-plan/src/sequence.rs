//! `Sequence` — the consumable exposure queue.
//!
//! A generated plan is a `Vec<ExposureEvent>`; a *running* lapse consumes it
//! one event at a time, earliest first, regardless of the order events were
//! supplied in (a user-provided plan file need not be sorted).  `Sequence`
//! owns that ordering: events are kept sorted by timestamp and popped from
//! the front.
//!
//! Equal timestamps are kept in insertion order (stable sort / insert-after),
//! so a plan with a duplicated instant still drains deterministically.

use std::collections::VecDeque;

use lapse_core::ExposureEvent;

/// An ordered, consumable queue of exposure events.
#[derive(Clone, Debug, Default)]
pub struct Sequence {
    /// Events sorted ascending by `ts`.
    inner: VecDeque<ExposureEvent>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from events in any order.
    pub fn from_events(mut events: Vec<ExposureEvent>) -> Self {
        // Stable sort: ties keep the order the plan supplied them in.
        events.sort_by_key(|e| e.ts);
        Self { inner: events.into() }
    }

    /// Insert one event, preserving timestamp order.
    ///
    /// An event equal in timestamp to existing ones lands after them.
    pub fn push(&mut self, event: ExposureEvent) {
        let idx = self.inner.partition_point(|e| e.ts <= event.ts);
        self.inner.insert(idx, event);
    }

    /// Remove and return the earliest remaining event.
    pub fn pop_next(&mut self) -> Option<ExposureEvent> {
        self.inner.pop_front()
    }

    /// The earliest remaining event, without consuming it.
    pub fn peek_next(&self) -> Option<&ExposureEvent> {
        self.inner.front()
    }

    /// `true` while at least one event remains.
    pub fn has_more(&self) -> bool {
        !self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remaining events in consumption order (earliest first).
    pub fn remaining(&self) -> impl Iterator<Item = &ExposureEvent> {
        self.inner.iter()
    }
}

impl From<Vec<ExposureEvent>> for Sequence {
    fn from(events: Vec<ExposureEvent>) -> Self {
        Self::from_events(events)
    }
}
