//! Keep-alive pacing for long idle gaps.
//!
//! # Why this exists
//!
//! Some cameras drop off the USB bus if they are not accessed for an hour or
//! more.  When the wait to the next scheduled exposure exceeds
//! `max_gap_millis`, the upcoming event is *deferred* and a throwaway
//! keep-alive step is emitted at `now + max_gap_millis` instead; the deferred
//! event is released on a later call once the remaining gap fits.  A sparse
//! overnight plan thus turns into a chain of hourly keep-alive wakes ending
//! in the real exposure.
//!
//! `Pacer` is pure planning: it never sleeps and never touches a camera.
//! The caller owns the waiting and decides what a keep-alive actually does
//! (typically: capture and discard a frame).

use lapse_core::{EpochMillis, ExposureEvent};

use crate::Sequence;

/// Default maximum idle gap: one hour.
pub const DEFAULT_MAX_GAP_MILLIS: i64 = 3_600_000;

/// Label on the throwaway events built for [`Step::KeepAlive`],
/// distinguishing them from plan frames.
pub const KEEP_ALIVE_NAME: &str = "keep-alive-signal";

// ── Step ──────────────────────────────────────────────────────────────────────

/// What the capture loop should do next.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Wait `wait_millis`, then take `event` for real.
    Capture {
        event:       ExposureEvent,
        /// Clamped to zero for past-due events.
        wait_millis: i64,
    },

    /// Wait `wait_millis`, then take `event` and discard the frame, purely
    /// to keep the camera awake.  `event` is named [`KEEP_ALIVE_NAME`] and is
    /// never part of the plan; the real next exposure stays deferred inside
    /// the pacer.
    KeepAlive {
        event:       ExposureEvent,
        wait_millis: i64,
    },

    /// No events remain; the lapse is complete.
    Done,
}

// ── Pacer ─────────────────────────────────────────────────────────────────────

/// Decides, per wake-up, whether the next action is a real exposure or a
/// keep-alive.
#[derive(Clone, Debug)]
pub struct Pacer {
    max_gap_millis: i64,
    /// Event pulled from the sequence but pushed past `max_gap_millis`;
    /// released before the sequence is consulted again.
    deferred: Option<ExposureEvent>,
}

impl Default for Pacer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GAP_MILLIS)
    }
}

impl Pacer {
    /// # Panics
    ///
    /// Panics in debug mode if `max_gap_millis <= 0`.
    pub fn new(max_gap_millis: i64) -> Self {
        debug_assert!(max_gap_millis > 0, "max_gap_millis must be > 0");
        Self { max_gap_millis, deferred: None }
    }

    /// `true` if an event is currently held back behind keep-alives.
    pub fn has_deferred(&self) -> bool {
        self.deferred.is_some()
    }

    /// Decide the next step at wall-clock instant `now`.
    ///
    /// Consumes at most one event from `sequence` per call; a deferred event
    /// takes priority over the sequence head.
    pub fn next_step(&mut self, now: EpochMillis, sequence: &mut Sequence) -> Step {
        let Some(next) = self.deferred.take().or_else(|| sequence.pop_next()) else {
            return Step::Done;
        };

        let until_next = next.ts - now;

        if until_next > self.max_gap_millis {
            // Too far out — hold the event and schedule a throwaway wake.
            self.deferred = Some(next);
            Step::KeepAlive {
                event:       ExposureEvent::new(KEEP_ALIVE_NAME, now + self.max_gap_millis),
                wait_millis: self.max_gap_millis,
            }
        } else {
            Step::Capture {
                event:       next,
                wait_millis: until_next.max(0),
            }
        }
    }
}
