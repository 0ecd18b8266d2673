//! The exposure schedule generator.
//!
//! # Progression model
//!
//! A plan is an arithmetic progression of absolute timestamps.  For frame
//! index `i` in `[0, frame_count)`:
//!
//! ```text
//! ts_i = start + delay_seconds*1000 + round(i * interval_millis)
//! ```
//!
//! `interval_millis` is `f64` on purpose: a derived spacing such as
//! 86,400,000 ms / 1,740 frames ≈ 49,655.17 ms is not a whole millisecond,
//! and truncating it before the multiply would compound the error across
//! thousands of frames.  Each timestamp is therefore computed closed-form
//! from its index (no running accumulator) and rounded exactly once, at the
//! final integer conversion.
//!
//! The generator is pure: `start` is injected by the caller (the CLI supplies
//! wall-clock time at the boundary), so identical inputs always produce an
//! identical plan.

use lapse_core::{EpochMillis, ExposureEvent, LapseError, LapseResult};

use crate::PlanResult;

// ── ScheduleSpec ──────────────────────────────────────────────────────────────

/// Fully resolved parameters for one plan generation.
///
/// Callers usually obtain one from [`crate::Recipe::schedule_spec`] rather
/// than filling the fields by hand.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduleSpec {
    /// Reference instant; conceptually "now" at invocation time.
    pub start: EpochMillis,

    /// Fixed offset applied to every timestamp before the progression starts.
    pub delay_seconds: u32,

    /// Label applied to every produced event.  Must be non-empty.
    pub label: String,

    /// Spacing between consecutive events.  Must be finite and >= 1.0 —
    /// epoch-millisecond output cannot represent sub-millisecond spacing
    /// without duplicating timestamps.  May carry fractional milliseconds.
    pub interval_millis: f64,

    /// Number of events to produce.  Zero yields an empty plan.
    pub frame_count: usize,
}

impl ScheduleSpec {
    /// Check the parameter invariants, naming the offending field on failure.
    pub fn validate(&self) -> LapseResult<()> {
        // Below 1 ms, rounding to integer milliseconds collapses adjacent
        // timestamps and the plan is no longer strictly increasing.
        if !self.interval_millis.is_finite() || self.interval_millis < 1.0 {
            return Err(LapseError::invalid(
                "interval_millis",
                format!("must be finite and >= 1, got {}", self.interval_millis),
            ));
        }
        if self.label.is_empty() {
            return Err(LapseError::invalid("label", "must be non-empty"));
        }
        Ok(())
    }

    /// First timestamp of the plan: `start + delay_seconds*1000`.
    #[inline]
    pub fn first_timestamp(&self) -> EpochMillis {
        self.start.offset_secs(self.delay_seconds as i64)
    }

    /// Timestamp of frame `i`, computed closed-form from the index.
    #[inline]
    pub fn timestamp_at(&self, i: usize) -> EpochMillis {
        let offset = (i as f64 * self.interval_millis).round() as i64;
        self.first_timestamp().offset_millis(offset)
    }
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Produce the full exposure plan for `spec`.
///
/// Output length equals `spec.frame_count` exactly, ordered by increasing
/// index; `frame_count == 0` yields an empty vec, never an error.  Fails only
/// on invalid parameters (`interval_millis < 1`, empty `label`).
pub fn generate(spec: &ScheduleSpec) -> PlanResult<Vec<ExposureEvent>> {
    spec.validate()?;

    let plan = (0..spec.frame_count)
        .map(|i| ExposureEvent::new(spec.label.clone(), spec.timestamp_at(i)))
        .collect();

    Ok(plan)
}
