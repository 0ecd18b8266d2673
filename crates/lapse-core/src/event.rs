//! The `ExposureEvent` record.
//!
//! One scheduled capture instant: a session label plus an absolute
//! epoch-millisecond timestamp.  Events are immutable once created; a plan is
//! a `Vec<ExposureEvent>` computed eagerly in one call and never mutated.
//!
//! The on-disk/JSON shape is `{"name": <string>, "ts": <integer>}` — field
//! order here matches that shape for readability of serialized plans.

use crate::time::EpochMillis;

/// One scheduled capture instant.
///
/// Within a generated plan every event carries the same `name` and the `ts`
/// values are strictly increasing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExposureEvent {
    /// Label identifying the capture session; constant across one plan.
    pub name: String,

    /// Absolute capture instant, milliseconds since the Unix epoch.
    pub ts: EpochMillis,
}

impl ExposureEvent {
    pub fn new(name: impl Into<String>, ts: EpochMillis) -> Self {
        Self { name: name.into(), ts }
    }
}
