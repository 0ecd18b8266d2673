//! Epoch-millisecond time model.
//!
//! # Design
//!
//! Every timestamp in the planner is an absolute count of milliseconds since
//! the Unix epoch, held in `EpochMillis`:
//!
//!   wall_time_ms = epoch + offset_ms
//!
//! Using a single integer unit for all absolute times keeps schedule
//! arithmetic exact and comparisons O(1).  Fractional *intervals* do exist
//! (a derived capture spacing need not be a whole millisecond); those stay
//! `f64` in the planning layer and are rounded only when an absolute
//! `EpochMillis` is finally produced.

use std::fmt;

// ── EpochMillis ───────────────────────────────────────────────────────────────

/// An absolute instant, in milliseconds since the Unix epoch.
///
/// Stored as `i64`: at millisecond resolution an i64 spans ~292 million
/// years either side of 1970, so overflow is not a practical concern.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EpochMillis(pub i64);

impl EpochMillis {
    pub const ZERO: EpochMillis = EpochMillis(0);

    /// Return the instant `ms` milliseconds after `self`.
    #[inline]
    pub fn offset_millis(self, ms: i64) -> EpochMillis {
        EpochMillis(self.0 + ms)
    }

    /// Return the instant `secs` seconds after `self`.
    #[inline]
    pub fn offset_secs(self, secs: i64) -> EpochMillis {
        EpochMillis(self.0 + secs * 1_000)
    }

    /// Milliseconds elapsed from `earlier` to `self` (negative if `earlier`
    /// is actually later).
    #[inline]
    pub fn since(self, earlier: EpochMillis) -> i64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<i64> for EpochMillis {
    type Output = EpochMillis;
    #[inline]
    fn add(self, rhs: i64) -> EpochMillis {
        EpochMillis(self.0 + rhs)
    }
}

impl std::ops::Sub for EpochMillis {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: EpochMillis) -> i64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for EpochMillis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

/// Current wall-clock time as `EpochMillis`.
///
/// Boundary helper only: planning code takes an injected start instant so it
/// stays deterministic; callers (the CLI) use this once at startup.
pub fn now() -> EpochMillis {
    use std::time::{SystemTime, UNIX_EPOCH};
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0);
    EpochMillis(ms)
}
