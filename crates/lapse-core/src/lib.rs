//! `lapse-core` — foundational types for the `lapse` timelapse planner.
//!
//! This crate is a dependency of every other `lapse-*` crate.  It
//! intentionally has no `lapse-*` dependencies and minimal external ones
//! (only `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                    |
//! |------------|---------------------------------------------|
//! | [`time`]   | `EpochMillis`, wall-clock `now()`           |
//! | [`event`]  | `ExposureEvent`                             |
//! | [`error`]  | `LapseError`, `LapseResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.     |
//! |         | Required by `lapse-plan`'s JSON loader.                 |

pub mod error;
pub mod event;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{LapseError, LapseResult};
pub use event::ExposureEvent;
pub use time::EpochMillis;
