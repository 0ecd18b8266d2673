//! `lapse-plan` — exposure schedule generation, sequencing, and plan I/O.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`generator`] | `ScheduleSpec`, `generate`                            |
//! | [`recipe`]    | `Recipe` (intent → spec derivation)                   |
//! | [`sequence`]  | `Sequence` (ordered consumable queue)                 |
//! | [`pacing`]    | `Pacer`, `Step` (keep-alive gap handling)             |
//! | [`loader`]    | `load_plan_json`, `load_plan_reader`, `write_plan_json` |
//! | [`error`]     | `PlanError`, `PlanResult<T>`                          |
//!
//! # Progression model (summary)
//!
//! A plan is an arithmetic progression of epoch-millisecond timestamps:
//!
//! ```text
//! ts_i = start + delay_seconds*1000 + round(i * interval_millis)
//! ```
//!
//! computed closed-form per index so fractional intervals never accumulate
//! rounding error.  `Sequence` and `Pacer` then drive consumption of the
//! plan: earliest event first, with throwaway keep-alive wakes inserted when
//! an idle gap would exceed the camera's tolerance.

pub mod error;
pub mod generator;
pub mod loader;
pub mod pacing;
pub mod recipe;
pub mod sequence;


pub use error::{PlanError, PlanResult};
pub use generator::{generate, ScheduleSpec};
pub use loader::{load_plan_json, load_plan_reader, write_plan_json};
pub use pacing::{Pacer, Step, DEFAULT_MAX_GAP_MILLIS, KEEP_ALIVE_NAME};
pub use recipe::Recipe;
pub use sequence::Sequence;
