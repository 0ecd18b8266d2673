//! The derivation recipe: higher-level intent → concrete schedule parameters.
//!
//! # Derivation rule
//!
//! "Spread `input_hours` of real time into an `output_seconds`-long,
//! `output_fps`-frames-per-second video" resolves to:
//!
//! ```text
//! frame_count     = output_seconds * output_fps
//! interval_millis = (input_hours * 3_600_000) / frame_count
//! ```
//!
//! The division is real division; when the span is not evenly divisible the
//! interval carries fractional milliseconds, which the generator preserves
//! through to timestamp computation (see [`crate::generator`]).
//!
//! The defaults reproduce the classic 24-hour lapse: 24 h into 60 s at
//! 30 fps → 1,800 frames, one every 48 s.

use lapse_core::{EpochMillis, LapseError};

use crate::generator::ScheduleSpec;
use crate::PlanResult;

/// User-level plan parameters, with serde support so the recipe can double
/// as a config object.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Recipe {
    /// Hours of real time the lapse spans, starting at the plan's start.
    pub input_hours: u32,

    /// Duration of the assembled output video, in seconds.
    pub output_seconds: u32,

    /// Frame rate of the assembled output video.
    pub output_fps: u32,

    /// Seconds to hold before the first exposure.
    pub delay_seconds: u32,

    /// Capture-session label; also a natural directory name for frames.
    pub label: String,
}

impl Default for Recipe {
    fn default() -> Self {
        Self {
            input_hours:    24,
            output_seconds: 60,
            output_fps:     30,
            delay_seconds:  30,
            label:          "timelapse".to_string(),
        }
    }
}

impl Recipe {
    /// Total frames the output video needs: `output_seconds * output_fps`.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.output_seconds as usize * self.output_fps as usize
    }

    /// Capture spacing in (possibly fractional) milliseconds.
    ///
    /// Meaningless if `frame_count()` is zero; `schedule_spec` rejects that
    /// case before this is used.
    #[inline]
    pub fn interval_millis(&self) -> f64 {
        (self.input_hours as f64 * 3_600_000.0) / self.frame_count() as f64
    }

    /// Resolve this recipe into a validated [`ScheduleSpec`] anchored at
    /// `start`.
    pub fn schedule_spec(&self, start: EpochMillis) -> PlanResult<ScheduleSpec> {
        if self.input_hours == 0 {
            return Err(LapseError::invalid("input_hours", "must be > 0").into());
        }
        if self.frame_count() == 0 {
            return Err(LapseError::invalid(
                "output_seconds/output_fps",
                "product must be > 0 (would produce an empty plan)",
            )
            .into());
        }

        let spec = ScheduleSpec {
            start,
            delay_seconds:   self.delay_seconds,
            label:           self.label.clone(),
            interval_millis: self.interval_millis(),
            frame_count:     self.frame_count(),
        };
        spec.validate()?;
        Ok(spec)
    }
}
