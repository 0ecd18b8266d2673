//! JSON plan I/O.
//!
//! # Plan format
//!
//! A plan file is a JSON array of exposure objects, each with exactly two
//! keys:
//!
//! ```json
//! [{"name": "eight-hour-test", "ts": 1474075839955},
//!  {"name": "eight-hour-test", "ts": 1474075887955}]
//! ```
//!
//! `ts` is an integer, milliseconds since the Unix epoch.  Writing emits the
//! whole array on a single line (plus trailing newline) so a plan pipes
//! cleanly into other tools; loading accepts any JSON whitespace and does not
//! require the array to be sorted — [`crate::Sequence`] orders on intake.

use std::io::{Read, Write};
use std::path::Path;

use lapse_core::ExposureEvent;

use crate::{PlanError, PlanResult};

// ── Loading ───────────────────────────────────────────────────────────────────

/// Load an exposure plan from a JSON file.
pub fn load_plan_json(path: &Path) -> PlanResult<Vec<ExposureEvent>> {
    let file = std::fs::File::open(path).map_err(PlanError::Io)?;
    load_plan_reader(std::io::BufReader::new(file))
}

/// Like [`load_plan_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from stdin.
pub fn load_plan_reader<R: Read>(reader: R) -> PlanResult<Vec<ExposureEvent>> {
    serde_json::from_reader(reader).map_err(|e| {
        PlanError::Parse(format!(
            "expected a JSON array of {{\"name\": <string>, \"ts\": <integer>}} objects: {e}"
        ))
    })
}

// ── Writing ───────────────────────────────────────────────────────────────────

/// Serialize `plan` as a single-line JSON array followed by a newline.
pub fn write_plan_json<W: Write>(mut writer: W, plan: &[ExposureEvent]) -> PlanResult<()> {
    serde_json::to_writer(&mut writer, plan)
        .map_err(|e| PlanError::Parse(e.to_string()))?;
    writer.write_all(b"\n").map_err(PlanError::Io)?;
    Ok(())
}
