//! Expected-value table lines.
//!
//! Each line is `{"<tag>", <width>, <height>},` with the border-box size
//! rounded half-up. Downstream test tables are pasted from this output, so the
//! field order and rounding must not change.

use box_metrics::{BoxMeasurement, MeasureError, round_px};
use core::fmt::{Result as FmtResult, Write};

/// Table line for one measurement.
#[must_use]
pub fn fixture_line(measurement: &BoxMeasurement) -> String {
    format!(
        "{{\"{}\", {}, {}}},",
        measurement.tag.to_ascii_lowercase(),
        round_px(measurement.border_box.width),
        round_px(measurement.border_box.height)
    )
}

/// Write one line per requested tag, in request order. Tags that were not
/// measured become a comment line so the table visibly lacks them.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_fixture_array<W: Write>(
    out: &mut W,
    results: &[(String, Result<BoxMeasurement, MeasureError>)],
) -> FmtResult {
    for (tag, result) in results {
        match result {
            Ok(measurement) => writeln!(out, "{}", fixture_line(measurement))?,
            Err(_) => writeln!(out, "// {}: NOT FOUND", tag.to_ascii_lowercase())?,
        }
    }
    Ok(())
}
