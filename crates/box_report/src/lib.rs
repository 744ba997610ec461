//! Text output for box-model measurements.
//!
//! A report has up to four sections, each under a `=== Title ===` header:
//! the per-element breakdown, the fixture table, the container height
//! breakdown and the viewport dimensions. Pixel values are rounded here and
//! nowhere else.

pub mod elements;
pub mod fixtures;
pub mod height;

use box_metrics::style::css_number;
use box_metrics::{BoxModelExtractor, ContainerHeightReconciler, LayoutQuery, ViewportInfo};
use core::fmt::{Error as FmtError, Result as FmtResult, Write};

pub use elements::{write_measurement, write_not_found};
pub use fixtures::{fixture_line, write_fixture_array};
pub use height::write_height_breakdown;

/// A report section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Per-element box-model breakdown.
    Elements,
    /// `{"tag", w, h},` table lines.
    Fixtures,
    /// Container height decomposition.
    Height,
    /// Window and document dimensions.
    Viewport,
}

impl Section {
    /// Every section, in report order.
    pub const ALL: [Self; 4] = [Self::Elements, Self::Fixtures, Self::Height, Self::Viewport];

    /// Parse a section name as given on the command line.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "elements" | "measurements" => Some(Self::Elements),
            "fixtures" | "fixture" | "array" => Some(Self::Fixtures),
            "height" | "breakdown" => Some(Self::Height),
            "viewport" => Some(Self::Viewport),
            _ => None,
        }
    }
}

/// What to report on.
#[derive(Clone, Debug)]
pub struct ReportRequest<'req> {
    /// Element tags to measure, in output order.
    pub tags: &'req [String],
    /// Tag of the container whose height is decomposed.
    pub container: &'req str,
    /// Sections to emit, in output order.
    pub sections: &'req [Section],
}

/// Measure `query` and render the requested sections.
///
/// Missing elements are marked in the output; they never fail the report.
///
/// # Errors
///
/// Returns [`FmtError`] only if formatting itself fails.
pub fn render<Q: LayoutQuery>(query: &Q, request: &ReportRequest<'_>) -> Result<String, FmtError> {
    let results = BoxModelExtractor::new(query).measure_all(request.tags);
    let mut out = String::new();
    for section in request.sections {
        if !out.is_empty() && !out.ends_with("\n\n") {
            writeln!(out)?;
        }
        match section {
            Section::Elements => {
                writeln!(out, "=== Layout Measurements ===")?;
                writeln!(out)?;
                for (tag, result) in &results {
                    match result {
                        Ok(measurement) => write_measurement(&mut out, measurement)?,
                        Err(_) => write_not_found(&mut out, tag)?,
                    }
                }
            }
            Section::Fixtures => {
                writeln!(out, "=== Fixture Array ===")?;
                write_fixture_array(&mut out, &results)?;
            }
            Section::Height => {
                writeln!(
                    out,
                    "=== {} Height Breakdown ===",
                    height::title_case(request.container)
                )?;
                match ContainerHeightReconciler::new(query).reconcile(request.container) {
                    Ok(decomposition) => write_height_breakdown(&mut out, &decomposition)?,
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Section::Viewport => {
                writeln!(out, "=== Viewport Info ===")?;
                write_viewport(&mut out, &query.viewport())?;
            }
        }
    }
    Ok(out)
}

/// Write window and document dimensions.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_viewport<W: Write>(out: &mut W, viewport: &ViewportInfo) -> FmtResult {
    writeln!(out, "Window inner width: {}px", css_number(viewport.inner_width))?;
    writeln!(out, "Window inner height: {}px", css_number(viewport.inner_height))?;
    writeln!(out, "Document width: {}px", css_number(viewport.scroll_width))?;
    writeln!(out, "Document height: {}px", css_number(viewport.scroll_height))
}
