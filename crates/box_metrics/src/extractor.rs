//! Per-element box-model extraction.
//! Spec: <https://www.w3.org/TR/css-box-3/#box-model>
//!
//! The host's border-box rectangle and computed edges are taken as ground
//! truth; the content box is derived from them:
//!
//! ```text
//! content.width  = border_box.width  - padding.left - padding.right - border.left - border.right
//! content.height = border_box.height - padding.top  - padding.bottom - border.top - border.bottom
//! ```
//!
//! Margins lie outside the border box and do not enter the derivation.

use log::warn;
use serde::Serialize;

use crate::error::MeasureError;
use crate::geometry::{Edges, Rect, Size, round_px};
use crate::query::LayoutQuery;
use crate::style::LineHeight;

/// Tolerance for recomposing a border box from its content box and edges.
pub const BOX_TOLERANCE: f64 = 1e-6;

/// Box-model geometry of one element, unrounded.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxMeasurement {
    /// Lowercase tag name.
    pub tag: String,
    /// Border-box rectangle in viewport coordinates.
    pub rect: Rect,
    /// `rect.width` × `rect.height`.
    pub border_box: Size,
    /// Margin edges.
    pub margin: Edges,
    /// Padding edges.
    pub padding: Edges,
    /// Border widths.
    pub border: Edges,
    /// Derived content box. Negative components mean style and geometry
    /// disagree; they are kept as-is.
    pub content_box: Size,
    /// Computed font size in pixels.
    pub font_size: f64,
    /// Computed line height.
    pub line_height: LineHeight,
    /// Computed display mode.
    pub display: String,
    /// Size of the first direct text child. Present iff the first child node
    /// is text with non-whitespace content.
    pub first_text_line: Option<Size>,
    /// Direct element children's tags in document order. Present iff there is
    /// at least one.
    pub children: Option<Vec<String>>,
    /// Style values that were read as `0.0`.
    pub malformed: Vec<MeasureError>,
}

impl BoxMeasurement {
    /// Whether both content-box axes are non-negative.
    #[must_use]
    pub fn content_box_is_consistent(&self) -> bool {
        self.content_box.width >= 0.0 && self.content_box.height >= 0.0
    }

    /// Content box plus padding and border, minus the measured border box, per axis.
    /// Zero (within [`BOX_TOLERANCE`]) for every measurement this module produces.
    #[must_use]
    pub fn border_box_residual(&self) -> Size {
        Size {
            width: self.content_box.width + self.padding.horizontal() + self.border.horizontal()
                - self.border_box.width,
            height: self.content_box.height + self.padding.vertical() + self.border.vertical()
                - self.border_box.height,
        }
    }

    /// Viewport position of the border box's top-left corner, rounded.
    #[must_use]
    pub fn position(&self) -> (i64, i64) {
        (round_px(self.rect.left), round_px(self.rect.top))
    }
}

/// Derive a content box from a border box and its inner edges.
#[must_use]
pub fn content_box(border_box: Size, padding: &Edges, border: &Edges) -> Size {
    Size {
        width: border_box.width - padding.horizontal() - border.horizontal(),
        height: border_box.height - padding.vertical() - border.vertical(),
    }
}

/// Measures elements of one layout snapshot.
pub struct BoxModelExtractor<'query, Q: LayoutQuery> {
    /// Host the measurements are read from.
    query: &'query Q,
}

impl<'query, Q: LayoutQuery> BoxModelExtractor<'query, Q> {
    /// Create an extractor over `query`.
    #[must_use]
    pub const fn new(query: &'query Q) -> Self {
        Self { query }
    }

    /// Measure the first element matching `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::ElementNotFound`] when no element matches or the
    /// match has no computed style or rectangle.
    pub fn measure(&self, tag: &str) -> Result<BoxMeasurement, MeasureError> {
        let element = self
            .query
            .lookup(tag)
            .ok_or_else(|| MeasureError::not_found(tag))?;
        self.measure_element(element)
            .ok_or_else(|| MeasureError::not_found(tag))
    }

    /// Measure every tag independently, in order. A missing tag yields an
    /// error in its own slot and does not affect the others.
    pub fn measure_all<S: AsRef<str>>(
        &self,
        tags: &[S],
    ) -> Vec<(String, Result<BoxMeasurement, MeasureError>)> {
        tags.iter()
            .map(|tag| (tag.as_ref().to_owned(), self.measure(tag.as_ref())))
            .collect()
    }

    /// Measure an element handle; `None` when style or geometry is missing.
    pub fn measure_element(&self, element: Q::Element) -> Option<BoxMeasurement> {
        let style = self.query.resolved_style(element)?.resolve();
        let rect = self.query.bounding_rect(element)?;
        let tag = self.query.tag_name(element);

        let border_box = rect.size();
        let content = content_box(border_box, &style.padding, &style.border);

        let first_text_line = self
            .query
            .first_child_text(element)
            .filter(|range| range.has_visible_text())
            .map(|range| range.rect.size());

        let child_tags: Vec<String> = self
            .query
            .element_children(element)
            .into_iter()
            .map(|child| self.query.tag_name(child))
            .collect();
        let children = (!child_tags.is_empty()).then_some(child_tags);

        let measurement = BoxMeasurement {
            tag,
            rect,
            border_box,
            margin: style.margin,
            padding: style.padding,
            border: style.border,
            content_box: content,
            font_size: style.font_size,
            line_height: style.line_height,
            display: style.display,
            first_text_line,
            children,
            malformed: style.malformed,
        };
        if !measurement.content_box_is_consistent() {
            warn!(
                "[PROBE] <{}> has a negative content box {}x{}: computed padding/border exceed the border box",
                measurement.tag, measurement.content_box.width, measurement.content_box.height
            );
        }
        Some(measurement)
    }
}
