//! Container height reconciliation.
//!
//! Splits a container's content height into the pieces its direct children
//! account for:
//!
//! ```text
//! content_height = Σ (gap_before_child + child.height) + final_gap
//! ```
//!
//! The walk starts at the container's content-box top (`top + padding-top +
//! border-top-width`), and each gap is measured from the previous child's
//! border-box bottom. Gaps are arithmetic residuals: collapsed margins,
//! negative margins and out-of-flow children all show up here without being
//! told apart.
//!
//! The decomposition assumes the container's computed padding and border are
//! the ones inside its border-box rectangle. Nothing here adjusts for
//! `box-sizing`.

use log::warn;
use serde::Serialize;

use crate::error::MeasureError;
use crate::query::LayoutQuery;

/// Tolerance for comparing a reconstructed content height with the measured one.
pub const HEIGHT_TOLERANCE: f64 = 1e-3;

/// One direct child's share of its container's content height.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildContribution {
    /// Lowercase tag name.
    pub tag: String,
    /// Border-box height.
    pub height: f64,
    /// Computed `margin-top`.
    pub margin_top: f64,
    /// Computed `margin-bottom`.
    pub margin_bottom: f64,
    /// Distance from the previous child's bottom (or the content-box top) to
    /// this child's top. Negative when the child overlaps what precedes it.
    pub gap_before_child: f64,
}

/// Vertical decomposition of one container, unrounded.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeightDecomposition {
    /// Lowercase tag name of the container.
    pub tag: String,
    /// Border-box height of the container.
    pub container_border_box_height: f64,
    /// `padding-top`
    pub padding_top: f64,
    /// `border-top-width`
    pub border_top: f64,
    /// `padding-bottom`
    pub padding_bottom: f64,
    /// `border-bottom-width`
    pub border_bottom: f64,
    /// `padding-top + border-top-width`
    pub top_inset: f64,
    /// `padding-bottom + border-bottom-width`
    pub bottom_inset: f64,
    /// Direct element children in document order.
    pub children: Vec<ChildContribution>,
    /// Distance from the last child's bottom (or the content-box top when
    /// there are no children) to the content-box bottom.
    pub final_gap: f64,
    /// Style values of the container that were read as `0.0`.
    pub malformed: Vec<MeasureError>,
}

impl HeightDecomposition {
    /// `Σ (height + gap_before_child) + final_gap`.
    #[must_use]
    pub fn reconstructed_content_height(&self) -> f64 {
        self.children
            .iter()
            .map(|child| child.height + child.gap_before_child)
            .sum::<f64>()
            + self.final_gap
    }

    /// Border-box height minus both insets.
    #[must_use]
    pub fn measured_content_height(&self) -> f64 {
        self.container_border_box_height - self.top_inset - self.bottom_inset
    }

    /// Reconstructed minus measured content height.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.reconstructed_content_height() - self.measured_content_height()
    }

    /// Whether the reconstruction matches the measurement within `tolerance` pixels.
    #[must_use]
    pub fn is_reconciled(&self, tolerance: f64) -> bool {
        self.residual().abs() <= tolerance
    }
}

/// Decomposes container heights of one layout snapshot.
pub struct ContainerHeightReconciler<'query, Q: LayoutQuery> {
    /// Host the measurements are read from.
    query: &'query Q,
}

impl<'query, Q: LayoutQuery> ContainerHeightReconciler<'query, Q> {
    /// Create a reconciler over `query`.
    #[must_use]
    pub const fn new(query: &'query Q) -> Self {
        Self { query }
    }

    /// Decompose the first element matching `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`MeasureError::ElementNotFound`] when no element matches or the
    /// match has no computed style or rectangle.
    pub fn reconcile(&self, tag: &str) -> Result<HeightDecomposition, MeasureError> {
        let container = self
            .query
            .lookup(tag)
            .ok_or_else(|| MeasureError::not_found(tag))?;
        self.reconcile_element(container)
            .ok_or_else(|| MeasureError::not_found(tag))
    }

    /// Decompose a container handle; `None` when its style or geometry is missing.
    ///
    /// Children without a rectangle are left out of the walk; the gap after
    /// them absorbs their extent.
    pub fn reconcile_element(&self, container: Q::Element) -> Option<HeightDecomposition> {
        let style = self.query.resolved_style(container)?.resolve();
        let rect = self.query.bounding_rect(container)?;
        let tag = self.query.tag_name(container);

        let top_inset = style.padding.top + style.border.top;
        let bottom_inset = style.padding.bottom + style.border.bottom;
        let content_top = rect.top + top_inset;
        let content_bottom = rect.bottom() - bottom_inset;

        let (running_bottom, children) = self
            .query
            .element_children(container)
            .into_iter()
            .filter_map(|child| self.child_box(child))
            .fold(
                (content_top, Vec::new()),
                |(running_bottom, mut children), (mut contribution, top, bottom)| {
                    contribution.gap_before_child = top - running_bottom;
                    children.push(contribution);
                    (bottom, children)
                },
            );

        let decomposition = HeightDecomposition {
            tag,
            container_border_box_height: rect.height,
            padding_top: style.padding.top,
            border_top: style.border.top,
            padding_bottom: style.padding.bottom,
            border_bottom: style.border.bottom,
            top_inset,
            bottom_inset,
            children,
            final_gap: content_bottom - running_bottom,
            malformed: style.malformed,
        };
        if !decomposition.is_reconciled(HEIGHT_TOLERANCE) {
            warn!(
                "[PROBE] <{}> content height does not reconcile: residual {}px",
                decomposition.tag,
                decomposition.residual()
            );
        }
        Some(decomposition)
    }

    /// A child's contribution (gap not yet known) with its top and bottom edges.
    fn child_box(&self, child: Q::Element) -> Option<(ChildContribution, f64, f64)> {
        let Some(rect) = self.query.bounding_rect(child) else {
            warn!(
                "[PROBE] <{}> has no bounding rect, skipped in height breakdown",
                self.query.tag_name(child)
            );
            return None;
        };
        let margin = self
            .query
            .resolved_style(child)
            .map(|style| style.resolve().margin)
            .unwrap_or_default();
        let contribution = ChildContribution {
            tag: self.query.tag_name(child),
            height: rect.height,
            margin_top: margin.top,
            margin_bottom: margin.bottom,
            gap_before_child: 0.0,
        };
        Some((contribution, rect.top, rect.bottom()))
    }
}
