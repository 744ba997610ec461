//! Style and geometry queries against a host layout engine.
//!
//! The extractor and reconciler only ever talk to the host through
//! [`LayoutQuery`]. Every answer must come from the same layout pass; an
//! implementation backed by a live engine must not let layout change between
//! calls of one measurement run.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::style::StyleSnapshot;

/// A direct text child of an element and its bounding rectangle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRange {
    /// Text content of the node, verbatim.
    pub text: String,
    /// Bounding rectangle of the range selecting the whole node.
    pub rect: Rect,
}

impl TextRange {
    /// Whether the node holds anything but whitespace.
    #[must_use]
    pub fn has_visible_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// Window and document dimensions, for environment context in reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportInfo {
    /// `window.innerWidth`
    pub inner_width: f64,
    /// `window.innerHeight`
    pub inner_height: f64,
    /// `document.documentElement.scrollWidth`
    pub scroll_width: f64,
    /// `document.documentElement.scrollHeight`
    pub scroll_height: f64,
}

/// Read-only view of one layout snapshot of a rendered document.
pub trait LayoutQuery {
    /// Handle to an element of the snapshot.
    type Element: Copy;

    /// First element in document order whose tag matches, ignoring ASCII case.
    fn lookup(&self, tag: &str) -> Option<Self::Element>;

    /// Tag name of the element, lowercase.
    fn tag_name(&self, element: Self::Element) -> String;

    /// Computed style, or `None` when the host cannot resolve one for this handle.
    fn resolved_style(&self, element: Self::Element) -> Option<StyleSnapshot>;

    /// Border-box rectangle in viewport coordinates.
    fn bounding_rect(&self, element: Self::Element) -> Option<Rect>;

    /// The element's first child node, when that node is text. A text node
    /// after a leading element child is not considered.
    fn first_child_text(&self, element: Self::Element) -> Option<TextRange>;

    /// Direct element children in document order.
    fn element_children(&self, element: Self::Element) -> Vec<Self::Element>;

    /// Window and document dimensions.
    fn viewport(&self) -> ViewportInfo;
}
