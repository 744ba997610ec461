//! Owned capture of one layout pass.
//!
//! A [`DocumentSnapshot`] holds every element of a page in document order with
//! the style strings and rectangles the host reported for it. Measuring
//! against a snapshot instead of a live engine guarantees all answers come
//! from the same layout, and lets a capture be saved and measured again
//! later.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::query::{LayoutQuery, TextRange, ViewportInfo};
use crate::style::StyleSnapshot;

/// Index of an element in [`DocumentSnapshot::elements`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub usize);

/// One element as captured from the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementRecord {
    /// Tag name as reported (any case).
    pub tag: String,
    /// Border-box rectangle.
    pub rect: Option<Rect>,
    /// Computed style.
    pub style: Option<StyleSnapshot>,
    /// First child node, when it is text.
    pub first_text: Option<TextRange>,
    /// Direct element children in document order.
    pub children: Vec<ElementId>,
}

/// Every element of a document plus its viewport, from one layout pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSnapshot {
    /// Window and document dimensions.
    pub viewport: ViewportInfo,
    /// Elements in document (pre-)order.
    pub elements: Vec<ElementRecord>,
}

impl DocumentSnapshot {
    /// Empty snapshot with the given viewport.
    #[must_use]
    pub const fn new(viewport: ViewportInfo) -> Self {
        Self {
            viewport,
            elements: Vec::new(),
        }
    }

    /// Append an element and link it under `parent`.
    ///
    /// Elements must be pushed in document order (a parent before its
    /// children, earlier siblings before later ones) for [`LayoutQuery::lookup`]
    /// to return the first match.
    pub fn push_element(
        &mut self,
        parent: Option<ElementId>,
        tag: &str,
        rect: Rect,
        style: StyleSnapshot,
    ) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(ElementRecord {
            tag: tag.to_owned(),
            rect: Some(rect),
            style: Some(style),
            first_text: None,
            children: Vec::new(),
        });
        if let Some(parent_record) =
            parent.and_then(|parent_id| self.elements.get_mut(parent_id.0))
        {
            parent_record.children.push(id);
        }
        id
    }

    /// Record the first child node of `element` as a text node.
    pub fn set_first_text(&mut self, element: ElementId, text: &str, rect: Rect) {
        if let Some(record) = self.elements.get_mut(element.0) {
            record.first_text = Some(TextRange {
                text: text.to_owned(),
                rect,
            });
        }
    }

    /// Record for a handle, if it is in range.
    #[must_use]
    pub fn get(&self, element: ElementId) -> Option<&ElementRecord> {
        self.elements.get(element.0)
    }
}

impl LayoutQuery for DocumentSnapshot {
    type Element = ElementId;

    fn lookup(&self, tag: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|record| record.tag.eq_ignore_ascii_case(tag))
            .map(ElementId)
    }

    fn tag_name(&self, element: ElementId) -> String {
        self.get(element)
            .map(|record| record.tag.to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn resolved_style(&self, element: ElementId) -> Option<StyleSnapshot> {
        self.get(element)?.style.clone()
    }

    fn bounding_rect(&self, element: ElementId) -> Option<Rect> {
        self.get(element)?.rect
    }

    fn first_child_text(&self, element: ElementId) -> Option<TextRange> {
        self.get(element)?.first_text.clone()
    }

    fn element_children(&self, element: ElementId) -> Vec<ElementId> {
        self.get(element)
            .map(|record| {
                record
                    .children
                    .iter()
                    .copied()
                    .filter(|child| child.0 < self.elements.len())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn viewport(&self) -> ViewportInfo {
        self.viewport
    }
}
