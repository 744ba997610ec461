//! Measurement errors.

use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Serialize;
use std::error::Error;

/// Failures local to one element or one style value.
///
/// Neither variant aborts a run: callers move on to the next element, and
/// malformed style values are replaced by `0.0` where they are read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MeasureError {
    /// No element with this tag, or the element has no resolvable style or geometry.
    ElementNotFound {
        /// Requested tag identifier.
        tag: String,
    },
    /// A computed style value could not be read as a pixel magnitude.
    MalformedNumericStyle {
        /// CSS property the value belongs to.
        property: String,
        /// Raw computed value.
        raw: String,
    },
}

impl MeasureError {
    /// Shorthand for [`MeasureError::ElementNotFound`].
    #[must_use]
    pub fn not_found(tag: &str) -> Self {
        Self::ElementNotFound {
            tag: tag.to_owned(),
        }
    }
}

impl Display for MeasureError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::ElementNotFound { tag } => write!(formatter, "{tag}: NOT FOUND"),
            Self::MalformedNumericStyle { property, raw } => {
                write!(formatter, "malformed numeric style {property}: {raw:?}")
            }
        }
    }
}

impl Error for MeasureError {}
