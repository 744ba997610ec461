//! CSS box-model measurement over a host layout snapshot.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Two independent, stateless components read a [`LayoutQuery`]:
//! - [`BoxModelExtractor`] turns one element's computed style and border-box
//!   rectangle into a [`BoxMeasurement`] with a derived content box.
//! - [`ContainerHeightReconciler`] splits a container's content height into
//!   its children's heights, the gaps before them, and a final gap.
//!
//! Nothing is laid out here; the host's geometry is ground truth. Values stay
//! unrounded until a report prints them.

pub mod error;
pub mod extractor;
pub mod geometry;
pub mod query;
pub mod reconciler;
pub mod snapshot;
pub mod style;

pub use error::MeasureError;
pub use extractor::{BOX_TOLERANCE, BoxMeasurement, BoxModelExtractor};
pub use geometry::{Edges, Rect, Size, round_px};
pub use query::{LayoutQuery, TextRange, ViewportInfo};
pub use reconciler::{
    ChildContribution, ContainerHeightReconciler, HEIGHT_TOLERANCE, HeightDecomposition,
};
pub use snapshot::{DocumentSnapshot, ElementId, ElementRecord};
pub use style::{EdgeValues, LineHeight, StyleSnapshot};
