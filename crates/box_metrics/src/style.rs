//! Computed style values as the host reports them, and their numeric reading.
//!
//! Hosts hand back computed values as strings (`"21.44px"`, `"normal"`, `""`).
//! Edge widths and font size are read as pixel magnitudes; anything that is not
//! a number becomes `0.0` and is remembered as a [`MeasureError`]. The
//! `line-height` value is kept as a [`LineHeight`] so keywords survive.

use core::fmt::{Display, Formatter, Result as FmtResult};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::MeasureError;
use crate::geometry::Edges;

/// Raw computed values for the four edges of one box property.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeValues {
    /// `*-top`
    pub top: String,
    /// `*-right`
    pub right: String,
    /// `*-bottom`
    pub bottom: String,
    /// `*-left`
    pub left: String,
}

impl EdgeValues {
    /// Same raw value on all four edges.
    #[must_use]
    pub fn uniform(value: &str) -> Self {
        Self {
            top: value.to_owned(),
            right: value.to_owned(),
            bottom: value.to_owned(),
            left: value.to_owned(),
        }
    }
}

/// Resolved style set for one element at the current layout pass.
///
/// Field names follow `CSSStyleDeclaration` so a browser-side serializer can
/// emit this shape directly.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleSnapshot {
    /// `margin-*`
    pub margin: EdgeValues,
    /// `padding-*`
    pub padding: EdgeValues,
    /// `border-*-width`
    pub border_width: EdgeValues,
    /// `font-size`
    pub font_size: String,
    /// `line-height`
    pub line_height: String,
    /// `display`
    pub display: String,
    /// `box-sizing`; informational only.
    pub box_sizing: String,
}

/// A [`StyleSnapshot`] with every numeric value read into pixels.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedStyle {
    /// Margin edges (may be negative).
    pub margin: Edges,
    /// Padding edges.
    pub padding: Edges,
    /// Border widths.
    pub border: Edges,
    /// Font size in pixels.
    pub font_size: f64,
    /// Line height, numeric or keyword.
    pub line_height: LineHeight,
    /// Display mode, verbatim.
    pub display: String,
    /// Values that were replaced by `0.0`.
    pub malformed: Vec<MeasureError>,
}

impl StyleSnapshot {
    /// Read all numeric values. Never fails; bad values become `0.0` and are
    /// listed in [`ResolvedStyle::malformed`].
    #[must_use]
    pub fn resolve(&self) -> ResolvedStyle {
        let mut malformed = Vec::new();
        let margin = read_edges("margin", "", &self.margin, &mut malformed);
        let padding = read_edges("padding", "", &self.padding, &mut malformed);
        let border = read_edges("border", "-width", &self.border_width, &mut malformed);
        let font_size = read_px_or_zero("font-size", &self.font_size, &mut malformed);
        ResolvedStyle {
            margin,
            padding,
            border,
            font_size,
            line_height: LineHeight::parse(&self.line_height),
            display: self.display.clone(),
            malformed,
        }
    }
}

fn read_edges(
    prefix: &str,
    suffix: &str,
    values: &EdgeValues,
    malformed: &mut Vec<MeasureError>,
) -> Edges {
    let mut side = |name: &str, raw: &str| {
        read_px_or_zero(&format!("{prefix}-{name}{suffix}"), raw, malformed)
    };
    Edges {
        top: side("top", &values.top),
        right: side("right", &values.right),
        bottom: side("bottom", &values.bottom),
        left: side("left", &values.left),
    }
}

fn read_px_or_zero(property: &str, raw: &str, malformed: &mut Vec<MeasureError>) -> f64 {
    match parse_px(property, raw) {
        Ok(px) => px,
        Err(err) => {
            if raw.trim().is_empty() {
                debug!("[PROBE] {property} missing, using 0");
            } else {
                warn!("[PROBE] {err}, using 0");
            }
            malformed.push(err);
            0.0
        }
    }
}

/// Read the leading number of a unit-suffixed value (`"12px"` → `12.0`).
///
/// Accepts what `parseFloat` accepts: optional leading whitespace, a sign,
/// digits with an optional fraction and exponent, then anything.
///
/// # Errors
///
/// Returns [`MeasureError::MalformedNumericStyle`] when there is no leading
/// number or it is not finite.
pub fn parse_px(property: &str, raw: &str) -> Result<f64, MeasureError> {
    let malformed = || MeasureError::MalformedNumericStyle {
        property: property.to_owned(),
        raw: raw.to_owned(),
    };
    let trimmed = raw.trim_start();
    let end = numeric_prefix_len(trimmed);
    if end == 0 {
        return Err(malformed());
    }
    trimmed[..end]
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(malformed)
}

/// Length of the longest prefix of `text` that forms a decimal number.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut pos = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let int_start = pos;
    while bytes.get(pos).is_some_and(u8::is_ascii_digit) {
        pos += 1;
    }
    let mut digits = pos - int_start;
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            pos = frac_end;
        }
    }
    if digits == 0 {
        return 0;
    }
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut exp = pos + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits_start = exp;
        while bytes.get(exp).is_some_and(u8::is_ascii_digit) {
            exp += 1;
        }
        if exp > exp_digits_start {
            pos = exp;
        }
    }
    pos
}

/// Computed `line-height`: either a used pixel value or a keyword such as
/// `normal`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum LineHeight {
    /// `"<number>px"`
    Numeric(f64),
    /// Anything else, verbatim (including the empty string).
    Keyword(String),
}

impl LineHeight {
    /// Classify a raw computed value. Only a complete `<number>px` token is
    /// numeric; everything else is kept as written.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .strip_suffix("px")
            .and_then(|number| number.parse::<f64>().ok())
            .filter(|value| value.is_finite())
            .map_or_else(|| Self::Keyword(raw.to_owned()), Self::Numeric)
    }

    /// Pixel value when numeric.
    #[must_use]
    pub const fn px(&self) -> Option<f64> {
        match self {
            Self::Numeric(px) => Some(*px),
            Self::Keyword(_) => None,
        }
    }
}

impl Display for LineHeight {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Numeric(px) => write!(formatter, "{}px", css_number(*px)),
            Self::Keyword(keyword) => formatter.write_str(keyword),
        }
    }
}

/// Format a pixel magnitude the way a computed style prints it: shortest
/// round-trip form, no trailing `.0`, and no negative zero.
#[must_use]
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    format!("{value}")
}
