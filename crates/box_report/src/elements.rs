//! Per-element breakdown.

use box_metrics::style::css_number;
use box_metrics::{BoxMeasurement, Edges, MeasureError, Size, round_px};
use core::fmt::{Result as FmtResult, Write};

/// `WxH` with both sides rounded.
pub(crate) fn rounded_size(size: Size) -> String {
    format!("{}x{}", round_px(size.width), round_px(size.height))
}

/// `Tpx Rpx Bpx Lpx`, unrounded.
fn edges_px(edges: &Edges) -> String {
    edges
        .to_array()
        .iter()
        .map(|value| format!("{}px", css_number(*value)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Write the block for one measured element, followed by a blank line.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_measurement<W: Write>(out: &mut W, measurement: &BoxMeasurement) -> FmtResult {
    writeln!(out, "<{}>:", measurement.tag)?;
    writeln!(out, "  Border Box: {}", rounded_size(measurement.border_box))?;
    if measurement.content_box_is_consistent() {
        writeln!(out, "  Content Box: {}", rounded_size(measurement.content_box))?;
    } else {
        writeln!(
            out,
            "  Content Box: {} (inconsistent: negative content box)",
            rounded_size(measurement.content_box)
        )?;
    }
    writeln!(out, "  Margins (T R B L): {}", edges_px(&measurement.margin))?;
    writeln!(out, "  Padding (T R B L): {}", edges_px(&measurement.padding))?;
    writeln!(out, "  Border (T R B L): {}", edges_px(&measurement.border))?;
    writeln!(out, "  Font Size: {}px", css_number(measurement.font_size))?;
    writeln!(out, "  Line Height: {}", measurement.line_height)?;
    writeln!(out, "  Display: {}", measurement.display)?;
    let (x, y) = measurement.position();
    writeln!(out, "  Position: x={x} y={y}")?;
    if let Some(text) = measurement.first_text_line {
        writeln!(out, "  First text line: {}", rounded_size(text))?;
    }
    if let Some(children) = &measurement.children {
        let tags: Vec<String> = children.iter().map(|tag| tag.to_ascii_uppercase()).collect();
        writeln!(out, "  Children ({}): {}", tags.len(), tags.join(", "))?;
    }
    let malformed: Vec<String> = measurement
        .malformed
        .iter()
        .filter_map(|err| match err {
            MeasureError::MalformedNumericStyle { property, raw } => {
                Some(format!("{property}={raw:?}"))
            }
            MeasureError::ElementNotFound { .. } => None,
        })
        .collect();
    if !malformed.is_empty() {
        writeln!(out, "  Read as 0: {}", malformed.join(", "))?;
    }
    writeln!(out)
}

/// Write the marker line for a tag that could not be measured.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_not_found<W: Write>(out: &mut W, tag: &str) -> FmtResult {
    writeln!(out, "{tag}: NOT FOUND")?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use box_metrics::{LineHeight, Rect};

    fn heading() -> BoxMeasurement {
        BoxMeasurement {
            tag: "h1".to_owned(),
            rect: Rect::new(8.0, 21.44, 784.0, 36.8),
            border_box: Size {
                width: 784.0,
                height: 36.8,
            },
            margin: Edges {
                top: 21.44,
                right: 0.0,
                bottom: 21.44,
                left: 0.0,
            },
            padding: Edges::default(),
            border: Edges::default(),
            content_box: Size {
                width: 784.0,
                height: 36.8,
            },
            font_size: 32.0,
            line_height: LineHeight::Keyword("normal".to_owned()),
            display: "block".to_owned(),
            first_text_line: Some(Size {
                width: 171.6,
                height: 36.5,
            }),
            children: None,
            malformed: Vec::new(),
        }
    }

    #[test]
    fn element_block_lines() {
        let mut out = String::new();
        assert!(write_measurement(&mut out, &heading()).is_ok());
        assert_eq!(
            out,
            "<h1>:\n\
             \x20 Border Box: 784x37\n\
             \x20 Content Box: 784x37\n\
             \x20 Margins (T R B L): 21.44px 0px 21.44px 0px\n\
             \x20 Padding (T R B L): 0px 0px 0px 0px\n\
             \x20 Border (T R B L): 0px 0px 0px 0px\n\
             \x20 Font Size: 32px\n\
             \x20 Line Height: normal\n\
             \x20 Display: block\n\
             \x20 Position: x=8 y=21\n\
             \x20 First text line: 172x37\n\
             \n"
        );
    }

    #[test]
    fn inconsistent_content_box_and_malformed_values_are_flagged() {
        let mut measurement = heading();
        measurement.content_box.height = -3.0;
        measurement.children = Some(vec!["span".to_owned(), "span".to_owned()]);
        measurement.malformed = vec![MeasureError::MalformedNumericStyle {
            property: "font-size".to_owned(),
            raw: "medium".to_owned(),
        }];
        let mut out = String::new();
        assert!(write_measurement(&mut out, &measurement).is_ok());
        assert!(out.contains("  Content Box: 784x-3 (inconsistent: negative content box)\n"));
        assert!(out.contains("  Children (2): SPAN, SPAN\n"));
        assert!(out.contains("  Read as 0: font-size=\"medium\"\n"));
    }

    #[test]
    fn not_found_marker() {
        let mut out = String::new();
        assert!(write_not_found(&mut out, "form").is_ok());
        assert_eq!(out, "form: NOT FOUND\n\n");
    }
}
