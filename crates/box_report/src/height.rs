//! Container height breakdown.

use box_metrics::style::css_number;
use box_metrics::{HEIGHT_TOLERANCE, HeightDecomposition, round_px};
use core::fmt::{Result as FmtResult, Write};

/// `body` → `Body`.
pub(crate) fn title_case(tag: &str) -> String {
    let mut chars = tag.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
    })
}

/// Write the breakdown of one container.
///
/// Heights and gaps are rounded; margins and insets are printed as computed.
/// A residual line is added when the reconstruction is off by more than
/// [`HEIGHT_TOLERANCE`].
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn write_height_breakdown<W: Write>(
    out: &mut W,
    decomposition: &HeightDecomposition,
) -> FmtResult {
    writeln!(
        out,
        "{} border box height: {}px",
        title_case(&decomposition.tag),
        round_px(decomposition.container_border_box_height)
    )?;
    writeln!(out, "  - Top padding: {}px", css_number(decomposition.padding_top))?;
    writeln!(out, "  - Top border: {}px", css_number(decomposition.border_top))?;
    writeln!(
        out,
        "  - Bottom padding: {}px",
        css_number(decomposition.padding_bottom)
    )?;
    writeln!(
        out,
        "  - Bottom border: {}px",
        css_number(decomposition.border_bottom)
    )?;
    writeln!(out, "  - Children:")?;
    for (index, child) in decomposition.children.iter().enumerate() {
        writeln!(
            out,
            "    [{index}] <{}>: {}px (margins: {}/{}, gap: {}px)",
            child.tag,
            round_px(child.height),
            css_number(child.margin_top),
            css_number(child.margin_bottom),
            round_px(child.gap_before_child)
        )?;
    }
    writeln!(
        out,
        "  - Final gap to bottom: {}px",
        round_px(decomposition.final_gap)
    )?;
    writeln!(
        out,
        "  Total content height: {}px",
        round_px(decomposition.reconstructed_content_height())
    )?;
    if !decomposition.is_reconciled(HEIGHT_TOLERANCE) {
        writeln!(
            out,
            "  Residual vs measured content height: {}px",
            css_number(decomposition.residual())
        )?;
    }
    Ok(())
}
