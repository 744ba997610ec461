//! Snapshot persistence, so a capture can be measured again without a browser.

use anyhow::{Context as _, Result};
use box_metrics::DocumentSnapshot;
use std::fs;
use std::path::Path;

use crate::chromium::snapshot_from_json;

/// Read a snapshot written by [`save_snapshot`] (or captured by hand).
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a snapshot.
pub fn load_snapshot(path: &Path) -> Result<DocumentSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("cannot read snapshot {}", path.display()))?;
    snapshot_from_json(&json).with_context(|| format!("in {}", path.display()))
}

/// Write `snapshot` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save_snapshot(path: &Path, snapshot: &DocumentSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json).with_context(|| format!("cannot write snapshot {}", path.display()))
}
