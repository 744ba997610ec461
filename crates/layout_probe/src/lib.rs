//! Capture a page's layout and report its box model.
//!
//! [`run`] obtains a [`DocumentSnapshot`] (from headless Chromium or a saved
//! file), optionally saves it, and renders the configured report sections.

pub mod chromium;
pub mod config;
pub mod snapshot_file;

use anyhow::{Result, anyhow, bail};
use box_metrics::{DocumentSnapshot, LayoutQuery};
use box_report::{ReportRequest, render};
use log::{debug, info};

pub use config::{ProbeConfig, ProbeInput, USAGE};

/// Capture (or load) the configured input and render its report.
///
/// # Errors
///
/// Returns an error if no input is configured, the snapshot cannot be obtained
/// or saved, or rendering fails. Elements missing from the page are reported,
/// not errors.
pub fn run(config: &ProbeConfig) -> Result<String> {
    let snapshot = obtain_snapshot(config)?;
    info!(
        "[PROBE] snapshot holds {} elements",
        snapshot.elements.len()
    );
    if let Some(path) = &config.save_snapshot {
        snapshot_file::save_snapshot(path, &snapshot)?;
        info!("[PROBE] saved snapshot to {}", path.display());
    }
    report(&snapshot, config)
}

/// Render the configured sections over any layout host.
///
/// # Errors
///
/// Returns an error only if formatting fails.
pub fn report<Q: LayoutQuery>(query: &Q, config: &ProbeConfig) -> Result<String> {
    for tag in config.tags.iter().chain([&config.container]) {
        if query.lookup(tag).is_none() {
            info!("[PROBE] <{tag}> not found");
        }
    }
    let request = ReportRequest {
        tags: &config.tags,
        container: &config.container,
        sections: &config.sections,
    };
    render(query, &request).map_err(|err| anyhow!("failed to format report: {err}"))
}

fn obtain_snapshot(config: &ProbeConfig) -> Result<DocumentSnapshot> {
    match &config.input {
        Some(ProbeInput::Html(page)) => {
            debug!("[PROBE] capturing {} in Chromium", page.display());
            chromium::capture_snapshot(page, config)
        }
        Some(ProbeInput::Snapshot(path)) => {
            debug!("[PROBE] loading snapshot {}", path.display());
            snapshot_file::load_snapshot(path)
        }
        None => bail!("no input given; pass an HTML file or --snapshot <file.json>"),
    }
}
