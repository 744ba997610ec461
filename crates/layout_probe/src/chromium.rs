//! Headless Chromium as the layout host.
//!
//! The page is loaded once and every element's rectangle, computed style,
//! first text node and children are read in a single script evaluation, so the
//! resulting [`DocumentSnapshot`] reflects exactly one layout.

use anyhow::{Context as _, Result, anyhow};
use box_metrics::DocumentSnapshot;
use headless_chrome::{Browser, LaunchOptionsBuilder};
use log::{debug, info};
use serde_json::Value;
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::config::ProbeConfig;

/// Returns a JSON string shaped like [`DocumentSnapshot`].
pub const EXTRACTION_SCRIPT: &str = r"
(function(){
  var all = document.getElementsByTagName('*');
  var index = new Map();
  for (var i = 0; i < all.length; i++) { index.set(all[i], i); }
  function rectOf(r){ return { top: r.top, left: r.left, width: r.width, height: r.height }; }
  function edges(cs, prefix, suffix){
    return {
      top: cs.getPropertyValue(prefix + 'top' + suffix),
      right: cs.getPropertyValue(prefix + 'right' + suffix),
      bottom: cs.getPropertyValue(prefix + 'bottom' + suffix),
      left: cs.getPropertyValue(prefix + 'left' + suffix)
    };
  }
  function firstText(el){
    var node = el.childNodes[0];
    if (!node || node.nodeType !== Node.TEXT_NODE || !node.textContent.trim()) { return null; }
    var range = document.createRange();
    range.selectNodeContents(node);
    return { text: node.textContent, rect: rectOf(range.getBoundingClientRect()) };
  }
  var elements = [];
  for (var j = 0; j < all.length; j++) {
    var el = all[j];
    var cs = getComputedStyle(el);
    var kids = [];
    for (var k = 0; k < el.children.length; k++) {
      var id = index.get(el.children[k]);
      if (id !== undefined) { kids.push(id); }
    }
    elements.push({
      tag: el.tagName,
      rect: rectOf(el.getBoundingClientRect()),
      style: {
        margin: edges(cs, 'margin-', ''),
        padding: edges(cs, 'padding-', ''),
        borderWidth: edges(cs, 'border-', '-width'),
        fontSize: cs.fontSize,
        lineHeight: cs.lineHeight,
        display: cs.display,
        boxSizing: cs.boxSizing
      },
      firstText: firstText(el),
      children: kids
    });
  }
  var root = document.documentElement;
  return JSON.stringify({
    viewport: {
      innerWidth: window.innerWidth,
      innerHeight: window.innerHeight,
      scrollWidth: root ? root.scrollWidth : 0,
      scrollHeight: root ? root.scrollHeight : 0
    },
    elements: elements
  });
})();
";

/// Load `page` in headless Chromium and capture its layout.
///
/// # Errors
///
/// Returns an error if the browser cannot be launched, the page cannot be
/// loaded, or the capture cannot be decoded.
pub fn capture_snapshot(page: &Path, config: &ProbeConfig) -> Result<DocumentSnapshot> {
    let launch_opts = LaunchOptionsBuilder::default()
        .headless(true)
        .sandbox(false)
        .window_size(Some(config.window_size))
        .path(config.chrome_bin.clone())
        .idle_browser_timeout(Duration::from_secs(60))
        .args(vec![
            OsStr::new("--force-device-scale-factor=1"),
            OsStr::new("--disable-features=OverlayScrollbar"),
            OsStr::new("--allow-file-access-from-files"),
            OsStr::new("--disable-gpu"),
            OsStr::new("--disable-dev-shm-usage"),
            OsStr::new("--disable-extensions"),
            OsStr::new("--disable-background-networking"),
            OsStr::new("--disable-sync"),
            OsStr::new("--hide-scrollbars"),
        ])
        .build()
        .map_err(|err| anyhow!("invalid Chromium launch options: {err}"))?;
    let browser = Browser::new(launch_opts).context("failed to launch headless Chromium")?;
    let tab = browser.new_tab()?;

    let canonical = page
        .canonicalize()
        .with_context(|| format!("cannot open {}", page.display()))?;
    let url = Url::from_file_path(&canonical)
        .map_err(|()| anyhow!("not a file path: {}", canonical.display()))?;
    info!("[CHROME] loading {url}");
    tab.navigate_to(url.as_str())?;
    tab.wait_until_navigated()?;

    let result = tab.evaluate(EXTRACTION_SCRIPT, false)?;
    match result.value {
        Some(Value::String(json)) => {
            debug!("[CHROME] captured {} bytes of layout", json.len());
            snapshot_from_json(&json)
        }
        other => Err(anyhow!(
            "layout capture returned {other:?} instead of a JSON string for {url}"
        )),
    }
}

/// Decode the string produced by [`EXTRACTION_SCRIPT`].
///
/// # Errors
///
/// Returns an error if `json` is not a snapshot.
pub fn snapshot_from_json(json: &str) -> Result<DocumentSnapshot> {
    serde_json::from_str(json).context("malformed layout snapshot")
}
