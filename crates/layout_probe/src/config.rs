//! Configuration for a probe run.
//!
//! Defaults are overridden by environment variables, which are overridden by
//! command-line arguments:
//!
//! | setting       | env var                  | flag                 | default                  |
//! |---------------|--------------------------|----------------------|--------------------------|
//! | element tags  | `LAYOUT_PROBE_TAGS`      | `--tags a,b`         | `html,body,h1,p,h3,form` |
//! | container     | `LAYOUT_PROBE_CONTAINER` | `--container t`      | `body`                   |
//! | window size   | `LAYOUT_PROBE_WINDOW`    | `--window WxH`       | `800x600`                |
//! | Chrome binary | `CHROME_BIN`             | `--chrome path`      | auto-detected            |
//! | sections      |                          | `--only a,b`         | all                      |
//! | snapshot dump |                          | `--save-snapshot p`  | none                     |
//! | input         |                          | `page.html` or `--snapshot p.json` | required   |

use anyhow::{Result, anyhow, bail};
use box_report::Section;
use log::warn;
use std::env;
use std::path::PathBuf;

/// Elements measured when none are configured.
pub const DEFAULT_TAGS: [&str; 6] = ["html", "body", "h1", "p", "h3", "form"];

/// Container decomposed when none is configured.
pub const DEFAULT_CONTAINER: &str = "body";

/// Browser window size when none is configured.
pub const DEFAULT_WINDOW: (u32, u32) = (800, 600);

/// Command-line help.
pub const USAGE: &str = "\
Usage:
  layout_probe [OPTIONS] <page.html>
  layout_probe [OPTIONS] --snapshot <snapshot.json>

Options:
  --tags <a,b,...>         elements to measure (default: html,body,h1,p,h3,form)
  --container <tag>        container for the height breakdown (default: body)
  --window <WxH>           browser window size (default: 800x600)
  --chrome <path>          Chrome/Chromium executable
  --only <section,...>     elements, fixtures, height, viewport (default: all)
  --save-snapshot <path>   write the captured layout snapshot as JSON
  -h, --help               show this help";

/// Where the layout snapshot comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeInput {
    /// Load this HTML file in headless Chromium.
    Html(PathBuf),
    /// Read a previously saved snapshot.
    Snapshot(PathBuf),
}

/// Settings for one probe run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Snapshot source; required by [`crate::run`].
    pub input: Option<ProbeInput>,
    /// Element tags to measure, in report order.
    pub tags: Vec<String>,
    /// Container tag for the height breakdown.
    pub container: String,
    /// Browser window size in CSS pixels.
    pub window_size: (u32, u32),
    /// Explicit browser executable.
    pub chrome_bin: Option<PathBuf>,
    /// Report sections, in output order.
    pub sections: Vec<Section>,
    /// Where to write the captured snapshot.
    pub save_snapshot: Option<PathBuf>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            input: None,
            tags: DEFAULT_TAGS.iter().map(|tag| (*tag).to_owned()).collect(),
            container: DEFAULT_CONTAINER.to_owned(),
            window_size: DEFAULT_WINDOW,
            chrome_bin: None,
            sections: Section::ALL.to_vec(),
            save_snapshot: None,
        }
    }
}

impl ProbeConfig {
    /// Defaults overridden by the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Defaults overridden by `lookup(name)` for each variable.
    ///
    /// Unparsable values are ignored with a warning.
    #[must_use]
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let mut config = Self::default();
        if let Some(tags) = lookup("LAYOUT_PROBE_TAGS").map(|raw| parse_tags(&raw))
            && !tags.is_empty()
        {
            config.tags = tags;
        }
        if let Some(container) = lookup("LAYOUT_PROBE_CONTAINER")
            && !container.trim().is_empty()
        {
            container.trim().clone_into(&mut config.container);
        }
        if let Some(raw) = lookup("LAYOUT_PROBE_WINDOW") {
            match parse_window(&raw) {
                Some(size) => config.window_size = size,
                None => warn!("[PROBE] ignoring LAYOUT_PROBE_WINDOW={raw:?}, expected WxH"),
            }
        }
        config.chrome_bin = lookup("CHROME_BIN")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);
        config
    }

    /// Apply command-line arguments (without the program name).
    ///
    /// Flags accept `--flag value` and `--flag=value`. A bare argument is the
    /// HTML input.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown flags, missing or malformed values, and
    /// more than one input.
    pub fn apply_args<I: IntoIterator<Item = String>>(mut self, args: I) -> Result<Self> {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let (flag, inline_value) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag.to_owned(), Some(value.to_owned())),
                _ => (arg.clone(), None),
            };
            if !flag.starts_with("--") {
                self.set_input(ProbeInput::Html(PathBuf::from(arg)))?;
                continue;
            }
            let mut value = || {
                inline_value
                    .clone()
                    .or_else(|| args.next())
                    .ok_or_else(|| anyhow!("{flag} requires a value"))
            };
            match flag.as_str() {
                "--tags" => {
                    let tags = parse_tags(&value()?);
                    if tags.is_empty() {
                        bail!("--tags needs at least one tag");
                    }
                    self.tags = tags;
                }
                "--container" => {
                    let container = value()?;
                    if container.trim().is_empty() {
                        bail!("--container needs a tag");
                    }
                    container.trim().clone_into(&mut self.container);
                }
                "--window" => {
                    let raw = value()?;
                    self.window_size = parse_window(&raw)
                        .ok_or_else(|| anyhow!("--window expects WxH, got {raw:?}"))?;
                }
                "--chrome" => self.chrome_bin = Some(PathBuf::from(value()?)),
                "--only" => self.sections = parse_sections(&value()?)?,
                "--snapshot" => self.set_input(ProbeInput::Snapshot(PathBuf::from(value()?)))?,
                "--save-snapshot" => self.save_snapshot = Some(PathBuf::from(value()?)),
                _ => bail!("unknown option {flag}"),
            }
        }
        Ok(self)
    }

    fn set_input(&mut self, input: ProbeInput) -> Result<()> {
        if let Some(existing) = &self.input {
            bail!("more than one input given: {existing:?} and {input:?}");
        }
        self.input = Some(input);
        Ok(())
    }
}

/// `"h1, p,,H3"` → `["h1", "p", "h3"]`.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// `"1024x768"` → `(1024, 768)`. Both sides must be positive.
#[must_use]
pub fn parse_window(raw: &str) -> Option<(u32, u32)> {
    let (width, height) = raw.trim().split_once(['x', 'X'])?;
    let width = width.trim().parse::<u32>().ok().filter(|value| *value > 0)?;
    let height = height.trim().parse::<u32>().ok().filter(|value| *value > 0)?;
    Some((width, height))
}

/// `"fixtures,height"` → sections in the given order, duplicates dropped.
///
/// # Errors
///
/// Returns an error naming the first unknown section, or when the list is empty.
pub fn parse_sections(raw: &str) -> Result<Vec<Section>> {
    let mut sections = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|name| !name.is_empty()) {
        let section = Section::parse(name).ok_or_else(|| {
            anyhow!("unknown section {name:?}; expected elements, fixtures, height or viewport")
        })?;
        if !sections.contains(&section) {
            sections.push(section);
        }
    }
    if sections.is_empty() {
        bail!("--only needs at least one section");
    }
    Ok(sections)
}
