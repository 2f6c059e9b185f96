//! Run configuration: output directory, font preference and the list of target images.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::core::Canvas;
use crate::foundation::error::{StoreartError, StoreartResult};
use crate::text::font::FontPreference;

/// One image to produce.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputTarget {
    /// File stem; the image is written to `<out_dir>/<name>.png`.
    pub name: String,
    /// Pixel width.
    pub width: u32,
    /// Pixel height.
    pub height: u32,
}

impl OutputTarget {
    /// Construct a target.
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }

    /// Validated canvas for this target.
    pub fn canvas(&self) -> StoreartResult<Canvas> {
        Canvas::new(self.width, self.height).map_err(|e| match e {
            StoreartError::Validation(msg) => {
                StoreartError::validation(format!("target '{}': {msg}", self.name))
            }
            other => other,
        })
    }

    /// Output file name.
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

/// The three store listing sizes.
pub fn default_targets() -> Vec<OutputTarget> {
    vec![
        OutputTarget::new("small", 250, 175),
        OutputTarget::new("large", 500, 350),
        OutputTarget::new("xlarge", 1000, 700),
    ]
}

/// Complete run configuration. Every field is optional in JSON.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory the PNG files are written to; created when missing.
    pub out_dir: PathBuf,
    /// Label font preference.
    pub font: FontPreference,
    /// Images to produce, in order.
    pub targets: Vec<OutputTarget>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            font: FontPreference::Auto,
            targets: default_targets(),
        }
    }
}

impl RenderConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> StoreartResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| StoreartError::serde(format!("parse config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> StoreartResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            StoreartError::validation(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Check every target before anything is rendered.
    pub fn validate(&self) -> StoreartResult<()> {
        if self.targets.is_empty() {
            return Err(StoreartError::validation("config has no targets"));
        }
        let mut seen = HashSet::new();
        for t in &self.targets {
            if t.name.trim().is_empty() {
                return Err(StoreartError::validation("target name must not be empty"));
            }
            if t.name.contains(['/', '\\']) || t.name == "." || t.name == ".." {
                return Err(StoreartError::validation(format!(
                    "target name '{}' must be a plain file stem",
                    t.name
                )));
            }
            if !seen.insert(t.name.as_str()) {
                return Err(StoreartError::validation(format!(
                    "duplicate target name '{}'",
                    t.name
                )));
            }
            t.canvas()?;
        }
        Ok(())
    }

    /// Keep only targets whose name is in `names`; an empty list keeps everything.
    pub fn retain_targets(&mut self, names: &[String]) -> StoreartResult<()> {
        if names.is_empty() {
            return Ok(());
        }
        if let Some(unknown) = names
            .iter()
            .find(|n| !self.targets.iter().any(|t| &t.name == *n))
        {
            return Err(StoreartError::validation(format!(
                "unknown target '{unknown}'"
            )));
        }
        self.targets.retain(|t| names.contains(&t.name));
        Ok(())
    }

    /// Path a target is written to.
    pub fn output_path(&self, target: &OutputTarget) -> PathBuf {
        self.out_dir.join(target.file_name())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
