use std::{fs::File, io::BufReader, path::Path, path::PathBuf};

use anyhow::Context;

use crate::{
    assets::decode::OutputFormat,
    foundation::error::{RetroSnapError, RetroSnapResult},
};

/// Default JPEG quality of exported composites.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Renderer settings. Every field has a default, so partial JSON files are accepted.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// JPEG quality in `1..=100`.
    pub jpeg_quality: u8,
    /// Container of the encoded composite.
    pub output_format: OutputFormat,
    /// Font file for the caption; overrides system discovery.
    pub caption_font: Option<PathBuf>,
    /// Font file for the date stamp; overrides system discovery.
    pub date_font: Option<PathBuf>,
    /// Look up installed fonts for roles without a configured file.
    pub system_fonts: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            output_format: OutputFormat::Jpeg,
            caption_font: None,
            date_font: None,
            system_fonts: true,
        }
    }
}

impl RenderConfig {
    /// Load a config from a JSON file.
    pub fn from_json_file(path: &Path) -> RetroSnapResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open render config '{}'", path.display()))?;
        let cfg: Self = serde_json::from_reader(BufReader::new(f))
            .with_context(|| format!("parse render config '{}'", path.display()))?;
        Ok(cfg)
    }

    /// Apply `RETROSNAP_CAPTION_FONT`, `RETROSNAP_DATE_FONT` and
    /// `RETROSNAP_JPEG_QUALITY`. Unparsable values are ignored.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(p) = var("RETROSNAP_CAPTION_FONT").filter(|v| !v.trim().is_empty()) {
            self.caption_font = Some(PathBuf::from(p));
        }
        if let Some(p) = var("RETROSNAP_DATE_FONT").filter(|v| !v.trim().is_empty()) {
            self.date_font = Some(PathBuf::from(p));
        }
        if let Some(q) = var("RETROSNAP_JPEG_QUALITY")
            .and_then(|v| v.trim().parse::<u8>().ok())
            .filter(|q| (1..=100).contains(q))
        {
            self.jpeg_quality = q;
        }
        self
    }

    /// Reject settings the encoder cannot honor.
    pub fn validate(&self) -> RetroSnapResult<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(RetroSnapError::validation(format!(
                "jpeg_quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        for (name, path) in [
            ("caption_font", &self.caption_font),
            ("date_font", &self.date_font),
        ] {
            if path.as_ref().is_some_and(|p| p.as_os_str().is_empty()) {
                return Err(RetroSnapError::validation(format!(
                    "{name} must not be an empty path"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/config.rs"]
mod tests;
