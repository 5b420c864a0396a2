// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Assembler configuration. The defaults reproduce the classic jpg2pdf output
// byte for byte: A4 media box, every image stretched over the whole page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Jpg2PdfError, Result};

/// Values written into the document Info dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentInfo {
    pub creator: String,
    pub creation_date: String,
    pub author: String,
    pub producer: String,
    pub title: String,
    pub subject: String,
}

/// Layout and metadata settings for a `PdfAssembler`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblerConfig {
    /// Page `/MediaBox` in PDF points (llx, lly, urx, ury).
    pub media_box: [f64; 4],
    /// Horizontal scale of the image placement matrix, in points.
    pub image_width_pt: f64,
    /// Vertical scale of the image placement matrix, in points.
    pub image_height_pt: f64,
    /// Image `/ColorSpace` name, without the leading slash.
    pub color_space: String,
    /// Image `/BitsPerComponent`.
    pub bits_per_component: u8,
    pub info: DocumentInfo,
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            media_box: [0.0, 0.0, 596.0, 842.0],
            image_width_pt: 595.44,
            image_height_pt: 841.68,
            color_space: "DeviceRGB".into(),
            bits_per_component: 8,
            info: DocumentInfo::default(),
        }
    }
}

impl AssemblerConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            Jpg2PdfError::ReadInput {
                path: path.as_ref().to_path_buf(),
                source,
            }
        })?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would produce a broken document.
    pub fn validate(&self) -> Result<()> {
        let [llx, lly, urx, ury] = self.media_box;
        if self.media_box.iter().any(|v| !v.is_finite()) || urx <= llx || ury <= lly {
            return Err(Jpg2PdfError::Config(format!(
                "media box {:?} has no area",
                self.media_box
            )));
        }
        if !(self.image_width_pt > 0.0 && self.image_height_pt > 0.0)
            || !self.image_width_pt.is_finite()
            || !self.image_height_pt.is_finite()
        {
            return Err(Jpg2PdfError::Config(format!(
                "image extent {}x{} must be positive",
                self.image_width_pt, self.image_height_pt
            )));
        }
        if self.color_space.is_empty()
            || !self
                .color_space
                .chars()
                .all(|c| c.is_ascii_alphanumeric())
        {
            return Err(Jpg2PdfError::Config(format!(
                "invalid colour space name {:?}",
                self.color_space
            )));
        }
        if !matches!(self.bits_per_component, 1 | 2 | 4 | 8 | 16) {
            return Err(Jpg2PdfError::Config(format!(
                "bits per component must be 1, 2, 4, 8 or 16, got {}",
                self.bits_per_component
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(AssemblerConfig::default().validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: AssemblerConfig =
            serde_json::from_str(r#"{ "info": { "title": "Scans" } }"#).unwrap();
        assert_eq!(config.media_box, [0.0, 0.0, 596.0, 842.0]);
        assert_eq!(config.info.title, "Scans");
        assert!(config.info.author.is_empty());
    }

    #[test]
    fn degenerate_media_box_rejected() {
        let config = AssemblerConfig {
            media_box: [0.0, 0.0, 0.0, 842.0],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Jpg2PdfError::Config(_))));
    }

    #[test]
    fn bad_bits_per_component_rejected() {
        let config = AssemblerConfig {
            bits_per_component: 3,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn colour_space_must_be_a_bare_name() {
        let config = AssemblerConfig {
            color_space: "Device RGB".into(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "color_space": "DeviceGray" }"#).unwrap();

        let config = AssemblerConfig::from_json_file(&path).unwrap();
        assert_eq!(config.color_space, "DeviceGray");
        assert_eq!(config.bits_per_component, 8);
    }
}
