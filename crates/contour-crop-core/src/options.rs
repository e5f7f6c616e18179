//! Per-call crop options.

use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::encode::{Encoding, DEFAULT_JPEG_QUALITY};

/// Which encoding the cropped image is written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JPEG input stays JPEG; everything else becomes PNG.
    #[default]
    MatchSource,
    Png,
    Jpeg,
}

/// Options for a single crop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Output encoding
    pub output_format: OutputFormat,
    /// JPEG quality (1 to 100), ignored for PNG output
    pub jpeg_quality: u8,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::MatchSource,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl CropOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the output encoding for an input of the given format.
    pub fn encoding_for(&self, source: Option<ImageFormat>) -> Encoding {
        let jpeg = Encoding::Jpeg {
            quality: self.jpeg_quality.clamp(1, 100),
        };
        match self.output_format {
            OutputFormat::Png => Encoding::Png,
            OutputFormat::Jpeg => jpeg,
            OutputFormat::MatchSource => match source {
                Some(ImageFormat::Jpeg) => jpeg,
                _ => Encoding::Png,
            },
        }
    }
}
