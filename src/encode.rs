//! Output encoding for resized images.
//!
//! Resized images are encoded to PNG (lossless, keeps alpha) or JPEG (alpha
//! dropped, quality-controlled). The format is normally chosen from the
//! output file extension.

use std::path::Path;

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageEncoder as _, RgbaImage};

use crate::error::EncodeError;

/// Default JPEG quality (1-100).
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Minimum allowed JPEG quality.
pub const MIN_JPEG_QUALITY: u8 = 1;

/// Maximum allowed JPEG quality.
pub const MAX_JPEG_QUALITY: u8 = 100;

// =============================================================================
// Output Format
// =============================================================================

/// Image container written by [`ImageEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Pick a format from a file extension (case-insensitive).
    ///
    /// Paths without an extension default to PNG.
    pub fn from_path(path: &Path) -> Result<Self, EncodeError> {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Ok(OutputFormat::Png);
        };
        match ext.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            other => Err(EncodeError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
        }
    }
}

// =============================================================================
// Encoder
// =============================================================================

/// Encodes RGBA images to PNG or JPEG bytes.
///
/// # Example
///
/// ```
/// use capresize::{ImageEncoder, OutputFormat};
/// use image::RgbaImage;
///
/// let encoder = ImageEncoder::new(OutputFormat::Png);
/// let bytes = encoder.encode(&RgbaImage::new(4, 4)).unwrap();
/// assert_eq!(&bytes[1..4], b"PNG");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ImageEncoder {
    format: OutputFormat,
    quality: u8,
}

impl Default for ImageEncoder {
    fn default() -> Self {
        Self::new(OutputFormat::Png)
    }
}

impl ImageEncoder {
    /// Create an encoder for `format` at the default JPEG quality.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Set the JPEG quality, clamped to 1-100. Ignored for PNG.
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = clamp_quality(quality);
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn quality(&self) -> u8 {
        self.quality
    }

    /// Encode `image` in the configured format.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Encode`] if the codec fails.
    pub fn encode(&self, image: &RgbaImage) -> Result<Bytes, EncodeError> {
        let mut output = Vec::new();
        let (width, height) = image.dimensions();

        match self.format {
            OutputFormat::Png => {
                PngEncoder::new(&mut output)
                    .write_image(image.as_raw(), width, height, image::ExtendedColorType::Rgba8)
                    .map_err(|e| self.error(e))?;
            }
            OutputFormat::Jpeg => {
                // JPEG has no alpha channel.
                let rgb = DynamicImage::ImageRgba8(image.clone()).into_rgb8();
                JpegEncoder::new_with_quality(&mut output, self.quality)
                    .encode_image(&rgb)
                    .map_err(|e| self.error(e))?;
            }
        }

        Ok(Bytes::from(output))
    }

    fn error(&self, err: image::ImageError) -> EncodeError {
        EncodeError::Encode {
            format: self.format.name(),
            message: err.to_string(),
        }
    }
}

/// Clamp quality to valid range.
///
/// Values below 1 become 1, values above 100 become 100.
#[inline]
pub fn clamp_quality(quality: u8) -> u8 {
    quality.clamp(MIN_JPEG_QUALITY, MAX_JPEG_QUALITY)
}
