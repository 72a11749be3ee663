use thiserror::Error;

/// Errors that can occur when planning or performing a nine-slice resize.
///
/// Every variant is detected before any destination pixel is written, so a
/// failed call never yields a partially rendered image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// Cap insets cannot be derived or do not fit the source image
    #[error("Invalid cap size: {reason}")]
    InvalidCapSize { reason: String },

    /// Destination is empty or smaller than the caps it must hold
    #[error("Invalid destination size {width}x{height}: {reason}")]
    InvalidDestinationSize {
        width: u32,
        height: u32,
        reason: String,
    },

    /// Growth mode text is not one of `scale`, `stretch` or `tile`
    #[error("Unsupported growth mode: {0:?} (expected scale, stretch or tile)")]
    UnsupportedGrowthMode(String),

    /// A size or inset argument could not be parsed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ResizeError {
    pub(crate) fn cap(reason: impl Into<String>) -> Self {
        ResizeError::InvalidCapSize {
            reason: reason.into(),
        }
    }

    pub(crate) fn destination(width: u32, height: u32, reason: impl Into<String>) -> Self {
        ResizeError::InvalidDestinationSize {
            width,
            height,
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when encoding a resized image
#[derive(Debug, Clone, Error)]
pub enum EncodeError {
    /// The underlying codec rejected the image
    #[error("Failed to encode {format} image: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// Output path has an extension we cannot write
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),
}
