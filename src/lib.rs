//! # capresize
//!
//! Nine-slice ("end-cap") image resizing.
//!
//! A source image is split into a 3x3 grid by its cap insets:
//!
//! ```text
//!   A B C
//!   D E F
//!   G H I
//! ```
//!
//! When the image is resized, the corners A, C, G and I are copied unscaled,
//! B and H grow horizontally, D and F grow vertically and E grows in both
//! directions. Growth is either continuous scaling or tiling, where the last
//! tile on each axis is clipped from the tile's leading edge. This keeps the
//! borders of UI chrome (buttons, panels, frames) crisp at any size.
//!
//! ## Architecture
//!
//! - [`grid`] - Cap insets and the nine-cell partition
//! - [`resize`] - Validation ([`ResizePlan`]) and the resizer itself
//! - [`encode`] - PNG/JPEG output encoding
//! - [`config`] - CLI configuration for the `capresize` binary
//! - [`error`] - Error types
//!
//! Pixel buffers, resampling and compositing come from the [`image`] crate;
//! any [`image::GenericImageView`] can be used as a source.
//!
//! ## Example
//!
//! ```
//! use capresize::{resize_with_caps, CapInsets, GrowthMode};
//! use image::{Rgba, RgbaImage};
//!
//! let button = RgbaImage::from_pixel(20, 16, Rgba([200, 200, 200, 255]));
//!
//! let caps = CapInsets::new(1, 6, 1, 4);
//! let wide = resize_with_caps(&button, (300, 40), Some(caps), GrowthMode::Scale).unwrap();
//! assert_eq!(wide.dimensions(), (300, 40));
//! ```

pub mod config;
pub mod encode;
pub mod error;
pub mod grid;
pub mod resize;

// Re-export commonly used types
pub use config::{Cli, Command, DemoConfig, InspectConfig, InspectFormat, ResizeConfig};
pub use encode::{
    clamp_quality, ImageEncoder, OutputFormat, DEFAULT_JPEG_QUALITY, MAX_JPEG_QUALITY,
    MIN_JPEG_QUALITY,
};
pub use error::{EncodeError, ResizeError};
pub use grid::{CapInsets, NineGrid, Rect, Region};
pub use resize::{
    resize_with_caps, AxisTiling, Canvas, DestSize, GrowthMode, NineSliceResizer, RegionLayout,
    ResampleFilter, ResizePlan, TileLayout,
};
