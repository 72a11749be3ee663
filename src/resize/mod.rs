//! Nine-slice resizing.
//!
//! # Pipeline
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                    NineSliceResizer                       │
//! │                                                           │
//! │  1. ResizePlan::new     resolve caps + height, validate   │
//! │  2. corners             copied unscaled (A, C, G, I)      │
//! │  3. growable regions    B, D, E, F, H                     │
//! │        ├── Scale  →  imageops::resize per region          │
//! │        └── Tile   →  tile_along_axis, clipped remainder   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Components
//!
//! - [`NineSliceResizer`]: entry point, holds the resampling filter
//! - [`resize_with_caps`]: one-shot helper using the default resizer
//! - [`ResizePlan`]: validated geometry for one call, usable without rendering
//! - [`GrowthMode`], [`ResampleFilter`], [`DestSize`]: call parameters

mod mode;
mod plan;
mod resizer;
mod scale;
mod tile;

use image::{ImageBuffer, Pixel};

pub use mode::{DestSize, GrowthMode, ResampleFilter};
pub use plan::{AxisTiling, RegionLayout, ResizePlan, TileLayout};
pub use resizer::{resize_with_caps, NineSliceResizer};

/// Owned image produced by a resize, with the same pixel type as the source.
pub type Canvas<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
