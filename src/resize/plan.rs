//! Validation and geometry for a single resize call.
//!
//! All optional inputs (cap insets, destination height) are resolved here,
//! once, before any pixel is touched. A [`ResizePlan`] that exists is a
//! resize that will succeed.

use serde::Serialize;

use super::mode::{DestSize, GrowthMode};
use crate::error::ResizeError;
use crate::grid::{CapInsets, NineGrid, Rect, Region};

// =============================================================================
// Axis Tiling
// =============================================================================

/// How a tile of length `tile` is repeated over a span along one axis.
///
/// The span is covered by `count` full tiles laid end to end, followed by one
/// partial tile of `remainder` pixels when the span is not an exact multiple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AxisTiling {
    pub tile: u32,
    pub count: u32,
    pub remainder: u32,
}

impl AxisTiling {
    /// Lay out tiles of length `tile` over `span` pixels.
    ///
    /// `tile` must be non-zero; the planner rejects zero-length tiles.
    pub(crate) fn new(span: u32, tile: u32) -> Self {
        debug_assert!(tile > 0, "tile length must be non-zero");
        let count = span / tile;
        Self {
            tile,
            count,
            remainder: span - count * tile,
        }
    }

    /// Total covered span.
    pub fn span(&self) -> u32 {
        self.count * self.tile + self.remainder
    }

    /// `(offset, length)` of every tile in order, the partial one last.
    pub fn segments(&self) -> impl Iterator<Item = (u32, u32)> {
        let AxisTiling {
            tile,
            count,
            remainder,
        } = *self;
        (0..count)
            .map(move |i| (i * tile, tile))
            .chain((remainder > 0).then_some((count * tile, remainder)))
    }
}

/// Where one grid cell is read from and written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionLayout {
    pub region: Region,
    pub source: Rect,
    pub dest: Rect,
}

/// Tile counts for both axes of the growable middle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileLayout {
    pub across: AxisTiling,
    pub down: AxisTiling,
}

// =============================================================================
// Resize Plan
// =============================================================================

/// A validated resize: resolved caps, destination size and both partitions.
///
/// Only [`ResizePlan::new`] and [`ResizePlan::with_mode`] build one, so every
/// plan has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResizePlan {
    mode: GrowthMode,
    source: NineGrid,
    dest: NineGrid,
}

impl ResizePlan {
    /// Validate inputs and resolve defaults.
    ///
    /// - Missing `insets` are derived from an odd-sized source.
    /// - A destination height of 0 becomes `trunc(sh * dw / sw)`.
    ///
    /// # Errors
    ///
    /// - [`ResizeError::InvalidCapSize`] if caps cannot be derived, exceed the
    ///   source, or leave a zero-sized middle that has to grow
    /// - [`ResizeError::InvalidDestinationSize`] if the width is 0 or the
    ///   destination cannot hold the caps
    pub fn new(
        source_size: (u32, u32),
        dest: DestSize,
        insets: Option<CapInsets>,
        mode: GrowthMode,
    ) -> Result<Self, ResizeError> {
        let (sw, sh) = source_size;

        let insets = match insets {
            Some(insets) => insets,
            None => CapInsets::derive(sw, sh)?,
        };
        let source = NineGrid::new(sw, sh, insets)?;

        let (dw, dh) = resolve_dest_size(source_size, dest)?;
        if dw < insets.horizontal() {
            return Err(ResizeError::destination(
                dw,
                dh,
                format!(
                    "width is smaller than left + right caps ({})",
                    insets.horizontal()
                ),
            ));
        }
        if dh < insets.vertical() {
            return Err(ResizeError::destination(
                dw,
                dh,
                format!(
                    "height is smaller than top + bottom caps ({})",
                    insets.vertical()
                ),
            ));
        }
        let dest = NineGrid::new(dw, dh, insets)?;

        let plan = Self { mode, source, dest };
        plan.check_growable()?;
        Ok(plan)
    }

    /// The same geometry grown with `mode` instead.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidCapSize`] if the source middle cannot
    /// grow in the new mode.
    pub fn with_mode(self, mode: GrowthMode) -> Result<Self, ResizeError> {
        let plan = Self { mode, ..self };
        plan.check_growable()?;
        Ok(plan)
    }

    /// Reject zero-sized source middles that cannot produce the destination.
    fn check_growable(&self) -> Result<(), ResizeError> {
        let (smw, smh) = (self.source.middle_width(), self.source.middle_height());
        let (dmw, dmh) = (self.dest.middle_width(), self.dest.middle_height());

        match self.mode {
            GrowthMode::Tile => {
                if smw == 0 || smh == 0 {
                    return Err(ResizeError::cap(format!(
                        "cannot tile a {}x{} source middle",
                        smw, smh
                    )));
                }
            }
            GrowthMode::Scale => {
                if smw == 0 && dmw > 0 {
                    return Err(ResizeError::cap(format!(
                        "cannot scale a zero-width source middle to width {}",
                        dmw
                    )));
                }
                if smh == 0 && dmh > 0 {
                    return Err(ResizeError::cap(format!(
                        "cannot scale a zero-height source middle to height {}",
                        dmh
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn mode(&self) -> GrowthMode {
        self.mode
    }

    /// Partition of the source image.
    pub fn source_grid(&self) -> &NineGrid {
        &self.source
    }

    /// Partition of the destination image.
    pub fn dest_grid(&self) -> &NineGrid {
        &self.dest
    }

    /// The resolved cap insets.
    pub fn insets(&self) -> CapInsets {
        self.source.insets()
    }

    /// Source `(width, height)`.
    pub fn source_size(&self) -> (u32, u32) {
        (self.source.width(), self.source.height())
    }

    /// Resolved destination `(width, height)`.
    pub fn dest_size(&self) -> (u32, u32) {
        (self.dest.width(), self.dest.height())
    }

    /// Source and destination rectangles of all nine cells, row-major.
    pub fn region_layouts(&self) -> Vec<RegionLayout> {
        Region::ALL
            .iter()
            .map(|&region| RegionLayout {
                region,
                source: self.source.rect(region),
                dest: self.dest.rect(region),
            })
            .collect()
    }

    /// Tile counts per axis, or `None` in scale mode.
    pub fn tile_layout(&self) -> Option<TileLayout> {
        match self.mode {
            GrowthMode::Scale => None,
            GrowthMode::Tile => Some(self.tiling()),
        }
    }

    /// Tile counts per axis. Only valid for a tile-mode plan, whose source
    /// middle is non-empty on both axes.
    pub(crate) fn tiling(&self) -> TileLayout {
        TileLayout {
            across: AxisTiling::new(self.dest.middle_width(), self.source.middle_width()),
            down: AxisTiling::new(self.dest.middle_height(), self.source.middle_height()),
        }
    }
}

/// Resolve the destination size, deriving the height from the aspect ratio
/// when it is 0.
fn resolve_dest_size(source: (u32, u32), dest: DestSize) -> Result<(u32, u32), ResizeError> {
    let (sw, sh) = source;

    if dest.width == 0 {
        return Err(ResizeError::destination(
            dest.width,
            dest.height,
            "width must be greater than 0",
        ));
    }
    if !dest.derives_height() {
        return Ok((dest.width, dest.height));
    }
    if sw == 0 {
        return Err(ResizeError::destination(
            dest.width,
            dest.height,
            "cannot derive height from a zero-width source",
        ));
    }

    // Truncation toward zero, as an integer cast of the real-valued ratio.
    let height = (f64::from(sh) * f64::from(dest.width) / f64::from(sw)).trunc();
    if height > f64::from(u32::MAX) {
        return Err(ResizeError::destination(
            dest.width,
            dest.height,
            format!("derived height {} does not fit in 32 bits", height),
        ));
    }
    Ok((dest.width, height as u32))
}
