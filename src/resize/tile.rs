//! Tile growth: unscaled repetition with a clipped final tile.

use image::{imageops, GenericImageView, Pixel};

use super::plan::{AxisTiling, TileLayout};
use super::Canvas;
use crate::grid::{NineGrid, Region};

/// Direction in which a tile is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

/// Repeat `tile` along `axis` starting at `origin` in `dest`.
///
/// Full tiles are copied unscaled and laid end to end; the last, partial
/// tile is cut from the tile's leading edge (offset 0 along the axis).
pub(crate) fn tile_along_axis<T, P>(
    dest: &mut Canvas<P>,
    tile: &T,
    axis: Axis,
    origin: (u32, u32),
    tiling: AxisTiling,
) where
    T: GenericImageView<Pixel = P>,
    P: Pixel,
{
    let (tw, th) = tile.dimensions();
    let (ox, oy) = origin;

    for (offset, length) in tiling.segments() {
        match axis {
            Axis::Horizontal => {
                let clip = tile.view(0, 0, length, th);
                imageops::replace(dest, &*clip, i64::from(ox + offset), i64::from(oy));
            }
            Axis::Vertical => {
                let clip = tile.view(0, 0, tw, length);
                imageops::replace(dest, &*clip, i64::from(ox), i64::from(oy + offset));
            }
        }
    }
}

/// Fill the five growable regions of `dest` by tiling the matching regions
/// of `source`.
pub(crate) fn tile_regions<I, P>(
    dest: &mut Canvas<P>,
    source: &I,
    source_grid: &NineGrid,
    dest_grid: &NineGrid,
    layout: TileLayout,
) where
    I: GenericImageView<Pixel = P>,
    P: Pixel,
{
    let view = move |region: Region| {
        let r = source_grid.rect(region);
        source.view(r.x, r.y, r.width, r.height)
    };
    let origin = move |region: Region| {
        let r = dest_grid.rect(region);
        (r.x, r.y)
    };

    tile_along_axis(
        dest,
        &*view(Region::Top),
        Axis::Horizontal,
        origin(Region::Top),
        layout.across,
    );
    tile_along_axis(
        dest,
        &*view(Region::Bottom),
        Axis::Horizontal,
        origin(Region::Bottom),
        layout.across,
    );
    tile_along_axis(
        dest,
        &*view(Region::Left),
        Axis::Vertical,
        origin(Region::Left),
        layout.down,
    );
    tile_along_axis(
        dest,
        &*view(Region::Right),
        Axis::Vertical,
        origin(Region::Right),
        layout.down,
    );

    // Center: each full or partial row is itself tiled horizontally.
    let center = view(Region::Center);
    let center = &*center;
    let (cx, cy) = origin(Region::Center);
    for (offset, height) in layout.down.segments() {
        let row = GenericImageView::view(center, 0, 0, center.width(), height);
        tile_along_axis(dest, &*row, Axis::Horizontal, (cx, cy + offset), layout.across);
    }
}
