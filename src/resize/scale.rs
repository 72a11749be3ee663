//! Scale growth: resample each growable region to its destination size.

use image::imageops::{self, FilterType};
use image::{GenericImageView, Pixel};

use super::Canvas;
use crate::grid::{NineGrid, Region};

/// Fill the five growable regions of `dest` by resampling the matching
/// regions of `source`.
///
/// Regions that already have their destination size are copied verbatim,
/// so an identity resize reproduces the source exactly. Empty destination
/// regions are skipped.
pub(crate) fn scale_regions<I, P>(
    dest: &mut Canvas<P>,
    source: &I,
    source_grid: &NineGrid,
    dest_grid: &NineGrid,
    filter: FilterType,
) where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    for region in Region::GROWABLE {
        let src = source_grid.rect(region);
        let dst = dest_grid.rect(region);
        if dst.is_empty() {
            continue;
        }

        let view = source.view(src.x, src.y, src.width, src.height);
        let (x, y) = (i64::from(dst.x), i64::from(dst.y));

        if (src.width, src.height) == (dst.width, dst.height) {
            imageops::replace(dest, &*view, x, y);
        } else {
            let scaled = imageops::resize(&*view, dst.width, dst.height, filter);
            imageops::replace(dest, &scaled, x, y);
        }
    }
}
