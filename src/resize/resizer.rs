//! The nine-slice resizer.

use image::{imageops, GenericImageView, ImageBuffer, Pixel};
use tracing::debug;

use super::mode::{DestSize, GrowthMode, ResampleFilter};
use super::plan::ResizePlan;
use super::scale::scale_regions;
use super::tile::tile_regions;
use super::Canvas;
use crate::error::ResizeError;
use crate::grid::{CapInsets, Region};

// =============================================================================
// Nine-Slice Resizer
// =============================================================================

/// Resizes images while keeping their corner caps intact.
///
/// The resizer itself is stateless apart from the resampling filter used in
/// [`GrowthMode::Scale`]; it can be shared freely between threads.
///
/// # Example
///
/// ```
/// use capresize::{CapInsets, DestSize, GrowthMode, NineSliceResizer};
/// use image::{Rgba, RgbaImage};
///
/// let source = RgbaImage::from_pixel(13, 13, Rgba([10, 20, 30, 255]));
/// let resizer = NineSliceResizer::new();
///
/// let output = resizer
///     .resize(&source, DestSize::new(25, 40), None, GrowthMode::Scale)
///     .unwrap();
/// assert_eq!(output.dimensions(), (25, 40));
///
/// let tiled = resizer
///     .resize(&source, DestSize::new(50, 0), Some(CapInsets::symmetric(4, 4)), GrowthMode::Tile)
///     .unwrap();
/// assert_eq!(tiled.dimensions(), (50, 50));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NineSliceResizer {
    filter: ResampleFilter,
}

impl NineSliceResizer {
    /// Create a resizer with the default (triangle) resampling filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `filter` when scaling growable regions.
    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn filter(&self) -> ResampleFilter {
        self.filter
    }

    /// Validate a resize of `source` without rendering it.
    pub fn plan<I>(
        &self,
        source: &I,
        dest: DestSize,
        insets: Option<CapInsets>,
        mode: GrowthMode,
    ) -> Result<ResizePlan, ResizeError>
    where
        I: GenericImageView,
    {
        ResizePlan::new(source.dimensions(), dest, insets, mode)
    }

    /// Resize `source` to `dest`.
    ///
    /// # Arguments
    ///
    /// * `source` - The source image; only read, never modified
    /// * `dest` - Destination size; a height of 0 keeps the aspect ratio
    /// * `insets` - Cap insets; `None` derives them from an odd-sized source
    /// * `mode` - How the edges and center grow
    ///
    /// # Errors
    ///
    /// Any invalid combination of inputs is reported before rendering starts;
    /// see [`ResizePlan::new`].
    pub fn resize<I, P>(
        &self,
        source: &I,
        dest: DestSize,
        insets: Option<CapInsets>,
        mode: GrowthMode,
    ) -> Result<Canvas<P>, ResizeError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel + 'static,
        P::Subpixel: 'static,
    {
        let plan = self.plan(source, dest, insets, mode)?;
        self.render(source, &plan)
    }

    /// Render a previously validated plan.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidArgument`] if `source` does not have the
    /// size the plan was made for.
    pub fn render<I, P>(&self, source: &I, plan: &ResizePlan) -> Result<Canvas<P>, ResizeError>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel + 'static,
        P::Subpixel: 'static,
    {
        if source.dimensions() != plan.source_size() {
            let (pw, ph) = plan.source_size();
            let (sw, sh) = source.dimensions();
            return Err(ResizeError::InvalidArgument(format!(
                "plan was made for a {}x{} source, got {}x{}",
                pw, ph, sw, sh
            )));
        }

        let (sw, sh) = plan.source_size();
        let (dw, dh) = plan.dest_size();
        debug!(
            "Resizing {}x{} -> {}x{} (caps {}, mode {}, filter {})",
            sw,
            sh,
            dw,
            dh,
            plan.insets(),
            plan.mode(),
            self.filter
        );

        let mut dest: Canvas<P> = ImageBuffer::new(dw, dh);

        let (source_grid, dest_grid) = (plan.source_grid(), plan.dest_grid());
        for corner in Region::CORNERS {
            let src = source_grid.rect(corner);
            let dst = dest_grid.rect(corner);
            if src.is_empty() {
                continue;
            }
            let view = source.view(src.x, src.y, src.width, src.height);
            imageops::replace(&mut dest, &*view, i64::from(dst.x), i64::from(dst.y));
        }

        match plan.mode() {
            GrowthMode::Scale => scale_regions(
                &mut dest,
                source,
                source_grid,
                dest_grid,
                self.filter.filter_type(),
            ),
            GrowthMode::Tile => {
                let layout = plan.tiling();
                debug!(
                    "Tiling {}+{}px across, {}+{}px down",
                    layout.across.count,
                    layout.across.remainder,
                    layout.down.count,
                    layout.down.remainder
                );
                tile_regions(&mut dest, source, source_grid, dest_grid, layout);
            }
        }

        Ok(dest)
    }
}

/// Resize `source` with the default [`NineSliceResizer`].
///
/// Shorthand for `NineSliceResizer::new().resize(source, dest, insets, mode)`.
pub fn resize_with_caps<I, P>(
    source: &I,
    dest: impl Into<DestSize>,
    insets: Option<CapInsets>,
    mode: GrowthMode,
) -> Result<Canvas<P>, ResizeError>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    NineSliceResizer::new().resize(source, dest.into(), insets, mode)
}
