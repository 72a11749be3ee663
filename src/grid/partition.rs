//! The 3x3 partition of an image given its cap insets.
//!
//! ```text
//!   A B C
//!   D E F
//!   G H I
//! ```
//!
//! A, C, G and I are the corners and are never resized. B and H grow
//! horizontally, D and F grow vertically, and E grows in both directions.

use serde::Serialize;

use super::insets::CapInsets;
use crate::error::ResizeError;

/// An axis-aligned pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Whether the pixel `(px, py)` lies inside the rectangle.
    #[inline]
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x
            && py >= self.y
            && u64::from(px) < u64::from(self.x) + u64::from(self.width)
            && u64::from(py) < u64::from(self.y) + u64::from(self.height)
    }
}

/// One of the nine cells of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Region {
    /// All regions in row-major order.
    pub const ALL: [Region; 9] = [
        Region::TopLeft,
        Region::Top,
        Region::TopRight,
        Region::Left,
        Region::Center,
        Region::Right,
        Region::BottomLeft,
        Region::Bottom,
        Region::BottomRight,
    ];

    pub const CORNERS: [Region; 4] = [
        Region::TopLeft,
        Region::TopRight,
        Region::BottomLeft,
        Region::BottomRight,
    ];

    /// The five regions that grow with the destination.
    pub const GROWABLE: [Region; 5] = [
        Region::Top,
        Region::Left,
        Region::Center,
        Region::Right,
        Region::Bottom,
    ];

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    /// Whether the region grows horizontally with the destination width.
    pub fn grows_horizontally(self) -> bool {
        matches!(self, Region::Top | Region::Center | Region::Bottom)
    }

    /// Whether the region grows vertically with the destination height.
    pub fn grows_vertically(self) -> bool {
        matches!(self, Region::Left | Region::Center | Region::Right)
    }

    pub fn name(self) -> &'static str {
        match self {
            Region::TopLeft => "top_left",
            Region::Top => "top",
            Region::TopRight => "top_right",
            Region::Left => "left",
            Region::Center => "center",
            Region::Right => "right",
            Region::BottomLeft => "bottom_left",
            Region::Bottom => "bottom",
            Region::BottomRight => "bottom_right",
        }
    }
}

/// Nine-slice partition of a `width` x `height` image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NineGrid {
    width: u32,
    height: u32,
    insets: CapInsets,
}

impl NineGrid {
    /// Partition an image of the given size.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidCapSize`] if the caps on either axis are
    /// wider than the image itself.
    pub fn new(width: u32, height: u32, insets: CapInsets) -> Result<Self, ResizeError> {
        if insets.horizontal() > width {
            return Err(ResizeError::cap(format!(
                "left + right caps ({} + {}) exceed image width {}",
                insets.left, insets.right, width
            )));
        }
        if insets.vertical() > height {
            return Err(ResizeError::cap(format!(
                "top + bottom caps ({} + {}) exceed image height {}",
                insets.top, insets.bottom, height
            )));
        }
        Ok(Self {
            width,
            height,
            insets,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn insets(&self) -> CapInsets {
        self.insets
    }

    /// Width of the horizontally growable middle column.
    #[inline]
    pub fn middle_width(&self) -> u32 {
        self.width - self.insets.horizontal()
    }

    /// Height of the vertically growable middle row.
    #[inline]
    pub fn middle_height(&self) -> u32 {
        self.height - self.insets.vertical()
    }

    /// Rectangle covered by `region`.
    pub fn rect(&self, region: Region) -> Rect {
        let CapInsets {
            left,
            top,
            right,
            bottom,
        } = self.insets;
        let mw = self.middle_width();
        let mh = self.middle_height();
        let right_x = self.width - right;
        let bottom_y = self.height - bottom;

        match region {
            Region::TopLeft => Rect::new(0, 0, left, top),
            Region::Top => Rect::new(left, 0, mw, top),
            Region::TopRight => Rect::new(right_x, 0, right, top),
            Region::Left => Rect::new(0, top, left, mh),
            Region::Center => Rect::new(left, top, mw, mh),
            Region::Right => Rect::new(right_x, top, right, mh),
            Region::BottomLeft => Rect::new(0, bottom_y, left, bottom),
            Region::Bottom => Rect::new(left, bottom_y, mw, bottom),
            Region::BottomRight => Rect::new(right_x, bottom_y, right, bottom),
        }
    }

    /// Iterate over `(region, rect)` pairs in row-major order.
    pub fn regions(&self) -> impl Iterator<Item = (Region, Rect)> + '_ {
        Region::ALL.iter().map(move |&region| (region, self.rect(region)))
    }
}
