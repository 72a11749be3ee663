//! Cap insets: the fixed border thickness on each side of a nine-slice image.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ResizeError;

/// Thickness of the unscaled caps on each side of the source image.
///
/// Left and right insets are the widths of the left and right columns of the
/// grid; top and bottom insets are the heights of the top and bottom rows.
///
/// # Example
///
/// ```
/// use capresize::CapInsets;
///
/// let insets: CapInsets = "1,6,1,4".parse().unwrap();
/// assert_eq!(insets, CapInsets::new(1, 6, 1, 4));
///
/// let symmetric: CapInsets = "24,24".parse().unwrap();
/// assert_eq!(symmetric, CapInsets::symmetric(24, 24));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct CapInsets {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CapInsets {
    /// Create insets with an independent value per side.
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create insets where opposing sides share a value.
    ///
    /// `cap_width` applies to the left and right caps, `cap_height` to the
    /// top and bottom caps.
    pub const fn symmetric(cap_width: u32, cap_height: u32) -> Self {
        Self::new(cap_width, cap_height, cap_width, cap_height)
    }

    /// Derive insets for a source whose stretchable part is a single pixel.
    ///
    /// Both dimensions must be odd; the caps are then `width / 2` and
    /// `height / 2`, leaving a 1x1 center.
    ///
    /// # Errors
    ///
    /// Returns [`ResizeError::InvalidCapSize`] if either dimension is even.
    pub fn derive(width: u32, height: u32) -> Result<Self, ResizeError> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(ResizeError::cap(format!(
                "cannot derive caps from {}x{} source: width and height must both be odd",
                width, height
            )));
        }
        Ok(Self::symmetric(width / 2, height / 2))
    }

    /// Combined width of the left and right caps.
    #[inline]
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Combined height of the top and bottom caps.
    #[inline]
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }

    /// Whether opposing sides carry the same inset.
    pub fn is_symmetric(&self) -> bool {
        self.left == self.right && self.top == self.bottom
    }
}

impl fmt::Display for CapInsets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.left, self.top, self.right, self.bottom
        )
    }
}

impl FromStr for CapInsets {
    type Err = ResizeError;

    /// Parse `"cw,ch"` (symmetric) or `"left,top,right,bottom"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let values = s
            .split(',')
            .map(|part| {
                part.trim().parse::<u32>().map_err(|_| {
                    ResizeError::InvalidArgument(format!(
                        "cap inset {:?} is not a non-negative integer",
                        part.trim()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        match values.as_slice() {
            [cw, ch] => Ok(Self::symmetric(*cw, *ch)),
            [left, top, right, bottom] => Ok(Self::new(*left, *top, *right, *bottom)),
            _ => Err(ResizeError::InvalidArgument(format!(
                "expected 2 or 4 comma-separated cap insets, got {:?}",
                s
            ))),
        }
    }
}
