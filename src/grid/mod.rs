//! Nine-slice geometry.
//!
//! - [`CapInsets`]: fixed border thickness per side (symmetric or four-sided)
//! - [`NineGrid`]: the 3x3 partition of an image of a given size
//! - [`Region`]: names of the nine cells
//! - [`Rect`]: pixel rectangles produced by the partition

mod insets;
mod partition;

pub use insets::CapInsets;
pub use partition::{NineGrid, Rect, Region};
