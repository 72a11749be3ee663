//! Resize parameters: growth mode, resampling filter and destination size.

use std::fmt;
use std::str::FromStr;

use image::imageops::FilterType;
use serde::Serialize;

use crate::error::ResizeError;

/// How the five non-corner regions are enlarged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthMode {
    /// Resample each growable region to its destination size.
    Scale,
    /// Repeat each growable region unscaled, clipping the last repetition.
    Tile,
}

impl GrowthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GrowthMode::Scale => "scale",
            GrowthMode::Tile => "tile",
        }
    }
}

impl fmt::Display for GrowthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GrowthMode {
    type Err = ResizeError;

    /// Accepts `scale`, `stretch` (same as `scale`) and `tile`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scale" | "stretch" => Ok(GrowthMode::Scale),
            "tile" => Ok(GrowthMode::Tile),
            _ => Err(ResizeError::UnsupportedGrowthMode(s.to_string())),
        }
    }
}

/// Resampling filter used in [`GrowthMode::Scale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Nearest,
    /// Bilinear; smooth and cheap.
    #[default]
    Triangle,
    CatmullRom,
    Gaussian,
    Lanczos3,
}

impl ResampleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResampleFilter::Nearest => "nearest",
            ResampleFilter::Triangle => "triangle",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
            ResampleFilter::Lanczos3 => "lanczos3",
        }
    }

    pub(crate) fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResampleFilter {
    type Err = ResizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(ResampleFilter::Nearest),
            "triangle" | "bilinear" => Ok(ResampleFilter::Triangle),
            "catmull-rom" | "catmullrom" | "bicubic" => Ok(ResampleFilter::CatmullRom),
            "gaussian" => Ok(ResampleFilter::Gaussian),
            "lanczos3" | "lanczos" => Ok(ResampleFilter::Lanczos3),
            _ => Err(ResizeError::InvalidArgument(format!(
                "unknown resample filter {:?}",
                s
            ))),
        }
    }
}

/// Requested destination size.
///
/// A `height` of 0 means "keep the source aspect ratio"; the actual height is
/// resolved against the source when the resize is planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DestSize {
    pub width: u32,
    pub height: u32,
}

impl DestSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Destination with the given width and an aspect-derived height.
    pub const fn with_width(width: u32) -> Self {
        Self { width, height: 0 }
    }

    /// Whether the height is left for the planner to derive.
    pub fn derives_height(&self) -> bool {
        self.height == 0
    }
}

impl From<(u32, u32)> for DestSize {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

impl fmt::Display for DestSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for DestSize {
    type Err = ResizeError;

    /// Parse `"WxH"` or a bare `"W"` (aspect-derived height).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            part.trim().parse::<u32>().map_err(|_| {
                ResizeError::InvalidArgument(format!(
                    "destination size {:?} must be WIDTHxHEIGHT or WIDTH",
                    s
                ))
            })
        };

        match s.split_once(|c| c == 'x' || c == 'X') {
            Some((w, h)) => Ok(Self::new(parse(w)?, parse(h)?)),
            None => Ok(Self::with_width(parse(s)?)),
        }
    }
}
