//! Command-line configuration for the `capresize` binary.
//!
//! Options are read from command-line arguments via clap, with environment
//! variables (`CAPRESIZE_` prefix) as fallback for the common ones:
//!
//! - `CAPRESIZE_CAPS` - Cap insets, `cw,ch` or `left,top,right,bottom`
//! - `CAPRESIZE_GROW` - Growth mode: scale, stretch or tile (default: scale)
//! - `CAPRESIZE_FILTER` - Resampling filter for scale mode (default: triangle)
//! - `CAPRESIZE_QUALITY` - JPEG quality for `.jpg` outputs (default: 90)
//!
//! # Example
//!
//! ```ignore
//! use capresize::config::{Cli, Command};
//! use clap::Parser;
//!
//! let cli = Cli::parse();
//! match cli.command {
//!     Command::Resize(config) => println!("{} -> {}", config.input.display(), config.size),
//!     _ => {}
//! }
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::encode::DEFAULT_JPEG_QUALITY;
use crate::grid::CapInsets;
use crate::resize::{DestSize, GrowthMode, ResampleFilter};

// =============================================================================
// Default Values
// =============================================================================

/// Default growth mode.
pub const DEFAULT_GROW: &str = "scale";

/// Default resampling filter.
pub const DEFAULT_FILTER: &str = "triangle";

/// Cap inset used for the demo template on every side.
pub const DEMO_TEMPLATE_CAP: u32 = 24;

/// Cap insets used for the demo button (left, top, right, bottom).
pub const DEMO_BUTTON_CAPS: CapInsets = CapInsets::new(1, 6, 1, 4);

/// Size the demo button is stretched to.
pub const DEMO_BUTTON_SIZE: DestSize = DestSize::new(450, 120);

// =============================================================================
// CLI Arguments
// =============================================================================

/// capresize - nine-slice image resizing.
///
/// Resizes images whose corners must stay crisp: the four corner caps are
/// copied unscaled while the edges and center are scaled or tiled.
#[derive(Parser, Debug, Clone)]
#[command(name = "capresize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resize a single image.
    Resize(ResizeConfig),

    /// Render the demo set (stretched and tiled template, stretched button).
    Demo(DemoConfig),

    /// Print the nine-slice layout of a resize without rendering it.
    Inspect(InspectConfig),
}

// =============================================================================
// Shared Options
// =============================================================================

/// Options shared by every command that performs a resize.
#[derive(Args, Debug, Clone)]
pub struct GrowthArgs {
    /// Cap insets: `cw,ch` or `left,top,right,bottom`.
    ///
    /// If omitted, the source width and height must be odd and the caps are
    /// half of each, leaving a 1x1 stretchable center.
    #[arg(long, env = "CAPRESIZE_CAPS")]
    pub caps: Option<CapInsets>,

    /// How edges and center grow: scale (alias stretch) or tile.
    #[arg(long, default_value = DEFAULT_GROW, env = "CAPRESIZE_GROW")]
    pub grow: GrowthMode,

    /// Resampling filter for scale mode.
    #[arg(long, default_value = DEFAULT_FILTER, env = "CAPRESIZE_FILTER")]
    pub filter: ResampleFilter,
}

// =============================================================================
// Resize Command
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct ResizeConfig {
    /// Source image path.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output image path (.png, .jpg or .jpeg).
    #[arg(short, long)]
    pub output: PathBuf,

    /// Destination size `WIDTHxHEIGHT`, or `WIDTH` to keep the aspect ratio.
    #[arg(short, long)]
    pub size: DestSize,

    #[command(flatten)]
    pub growth: GrowthArgs,

    /// JPEG quality (1-100) for JPEG outputs.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, env = "CAPRESIZE_QUALITY")]
    pub quality: u8,
}

impl ResizeConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.size.width == 0 {
            return Err("destination width must be greater than 0".to_string());
        }
        if self.quality == 0 || self.quality > 100 {
            return Err("quality must be between 1 and 100".to_string());
        }
        if self.input == self.output {
            return Err("output path must differ from input path".to_string());
        }
        Ok(())
    }
}

// =============================================================================
// Demo Command
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct DemoConfig {
    /// Template image with 24px caps on every side.
    #[arg(long)]
    pub template: PathBuf,

    /// Optional text-field/button image with caps (1, 6, 1, 4).
    #[arg(long)]
    pub button: Option<PathBuf>,

    /// Directory the rendered PNGs are written to (created if missing).
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Resampling filter for the stretched renders.
    #[arg(long, default_value = DEFAULT_FILTER, env = "CAPRESIZE_FILTER")]
    pub filter: ResampleFilter,
}

impl DemoConfig {
    /// The template renders: `(file name, size, mode)`.
    pub fn template_renders(&self) -> [(&'static str, DestSize, GrowthMode); 3] {
        let cap = DEMO_TEMPLATE_CAP;
        [
            (
                "template_tiled.png",
                DestSize::new(cap * 15, cap * 9),
                GrowthMode::Tile,
            ),
            (
                "template_tiled_leftovers.png",
                DestSize::new(cap * 7 + 4, cap * 6 + 6),
                GrowthMode::Tile,
            ),
            (
                "template_stretched.png",
                DestSize::new(cap * 15, cap * 9),
                GrowthMode::Scale,
            ),
        ]
    }

    pub fn template_caps(&self) -> CapInsets {
        CapInsets::symmetric(DEMO_TEMPLATE_CAP, DEMO_TEMPLATE_CAP)
    }
}

// =============================================================================
// Inspect Command
// =============================================================================

/// Output format for `inspect`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InspectFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct InspectConfig {
    /// Source image path; alternatively give --width and --height.
    #[arg(short, long, conflicts_with_all = ["width", "height"])]
    pub input: Option<PathBuf>,

    /// Source width in pixels.
    #[arg(long, requires = "height")]
    pub width: Option<u32>,

    /// Source height in pixels.
    #[arg(long, requires = "width")]
    pub height: Option<u32>,

    /// Destination size `WIDTHxHEIGHT`, or `WIDTH` to keep the aspect ratio.
    #[arg(short, long)]
    pub size: DestSize,

    #[command(flatten)]
    pub growth: GrowthArgs,

    /// Output format.
    #[arg(long, value_enum, default_value_t = InspectFormat::Text)]
    pub format: InspectFormat,
}

impl InspectConfig {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.input.is_none() && (self.width.is_none() || self.height.is_none()) {
            return Err("either --input or both --width and --height are required".to_string());
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
