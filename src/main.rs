//! capresize - nine-slice image resizing from the command line.
//!
//! This binary loads images, resizes them with fixed corner caps, and writes
//! the results; it also renders a demo set and inspects layouts.

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use image::RgbaImage;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use capresize::{
    config::{Cli, Command, DemoConfig, InspectConfig, InspectFormat, ResizeConfig},
    config::{DEMO_BUTTON_CAPS, DEMO_BUTTON_SIZE},
    CapInsets, DestSize, GrowthMode, ImageEncoder, NineSliceResizer, OutputFormat, Rect, Region,
    ResizePlan,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Command::Resize(config) => run_resize(config),
        Command::Demo(config) => run_demo(config),
        Command::Inspect(config) => run_inspect(config),
    }
}

/// Initialize the tracing/logging subsystem.
fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        "capresize=debug"
    } else {
        "capresize=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| env_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// =============================================================================
// Resize Command
// =============================================================================

fn run_resize(config: ResizeConfig) -> ExitCode {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let format = match OutputFormat::from_path(&config.output) {
        Ok(format) => format,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let source = match load_image(&config.input) {
        Ok(image) => image,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let resizer = NineSliceResizer::new().with_filter(config.growth.filter);
    let output = match resizer.resize(
        &source,
        config.size,
        config.growth.caps,
        config.growth.grow,
    ) {
        Ok(output) => output,
        Err(e) => {
            error!("Cannot resize {}: {}", config.input.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let encoder = ImageEncoder::new(format).with_quality(config.quality);
    if let Err(e) = save_image(&output, &config.output, &encoder) {
        error!("{}", e);
        return ExitCode::FAILURE;
    }

    info!(
        "Wrote {} ({}x{}, {}, {})",
        config.output.display(),
        output.width(),
        output.height(),
        config.growth.grow,
        encoder.format().name()
    );
    ExitCode::SUCCESS
}

// =============================================================================
// Demo Command
// =============================================================================

fn run_demo(config: DemoConfig) -> ExitCode {
    if let Err(e) = fs::create_dir_all(&config.out_dir) {
        error!(
            "Failed to create output directory {}: {}",
            config.out_dir.display(),
            e
        );
        return ExitCode::FAILURE;
    }

    let resizer = NineSliceResizer::new().with_filter(config.filter);
    let encoder = ImageEncoder::new(OutputFormat::Png);

    let template = match load_image(&config.template) {
        Ok(image) => image,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut jobs: Vec<(RgbaImage, &str, DestSize, CapInsets, GrowthMode)> = config
        .template_renders()
        .into_iter()
        .map(|(name, size, mode)| (template.clone(), name, size, config.template_caps(), mode))
        .collect();

    if let Some(ref button_path) = config.button {
        match load_image(button_path) {
            Ok(button) => jobs.push((
                button,
                "button_stretched.png",
                DEMO_BUTTON_SIZE,
                DEMO_BUTTON_CAPS,
                GrowthMode::Scale,
            )),
            Err(e) => {
                error!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    for (source, name, size, caps, mode) in &jobs {
        let output = match resizer.resize(source, *size, Some(*caps), *mode) {
            Ok(output) => output,
            Err(e) => {
                error!("Cannot render {}: {}", name, e);
                return ExitCode::FAILURE;
            }
        };

        let path = config.out_dir.join(name);
        if let Err(e) = save_image(&output, &path, &encoder) {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
        info!(
            "  {:<32} {}x{} ({})",
            path.display(),
            output.width(),
            output.height(),
            mode
        );
    }

    info!("Rendered {} image(s)", jobs.len());
    ExitCode::SUCCESS
}

// =============================================================================
// Inspect Command
// =============================================================================

fn run_inspect(config: InspectConfig) -> ExitCode {
    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        return ExitCode::FAILURE;
    }

    let source_size = match (&config.input, config.width, config.height) {
        (Some(path), _, _) => match image::image_dimensions(path) {
            Ok(size) => size,
            Err(e) => {
                error!("Failed to read {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        (None, Some(width), Some(height)) => (width, height),
        // Rejected by validate().
        _ => return ExitCode::FAILURE,
    };

    let plan = match ResizePlan::new(
        source_size,
        config.size,
        config.growth.caps,
        config.growth.grow,
    ) {
        Ok(plan) => plan,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let (sw, sh) = plan.source_size();
    let (dw, dh) = plan.dest_size();
    match config.format {
        InspectFormat::Text => print_plan(&plan),
        InspectFormat::Json => {
            let json = serde_json::json!({
                "mode": plan.mode(),
                "source": { "width": sw, "height": sh },
                "dest": { "width": dw, "height": dh },
                "insets": plan.insets(),
                "regions": plan.region_layouts(),
                "tiling": plan.tile_layout(),
            });
            match serde_json::to_string_pretty(&json) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    error!("Failed to serialize plan: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    }

    ExitCode::SUCCESS
}

/// Print a human-readable plan.
fn print_plan(plan: &ResizePlan) {
    let (sw, sh) = plan.source_size();
    let (dw, dh) = plan.dest_size();
    let insets = plan.insets();

    println!("Nine-slice layout");
    println!("═════════════════");
    println!("Source:      {}x{}", sw, sh);
    println!("Destination: {}x{}", dw, dh);
    println!(
        "Caps:        left {}, top {}, right {}, bottom {}{}",
        insets.left,
        insets.top,
        insets.right,
        insets.bottom,
        if insets.is_symmetric() { " (symmetric)" } else { "" }
    );
    println!("Mode:        {}", plan.mode());
    println!();
    println!(
        "{:<14} {:>22}   {:>22}   {}",
        "region", "source", "destination", "grows"
    );
    println!("{}", "─".repeat(70));
    for layout in plan.region_layouts() {
        println!(
            "{:<14} {:>22}   {:>22}   {}",
            layout.region.name(),
            format_rect(&layout.source),
            format_rect(&layout.dest),
            growth_axes(layout.region)
        );
    }

    if let Some(tiling) = plan.tile_layout() {
        println!();
        println!(
            "Across: {} x {}px + {}px = {}px",
            tiling.across.count,
            tiling.across.tile,
            tiling.across.remainder,
            tiling.across.span()
        );
        println!(
            "Down:   {} x {}px + {}px = {}px",
            tiling.down.count,
            tiling.down.tile,
            tiling.down.remainder,
            tiling.down.span()
        );
    }
}

fn growth_axes(region: Region) -> &'static str {
    match (region.grows_horizontally(), region.grows_vertically()) {
        (true, true) => "both",
        (true, false) => "across",
        (false, true) => "down",
        (false, false) => "-",
    }
}

fn format_rect(rect: &Rect) -> String {
    format!("{}x{} @ ({}, {})", rect.width, rect.height, rect.x, rect.y)
}

// =============================================================================
// Image I/O
// =============================================================================

fn load_image(path: &Path) -> Result<RgbaImage, String> {
    let image =
        image::open(path).map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
    Ok(image.to_rgba8())
}

fn save_image(image: &RgbaImage, path: &Path, encoder: &ImageEncoder) -> Result<(), String> {
    let bytes = encoder.encode(image).map_err(|e| e.to_string())?;
    fs::write(path, &bytes).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}
