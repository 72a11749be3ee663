//! Tile mode tests.
//!
//! Tests verify:
//! - Every destination pixel is a copy of the source pixel the tiling maps it to
//! - Exact multiples produce whole tiles with no remainder
//! - Partial tiles are cut from the tile's leading edge
//! - Degenerate zero-sized middles are rejected

use capresize::{
    resize_with_caps, CapInsets, DestSize, GrowthMode, Rect, ResizeError, ResizePlan,
};

use super::test_utils::{assert_rect_eq, numbered_image, striped_image, tiled_source_coord};

/// Check every pixel of a tiled output against the source.
fn assert_tiled(source: &image::RgbaImage, insets: CapInsets, dw: u32, dh: u32) {
    let (sw, sh) = source.dimensions();
    let output = resize_with_caps(source, (dw, dh), Some(insets), GrowthMode::Tile).unwrap();
    assert_eq!(output.dimensions(), (dw, dh));

    for y in 0..dh {
        let sy = tiled_source_coord(y, dh, sh, insets.top, insets.bottom);
        for x in 0..dw {
            let sx = tiled_source_coord(x, dw, sw, insets.left, insets.right);
            assert_eq!(
                output.get_pixel(x, y),
                source.get_pixel(sx, sy),
                "{}x{} caps {}: pixel ({}, {}) should come from ({}, {})",
                dw,
                dh,
                insets,
                x,
                y,
                sx,
                sy
            );
        }
    }
}

// =============================================================================
// Coverage
// =============================================================================

#[test]
fn test_every_pixel_written_from_expected_source() {
    let source = numbered_image(13, 11);
    let insets = CapInsets::symmetric(3, 2);

    // Middle is 7x7: cover exact multiples, remainders, and sub-tile spans.
    for dw in [6, 7, 13, 20, 27, 40] {
        for dh in [4, 5, 11, 18, 30] {
            assert_tiled(&source, insets, dw, dh);
        }
    }
}

#[test]
fn test_asymmetric_caps_coverage() {
    let source = numbered_image(20, 16);
    let insets = CapInsets::new(1, 6, 3, 4);

    for (dw, dh) in [(20, 16), (50, 23), (4, 10), (71, 59)] {
        assert_tiled(&source, insets, dw, dh);
    }
}

#[test]
fn test_no_transparent_gaps() {
    // The source is fully opaque; any unwritten pixel would keep alpha 0.
    let source = numbered_image(9, 9);
    let output = resize_with_caps(&source, (103, 57), None, GrowthMode::Tile).unwrap();
    assert!(output.pixels().all(|p| p.0[3] == 255));
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_exact_multiple_has_no_remainder() {
    // Caps of 1 around an 8x8 tile; destination middle is exactly 3 tiles wide.
    let source = striped_image(10, 10);
    let insets = CapInsets::symmetric(1, 1);
    let dw = 2 + 3 * 8;

    let plan = ResizePlan::new((10, 10), DestSize::new(dw, 10), Some(insets), GrowthMode::Tile)
        .unwrap();
    let layout = plan.tile_layout().unwrap();
    assert_eq!(layout.across.count, 3);
    assert_eq!(layout.across.remainder, 0);
    assert_eq!(layout.down.count, 1);
    assert_eq!(layout.down.remainder, 0);

    let output = resize_with_caps(&source, (dw, 10), Some(insets), GrowthMode::Tile).unwrap();
    let tile = Rect::new(1, 0, 8, 10);
    for i in 0..3 {
        assert_rect_eq(&output, Rect::new(1 + i * 8, 0, 8, 10), &source, tile);
    }
}

#[test]
fn test_partial_tile_taken_from_leading_edge() {
    // Middle tile of 10px, destination middle of 24px: 2.4 tiles.
    let source = striped_image(12, 5);
    let insets = CapInsets::symmetric(1, 1);

    let plan = ResizePlan::new((12, 5), DestSize::new(26, 5), Some(insets), GrowthMode::Tile)
        .unwrap();
    let layout = plan.tile_layout().unwrap();
    assert_eq!((layout.across.count, layout.across.remainder), (2, 4));

    let output = resize_with_caps(&source, (26, 5), Some(insets), GrowthMode::Tile).unwrap();

    assert_rect_eq(&output, Rect::new(1, 0, 10, 5), &source, Rect::new(1, 0, 10, 5));
    assert_rect_eq(&output, Rect::new(11, 0, 10, 5), &source, Rect::new(1, 0, 10, 5));
    // The last 4 columns of the middle repeat the first 4 of the tile.
    assert_rect_eq(&output, Rect::new(21, 0, 4, 5), &source, Rect::new(1, 0, 4, 5));
    // Right cap follows immediately.
    assert_rect_eq(&output, Rect::new(25, 0, 1, 5), &source, Rect::new(11, 0, 1, 5));
}

#[test]
fn test_demo_template_with_leftovers() {
    let source = numbered_image(72, 72);
    let insets = CapInsets::symmetric(24, 24);
    assert_tiled(&source, insets, 24 * 7 + 4, 24 * 6 + 6);
    assert_tiled(&source, insets, 24 * 15, 24 * 9);
}

// =============================================================================
// Degenerate Inputs
// =============================================================================

#[test]
fn test_zero_width_middle_rejected() {
    let source = numbered_image(10, 9);
    let result = resize_with_caps(
        &source,
        (10, 20),
        Some(CapInsets::symmetric(5, 2)),
        GrowthMode::Tile,
    );
    assert!(matches!(result, Err(ResizeError::InvalidCapSize { .. })));
}

#[test]
fn test_zero_height_middle_rejected() {
    let source = numbered_image(9, 8);
    let result = resize_with_caps(
        &source,
        (9, 8),
        Some(CapInsets::new(2, 3, 2, 5)),
        GrowthMode::Tile,
    );
    assert!(matches!(result, Err(ResizeError::InvalidCapSize { .. })));
}
