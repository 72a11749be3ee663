//! Mode-independent resize properties.
//!
//! Tests verify:
//! - Corners are copied byte-for-byte in both modes
//! - Output always has the requested (or aspect-derived) size
//! - Resizing to the source size is the identity
//! - Invalid inputs are rejected before rendering

use image::{GrayImage, Luma};

use capresize::{
    resize_with_caps, CapInsets, DestSize, GrowthMode, NineSliceResizer, Region, ResizeError,
    ResizePlan,
};

use super::test_utils::{assert_rect_eq, numbered_image};

const MODES: [GrowthMode; 2] = [GrowthMode::Scale, GrowthMode::Tile];

// =============================================================================
// Corner Fidelity
// =============================================================================

#[test]
fn test_corners_preserved_symmetric() {
    let source = numbered_image(15, 11);
    let insets = CapInsets::symmetric(4, 3);

    for mode in MODES {
        for (dw, dh) in [(15, 11), (40, 30), (9, 7), (23, 101)] {
            let output = resize_with_caps(&source, (dw, dh), Some(insets), mode).unwrap();
            let plan = ResizePlan::new((15, 11), DestSize::new(dw, dh), Some(insets), mode)
                .unwrap();

            for corner in Region::CORNERS {
                assert_rect_eq(
                    &output,
                    plan.dest_grid().rect(corner),
                    &source,
                    plan.source_grid().rect(corner),
                );
            }
        }
    }
}

#[test]
fn test_corners_preserved_asymmetric() {
    let source = numbered_image(20, 16);
    let insets = CapInsets::new(1, 6, 3, 4);

    for mode in MODES {
        let output = resize_with_caps(&source, (97, 45), Some(insets), mode).unwrap();

        assert_rect_eq(&output, rect(0, 0, 1, 6), &source, rect(0, 0, 1, 6));
        assert_rect_eq(&output, rect(94, 0, 3, 6), &source, rect(17, 0, 3, 6));
        assert_rect_eq(&output, rect(0, 41, 1, 4), &source, rect(0, 12, 1, 4));
        assert_rect_eq(&output, rect(94, 41, 3, 4), &source, rect(17, 12, 3, 4));
    }
}

// =============================================================================
// Size Correctness
// =============================================================================

#[test]
fn test_output_has_requested_size() {
    let source = numbered_image(9, 9);
    for mode in MODES {
        for (dw, dh) in [(9, 9), (8, 8), (10, 31), (64, 12)] {
            let output = resize_with_caps(&source, (dw, dh), None, mode).unwrap();
            assert_eq!(output.dimensions(), (dw, dh), "{} mode", mode);
        }
    }
}

#[test]
fn test_zero_height_keeps_aspect_ratio() {
    let source = numbered_image(21, 13);
    let insets = Some(CapInsets::symmetric(5, 5));

    // 13 * 50 / 21 = 30.95 -> 30
    let output = resize_with_caps(&source, DestSize::with_width(50), insets, GrowthMode::Scale)
        .unwrap();
    assert_eq!(output.dimensions(), (50, 30));

    let output = resize_with_caps(&source, DestSize::with_width(42), insets, GrowthMode::Tile)
        .unwrap();
    assert_eq!(output.dimensions(), (42, 26));
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_identity_resize_is_pixel_identical() {
    let source = numbered_image(17, 12);

    for insets in [
        CapInsets::symmetric(3, 2),
        CapInsets::new(1, 4, 6, 2),
        CapInsets::symmetric(0, 0),
    ] {
        for mode in MODES {
            let output = resize_with_caps(&source, (17, 12), Some(insets), mode).unwrap();
            assert_eq!(output, source, "{} mode with caps {}", mode, insets);
        }
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_even_width_without_caps_rejected() {
    let source = numbered_image(12, 13);
    for mode in MODES {
        let result = resize_with_caps(&source, (30, 30), None, mode);
        assert!(
            matches!(result, Err(ResizeError::InvalidCapSize { .. })),
            "{:?}",
            result
        );
    }
}

#[test]
fn test_destination_smaller_than_caps_rejected() {
    let source = numbered_image(13, 13);
    let result = resize_with_caps(&source, (11, 30), None, GrowthMode::Scale);
    assert!(matches!(
        result,
        Err(ResizeError::InvalidDestinationSize { width: 11, height: 30, .. })
    ));

    let result = resize_with_caps(&source, (0, 30), None, GrowthMode::Tile);
    assert!(matches!(
        result,
        Err(ResizeError::InvalidDestinationSize { .. })
    ));
}

#[test]
fn test_unknown_mode_rejected() {
    let err = "wrap".parse::<GrowthMode>().unwrap_err();
    assert!(matches!(err, ResizeError::UnsupportedGrowthMode(ref mode) if mode == "wrap"));
}

// =============================================================================
// Pixel Types and Sharing
// =============================================================================

#[test]
fn test_grayscale_source() {
    let source = GrayImage::from_fn(7, 7, |x, y| Luma([(x * 10 + y) as u8]));
    let output = resize_with_caps(&source, (20, 9), None, GrowthMode::Tile).unwrap();

    assert_eq!(output.dimensions(), (20, 9));
    assert_eq!(output.get_pixel(0, 0), source.get_pixel(0, 0));
    assert_eq!(output.get_pixel(19, 8), source.get_pixel(6, 6));
}

#[test]
fn test_shared_source_across_threads() {
    let source = numbered_image(31, 25);
    let resizer = NineSliceResizer::new();
    let insets = Some(CapInsets::symmetric(7, 5));

    let expected = resizer
        .resize(&source, DestSize::new(120, 80), insets, GrowthMode::Tile)
        .unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    resizer
                        .resize(&source, DestSize::new(120, 80), insets, GrowthMode::Tile)
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn rect(x: u32, y: u32, width: u32, height: u32) -> capresize::Rect {
    capresize::Rect::new(x, y, width, height)
}
