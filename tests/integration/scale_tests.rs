//! Scale mode tests.
//!
//! Tests verify:
//! - The 13x13 -> 25x25 scenario with derived caps
//! - Edges only stretch along their own axis
//! - Alternative resampling filters

use image::{Rgba, RgbaImage};

use capresize::{
    resize_with_caps, CapInsets, DestSize, GrowthMode, NineSliceResizer, Rect, ResampleFilter,
};

use super::test_utils::{assert_rect_eq, numbered_image, pixels_close};

#[test]
fn test_derived_caps_13_to_25() {
    let source = numbered_image(13, 13);
    let output = resize_with_caps(&source, (25, 25), None, GrowthMode::Scale).unwrap();
    assert_eq!(output.dimensions(), (25, 25));

    // Corners: 6x6 at (0,0), (19,0), (0,19), (19,19).
    assert_rect_eq(&output, Rect::new(0, 0, 6, 6), &source, Rect::new(0, 0, 6, 6));
    assert_rect_eq(&output, Rect::new(19, 0, 6, 6), &source, Rect::new(7, 0, 6, 6));
    assert_rect_eq(&output, Rect::new(0, 19, 6, 6), &source, Rect::new(0, 7, 6, 6));
    assert_rect_eq(&output, Rect::new(19, 19, 6, 6), &source, Rect::new(7, 7, 6, 6));

    // The 1x1 center grows to 13x13 of the same color.
    let center = *source.get_pixel(6, 6);
    for y in 6..19 {
        for x in 6..19 {
            assert!(
                pixels_close(*output.get_pixel(x, y), center, 1),
                "center pixel ({}, {}) = {:?}, expected {:?}",
                x,
                y,
                output.get_pixel(x, y),
                center
            );
        }
    }
}

#[test]
fn test_edges_stretch_along_one_axis() {
    let source = numbered_image(13, 13);
    let output = resize_with_caps(&source, (25, 25), None, GrowthMode::Scale).unwrap();

    // Top edge: a 1-pixel-wide column per row, stretched across 13 columns.
    for y in 0..6 {
        let expected = *source.get_pixel(6, y);
        for x in 6..19 {
            assert!(pixels_close(*output.get_pixel(x, y), expected, 1));
        }
    }

    // Left edge: a 1-pixel-tall row per column, stretched down 13 rows.
    for x in 0..6 {
        let expected = *source.get_pixel(x, 6);
        for y in 6..19 {
            assert!(pixels_close(*output.get_pixel(x, y), expected, 1));
        }
    }
}

#[test]
fn test_flat_regions_stay_flat_when_stretched() {
    let border = Rgba([40, 40, 40, 255]);
    let fill = Rgba([220, 180, 10, 255]);
    let source = RgbaImage::from_fn(20, 16, |x, y| {
        if x < 1 || x >= 19 || y < 6 || y >= 12 {
            border
        } else {
            fill
        }
    });

    let output = resize_with_caps(
        &source,
        (450, 120),
        Some(CapInsets::new(1, 6, 1, 4)),
        GrowthMode::Scale,
    )
    .unwrap();

    assert_eq!(output.dimensions(), (450, 120));
    for y in 6..116 {
        for x in 1..449 {
            assert!(pixels_close(*output.get_pixel(x, y), fill, 1));
        }
    }
    assert!(pixels_close(*output.get_pixel(0, 60), border, 1));
    assert!(pixels_close(*output.get_pixel(449, 60), border, 1));
    assert_eq!(*output.get_pixel(0, 0), border);
}

#[test]
fn test_nearest_filter_shrinks_middle() {
    let source = numbered_image(21, 21);
    let insets = Some(CapInsets::symmetric(5, 5));
    let output = NineSliceResizer::new()
        .with_filter(ResampleFilter::Nearest)
        .resize(&source, DestSize::new(12, 12), insets, GrowthMode::Scale)
        .unwrap();

    assert_eq!(output.dimensions(), (12, 12));
    assert_rect_eq(&output, Rect::new(7, 7, 5, 5), &source, Rect::new(16, 16, 5, 5));
    // Middle of 11 shrunk to 2 with nearest: every value exists in the source middle.
    for y in 5..7 {
        for x in 5..7 {
            let p = output.get_pixel(x, y);
            assert!((5..16).contains(&u32::from(p.0[0])));
            assert!((5..16).contains(&u32::from(p.0[1])));
        }
    }
}
