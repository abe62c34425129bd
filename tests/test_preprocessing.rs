//! Tests for corner cropping and normalization.

mod common;

use cardglyphs::GlyphError;
use cardglyphs::detection::preprocessing::{auto_thresholds, detect_edges};
use common::*;
use image::{DynamicImage, GrayImage, Luma, RgbImage};

#[test]
fn test_crop_covers_top_left_index_corner() {
    assert_eq!(RegionPreprocessor::crop_dimensions(400, 700), (100, 200));
    assert_eq!(RegionPreprocessor::crop_dimensions(250, 350), (62, 100));

    let region = RegionPreprocessor::new().prepare(&standard_card()).unwrap();
    assert_eq!(region.gray.dimensions(), (100, 200));
    assert_eq!(region.source.dimensions(), (100, 200));
}

#[test]
fn test_undersized_image_is_invalid_input() {
    let preprocessor = RegionPreprocessor::new();

    let narrow = DynamicImage::ImageRgb8(RgbImage::new(3, 700));
    assert_eq!(
        preprocessor.prepare(&narrow),
        Err(GlyphError::InvalidInput {
            width: 3,
            height: 700
        })
    );

    let short = DynamicImage::ImageRgb8(RgbImage::new(400, 3));
    assert!(matches!(
        preprocessor.prepare(&short),
        Err(GlyphError::InvalidInput { .. })
    ));

    let empty = DynamicImage::ImageRgb8(RgbImage::new(0, 0));
    assert!(preprocessor.prepare(&empty).is_err());
}

#[test]
fn test_smallest_valid_image_gives_single_pixel_region() {
    let tiny = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
    let region = RegionPreprocessor::new().prepare(&tiny).unwrap();
    assert_eq!(region.gray.dimensions(), (1, 1));
}

#[test]
fn test_source_is_unblurred_colour_and_gray_is_smoothed() {
    let region = region_with_shapes(&[RANK_SHAPE], INK_RED);

    // Corner pixel of the block keeps its exact colour in the source crop
    assert_eq!(*region.source.get_pixel(15, 15), INK_RED);
    assert_eq!(*region.source.get_pixel(14, 14), CARD_WHITE);

    // ...but is mixed with its white neighbours in the blurred gray crop
    let interior = region.gray.get_pixel(30, 50)[0];
    let corner = region.gray.get_pixel(15, 15)[0];
    assert!(corner > interior, "corner {} interior {}", corner, interior);
    assert_eq!(region.gray.get_pixel(80, 180)[0], 255);
}

#[test]
fn test_auto_thresholds_are_ordered() {
    let region = region_with_shapes(&[RANK_SHAPE, SUIT_SHAPE], INK_BLACK);
    let (low, high) = auto_thresholds(&region.gray);
    assert!(high >= 1.0);
    assert_eq!(low * 2.0, high);

    let flat = GrayImage::from_pixel(20, 20, Luma([0u8]));
    let (low, high) = auto_thresholds(&flat);
    assert!(low > 0.0 && high >= 1.0);
}

#[test]
fn test_uniform_region_has_no_edges() {
    let flat = GrayImage::from_pixel(50, 80, Luma([255u8]));
    let edges = detect_edges(&flat);
    assert!(edges.pixels().all(|p| p[0] == 0));
}

#[test]
fn test_block_produces_edges() {
    let region = region_with_shapes(&[RANK_SHAPE], INK_BLACK);
    let edges = detect_edges(&region.gray);
    assert!(edges.pixels().any(|p| p[0] > 0));
}
