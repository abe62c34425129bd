use image::{DynamicImage, GrayImage, RgbImage};
use imageproc::contrast::otsu_level;
use imageproc::edges::canny;
use imageproc::filter::box_filter;
use tracing::debug;

use crate::error::GlyphError;

/// The corner index spans the first quarter of the card's width...
pub const CROP_WIDTH_DIVISOR: u32 = 4;
/// ...and the first 1/3.5 of its height.
pub const CROP_HEIGHT_DIVISOR: f64 = 3.5;
/// 3x3 box kernel
pub const BLUR_RADIUS: u32 = 1;

/// Corner crop prepared for edge detection
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRegion {
    /// Blurred single-channel crop, input to edge detection
    pub gray: GrayImage,
    /// Unblurred colour crop, source for glyph extraction
    pub source: RgbImage,
}

impl NormalizedRegion {
    pub fn width(&self) -> u32 {
        self.gray.width()
    }

    pub fn height(&self) -> u32 {
        self.gray.height()
    }
}

/// Crops a card image to its top-left index corner and normalizes it
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionPreprocessor;

impl RegionPreprocessor {
    pub fn new() -> Self {
        Self
    }

    /// Size of the corner crop for an input of `width` x `height`
    pub fn crop_dimensions(width: u32, height: u32) -> (u32, u32) {
        let crop_width = width / CROP_WIDTH_DIVISOR;
        let crop_height = (f64::from(height) / CROP_HEIGHT_DIVISOR) as u32;
        (crop_width, crop_height)
    }

    pub fn prepare(&self, input: &DynamicImage) -> Result<NormalizedRegion, GlyphError> {
        let (width, height) = (input.width(), input.height());
        let (crop_width, crop_height) = Self::crop_dimensions(width, height);
        if crop_width == 0 || crop_height == 0 {
            return Err(GlyphError::InvalidInput { width, height });
        }

        let crop = input.crop_imm(0, 0, crop_width, crop_height);
        let gray = apply_blur(&to_grayscale(&crop), BLUR_RADIUS);
        debug!(crop_width, crop_height, "prepared corner region");

        Ok(NormalizedRegion {
            gray,
            source: crop.to_rgb8(),
        })
    }
}

/// Convert image to grayscale
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Box blur with a `(2 * radius + 1)` square kernel
pub fn apply_blur(img: &GrayImage, radius: u32) -> GrayImage {
    box_filter(img, radius, radius)
}

/// Canny thresholds derived from the Otsu level of `img`: `(low, high)`
pub fn auto_thresholds(img: &GrayImage) -> (f32, f32) {
    let high = f32::from(otsu_level(img).max(1));
    (high / 2.0, high)
}

/// Detect edges using Canny with automatically chosen thresholds
pub fn detect_edges(img: &GrayImage) -> GrayImage {
    let (low, high) = auto_thresholds(img);
    debug!(low, high, "canny thresholds");
    canny(img, low, high)
}
