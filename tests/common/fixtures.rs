#![allow(dead_code)]

use cardglyphs::{Contour, ContourTracer, NormalizedRegion, RegionPreprocessor};
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Card size used by the synthetic fixtures; its corner region is 100x200.
pub const CARD_WIDTH: u32 = 400;
pub const CARD_HEIGHT: u32 = 700;

pub const CARD_WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const INK_BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const INK_RED: Rgb<u8> = Rgb([200, 0, 0]);

/// Inclusive pixel rectangle `(x0, y0, x1, y1)`
pub type Shape = (i32, i32, i32, i32);

/// Rank-sized block inside the rank zone of a 100x200 region
pub const RANK_SHAPE: Shape = (15, 15, 50, 94);
/// Suit-sized block below and close to `RANK_SHAPE`
pub const SUIT_SHAPE: Shape = (20, 120, 49, 159);

/// White card with filled blocks painted in `ink`
pub fn card_with_shapes(shapes: &[Shape], ink: Rgb<u8>) -> DynamicImage {
    let mut img = RgbImage::from_pixel(CARD_WIDTH, CARD_HEIGHT, CARD_WHITE);
    for &(x0, y0, x1, y1) in shapes {
        let rect = Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32);
        draw_filled_rect_mut(&mut img, rect, ink);
    }
    DynamicImage::ImageRgb8(img)
}

/// Card with a rank block and a suit block in the index corner
pub fn standard_card() -> DynamicImage {
    card_with_shapes(&[RANK_SHAPE, SUIT_SHAPE], INK_BLACK)
}

/// Corner region of a card painted with `shapes` in `ink`
pub fn region_with_shapes(shapes: &[Shape], ink: Rgb<u8>) -> NormalizedRegion {
    RegionPreprocessor::new()
        .prepare(&card_with_shapes(shapes, ink))
        .expect("fixture card is large enough")
}

pub fn rect_contour(shape: Shape) -> Contour {
    let (x0, y0, x1, y1) = shape;
    Contour::rectangle(x0, y0, x1, y1)
}

/// Tracer that ignores the edge map and replays fixed contours
pub struct FixedTracer {
    pub contours: Vec<Contour>,
}

impl FixedTracer {
    pub fn new(shapes: &[Shape]) -> Self {
        Self {
            contours: shapes.iter().copied().map(rect_contour).collect(),
        }
    }

    pub fn from_contours(contours: Vec<Contour>) -> Self {
        Self { contours }
    }
}

impl ContourTracer for FixedTracer {
    fn trace(&self, _edges: &GrayImage) -> Vec<Contour> {
        self.contours.clone()
    }
}

/// Locator over fixed contours with default settings
pub fn fixed_locator(shapes: &[Shape]) -> cardglyphs::GlyphLocator<FixedTracer> {
    cardglyphs::GlyphLocator::with_tracer(FixedTracer::new(shapes), &cardglyphs::ExtractorConfig::default())
}
