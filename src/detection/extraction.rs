use image::{GrayImage, ImageBuffer, Luma, Pixel, Rgb, RgbImage, imageops};
use imageproc::drawing::{draw_hollow_rect_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point;
use imageproc::rect::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{BoundingBox, GlyphCandidate};

/// Copy the pixels of `source` that lie inside the candidate's polygon into a
/// black image, then crop to the candidate's bounding box.
pub fn extract_masked(source: &RgbImage, candidate: &GlyphCandidate) -> RgbImage {
    let (width, height) = source.dimensions();

    let mut mask = GrayImage::new(width, height);
    draw_outline(&mut mask, &candidate.polygon, Luma([255u8]), true);

    let mut masked = RgbImage::new(width, height);
    for (x, y, m) in mask.enumerate_pixels() {
        if m[0] > 0 {
            masked.put_pixel(x, y, *source.get_pixel(x, y));
        }
    }

    let (x, y, w, h) = crop_rect(&candidate.bbox);
    imageops::crop_imm(&masked, x, y, w, h).to_image()
}

/// Contour overlay for visual inspection.
///
/// Every candidate polygon is outlined in its own colour; accepted candidates
/// also get a 2px box. Colours come from a generator seeded here, so the
/// drawing is reproducible and never touches selection.
pub fn draw_overlay(
    width: u32,
    height: u32,
    candidates: &[GlyphCandidate],
    accepted: &[&GlyphCandidate],
    seed: u64,
) -> RgbImage {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut canvas = RgbImage::new(width, height);

    for candidate in candidates {
        let color = random_color(&mut rng);
        draw_outline(&mut canvas, &candidate.polygon, color, false);
    }

    for candidate in accepted {
        let color = random_color(&mut rng);
        draw_outline(&mut canvas, &candidate.polygon, color, false);
        draw_box(&mut canvas, &candidate.bbox, color);
    }

    canvas
}

fn random_color(rng: &mut StdRng) -> Rgb<u8> {
    Rgb([rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255)])
}

fn crop_rect(bbox: &BoundingBox) -> (u32, u32, u32, u32) {
    let x = bbox.tl.x.max(0);
    let y = bbox.tl.y.max(0);
    let w = (bbox.br.x - x).max(0);
    let h = (bbox.br.y - y).max(0);
    (x as u32, y as u32, w as u32, h as u32)
}

fn draw_box(canvas: &mut RgbImage, bbox: &BoundingBox, color: Rgb<u8>) {
    let (w, h) = (bbox.width(), bbox.height());
    if w <= 0 || h <= 0 {
        return;
    }
    draw_hollow_rect_mut(
        canvas,
        Rect::at(bbox.tl.x, bbox.tl.y).of_size(w as u32, h as u32),
        color,
    );
    if w > 2 && h > 2 {
        draw_hollow_rect_mut(
            canvas,
            Rect::at(bbox.tl.x + 1, bbox.tl.y + 1).of_size(w as u32 - 2, h as u32 - 2),
            color,
        );
    }
}

/// Outline (and optionally fill) a closed polygon of any vertex count
fn draw_outline<P>(
    canvas: &mut ImageBuffer<P, Vec<P::Subpixel>>,
    polygon: &[Point<i32>],
    color: P,
    fill: bool,
) where
    P: Pixel + 'static,
{
    let mut vertices = polygon.to_vec();
    vertices.dedup();
    while vertices.len() > 1 && vertices.first() == vertices.last() {
        vertices.pop();
    }

    if fill && vertices.len() >= 3 {
        draw_polygon_mut(canvas, &vertices, color);
    }

    let n = vertices.len();
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];
        draw_line_segment_mut(
            canvas,
            (a.x as f32, a.y as f32),
            (b.x as f32, b.y as f32),
            color,
        );
    }
}
