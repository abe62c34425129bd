use image::GrayImage;
use imageproc::contours::find_contours;
use imageproc::geometry::approximate_polygon_dp;
use imageproc::point::Point;

use crate::models::{BoundingBox, Contour, GlyphCandidate};

/// Douglas-Peucker tolerance in pixels
pub const APPROX_EPSILON: f64 = 3.0;

/// Source of contours for a binary edge map.
///
/// Implementations must return contours in a reproducible order: glyph
/// selection keeps the first match, so order decides ties.
pub trait ContourTracer {
    fn trace(&self, edges: &GrayImage) -> Vec<Contour>;
}

/// Suzuki-Abe border following via `imageproc::contours::find_contours`.
///
/// Borders come out in the raster order in which they are first met; the
/// hierarchy is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorderFollowing;

impl ContourTracer for BorderFollowing {
    fn trace(&self, edges: &GrayImage) -> Vec<Contour> {
        find_contours::<i32>(edges)
            .into_iter()
            .filter(|c| !c.points.is_empty())
            .map(|c| Contour::new(c.points))
            .collect()
    }
}

/// Simplify a closed contour to a polygon.
///
/// The ring is split at the point farthest from its start and each half is
/// simplified as an open curve, so every vertex of the ring survives
/// (`approximate_polygon_dp` with `closed = true` drops the final vertex).
pub fn approximate_polygon(contour: &Contour) -> Vec<Point<i32>> {
    let points = &contour.points;
    if points.len() < 3 {
        return points.clone();
    }

    let start = points[0];
    let sq_dist = |p: &Point<i32>| {
        let (dx, dy) = (i64::from(p.x - start.x), i64::from(p.y - start.y));
        dx * dx + dy * dy
    };
    let mut far = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        if sq_dist(p) > sq_dist(&points[far]) {
            far = i;
        }
    }
    if far == 0 {
        return vec![start];
    }

    let mut polygon = approximate_polygon_dp(&points[..=far], APPROX_EPSILON, false);
    let mut back_half = points[far..].to_vec();
    back_half.push(start);
    let back = approximate_polygon_dp(&back_half, APPROX_EPSILON, false);

    // `far` opens `back`, `start` closes it
    polygon.pop();
    polygon.extend(back);
    polygon.pop();
    polygon
}

/// Pair every contour with its polygon and bounding box, keeping detection order
pub fn build_candidates(contours: Vec<Contour>) -> Vec<GlyphCandidate> {
    contours
        .into_iter()
        .enumerate()
        .filter_map(|(index, contour)| {
            let polygon = approximate_polygon(&contour);
            let bbox = BoundingBox::enclosing(&polygon)?;
            Some(GlyphCandidate {
                index,
                contour,
                polygon,
                bbox,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Pixel-by-pixel border of a rectangle, clockwise from the top-left corner
    fn traced_border(x1: i32, y1: i32) -> Contour {
        let mut points = Vec::new();
        points.extend((0..x1).map(|x| Point::new(x, 0)));
        points.extend((0..y1).map(|y| Point::new(x1, y)));
        points.extend((1..=x1).rev().map(|x| Point::new(x, y1)));
        points.extend((1..=y1).rev().map(|y| Point::new(0, y)));
        Contour::new(points)
    }

    #[test]
    fn rectangle_keeps_all_four_corners() {
        let polygon = approximate_polygon(&Contour::rectangle(15, 15, 50, 94));
        assert_eq!(
            polygon,
            vec![
                Point::new(15, 15),
                Point::new(50, 15),
                Point::new(50, 94),
                Point::new(15, 94),
            ]
        );
    }

    #[test]
    fn triangle_keeps_all_three_corners() {
        let triangle = Contour::new(vec![
            Point::new(10, 10),
            Point::new(60, 10),
            Point::new(10, 90),
        ]);
        assert_eq!(approximate_polygon(&triangle), triangle.points);
    }

    #[test]
    fn traced_border_collapses_to_corners() {
        let polygon = approximate_polygon(&traced_border(10, 20));
        assert_eq!(
            polygon,
            vec![
                Point::new(0, 0),
                Point::new(10, 0),
                Point::new(10, 20),
                Point::new(0, 20),
            ]
        );
    }

    #[test]
    fn coincident_points_reduce_to_one_vertex() {
        let contour = Contour::new(vec![Point::new(4, 4); 5]);
        assert_eq!(approximate_polygon(&contour), vec![Point::new(4, 4)]);
    }

    #[test]
    fn candidate_box_spans_whole_contour() {
        let candidates = build_candidates(vec![Contour::rectangle(15, 15, 50, 94)]);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].polygon.len(), 4);
        assert_eq!(candidates[0].bbox.tl, Point::new(15, 15));
        assert_eq!(candidates[0].bbox.br, Point::new(51, 95));
    }
}
