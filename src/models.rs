use image::RgbImage;
use imageproc::point::Point;

use crate::error::GlyphError;

/// Traced boundary of a region in a binary edge image
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub points: Vec<Point<i32>>,
}

impl Contour {
    pub fn new(points: Vec<Point<i32>>) -> Self {
        Self { points }
    }

    /// Closed rectangle outline through the four corner pixels (inclusive)
    pub fn rectangle(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self::new(vec![
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Axis-aligned box with an exclusive bottom-right corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub tl: Point<i32>,
    pub br: Point<i32>,
}

impl BoundingBox {
    /// Smallest box enclosing `points`, or `None` for an empty slice
    pub fn enclosing(points: &[Point<i32>]) -> Option<Self> {
        let first = points.first()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        }
        Some(Self {
            tl: Point::new(min_x, min_y),
            br: Point::new(max_x + 1, max_y + 1),
        })
    }

    pub fn width(&self) -> i32 {
        self.br.x - self.tl.x
    }

    pub fn height(&self) -> i32 {
        self.br.y - self.tl.y
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width()) * i64::from(self.height())
    }

    /// Integer `height / width`, truncated
    pub fn aspect_ratio(&self) -> i32 {
        self.height() / self.width()
    }
}

/// A contour under consideration together with its simplified polygon and box
#[derive(Debug, Clone)]
pub struct GlyphCandidate {
    /// Position in detection order
    pub index: usize,
    pub contour: Contour,
    pub polygon: Vec<Point<i32>>,
    pub bbox: BoundingBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionOutcome {
    Complete,
    NoRankFound,
    NoSuitFound,
}

/// How many candidates each search phase looked at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanStats {
    pub rank_evaluated: usize,
    /// `None` when the suit search never ran
    pub suit_evaluated: Option<usize>,
}

/// Visual artifacts produced when `show_result` is enabled
#[derive(Debug, Clone, PartialEq)]
pub struct DebugArtifacts {
    pub source: RgbImage,
    pub overlay: RgbImage,
    pub rank: Option<RgbImage>,
    pub suit: Option<RgbImage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    pub rank: Option<RgbImage>,
    pub suit: Option<RgbImage>,
    pub rank_box: Option<BoundingBox>,
    pub suit_box: Option<BoundingBox>,
    pub outcome: ExtractionOutcome,
    pub stats: ScanStats,
    pub debug: Option<DebugArtifacts>,
}

impl ExtractionResult {
    pub fn success(&self) -> bool {
        self.rank.is_some() && self.suit.is_some()
    }

    /// Both glyphs, or the reason one of them is missing
    pub fn require_both(&self) -> Result<(&RgbImage, &RgbImage), GlyphError> {
        match (&self.rank, &self.suit) {
            (Some(rank), Some(suit)) => Ok((rank, suit)),
            (None, _) => Err(GlyphError::NoRankFound),
            (Some(_), None) => Err(GlyphError::NoSuitFound),
        }
    }
}
