use imageproc::point::Point;

use crate::models::{BoundingBox, GlyphCandidate};

/// A rank must cover at least 1/10 of the region...
pub const RANK_AREA_DIVISOR: i64 = 10;
/// ...a suit at least 1/25.
pub const SUIT_AREA_DIVISOR: i64 = 25;
/// Inclusive bounds on the truncated `height / width` ratio
pub const MIN_ASPECT: i32 = 1;
pub const MAX_ASPECT: i32 = 4;
/// Suit right edge must stay within `width / 6` of the rank's
pub const SUIT_REACH_DIVISOR: i32 = 6;

/// Dimensions of the region being searched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionGeometry {
    pub width: i32,
    pub height: i32,
}

impl RegionGeometry {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: i32::try_from(width).unwrap_or(i32::MAX),
            height: i32::try_from(height).unwrap_or(i32::MAX),
        }
    }

    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }
}

/// Where an accepted box's bottom-right corner may sit
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// `br.x <= max_x && br.y <= max_y`
    RankZone { max_x: i32, max_y: i32 },
    /// `br.y > anchor.y + margin && br.x < anchor.x + reach`
    BelowAnchor {
        anchor: Point<i32>,
        margin: i32,
        reach: i32,
    },
}

impl Placement {
    fn admits(&self, bbox: &BoundingBox) -> bool {
        match *self {
            Placement::RankZone { max_x, max_y } => bbox.br.x <= max_x && bbox.br.y <= max_y,
            Placement::BelowAnchor {
                anchor,
                margin,
                reach,
            } => {
                bbox.br.y > anchor.y.saturating_add(margin)
                    && bbox.br.x < anchor.x.saturating_add(reach)
            }
        }
    }
}

/// Result of a single first-match pass
#[derive(Debug, Clone, Copy)]
pub struct Scan<'a> {
    pub accepted: Option<&'a GlyphCandidate>,
    pub evaluated: usize,
}

/// Predicate set shared by the rank and suit searches
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateFilter {
    pub min_area: i64,
    pub min_aspect: i32,
    pub max_aspect: i32,
    pub placement: Placement,
}

impl CandidateFilter {
    pub fn rank(region: &RegionGeometry) -> Self {
        Self {
            min_area: region.area() / RANK_AREA_DIVISOR,
            min_aspect: MIN_ASPECT,
            max_aspect: MAX_ASPECT,
            placement: Placement::RankZone {
                max_x: 3 * region.width / 4,
                max_y: 3 * region.height / 4,
            },
        }
    }

    /// Suit predicates conditioned on the accepted rank's bottom-right corner
    pub fn suit(region: &RegionGeometry, anchor: Point<i32>, margin: i32) -> Self {
        Self {
            min_area: region.area() / SUIT_AREA_DIVISOR,
            min_aspect: MIN_ASPECT,
            max_aspect: MAX_ASPECT,
            placement: Placement::BelowAnchor {
                anchor,
                margin,
                reach: region.width / SUIT_REACH_DIVISOR,
            },
        }
    }

    pub fn accepts(&self, bbox: &BoundingBox) -> bool {
        if bbox.width() <= 0 || bbox.height() <= 0 {
            return false;
        }
        let aspect = bbox.aspect_ratio();
        bbox.area() >= self.min_area
            && aspect >= self.min_aspect
            && aspect <= self.max_aspect
            && self.placement.admits(bbox)
    }

    /// First candidate in detection order that passes every predicate
    pub fn select_first<'a>(&self, candidates: &'a [GlyphCandidate]) -> Scan<'a> {
        let mut evaluated = 0;
        for candidate in candidates {
            evaluated += 1;
            if self.accepts(&candidate.bbox) {
                return Scan {
                    accepted: Some(candidate),
                    evaluated,
                };
            }
        }
        Scan {
            accepted: None,
            evaluated,
        }
    }
}
