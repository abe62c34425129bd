use tracing::{debug, warn};

use crate::config::ExtractorConfig;
use crate::detection::contours::{BorderFollowing, ContourTracer, build_candidates};
use crate::detection::extraction::{draw_overlay, extract_masked};
use crate::detection::filters::{CandidateFilter, RegionGeometry};
use crate::detection::preprocessing::{NormalizedRegion, detect_edges};
use crate::models::{
    DebugArtifacts, ExtractionOutcome, ExtractionResult, GlyphCandidate, ScanStats,
};

/// Finds the rank glyph, then the suit glyph below it, in a normalized corner region
#[derive(Debug, Clone)]
pub struct GlyphLocator<T = BorderFollowing> {
    tracer: T,
    error_margin: i32,
    show_result: bool,
    overlay_seed: u64,
}

impl GlyphLocator<BorderFollowing> {
    pub fn new(config: &ExtractorConfig) -> Self {
        Self::with_tracer(BorderFollowing, config)
    }
}

impl<T: ContourTracer> GlyphLocator<T> {
    pub fn with_tracer(tracer: T, config: &ExtractorConfig) -> Self {
        Self {
            tracer,
            error_margin: config.error_margin,
            show_result: config.show_result,
            overlay_seed: config.overlay_seed,
        }
    }

    /// Detect edges, trace contours and run both searches
    pub fn locate(&self, region: &NormalizedRegion) -> ExtractionResult {
        let edges = detect_edges(&region.gray);
        let contours = self.tracer.trace(&edges);
        debug!(contours = contours.len(), "traced contours");
        let candidates = build_candidates(contours);
        self.locate_candidates(region, &candidates)
    }

    /// Rank search followed, on success only, by a suit search anchored on the rank
    pub fn locate_candidates(
        &self,
        region: &NormalizedRegion,
        candidates: &[GlyphCandidate],
    ) -> ExtractionResult {
        let geometry = RegionGeometry::new(region.width(), region.height());
        let mut stats = ScanStats::default();

        let rank_scan = CandidateFilter::rank(&geometry).select_first(candidates);
        stats.rank_evaluated = rank_scan.evaluated;

        let Some(rank) = rank_scan.accepted else {
            warn!(candidates = candidates.len(), "no rank glyph found");
            return ExtractionResult {
                rank: None,
                suit: None,
                rank_box: None,
                suit_box: None,
                outcome: ExtractionOutcome::NoRankFound,
                stats,
                debug: self.debug_artifacts(region, candidates, &[], None, None),
            };
        };
        debug!(index = rank.index, bbox = ?rank.bbox, "rank accepted");
        let rank_image = extract_masked(&region.source, rank);

        let suit_filter = CandidateFilter::suit(&geometry, rank.bbox.br, self.error_margin);
        let suit_scan = suit_filter.select_first(candidates);
        stats.suit_evaluated = Some(suit_scan.evaluated);

        let suit = suit_scan.accepted;
        let suit_image = suit.map(|s| {
            debug!(index = s.index, bbox = ?s.bbox, "suit accepted");
            extract_masked(&region.source, s)
        });
        let outcome = if suit.is_some() {
            ExtractionOutcome::Complete
        } else {
            debug!("no suit glyph below rank");
            ExtractionOutcome::NoSuitFound
        };

        let accepted: Vec<&GlyphCandidate> = std::iter::once(rank).chain(suit).collect();
        let debug = self.debug_artifacts(
            region,
            candidates,
            &accepted,
            Some(&rank_image),
            suit_image.as_ref(),
        );

        ExtractionResult {
            rank: Some(rank_image),
            suit: suit_image,
            rank_box: Some(rank.bbox),
            suit_box: suit.map(|s| s.bbox),
            outcome,
            stats,
            debug,
        }
    }

    fn debug_artifacts(
        &self,
        region: &NormalizedRegion,
        candidates: &[GlyphCandidate],
        accepted: &[&GlyphCandidate],
        rank: Option<&image::RgbImage>,
        suit: Option<&image::RgbImage>,
    ) -> Option<DebugArtifacts> {
        if !self.show_result {
            return None;
        }
        Some(DebugArtifacts {
            source: region.source.clone(),
            overlay: draw_overlay(
                region.width(),
                region.height(),
                candidates,
                accepted,
                self.overlay_seed,
            ),
            rank: rank.cloned(),
            suit: suit.cloned(),
        })
    }
}
