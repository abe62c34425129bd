pub mod preprocessing;
pub mod contours;
pub mod filters;
pub mod extraction;
pub mod locator;

use image::DynamicImage;
use tracing::info;

use crate::config::ExtractorConfig;
use crate::error::GlyphError;
use crate::models::ExtractionResult;
use contours::{BorderFollowing, ContourTracer};
use locator::GlyphLocator;
use preprocessing::{NormalizedRegion, RegionPreprocessor};

/// Card-corner glyph extraction: crop and normalize, then locate rank and suit
#[derive(Debug, Clone)]
pub struct GlyphExtractor<T = BorderFollowing> {
    preprocessor: RegionPreprocessor,
    locator: GlyphLocator<T>,
}

impl GlyphExtractor<BorderFollowing> {
    pub fn new(config: ExtractorConfig) -> Self {
        Self::with_tracer(BorderFollowing, config)
    }
}

impl Default for GlyphExtractor<BorderFollowing> {
    fn default() -> Self {
        Self::new(ExtractorConfig::default())
    }
}

impl<T: ContourTracer> GlyphExtractor<T> {
    pub fn with_tracer(tracer: T, config: ExtractorConfig) -> Self {
        Self {
            preprocessor: RegionPreprocessor::new(),
            locator: GlyphLocator::with_tracer(tracer, &config),
        }
    }

    /// Run the full extraction on a single card image.
    ///
    /// Only an undersized image is an error; missing glyphs are reported
    /// through the result's outcome.
    pub fn extract(&self, card: &DynamicImage) -> Result<ExtractionResult, GlyphError> {
        let region = self.prepare(card)?;
        let result = self.locator.locate(&region);
        info!(
            outcome = ?result.outcome,
            rank_evaluated = result.stats.rank_evaluated,
            "extraction finished"
        );
        Ok(result)
    }

    /// Corner region for a card (for debugging)
    pub fn prepare(&self, card: &DynamicImage) -> Result<NormalizedRegion, GlyphError> {
        self.preprocessor.prepare(card)
    }

    pub fn locator(&self) -> &GlyphLocator<T> {
        &self.locator
    }
}
