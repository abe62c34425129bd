#![allow(unused_imports)]

mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from cardglyphs for tests
pub use cardglyphs::{
    BoundingBox, Contour, ContourTracer, ExtractionOutcome, ExtractionResult, ExtractorConfig,
    GlyphExtractor, GlyphLocator, NormalizedRegion, RegionPreprocessor,
};
