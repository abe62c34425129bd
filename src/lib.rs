pub mod config;
pub mod debug_output;
pub mod detection;
pub mod error;
pub mod models;

pub use config::ExtractorConfig;
pub use detection::GlyphExtractor;
pub use detection::contours::{BorderFollowing, ContourTracer};
pub use detection::locator::GlyphLocator;
pub use detection::preprocessing::{NormalizedRegion, RegionPreprocessor};
pub use error::GlyphError;
pub use models::{
    BoundingBox, Contour, DebugArtifacts, ExtractionOutcome, ExtractionResult, GlyphCandidate,
    ScanStats,
};
