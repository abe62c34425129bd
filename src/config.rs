use serde::{Deserialize, Serialize};

/// Vertical tolerance (pixels) a suit must clear below the rank anchor.
pub const DEFAULT_ERROR_MARGIN: i32 = 10;

/// Seed for the overlay colour generator.
pub const DEFAULT_OVERLAY_SEED: u64 = 12345;

/// Extraction configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Attach debug artifacts (source crop, contour overlay, glyphs) to results
    pub show_result: bool,
    pub error_margin: i32,
    pub overlay_seed: u64,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self {
            show_result: false,
            error_margin: DEFAULT_ERROR_MARGIN,
            overlay_seed: DEFAULT_OVERLAY_SEED,
        }
    }

    pub fn with_show_result(mut self, show_result: bool) -> Self {
        self.show_result = show_result;
        self
    }

    pub fn with_error_margin(mut self, error_margin: i32) -> Self {
        self.error_margin = error_margin;
        self
    }

    pub fn with_overlay_seed(mut self, seed: u64) -> Self {
        self.overlay_seed = seed;
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self::new()
    }
}
