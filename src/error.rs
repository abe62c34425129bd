use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GlyphError {
    #[error("image {width}x{height} is too small for the corner crop")]
    InvalidInput { width: u32, height: u32 },

    #[error("no contour matched the rank heuristics")]
    NoRankFound,

    #[error("rank found but no contour matched the suit heuristics")]
    NoSuitFound,
}
