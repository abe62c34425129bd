use anyhow::Result;
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::models::DebugArtifacts;

/// Writes debug artifacts to disk, one sub-directory per card
#[derive(Clone, Debug)]
pub struct DebugOutput {
    output_dir: PathBuf,
}

impl DebugOutput {
    /// The directory must be empty or non-existent
    pub fn new(output_dir: PathBuf) -> Result<Self> {
        if output_dir.exists() {
            let entries = std::fs::read_dir(&output_dir)?;
            if entries.count() > 0 {
                return Err(anyhow::anyhow!(
                    "Debug directory is not empty: {}",
                    output_dir.display()
                ));
            }
        } else {
            std::fs::create_dir_all(&output_dir)?;
        }

        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Save artifacts under `<output_dir>/<stem>/`; absent glyphs are skipped
    pub fn save(&self, stem: &str, artifacts: &DebugArtifacts) -> Result<Vec<PathBuf>> {
        let card_dir = self.output_dir.join(stem);
        std::fs::create_dir_all(&card_dir)?;

        let images: [(&str, Option<&RgbImage>); 4] = [
            ("01_source.png", Some(&artifacts.source)),
            ("02_contours.png", Some(&artifacts.overlay)),
            ("03_rank.png", artifacts.rank.as_ref()),
            ("04_suit.png", artifacts.suit.as_ref()),
        ];

        let mut written = Vec::new();
        for (filename, image) in images {
            let Some(image) = image else { continue };
            let path = card_dir.join(filename);
            image
                .save(&path)
                .map_err(|e| anyhow::anyhow!("Failed to save debug image: {}", e))?;
            debug!("saved {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}
