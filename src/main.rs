use clap::Parser;
use image::ImageReader;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use cardglyphs::debug_output::DebugOutput;
use cardglyphs::{BoundingBox, ExtractionOutcome, ExtractionResult, ExtractorConfig, GlyphExtractor};

#[derive(Parser)]
#[command(name = "cardglyphs")]
#[command(about = "Locate and extract rank and suit glyphs from playing card images")]
struct Cli {
    /// Card images, each cropped to the card border
    #[arg(value_name = "IMAGE", required = true)]
    image_paths: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Save source crop, contour overlay and glyphs to directory (must be empty)
    #[arg(long, value_name = "DIR")]
    debug_out: Option<PathBuf>,

    /// Pixels a suit must clear below the rank
    #[arg(
        long,
        default_value_t = cardglyphs::config::DEFAULT_ERROR_MARGIN,
        value_parser = clap::value_parser!(i32).range(0..)
    )]
    error_margin: i32,

    /// Print one JSON object per card instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct CardReport {
    path: String,
    success: bool,
    outcome: &'static str,
    rank_box: Option<[i32; 4]>,
    suit_box: Option<[i32; 4]>,
}

impl CardReport {
    fn new(path: &std::path::Path, result: &ExtractionResult) -> Self {
        let outcome = match result.outcome {
            ExtractionOutcome::Complete => "complete",
            ExtractionOutcome::NoRankFound => "no_rank_found",
            ExtractionOutcome::NoSuitFound => "no_suit_found",
        };
        let corners = |b: &BoundingBox| [b.tl.x, b.tl.y, b.br.x, b.br.y];
        Self {
            path: path.display().to_string(),
            success: result.success(),
            outcome,
            rank_box: result.rank_box.as_ref().map(corners),
            suit_box: result.suit_box.as_ref().map(corners),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let debug_output = args.debug_out.map(DebugOutput::new).transpose()?;
    let config = ExtractorConfig::new()
        .with_show_result(debug_output.is_some())
        .with_error_margin(args.error_margin);
    let extractor = GlyphExtractor::new(config);

    let mut failures = 0;
    for path in &args.image_paths {
        tracing::info!("Loading image: {}", path.display());
        let img = ImageReader::open(path)?
            .decode()
            .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

        let result = extractor.extract(&img)?;
        if !result.success() {
            failures += 1;
        }

        if let (Some(output), Some(artifacts)) = (&debug_output, &result.debug) {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "card".to_string());
            output.save(&stem, artifacts)?;
        }

        let report = CardReport::new(path, &result);
        if args.json {
            println!("{}", serde_json::to_string(&report)?);
        } else {
            print_report(&report);
        }
    }

    if let Some(output) = &debug_output {
        tracing::info!("Debug outputs saved to: {}", output.output_dir().display());
    }

    if failures > 0 {
        return Err(anyhow::anyhow!(
            "{} of {} cards had no complete rank/suit pair",
            failures,
            args.image_paths.len()
        ));
    }

    Ok(())
}

fn print_report(report: &CardReport) {
    println!("{}: {}", report.path, report.outcome);
    if let Some([x0, y0, x1, y1]) = report.rank_box {
        println!("  rank at ({}, {}) {}x{}", x0, y0, x1 - x0, y1 - y0);
    }
    if let Some([x0, y0, x1, y1]) = report.suit_box {
        println!("  suit at ({}, {}) {}x{}", x0, y0, x1 - x0, y1 - y0);
    }
}
