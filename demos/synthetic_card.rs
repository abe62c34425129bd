use cardglyphs::{ExtractorConfig, GlyphExtractor};
use image::{DynamicImage, Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

fn main() -> anyhow::Result<()> {
    let mut img = RgbImage::from_pixel(400, 700, Rgb([250, 250, 245]));

    // Rank block and a smaller suit block in the index corner
    let ink = Rgb([180, 20, 20]);
    draw_filled_rect_mut(&mut img, Rect::at(15, 15).of_size(36, 80), ink);
    draw_filled_rect_mut(&mut img, Rect::at(20, 120).of_size(30, 40), ink);
    img.save("synthetic_card.png")?;
    println!("Created synthetic_card.png (400x700)");

    let extractor = GlyphExtractor::new(ExtractorConfig::new().with_show_result(true));
    let result = extractor.extract(&DynamicImage::ImageRgb8(img))?;
    println!("Outcome: {:?}", result.outcome);

    let (rank, suit) = result.require_both()?;
    rank.save("synthetic_rank.png")?;
    suit.save("synthetic_suit.png")?;
    println!("Saved synthetic_rank.png ({}x{})", rank.width(), rank.height());
    println!("Saved synthetic_suit.png ({}x{})", suit.width(), suit.height());

    if let Some(debug) = &result.debug {
        debug.overlay.save("synthetic_contours.png")?;
        println!("Saved synthetic_contours.png");
    }

    Ok(())
}
