//! Avatar watermark pipeline: fetch, grayscale conversion and page tiling.
//!
//! Every failure in this module is recoverable; the document renderer logs
//! it and continues without a watermark.

use image::{DynamicImage, RgbImage, RgbaImage};
use printpdf::{Image, ImageTransform, Mm, PdfLayerReference};
use thiserror::Error;

/// Watermark tile opacity over white paper.
pub const WATERMARK_OPACITY: f64 = 0.04;

/// Tile width as a fraction of the shorter page dimension.
pub const TILE_FRACTION: f64 = 0.15;

/// Horizontal offset of every other tile row, as a fraction of tile width.
const STAGGER_FRACTION: f64 = 0.75;

/// Grid step between tile origins, in tile widths/heights.
const GRID_STEP: f64 = 1.5;

/// Errors raised while acquiring or decoding the watermark image.
#[derive(Debug, Error)]
pub enum WatermarkError {
    #[error("Failed to fetch watermark image: {0}")]
    Fetch(String),

    #[error("Failed to read watermark file: {0}")]
    Io(String),

    #[error("Failed to decode watermark image: {0}")]
    Decode(String),
}

/// A processed watermark image ready for tiling.
pub struct WatermarkTile {
    image: DynamicImage,
    width_px: u32,
    height_px: u32,
}

impl WatermarkTile {
    /// Decode raw image bytes and run the grayscale/opacity pipeline.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WatermarkError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| WatermarkError::Decode(e.to_string()))?;

        let mut rgba = decoded.to_rgba8();
        grayscale_in_place(&mut rgba);
        let flattened = flatten_over_white(&rgba, WATERMARK_OPACITY);

        let (width_px, height_px) = flattened.dimensions();
        Ok(Self {
            image: DynamicImage::ImageRgb8(flattened),
            width_px,
            height_px,
        })
    }

    /// Tile dimensions on a page of the given size, aspect ratio preserved.
    pub fn tile_size_mm(&self, page_width_mm: f64, page_height_mm: f64) -> (f64, f64) {
        let width = TILE_FRACTION * page_width_mm.min(page_height_mm);
        let height = width * self.height_px as f64 / self.width_px as f64;
        (width, height)
    }

    /// Stamp the tile across a whole page layer in the staggered grid.
    pub fn tile_page(&self, layer: &PdfLayerReference, page_width_mm: f64, page_height_mm: f64) {
        let (tile_w, tile_h) = self.tile_size_mm(page_width_mm, page_height_mm);
        let dpi = self.width_px as f64 * 25.4 / tile_w;

        for (x, y) in tile_positions(page_width_mm, page_height_mm, tile_w, tile_h) {
            let tile = Image::from_dynamic_image(&self.image);
            tile.add_to_layer(
                layer.clone(),
                ImageTransform {
                    translate_x: Some(Mm(x as f32)),
                    translate_y: Some(Mm(y as f32)),
                    dpi: Some(dpi as f32),
                    ..Default::default()
                },
            );
        }
    }
}

/// Fetch the watermark source (HTTP URL or filesystem path) and build a tile.
pub async fn load(source: &str) -> Result<WatermarkTile, WatermarkError> {
    let bytes = if source.starts_with("http://") || source.starts_with("https://") {
        let response = reqwest::get(source)
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| WatermarkError::Fetch(e.to_string()))?;
        response
            .bytes()
            .await
            .map_err(|e| WatermarkError::Fetch(e.to_string()))?
            .to_vec()
    } else {
        tokio::fs::read(source)
            .await
            .map_err(|e| WatermarkError::Io(e.to_string()))?
    };

    WatermarkTile::from_bytes(&bytes)
}

/// Convert every pixel to grayscale using luminance weighting, leaving the
/// alpha channel untouched.
pub fn grayscale_in_place(image: &mut RgbaImage) {
    for pixel in image.pixels_mut() {
        let [r, g, b, a] = pixel.0;
        let gray =
            (0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b)).round() as u8;
        pixel.0 = [gray, gray, gray, a];
    }
}

/// Composite the grayscale image over white at the given opacity, honoring
/// the source alpha channel. The result needs no transparency support from
/// the PDF layer.
fn flatten_over_white(image: &RgbaImage, opacity: f64) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut flattened = RgbImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels() {
        let [gray, _, _, a] = pixel.0;
        let coverage = opacity * f64::from(a) / 255.0;
        let value = (255.0 - coverage * (255.0 - f64::from(gray))).round() as u8;
        flattened.put_pixel(x, y, image::Rgb([value, value, value]));
    }

    flattened
}

/// Tile origins (bottom-left corners) covering the full page bleed: the
/// first and last row/column start off-page so the pattern has no dead
/// margin, and every other row shifts right by 75% of a tile width.
pub fn tile_positions(
    page_width_mm: f64,
    page_height_mm: f64,
    tile_w: f64,
    tile_h: f64,
) -> Vec<(f64, f64)> {
    let mut positions = Vec::new();
    let step_x = tile_w * GRID_STEP;
    let step_y = tile_h * GRID_STEP;

    let mut row = 0usize;
    let mut y = -tile_h;
    while y < page_height_mm + tile_h {
        let offset = if row % 2 == 1 {
            tile_w * STAGGER_FRACTION
        } else {
            0.0
        };

        let mut x = -tile_w + offset;
        while x < page_width_mm + tile_w {
            positions.push((x, y));
            x += step_x;
        }

        y += step_y;
        row += 1;
    }

    positions
}
