//! Reference-photo analysis: pixel dimensions, aspect ratio and dominant
//! colors, plus letterbox normalization for downstream display.
//!
//! The summarizer is intentionally cheap: it renders the photo into a small
//! fixed-width analysis buffer and frequency-counts quantized pixel colors.
//! Everything here fails with one of exactly two error kinds (`FileRead`,
//! `Decode`); both are terminal for the request and never retried.

mod dominant;
mod error;
mod normalize;

use std::path::Path;

use image::imageops::FilterType;
use log::info;

pub use dominant::QuantizedRgb;
pub use error::ImagingError;
pub use normalize::{letterbox_rect, normalize, LetterboxRect, NORMALIZE_TARGET};

use dominant::ANALYSIS_WIDTH;

/// Summary of an uploaded reference photo.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSummary {
    /// The encoded payload as received, kept as the origin of record so the
    /// caller can re-display or re-process the photo later.
    pub source_data: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub aspect_ratio: f64,
    /// Up to five quantized colors, most frequent first.
    pub dominant_colors: Vec<QuantizedRgb>,
}

/// Read an image from disk and summarize it. IO failures map to
/// [`ImagingError::FileRead`], undecodable content to [`ImagingError::Decode`].
pub async fn summarize_file(path: impl AsRef<Path>) -> Result<ImageSummary, ImagingError> {
    let bytes = tokio::fs::read(path.as_ref()).await?;
    summarize(bytes).await
}

/// Decode and summarize an encoded image payload.
pub async fn summarize(bytes: Vec<u8>) -> Result<ImageSummary, ImagingError> {
    let decoded = image::load_from_memory(&bytes)?;
    let width = decoded.width();
    let height = decoded.height();
    let aspect_ratio = width as f64 / height as f64;

    // Downscale into the analysis buffer; a degenerate ultra-wide source
    // still gets at least one row.
    let analysis_height = ((ANALYSIS_WIDTH as f64 / aspect_ratio).floor() as u32).max(1);
    let buffer = decoded
        .resize_exact(ANALYSIS_WIDTH, analysis_height, FilterType::Lanczos3)
        .to_rgba8();
    let dominant_colors = dominant::dominant_colors(&buffer);

    info!(
        "summarized {}x{} image: {} dominant color bucket(s)",
        width,
        height,
        dominant_colors.len()
    );

    Ok(ImageSummary {
        source_data: bytes,
        width,
        height,
        aspect_ratio,
        dominant_colors,
    })
}
