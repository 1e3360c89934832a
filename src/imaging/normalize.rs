//! Letterboxing of reference photos onto a fixed-size canvas.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use log::debug;

use super::ImagingError;

/// Default canvas size for normalized images.
pub const NORMALIZE_TARGET: u32 = 512;

/// JPEG quality used when re-encoding the normalized canvas.
const JPEG_QUALITY: u8 = 90;

/// Placement of the photo content on the letterbox canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterboxRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Fit a source image into the target canvas preserving aspect ratio:
/// landscape sources fill the width and center vertically, portrait and
/// square sources fill the height and center horizontally.
pub fn letterbox_rect(src_w: u32, src_h: u32, target_w: u32, target_h: u32) -> LetterboxRect {
    let aspect = src_w as f64 / src_h as f64;
    if aspect > 1.0 {
        let height = ((target_w as f64 / aspect) as u32).clamp(1, target_h);
        LetterboxRect {
            x: 0,
            y: (target_h - height) / 2,
            width: target_w,
            height,
        }
    } else {
        let width = ((target_h as f64 * aspect) as u32).clamp(1, target_w);
        LetterboxRect {
            x: (target_w - width) / 2,
            y: 0,
            width,
            height: target_h,
        }
    }
}

/// Letterbox the source onto a white `target_w` x `target_h` canvas and
/// re-encode as JPEG. The output always has exactly the target dimensions.
pub fn normalize(bytes: &[u8], target_w: u32, target_h: u32) -> Result<Vec<u8>, ImagingError> {
    let source = image::load_from_memory(bytes)?;
    let rect = letterbox_rect(source.width(), source.height(), target_w, target_h);
    debug!(
        "normalizing {}x{} image onto {}x{} canvas at ({}, {})",
        source.width(),
        source.height(),
        target_w,
        target_h,
        rect.x,
        rect.y
    );

    let scaled = source
        .resize_exact(rect.width, rect.height, FilterType::Lanczos3)
        .to_rgb8();

    let mut canvas = RgbImage::from_pixel(target_w, target_h, Rgb([255, 255, 255]));
    imageops::overlay(&mut canvas, &scaled, rect.x as i64, rect.y as i64);

    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, JPEG_QUALITY);
    canvas.write_with_encoder(encoder)?;
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_fills_width_and_centers_vertically() {
        let rect = letterbox_rect(200, 100, 512, 512);
        assert_eq!(
            rect,
            LetterboxRect {
                x: 0,
                y: 128,
                width: 512,
                height: 256,
            }
        );
    }

    #[test]
    fn portrait_fills_height_and_centers_horizontally() {
        let rect = letterbox_rect(100, 200, 512, 512);
        assert_eq!(
            rect,
            LetterboxRect {
                x: 128,
                y: 0,
                width: 256,
                height: 512,
            }
        );
    }

    #[test]
    fn already_normalized_input_has_zero_offsets() {
        let rect = letterbox_rect(512, 512, 512, 512);
        assert_eq!(
            rect,
            LetterboxRect {
                x: 0,
                y: 0,
                width: 512,
                height: 512,
            }
        );
    }

    #[test]
    fn normalized_output_has_exact_target_dimensions() {
        let source = RgbImage::from_pixel(300, 150, Rgb([10, 200, 30]));
        let mut bytes = Vec::new();
        source
            .write_with_encoder(image::codecs::png::PngEncoder::new(&mut bytes))
            .unwrap();

        let normalized = normalize(&bytes, 512, 512).unwrap();
        let decoded = image::load_from_memory(&normalized).unwrap();
        assert_eq!(decoded.width(), 512);
        assert_eq!(decoded.height(), 512);
    }

    #[test]
    fn garbage_bytes_fail_with_decode_error() {
        let err = normalize(b"definitely not an image", 512, 512).unwrap_err();
        assert!(matches!(err, ImagingError::Decode(_)));
    }
}
