//! Dominant-color sampling over a downscaled analysis buffer.

use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed width of the analysis buffer; height follows the aspect ratio.
pub(crate) const ANALYSIS_WIDTH: u32 = 100;

/// Sampled pixels with alpha below this are treated as transparent and skipped.
const ALPHA_CUTOFF: u8 = 128;

/// Every Nth pixel of the analysis buffer is sampled.
const SAMPLE_STRIDE: usize = 4;

/// How many color buckets are reported.
const TOP_COLOR_COUNT: usize = 5;

/// An RGB triple with each channel rounded to the nearest multiple of 10.
/// Rounding can land above 255 (255 rounds to 260), so channels are u16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuantizedRgb {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

fn quantize_channel(value: u8) -> u16 {
    ((value as f32 / 10.0).round() as u16) * 10
}

/// Count quantized colors over a strided sample of the buffer and return the
/// top buckets by descending frequency. The sort is stable, so ties keep the
/// order in which the buckets were first created.
pub(crate) fn dominant_colors(buffer: &RgbaImage) -> Vec<QuantizedRgb> {
    let mut order: Vec<(QuantizedRgb, u32)> = Vec::new();
    let mut index: HashMap<QuantizedRgb, usize> = HashMap::new();

    for pixel in buffer.pixels().step_by(SAMPLE_STRIDE) {
        if pixel[3] < ALPHA_CUTOFF {
            continue;
        }
        let key = QuantizedRgb {
            r: quantize_channel(pixel[0]),
            g: quantize_channel(pixel[1]),
            b: quantize_channel(pixel[2]),
        };
        match index.get(&key) {
            Some(&slot) => order[slot].1 += 1,
            None => {
                index.insert(key, order.len());
                order.push((key, 1));
            }
        }
    }

    order.sort_by(|a, b| b.1.cmp(&a.1));
    order
        .into_iter()
        .take(TOP_COLOR_COUNT)
        .map(|(color, _)| color)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn quantizes_to_nearest_multiple_of_ten() {
        assert_eq!(quantize_channel(0), 0);
        assert_eq!(quantize_channel(14), 10);
        assert_eq!(quantize_channel(15), 20);
        assert_eq!(quantize_channel(120), 120);
        assert_eq!(quantize_channel(255), 260);
    }

    #[test]
    fn uniform_image_yields_single_bucket() {
        let buffer = RgbaImage::from_pixel(40, 20, Rgba([120, 80, 40, 255]));
        let colors = dominant_colors(&buffer);
        assert_eq!(colors, vec![QuantizedRgb { r: 120, g: 80, b: 40 }]);
    }

    #[test]
    fn transparent_pixels_are_skipped() {
        let buffer = RgbaImage::from_pixel(40, 20, Rgba([120, 80, 40, 0]));
        assert!(dominant_colors(&buffer).is_empty());
    }

    #[test]
    fn buckets_sort_by_descending_frequency() {
        // Left three quarters one color, right quarter another. Sampling is
        // strided but uniform, so the majority color stays in front.
        let buffer = RgbaImage::from_fn(40, 20, |x, _| {
            if x < 30 {
                Rgba([200, 0, 0, 255])
            } else {
                Rgba([0, 0, 200, 255])
            }
        });
        let colors = dominant_colors(&buffer);
        assert_eq!(colors[0], QuantizedRgb { r: 200, g: 0, b: 0 });
        assert_eq!(colors[1], QuantizedRgb { r: 0, g: 0, b: 200 });
    }

    #[test]
    fn reports_at_most_five_buckets() {
        // Eight 10-pixel-wide vertical stripes of distinct quantized colors.
        let buffer = RgbaImage::from_fn(80, 20, |x, _| {
            let band = (x / 10) as u8;
            Rgba([band * 30, 0, 0, 255])
        });
        assert_eq!(dominant_colors(&buffer).len(), 5);
    }
}
