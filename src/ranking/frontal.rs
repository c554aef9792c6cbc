//! Edge-symmetry frontality scoring.
//!
//! A straight-on product photo tends to have a left/right mirrored edge
//! structure and a roughly square framing. The score blends both:
//!
//! ```text
//! frontal = 0.8 * 1 / (1 + symmetry_diff) + 0.2 * 1 / (1 + |w/h - 1|)
//! ```
//!
//! where `symmetry_diff` is the mean absolute difference (0..=255) between
//! the left half of a Canny edge map and the mirrored right half.

use image::imageops::{self, FilterType};
use image::{DynamicImage, GenericImageView, GrayImage};
use imageproc::edges::canny;
use tracing::warn;

/// Side length of the square the image is resized to before edge detection.
pub const CANONICAL_SIZE: u32 = 300;

/// Canny hysteresis thresholds on 0..=255 luminance.
pub const CANNY_LOW: f32 = 100.0;
pub const CANNY_HIGH: f32 = 200.0;

const SYMMETRY_WEIGHT: f64 = 0.8;
const ASPECT_WEIGHT: f64 = 0.2;

/// Reasons a score could not be computed. Never leaves this module.
#[derive(Debug, thiserror::Error)]
enum ScoreError {
    #[error("image has zero width or height ({0}x{1})")]
    Degenerate(u32, u32),

    #[error("edge map is too narrow to split ({0} columns)")]
    NarrowEdgeMap(u32),
}

/// Score how likely `image` is a straight-on product view.
///
/// Returns `0.0` instead of failing, so a bad candidate simply loses.
pub fn compute_frontal_score(image: &DynamicImage) -> f64 {
    match try_frontal_score(image) {
        Ok(score) => score,
        Err(e) => {
            warn!("Error computing frontal score: {}", e);
            0.0
        }
    }
}

fn try_frontal_score(image: &DynamicImage) -> Result<f64, ScoreError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ScoreError::Degenerate(width, height));
    }

    // to_rgb8 truncates any alpha channel
    let rgb = image.to_rgb8();
    let resized = imageops::resize(&rgb, CANONICAL_SIZE, CANONICAL_SIZE, FilterType::Triangle);
    let gray = DynamicImage::ImageRgb8(resized).to_luma8();
    let edges = canny(&gray, CANNY_LOW, CANNY_HIGH);

    let diff = symmetry_diff(&edges).ok_or(ScoreError::NarrowEdgeMap(edges.width()))?;

    Ok(SYMMETRY_WEIGHT * symmetry_score(diff) + ASPECT_WEIGHT * aspect_score(width, height))
}

/// Mean absolute difference between the left half of `edges` and the
/// horizontally mirrored right half.
///
/// Column `x` of the left half is compared with column `width - 1 - x`.
/// Returns `None` when the map has fewer than two columns or no rows.
pub fn symmetry_diff(edges: &GrayImage) -> Option<f64> {
    let (width, height) = edges.dimensions();
    let half = width / 2;
    if half == 0 || height == 0 {
        return None;
    }

    let mut total: u64 = 0;
    for y in 0..height {
        for x in 0..half {
            let left = edges.get_pixel(x, y)[0];
            let right = edges.get_pixel(width - 1 - x, y)[0];
            total += u64::from(left.abs_diff(right));
        }
    }

    Some(total as f64 / (u64::from(half) * u64::from(height)) as f64)
}

/// `1 / (1 + diff)`: 1.0 for a perfectly mirrored edge map.
pub fn symmetry_score(diff: f64) -> f64 {
    1.0 / (1.0 + diff)
}

/// `1 / (1 + |width / height - 1|)`: 1.0 for a square image.
///
/// Callers must pass a non-zero height.
pub fn aspect_score(width: u32, height: u32) -> f64 {
    let ratio = f64::from(width) / f64::from(height);
    1.0 / (1.0 + (ratio - 1.0).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage, Rgba, RgbaImage};

    fn centered_box(size: u32) -> DynamicImage {
        let third = size / 3;
        let img = RgbImage::from_fn(size, size, |x, y| {
            if (third..size - third).contains(&x) && (third..size - third).contains(&y) {
                Rgb([20, 20, 20])
            } else {
                Rgb([240, 240, 240])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    fn left_box(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| {
            if x >= width / 10 && x < width / 3 && y >= height / 4 && y < height * 3 / 4 {
                Rgb([20, 20, 20])
            } else {
                Rgb([240, 240, 240])
            }
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn mirrored_edge_map_has_zero_diff() {
        let edges = GrayImage::from_fn(300, 300, |x, y| {
            if x == 40 || x == 259 || y == 10 {
                Luma([255])
            } else {
                Luma([0])
            }
        });
        let diff = symmetry_diff(&edges).unwrap();
        assert_eq!(diff, 0.0);
        assert_eq!(symmetry_score(diff), 1.0);
    }

    #[test]
    fn one_sided_edges_are_penalized() {
        // a single full-height edge column on the left only
        let edges = GrayImage::from_fn(4, 2, |x, _| if x == 0 { Luma([255]) } else { Luma([0]) });
        // 2 differing pixels of 255 over 2x2 compared pixels
        assert_eq!(symmetry_diff(&edges), Some(127.5));
    }

    #[test]
    fn narrow_edge_map_has_no_diff() {
        assert_eq!(symmetry_diff(&GrayImage::new(1, 10)), None);
        assert_eq!(symmetry_diff(&GrayImage::new(10, 0)), None);
    }

    #[test]
    fn square_aspect_is_exactly_one() {
        assert_eq!(aspect_score(300, 300), 1.0);
        assert_eq!(aspect_score(17, 17), 1.0);
    }

    #[test]
    fn aspect_decays_either_way() {
        assert_eq!(aspect_score(200, 100), 0.5);
        assert!((aspect_score(100, 200) - 1.0 / 1.5).abs() < 1e-12);
        assert!(aspect_score(400, 100) < aspect_score(200, 100));
    }

    #[test]
    fn zero_height_scores_zero() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(10, 0));
        assert_eq!(compute_frontal_score(&img), 0.0);
    }

    #[test]
    fn zero_width_scores_zero() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(0, 10));
        assert_eq!(compute_frontal_score(&img), 0.0);
    }

    #[test]
    fn blank_square_is_perfectly_frontal() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(120, 120, Rgb([128, 128, 128])));
        assert_eq!(compute_frontal_score(&img), 1.0);
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let rgba = RgbaImage::from_pixel(64, 64, Rgba([10, 200, 30, 0]));
        let score = compute_frontal_score(&DynamicImage::ImageRgba8(rgba));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn centered_product_beats_offset_product() {
        let front = compute_frontal_score(&centered_box(300));
        let side = compute_frontal_score(&left_box(600, 300));
        assert!(front > side, "front {} should beat side {}", front, side);
        assert!(front > 0.0 && front <= 1.0);
    }

    #[test]
    fn scoring_is_deterministic() {
        let img = left_box(400, 250);
        assert_eq!(compute_frontal_score(&img), compute_frontal_score(&img));
    }
}
