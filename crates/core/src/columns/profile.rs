//! Foreground projection profile of a table image.

use super::ops;
use crate::image::GrayView;

/// Column-wise foreground profile of a grayscale table image, min-max
/// normalized to `0..=255`.
///
/// The image is binarized with an inverted global Otsu threshold so dark
/// text becomes foreground, then foreground intensity is summed along
/// each pixel column. A flat profile normalizes to all zeros.
pub fn foreground_profile(img: &GrayView<'_>) -> Vec<u8> {
    let level = ops::otsu_level(img.pixels());
    let mut sums = vec![0u64; img.width()];
    for y in 0..img.height() {
        for (x, &px) in img.row(y).iter().enumerate() {
            // Inverted threshold: at or below the level is text.
            if px <= level {
                sums[x] += 255;
            }
        }
    }
    normalize(&sums)
}

fn normalize(sums: &[u64]) -> Vec<u8> {
    let Some(&max) = sums.iter().max() else {
        return Vec::new();
    };
    let min = *sums.iter().min().unwrap_or(&0);
    if max == min {
        return vec![0; sums.len()];
    }
    sums.iter()
        .map(|&v| ((v - min) as f64 * 255.0 / (max - min) as f64) as u8)
        .collect()
}
