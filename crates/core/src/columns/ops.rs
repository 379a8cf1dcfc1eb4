//! 1-D profile operations: thresholding, flat morphology, clipping, runs.

use std::ops::Range;

/// Otsu's threshold level for a set of 8-bit samples.
///
/// Returns the level maximizing the between-class variance; 0 for empty
/// input.
pub(crate) fn otsu_level(samples: &[u8]) -> u8 {
    if samples.is_empty() {
        return 0;
    }
    let mut hist = [0u64; 256];
    for &s in samples {
        hist[s as usize] += 1;
    }
    let total = samples.len() as f64;
    let weighted_sum: f64 = hist
        .iter()
        .enumerate()
        .map(|(v, &n)| v as f64 * n as f64)
        .sum();

    let mut sum_below = 0.0;
    let mut weight_below = 0.0;
    let mut best_variance = 0.0;
    let mut best_level = 0u8;
    for level in 0..256usize {
        weight_below += hist[level] as f64;
        if weight_below == 0.0 {
            continue;
        }
        let weight_above = total - weight_below;
        if weight_above == 0.0 {
            break;
        }
        sum_below += level as f64 * hist[level] as f64;
        let mean_below = sum_below / weight_below;
        let mean_above = (weighted_sum - sum_below) / weight_above;
        let variance =
            weight_below * weight_above * (mean_below - mean_above) * (mean_below - mean_above);
        if variance > best_variance {
            best_variance = variance;
            best_level = level as u8;
        }
    }
    best_level
}

/// Binary threshold: samples strictly above `level` map to 255, the rest
/// to 0.
pub(crate) fn threshold(xs: &[u8], level: u8) -> Vec<u8> {
    xs.iter().map(|&x| if x > level { 255 } else { 0 }).collect()
}

/// Flat grayscale dilation: running maximum over a centered window of
/// `size` samples, clamped at the borders.
pub(crate) fn dilate(xs: &[u8], size: usize) -> Vec<u8> {
    window_filter(xs, size, |w| w.iter().copied().max().unwrap_or(0))
}

/// Flat grayscale erosion: running minimum over a centered window.
fn erode(xs: &[u8], size: usize) -> Vec<u8> {
    window_filter(xs, size, |w| w.iter().copied().min().unwrap_or(0))
}

/// Grayscale closing: dilation followed by erosion. Fuses zero gaps
/// narrower than the structuring width.
pub(crate) fn grey_close(xs: &[u8], size: usize) -> Vec<u8> {
    erode(&dilate(xs, size), size)
}

fn window_filter(xs: &[u8], size: usize, f: impl Fn(&[u8]) -> u8) -> Vec<u8> {
    let left = size / 2;
    let right = size - 1 - left;
    (0..xs.len())
        .map(|i| {
            let lo = i.saturating_sub(left);
            let hi = (i + right + 1).min(xs.len());
            f(&xs[lo..hi])
        })
        .collect()
}

/// Trim leading and trailing zero samples (the image border).
///
/// Returns the trimmed slice and the index of its first sample in `xs`.
/// An all-zero input comes back untrimmed at offset 0.
pub(crate) fn clip(xs: &[u8]) -> (&[u8], usize) {
    let first = xs.iter().position(|&x| x != 0).unwrap_or(0);
    let last = xs.len() - xs.iter().rev().position(|&x| x != 0).unwrap_or(0);
    (&xs[first..last], first)
}

/// Maximal runs of zero samples, in left-to-right discovery order.
pub(crate) fn zero_runs(xs: &[u8]) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut start = None;
    for (i, &x) in xs.iter().enumerate() {
        match (x, start) {
            (0, None) => start = Some(i),
            (0, Some(_)) => {}
            (_, Some(s)) => {
                runs.push(s..i);
                start = None;
            }
            (_, None) => {}
        }
    }
    if let Some(s) = start {
        runs.push(s..xs.len());
    }
    runs
}
