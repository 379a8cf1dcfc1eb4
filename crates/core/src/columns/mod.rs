//! Column layout detection from pixel projection profiles.
//!
//! The detector never sees the recognized words: the column count and the
//! boundary x-coordinates are estimated purely from the distribution of
//! dark pixels along the x-axis. Counting and placement run on the same
//! normalized profile but binarize it differently: counting fuses nearby
//! text bands with a morphological closing before thresholding, placement
//! keeps every fine gap and then merges the spurious ones away.

mod ops;
mod profile;

pub use profile::foreground_profile;

use tracing::debug;

use crate::error::{ExtractError, Result};
use crate::image::GrayView;

/// Structuring width of the closing that fuses intra-column word bands
/// before counting.
const CLOSING_WIDTH: usize = 11;
/// Structuring width of the dilation applied after re-thresholding.
const DILATION_WIDTH: usize = 3;
/// Fixed binarization level used for placement; low so fine gaps survive.
const PLACEMENT_LEVEL: u8 = 1;

/// Ordered column boundary x-coordinates, strictly increasing. Each value
/// marks the right edge of one inter-column gap; a placement of length
/// `n` describes a table of `n + 1` columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnPlacement(Vec<i32>);

impl ColumnPlacement {
    /// Build a placement, rejecting non-strictly-increasing sequences.
    pub fn new(boundaries: Vec<i32>) -> Result<Self> {
        for (index, pair) in boundaries.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(ExtractError::PlacementOrder {
                    index: index + 1,
                    previous: pair[0],
                    value: pair[1],
                });
            }
        }
        Ok(Self(boundaries))
    }

    /// Number of boundaries (one less than the column count).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Boundary x-coordinates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

/// Result of column layout detection.
#[derive(Clone, Debug)]
pub struct ColumnLayout {
    /// Estimated number of columns, at least 1.
    pub count: usize,
    /// Boundary x-coordinates in image space.
    pub placement: ColumnPlacement,
}

/// Estimate the column layout of a grayscale table image.
pub fn find_column_layout(img: &GrayView<'_>) -> Result<ColumnLayout> {
    let profile = foreground_profile(img);
    let count = estimate_column_count(&profile);
    let placement = find_column_placement(&profile, count)?;
    debug!(
        width = img.width(),
        count,
        boundaries = placement.len(),
        "column layout estimated"
    );
    Ok(ColumnLayout { count, placement })
}

/// Estimate the number of columns from a normalized projection profile.
///
/// The profile is closed to fuse word bands belonging to one column,
/// re-thresholded with Otsu, dilated, and trimmed of its zero border.
/// Each column then contributes an enter and an exit transition, while
/// the trim removes the outermost pair, hence `(changes + 2) / 2`.
pub fn estimate_column_count(profile: &[u8]) -> usize {
    let closed = ops::grey_close(profile, CLOSING_WIDTH);
    let binary = ops::threshold(&closed, ops::otsu_level(&closed));
    let dilated = ops::dilate(&binary, DILATION_WIDTH);
    let (clipped, _) = ops::clip(&dilated);
    let changes = clipped.windows(2).filter(|w| w[0] != w[1]).count();
    // A zero-foreground profile has no transitions and degrades to 1.
    (changes + 2) / 2
}

/// Locate the column boundaries for a known column count.
///
/// The profile is binarized at a fixed low level so fine inter-column
/// whitespace survives, trimmed of its zero border, and every maximal
/// zero run becomes a candidate gap. While more gaps remain than the
/// count allows, the shortest is assumed to be intra-column word spacing
/// and eliminated; ties keep left-to-right discovery order. Surviving
/// gaps are reported by their rightmost sample, in ascending x order.
pub fn find_column_placement(profile: &[u8], count: usize) -> Result<ColumnPlacement> {
    let binary = ops::threshold(profile, PLACEMENT_LEVEL);
    let (clipped, first) = ops::clip(&binary);

    let mut gaps = ops::zero_runs(clipped);
    gaps.sort_by_key(|gap| gap.len());
    while gaps.len() + 1 > count.max(1) {
        let dropped = gaps.remove(0);
        debug!(start = dropped.start, len = dropped.len(), "gap merged away");
    }

    let mut boundaries: Vec<i32> = gaps
        .iter()
        .map(|gap| (first + gap.end - 1) as i32)
        .collect();
    boundaries.sort_unstable();
    ColumnPlacement::new(boundaries)
}
