//! Column bucketing of one row's word boxes.

use crate::columns::ColumnPlacement;
use crate::geometry::TextBox;

/// Bucket one row of word boxes into columns.
///
/// Boxes are ordered by left edge and assigned by their right edge alone:
/// a box stays left of a boundary only while its right-x is below it, so
/// a box slightly overlapping the previous column's nominal region still
/// lands in the column holding its rightmost extent. Each boundary search
/// continues from the previous cutoff over the already-sorted right-x
/// sequence. Returns exactly `placement.len() + 1` buckets, empty buckets
/// included.
pub fn split_into_columns(mut row: Vec<TextBox>, placement: &ColumnPlacement) -> Vec<Vec<TextBox>> {
    row.sort_by_key(|b| b.left());
    let rights: Vec<i32> = row.iter().map(|b| b.right()).collect();

    let mut cuts = Vec::with_capacity(placement.len());
    let mut cursor = 0;
    for boundary in placement.iter() {
        cursor += rights[cursor..].partition_point(|&right| right < boundary);
        cuts.push(cursor);
    }

    // Split back to front so earlier cut indices stay valid.
    let mut buckets: Vec<Vec<TextBox>> = Vec::with_capacity(cuts.len() + 1);
    for &cut in cuts.iter().rev() {
        buckets.push(row.split_off(cut));
    }
    buckets.push(row);
    buckets.reverse();
    buckets
}
