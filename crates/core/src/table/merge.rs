//! Cell merging.

use itertools::Itertools;

use crate::geometry::TextBox;

/// Collapse one column bucket into a single cell.
///
/// Texts are joined with single spaces in bucket order; the cell keeps
/// the first box's rectangle, falling back to the last box's. An empty
/// bucket is a blank grid cell, not an error: empty text, no rectangle.
pub fn merge_text_boxes(bucket: Vec<TextBox>) -> TextBox {
    let rect = bucket
        .first()
        .and_then(|b| b.rect)
        .or_else(|| bucket.last().and_then(|b| b.rect));
    let text = bucket.iter().map(|b| b.text.as_str()).join(" ");
    TextBox { text, rect }
}
