//! Row clustering by vertical position.

use crate::geometry::TextBox;

/// Group word boxes into rows by top y-coordinate.
///
/// Boxes are sorted by top edge; a gap larger than `y_tolerance` between
/// consecutive sorted boxes starts a new row. Clustering looks only at
/// consecutive gaps, not at the distance to a row anchor, so a row can
/// drift by up to `y_tolerance * (n - 1)` across `n` boxes; callers tune
/// the tolerance rather than the rule. Rows come back top to bottom; an
/// empty input yields no rows.
pub fn cluster_rows(mut boxes: Vec<TextBox>, y_tolerance: i32) -> Vec<Vec<TextBox>> {
    boxes.sort_by_key(|b| b.top());

    let mut rows: Vec<Vec<TextBox>> = Vec::new();
    let mut current: Vec<TextBox> = Vec::new();
    for b in boxes {
        if let Some(last) = current.last() {
            if b.top() - last.top() > y_tolerance {
                rows.push(std::mem::take(&mut current));
            }
        }
        current.push(b);
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}
