//! Word box assembly into a rows-by-columns cell grid.
//!
//! Unordered OCR word boxes are clustered into rows by vertical
//! position, each row is bucketed into columns against the detected
//! boundaries, and each bucket collapses into one cell.

mod merge;
mod rows;
mod split;
mod types;

pub use merge::merge_text_boxes;
pub use rows::cluster_rows;
pub use split::split_into_columns;
pub use types::{DEFAULT_Y_TOLERANCE, TableSettings};

use tracing::debug;

use crate::columns::ColumnPlacement;
use crate::geometry::TextBox;

/// Rows of merged cells; every row holds exactly `placement.len() + 1`
/// cells.
pub type Table = Vec<Vec<TextBox>>;

/// Assemble recognized words into a table: cluster into rows, bucket each
/// row into columns, merge each bucket into one cell.
pub fn build_table(
    words: Vec<TextBox>,
    placement: &ColumnPlacement,
    settings: &TableSettings,
) -> Table {
    let rows = cluster_rows(words, settings.y_tolerance);
    debug!(
        rows = rows.len(),
        columns = placement.len() + 1,
        "assembling table"
    );
    rows.into_iter()
        .map(|row| {
            split_into_columns(row, placement)
                .into_iter()
                .map(merge_text_boxes)
                .collect()
        })
        .collect()
}

/// Lower a table of merged cells to the plain string grid.
pub fn cell_texts(table: Table) -> Vec<Vec<String>> {
    table
        .into_iter()
        .map(|row| row.into_iter().map(|cell| cell.text).collect())
        .collect()
}
