//! Tests for table assembly: row clustering, column bucketing, cell
//! merging and the composed build step.

use imgtable_core::{
    ColumnPlacement, Rect, TableSettings, TextBox, build_table, cell_texts, cluster_rows,
    merge_text_boxes, split_into_columns,
};

fn word(text: &str, x: i32, y: i32) -> TextBox {
    TextBox::new(text, Rect::new(x, y, 20, 10))
}

fn texts(row: &[TextBox]) -> Vec<&str> {
    row.iter().map(|b| b.text.as_str()).collect()
}

// ============================================================================
// Row clustering
// ============================================================================

#[test]
fn rows_split_where_consecutive_gap_exceeds_tolerance() {
    // Tops [10, 12, 13, 50, 52], tolerance 5 -> {10,12,13} and {50,52}.
    let boxes = vec![
        word("d", 0, 50),
        word("a", 0, 10),
        word("c", 0, 13),
        word("e", 0, 52),
        word("b", 0, 12),
    ];
    let rows = cluster_rows(boxes, 5);
    assert_eq!(rows.len(), 2);
    assert_eq!(texts(&rows[0]), vec!["a", "b", "c"]);
    assert_eq!(texts(&rows[1]), vec!["d", "e"]);
}

#[test]
fn gap_equal_to_tolerance_stays_in_one_row() {
    let rows = cluster_rows(vec![word("a", 0, 10), word("b", 0, 15)], 5);
    assert_eq!(rows.len(), 1);
}

#[test]
fn consecutive_gaps_allow_row_drift() {
    // Each neighbor gap is within tolerance even though the extremes are
    // not; the chain stays one row by design.
    let rows = cluster_rows(
        vec![word("a", 0, 10), word("b", 0, 14), word("c", 0, 18)],
        5,
    );
    assert_eq!(rows.len(), 1);
}

#[test]
fn no_words_yield_no_rows() {
    assert!(cluster_rows(Vec::new(), 5).is_empty());
}

#[test]
fn single_word_is_a_valid_row() {
    let rows = cluster_rows(vec![word("only", 3, 7)], 5);
    assert_eq!(rows.len(), 1);
    assert_eq!(texts(&rows[0]), vec!["only"]);
}

// ============================================================================
// Column bucketing
// ============================================================================

#[test]
fn boxes_bucket_by_right_edge() {
    let placement = ColumnPlacement::new(vec![50, 100]).unwrap();
    // Right edges 30, 80, 130.
    let row = vec![word("a", 10, 0), word("b", 60, 0), word("c", 110, 0)];
    let buckets = split_into_columns(row, &placement);
    assert_eq!(buckets.len(), 3);
    assert_eq!(texts(&buckets[0]), vec!["a"]);
    assert_eq!(texts(&buckets[1]), vec!["b"]);
    assert_eq!(texts(&buckets[2]), vec!["c"]);
}

#[test]
fn bucketing_is_invariant_under_input_order() {
    let placement = ColumnPlacement::new(vec![50, 100]).unwrap();
    let sorted = vec![word("a", 10, 0), word("b", 60, 0), word("c", 110, 0)];
    let shuffled = vec![word("c", 110, 0), word("a", 10, 0), word("b", 60, 0)];
    assert_eq!(
        split_into_columns(sorted, &placement),
        split_into_columns(shuffled, &placement)
    );
}

#[test]
fn missing_column_leaves_an_empty_bucket() {
    let placement = ColumnPlacement::new(vec![50, 100]).unwrap();
    let row = vec![word("a", 10, 0), word("c", 110, 0)];
    let buckets = split_into_columns(row, &placement);
    assert_eq!(buckets.len(), 3);
    assert!(buckets[1].is_empty());
}

#[test]
fn right_edge_on_boundary_moves_to_next_column() {
    let placement = ColumnPlacement::new(vec![50]).unwrap();
    // Right edge exactly 50: not strictly left of the boundary.
    let buckets = split_into_columns(vec![word("a", 30, 0)], &placement);
    assert!(buckets[0].is_empty());
    assert_eq!(texts(&buckets[1]), vec!["a"]);
}

#[test]
fn empty_row_still_produces_all_buckets() {
    let placement = ColumnPlacement::new(vec![50, 100]).unwrap();
    let buckets = split_into_columns(Vec::new(), &placement);
    assert_eq!(buckets.len(), 3);
    assert!(buckets.iter().all(Vec::is_empty));
}

// ============================================================================
// Cell merging
// ============================================================================

#[test]
fn merged_cell_joins_texts_and_keeps_first_rect() {
    let a = Rect::new(0, 0, 20, 10);
    let b = Rect::new(25, 0, 20, 10);
    let cell = merge_text_boxes(vec![
        TextBox::new("Foo", a),
        TextBox::new("Bar", b),
    ]);
    assert_eq!(cell.text, "Foo Bar");
    assert_eq!(cell.rect, Some(a));
}

#[test]
fn merged_cell_falls_back_to_last_rect() {
    let b = Rect::new(25, 0, 20, 10);
    let cell = merge_text_boxes(vec![
        TextBox {
            text: "Foo".into(),
            rect: None,
        },
        TextBox::new("Bar", b),
    ]);
    assert_eq!(cell.rect, Some(b));
}

#[test]
fn empty_bucket_is_a_blank_cell() {
    let cell = merge_text_boxes(Vec::new());
    assert_eq!(cell.text, "");
    assert_eq!(cell.rect, None);
}

// ============================================================================
// Composed assembly
// ============================================================================

#[test]
fn every_row_has_one_more_cell_than_boundaries() {
    let placement = ColumnPlacement::new(vec![50, 100]).unwrap();
    let words = vec![
        word("a1", 10, 10),
        word("b1", 60, 11),
        word("a2", 10, 40),
        word("c2", 110, 41),
    ];
    let table = build_table(words, &placement, &TableSettings::default());
    assert_eq!(table.len(), 2);
    for row in &table {
        assert_eq!(row.len(), placement.len() + 1);
    }
}

#[test]
fn every_word_lands_in_exactly_one_cell() {
    let placement = ColumnPlacement::new(vec![50, 100]).unwrap();
    let words = vec![
        word("a1", 10, 10),
        word("b1", 60, 11),
        word("c1", 110, 12),
        word("a2", 10, 40),
        word("b2", 60, 41),
        word("c2", 110, 42),
    ];
    let mut expected: Vec<String> = words.iter().map(|w| w.text.clone()).collect();
    expected.sort_unstable();

    let table = build_table(words, &placement, &TableSettings::default());
    let mut seen: Vec<String> = table
        .iter()
        .flatten()
        .filter(|cell| !cell.text.is_empty())
        .map(|cell| cell.text.clone())
        .collect();
    seen.sort_unstable();
    assert_eq!(seen, expected);
}

#[test]
fn same_cell_fragments_are_concatenated() {
    let placement = ColumnPlacement::new(vec![100]).unwrap();
    let words = vec![
        word("total", 10, 10),
        word("amount", 35, 10),
        word("42", 110, 10),
    ];
    let grid = cell_texts(build_table(words, &placement, &TableSettings::default()));
    assert_eq!(grid, vec![vec!["total amount".to_string(), "42".to_string()]]);
}

#[test]
fn blank_cells_are_empty_strings() {
    let placement = ColumnPlacement::new(vec![50]).unwrap();
    let words = vec![word("a1", 10, 10), word("b2", 60, 40)];
    let grid = cell_texts(build_table(words, &placement, &TableSettings::default()));
    assert_eq!(
        grid,
        vec![
            vec!["a1".to_string(), String::new()],
            vec![String::new(), "b2".to_string()],
        ]
    );
}
