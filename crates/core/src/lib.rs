//! imgtable - table grid reconstruction from scanned table images.
//!
//! Given a grayscale scan of a table and the word boxes produced by an
//! external OCR engine, this crate estimates the column layout from the
//! pixel projection profile and reassembles the recognized words into a
//! rows-by-columns grid of cell strings.
//!
//! The pipeline is pure and synchronous: image decoding and text
//! recognition are injected collaborators, never performed here.

pub mod columns;
pub mod error;
pub mod geometry;
pub mod high_level;
pub mod image;
pub mod ocr;
pub mod table;

pub use columns::{
    ColumnLayout, ColumnPlacement, estimate_column_count, find_column_layout,
    find_column_placement, foreground_profile,
};
pub use error::{ExtractError, Result};
pub use geometry::{Point, Rect, TextBox};
pub use high_level::{extract_table, extract_table_with_recognizer};
pub use image::GrayView;
pub use ocr::{TextAnnotation, TextRecognizer, Vertex, text_boxes_from_annotations};
pub use table::{
    DEFAULT_Y_TOLERANCE, Table, TableSettings, build_table, cell_texts, cluster_rows,
    merge_text_boxes, split_into_columns,
};
