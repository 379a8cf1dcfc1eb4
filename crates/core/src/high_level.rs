//! High-level extraction entry points composing the full pipeline.

use crate::columns::find_column_layout;
use crate::error::Result;
use crate::geometry::TextBox;
use crate::image::GrayView;
use crate::ocr::{TextRecognizer, text_boxes_from_annotations};
use crate::table::{TableSettings, build_table, cell_texts};

/// Reconstruct the cell grid of one table image from recognized words.
///
/// Column boundaries are estimated from the pixel data alone; `words`
/// are the OCR word boxes for the same image. An empty word list is a
/// defined edge case and yields an empty table.
pub fn extract_table(
    gray: &GrayView<'_>,
    words: Vec<TextBox>,
    settings: &TableSettings,
) -> Result<Vec<Vec<String>>> {
    if words.is_empty() {
        return Ok(Vec::new());
    }
    let layout = find_column_layout(gray)?;
    Ok(cell_texts(build_table(words, &layout.placement, settings)))
}

/// Run the injected OCR engine on the raw image bytes, then reconstruct
/// the table from the decoded grayscale pixels.
///
/// `image` and `gray` must describe the same picture; decoding bytes to
/// pixels is the caller's concern.
pub fn extract_table_with_recognizer(
    image: &[u8],
    gray: &GrayView<'_>,
    recognizer: &dyn TextRecognizer,
    settings: &TableSettings,
) -> Result<Vec<Vec<String>>> {
    let annotations = recognizer.detect_text(image)?;
    let words = text_boxes_from_annotations(annotations);
    extract_table(gray, words, settings)
}
