//! External OCR collaborator contract.
//!
//! Text recognition is injected through [`TextRecognizer`] so the core
//! pipeline stays free of network and service concerns; implementations
//! live with the application (a cloud OCR client, a stored-response
//! replay, a test double).

use crate::error::Result;
use crate::geometry::{Rect, TextBox};

/// One vertex of a recognized word's bounding quadrilateral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// A recognized text fragment with its bounding quad, vertices in the
/// order top-left, top-right, bottom-right, bottom-left.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextAnnotation {
    pub text: String,
    pub quad: [Vertex; 4],
}

/// Injected OCR engine: raw image bytes in, per-word annotations out.
///
/// By convention the first annotation summarizes the full image and is
/// discarded by [`text_boxes_from_annotations`] before clustering.
pub trait TextRecognizer {
    fn detect_text(&self, image: &[u8]) -> Result<Vec<TextAnnotation>>;
}

/// Convert OCR annotations into word boxes, dropping the leading
/// full-image summary annotation.
///
/// A quad is lowered to an axis-aligned rectangle spanned by its top-left
/// and bottom-right vertices.
pub fn text_boxes_from_annotations(annotations: Vec<TextAnnotation>) -> Vec<TextBox> {
    annotations
        .into_iter()
        .skip(1)
        .map(|annotation| {
            let [tl, _tr, br, _bl] = annotation.quad;
            let rect = Rect::new(tl.x, tl.y, br.x - tl.x, br.y - tl.y);
            TextBox::new(annotation.text, rect)
        })
        .collect()
}
