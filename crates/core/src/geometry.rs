//! Geometric primitives: points, rectangles and recognized text boxes.

/// A 2D point in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// An axis-aligned rectangle given by its top-left corner and size.
///
/// Width and height are non-negative for every rectangle produced by the
/// ingestion paths; the derived corner accessors rely on that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner.
    pub fn tl(&self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Top-right corner.
    pub fn tr(&self) -> Point {
        Point {
            x: self.x + self.width,
            y: self.y,
        }
    }

    /// Bottom-left corner.
    pub fn bl(&self) -> Point {
        Point {
            x: self.x,
            y: self.y + self.height,
        }
    }

    /// Bottom-right corner.
    pub fn br(&self) -> Point {
        Point {
            x: self.x + self.width,
            y: self.y + self.height,
        }
    }
}

/// A text fragment paired with its bounding rectangle.
///
/// OCR ingestion always supplies a rectangle; cells synthesized by the
/// cell merger are the only boxes that may carry `None` (an empty bucket
/// has no rectangle to inherit).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextBox {
    pub text: String,
    pub rect: Option<Rect>,
}

impl TextBox {
    pub fn new(text: impl Into<String>, rect: Rect) -> Self {
        Self {
            text: text.into(),
            rect: Some(rect),
        }
    }

    /// Top edge y-coordinate; boxes without a rectangle sort at the origin.
    pub(crate) fn top(&self) -> i32 {
        self.rect.map_or(0, |r| r.y)
    }

    /// Left edge x-coordinate.
    pub(crate) fn left(&self) -> i32 {
        self.rect.map_or(0, |r| r.x)
    }

    /// Right edge x-coordinate (top-right corner).
    pub(crate) fn right(&self) -> i32 {
        self.rect.map_or(0, |r| r.tr().x)
    }
}
