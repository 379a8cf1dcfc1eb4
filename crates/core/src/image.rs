//! Borrowed grayscale image view.

use crate::error::{ExtractError, Result};

/// 8-bit grayscale view over caller-owned pixels, row-major, tightly
/// packed. Decoding bytes into pixels is the caller's concern.
#[derive(Clone, Copy, Debug)]
pub struct GrayView<'a> {
    width: usize,
    height: usize,
    data: &'a [u8],
}

impl<'a> GrayView<'a> {
    /// Wrap a pixel buffer, checking that it covers `width * height`.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self> {
        if data.len() != width * height {
            return Err(ExtractError::ImageSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &'a [u8] {
        self.data
    }

    /// One row of pixels.
    pub fn row(&self, y: usize) -> &'a [u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_mismatched_buffer() {
        let data = [0u8; 10];
        assert!(GrayView::new(3, 4, &data).is_err());
        assert!(GrayView::new(5, 2, &data).is_ok());
    }

    #[test]
    fn row_access() {
        let data = [1u8, 2, 3, 4, 5, 6];
        let img = GrayView::new(3, 2, &data).unwrap();
        assert_eq!(img.row(0), &[1, 2, 3]);
        assert_eq!(img.row(1), &[4, 5, 6]);
    }
}
