//! Table assembly settings.

/// Default maximum top-edge gap, in pixels, between vertically adjacent
/// word boxes of the same row.
pub const DEFAULT_Y_TOLERANCE: i32 = 5;

/// Settings for assembling word boxes into a table.
#[derive(Clone, Debug)]
pub struct TableSettings {
    /// Row clustering tolerance; see [`super::cluster_rows`].
    pub y_tolerance: i32,
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            y_tolerance: DEFAULT_Y_TOLERANCE,
        }
    }
}
