//! Tree-wide layout options.

/// Options fixed for the lifetime of a [`crate::LayoutTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Quantize flex main-axis offsets and sizes to 1/64 px.
    pub snap_to_layout_unit: bool,
    /// Grow a root's declared size up to its measured minimum.
    pub grow_root_to_min_content: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            snap_to_layout_unit: false,
            grow_root_to_min_content: true,
        }
    }
}

impl LayoutConfig {
    #[inline]
    pub const fn with_snap_to_layout_unit(mut self, snap: bool) -> Self {
        self.snap_to_layout_unit = snap;
        self
    }

    #[inline]
    pub const fn with_grow_root_to_min_content(mut self, grow: bool) -> Self {
        self.grow_root_to_min_content = grow;
        self
    }
}
