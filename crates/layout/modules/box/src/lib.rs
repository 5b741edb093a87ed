//! Box model: outer rectangle plus margin/border/padding insets → content rectangle.

pub mod geometry;
pub use geometry::{Rect, Vec2};

use serde::Serialize;

/// Insets on the four sides of a box, in px.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same inset on every side.
    #[inline]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `left + right`.
    #[inline]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[inline]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Total inset per axis as an extent.
    #[inline]
    pub fn total(&self) -> Vec2 {
        Vec2::new(self.horizontal(), self.vertical())
    }

    /// Offset of the inner rectangle's origin.
    #[inline]
    pub const fn leading(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    /// Copy with every side clamped to be non-negative.
    pub fn non_negative(self) -> Self {
        Self::new(
            self.top.max(0.0),
            self.right.max(0.0),
            self.bottom.max(0.0),
            self.left.max(0.0),
        )
    }
}

impl core::ops::Add for Insets {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
            self.left + rhs.left,
        )
    }
}

/// Per-node box model.
///
/// The outer rectangle is what the parent assigns (it includes the margin);
/// `content` is derived from it by [`BoxModel::compute`] and cached until the
/// next compute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct BoxModel {
    pub outer_pos: Vec2,
    pub outer_size: Vec2,
    /// Margins may be negative.
    pub margin: Insets,
    /// Never negative; see [`BoxModel::set_border`].
    pub border: Insets,
    /// Never negative; see [`BoxModel::set_padding`].
    pub padding: Insets,
    content: Rect,
}

impl BoxModel {
    pub fn new(margin: Insets, border: Insets, padding: Insets) -> Self {
        Self {
            margin,
            border: border.non_negative(),
            padding: padding.non_negative(),
            ..Self::default()
        }
    }

    pub fn set_margin(&mut self, margin: Insets) {
        self.margin = margin;
    }

    /// Border widths are clamped to be non-negative.
    pub fn set_border(&mut self, border: Insets) {
        self.border = border.non_negative();
    }

    /// Padding is clamped to be non-negative.
    pub fn set_padding(&mut self, padding: Insets) {
        self.padding = padding.non_negative();
    }

    /// Margin + border + padding.
    #[inline]
    pub fn insets(&self) -> Insets {
        self.margin + self.border + self.padding
    }

    /// The outer rectangle (margin box) as last assigned.
    #[inline]
    pub const fn outer(&self) -> Rect {
        Rect::from_origin_size(self.outer_pos, self.outer_size)
    }

    /// The content rectangle produced by the last [`BoxModel::compute`].
    #[inline]
    pub const fn content(&self) -> Rect {
        self.content
    }

    /// Store `outer` and derive the content rectangle from it.
    ///
    /// Width and height are floored at zero so over-inset boxes collapse
    /// instead of going negative.
    pub fn compute(&mut self, outer: Rect) -> Rect {
        self.outer_pos = outer.origin();
        self.outer_size = outer.size().non_negative();
        self.content = content_rect(outer, &self.insets());
        self.content
    }
}

/// Shrink `outer` by `insets`, flooring the resulting size at zero.
pub fn content_rect(outer: Rect, insets: &Insets) -> Rect {
    let origin = outer.origin() + insets.leading();
    let size = (outer.size() - insets.total()).non_negative();
    Rect::from_origin_size(origin, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if a box without insets does not report its outer rect as content.
    fn zero_insets_content_equals_outer() {
        let mut model = BoxModel::default();
        let outer = Rect::new(10.0, 10.0, 100.0, 50.0);
        assert_eq!(model.compute(outer), outer);
        assert_eq!(model.outer(), outer);
    }

    #[test]
    /// # Panics
    /// Panics if the content origin/size do not account for all three inset layers.
    fn insets_stack_margin_border_padding() {
        let mut model = BoxModel::new(Insets::uniform(5.0), Insets::uniform(1.0), Insets::uniform(10.0));
        let content = model.compute(Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(content.x, 16.0);
        assert_eq!(content.y, 16.0);
        assert_eq!(content.width, 168.0);
        assert_eq!(content.height, 68.0);
    }

    #[test]
    /// # Panics
    /// Panics if an over-inset box yields a negative size.
    fn content_size_clamps_to_zero() {
        let mut model = BoxModel::new(Insets::uniform(100.0), Insets::ZERO, Insets::ZERO);
        let content = model.compute(Rect::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(content.width, 0.0);
        assert_eq!(content.height, 0.0);
    }

    #[test]
    /// # Panics
    /// Panics if negative padding/border survive, or negative margins are rejected.
    fn negative_padding_and_border_are_clamped() {
        let model = BoxModel::new(
            Insets::uniform(-4.0),
            Insets::uniform(-1.0),
            Insets::new(-2.0, 3.0, 0.0, 0.0),
        );
        assert_eq!(model.border, Insets::ZERO);
        assert_eq!(model.padding, Insets::new(0.0, 3.0, 0.0, 0.0));
        assert_eq!(model.margin, Insets::uniform(-4.0));
    }
}
