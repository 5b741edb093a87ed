//! Main/cross axis abstraction.
//!
//! All flex arithmetic is written against [`Axes`]; [`get_axis`] and
//! [`set_axis`] are the only places that touch physical x/y.

use boxflow_box::{Rect, Vec2};

/// Main-axis direction of a flex container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlowDirection {
    #[default]
    Row,
    RowReversed,
    Column,
    ColumnReversed,
}

impl FlowDirection {
    /// Row and row-reversed share the horizontal main axis.
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReversed)
    }

    /// Reversal only flips placement order, never the axis mapping.
    #[inline]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Self::RowReversed | Self::ColumnReversed)
    }
}

/// Wrapping mode. Only single-line layout is performed; `Wrap` is accepted
/// and stored but laid out as `NoWrap`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
}

/// A (main, cross) pair.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Axes<T> {
    pub main: T,
    pub cross: T,
}

impl<T> Axes<T> {
    #[inline]
    pub const fn new(main: T, cross: T) -> Self {
        Self { main, cross }
    }
}

impl Axes<f32> {
    /// Read a physical extent or point axis-relatively.
    #[inline]
    pub const fn from_vec2(value: Vec2, direction: FlowDirection) -> Self {
        if direction.is_row() {
            Self::new(value.x, value.y)
        } else {
            Self::new(value.y, value.x)
        }
    }

    /// Convert back to a physical extent or point.
    #[inline]
    pub const fn to_vec2(self, direction: FlowDirection) -> Vec2 {
        if direction.is_row() {
            Vec2::new(self.main, self.cross)
        } else {
            Vec2::new(self.cross, self.main)
        }
    }
}

/// A start coordinate plus an extent along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Span {
    pub start: f32,
    pub extent: f32,
}

impl Span {
    #[inline]
    pub const fn new(start: f32, extent: f32) -> Self {
        Self { start, extent }
    }

    /// `start + extent`.
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.extent
    }
}

/// Split a rectangle into its main and cross spans: `(x, width)` is the main
/// span for row flows, `(y, height)` for column flows.
#[inline]
pub const fn get_axis(rect: Rect, direction: FlowDirection) -> Axes<Span> {
    let horizontal = Span::new(rect.x, rect.width);
    let vertical = Span::new(rect.y, rect.height);
    if direction.is_row() {
        Axes::new(horizontal, vertical)
    } else {
        Axes::new(vertical, horizontal)
    }
}

/// Inverse of [`get_axis`]: write main/cross spans back into `rect`.
#[inline]
pub fn set_axis(rect: &mut Rect, direction: FlowDirection, spans: Axes<Span>) {
    let (horizontal, vertical) = if direction.is_row() {
        (spans.main, spans.cross)
    } else {
        (spans.cross, spans.main)
    };
    rect.x = horizontal.start;
    rect.width = horizontal.extent;
    rect.y = vertical.start;
    rect.height = vertical.extent;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if row flows do not map main to x/width.
    fn row_maps_main_to_horizontal() {
        let rect = Rect::new(1.0, 2.0, 30.0, 40.0);
        for direction in [FlowDirection::Row, FlowDirection::RowReversed] {
            let spans = get_axis(rect, direction);
            assert_eq!(spans.main, Span::new(1.0, 30.0));
            assert_eq!(spans.cross, Span::new(2.0, 40.0));
        }
    }

    #[test]
    /// # Panics
    /// Panics if column flows do not map main to y/height.
    fn column_maps_main_to_vertical() {
        let rect = Rect::new(1.0, 2.0, 30.0, 40.0);
        for direction in [FlowDirection::Column, FlowDirection::ColumnReversed] {
            let spans = get_axis(rect, direction);
            assert_eq!(spans.main, Span::new(2.0, 40.0));
            assert_eq!(spans.cross, Span::new(1.0, 30.0));
        }
    }

    #[test]
    /// # Panics
    /// Panics if `set_axis` is not the inverse of `get_axis`.
    fn set_axis_inverts_get_axis() {
        let original = Rect::new(5.0, 6.0, 7.0, 8.0);
        for direction in [
            FlowDirection::Row,
            FlowDirection::RowReversed,
            FlowDirection::Column,
            FlowDirection::ColumnReversed,
        ] {
            let mut rebuilt = Rect::ZERO;
            set_axis(&mut rebuilt, direction, get_axis(original, direction));
            assert_eq!(rebuilt, original);
        }
    }

    #[test]
    /// # Panics
    /// Panics if vec2 conversion swaps components for row flows.
    fn vec2_conversion() {
        let size = Vec2::new(10.0, 20.0);
        let column = Axes::from_vec2(size, FlowDirection::Column);
        assert_eq!(column, Axes::new(20.0, 10.0));
        assert_eq!(column.to_vec2(FlowDirection::Column), size);
        assert_eq!(Axes::from_vec2(size, FlowDirection::Row), Axes::new(10.0, 20.0));
    }
}
