//! Phase A helper: fold children's minimum sizes into the container's.

use boxflow_box::Vec2;
use log::warn;

use crate::axis::{Axes, FlowDirection};
use crate::item::{FlexChild, clamp_main};

/// Minimum main size a child contributes: its measured minimum capped by
/// `max_main`, then raised to its declared `min_main`. A declared minimum
/// above the maximum wins.
#[inline]
pub fn child_min_main(child: &FlexChild, direction: FlowDirection) -> f32 {
    let measured = Axes::from_vec2(child.min_content, direction).main;
    if child.min_main > child.max_main {
        warn!(
            target: "boxflow::flexbox::min_content",
            "[FLEX-MIN] min {:.3} exceeds max {:.3}; minimum wins",
            child.min_main,
            child.max_main
        );
    }
    clamp_main(measured, child.min_main, child.max_main)
}

/// Minimum content size of a flex container's content box (physical).
///
/// Main axis: sum of the children's minimum main sizes plus gaps. Cross axis:
/// the largest child minimum. The caller adds the container's own insets.
pub fn aggregate_min_content(direction: FlowDirection, gap: f32, children: &[FlexChild]) -> Vec2 {
    let mut total = Axes::new(gap_total(gap, children.len()), 0.0f32);
    for child in children {
        total.main += child_min_main(child, direction);
        total.cross = total
            .cross
            .max(Axes::from_vec2(child.min_content, direction).cross);
    }
    total.to_vec2(direction)
}

/// Total gap space between `count` items.
#[inline]
pub fn gap_total(gap: f32, count: usize) -> f32 {
    gap.max(0.0) * count.saturating_sub(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Basis;

    #[test]
    /// # Panics
    /// Panics if the row minimum is not the clamped sum / max of the children.
    fn row_sums_main_and_maxes_cross() {
        let children = [
            FlexChild::default().with_min_content(Vec2::new(20.0, 5.0)),
            FlexChild::with_factors(1.0, 1.0, Basis::pixels(0.0))
                .with_min_max(30.0, f32::INFINITY)
                .with_min_content(Vec2::new(10.0, 12.0)),
        ];
        let min = aggregate_min_content(FlowDirection::Row, 4.0, &children);
        assert_eq!(min, Vec2::new(54.0, 12.0));
    }

    #[test]
    /// # Panics
    /// Panics if the column minimum does not use heights for the main axis.
    fn column_uses_heights() {
        let children = [
            FlexChild::default().with_min_content(Vec2::new(20.0, 5.0)),
            FlexChild::default().with_min_content(Vec2::new(10.0, 12.0)),
        ];
        let min = aggregate_min_content(FlowDirection::ColumnReversed, 0.0, &children);
        assert_eq!(min, Vec2::new(20.0, 17.0));
    }

    #[test]
    /// # Panics
    /// Panics if a max constraint does not cap the measured minimum.
    fn max_caps_measured_minimum() {
        let child = FlexChild::default()
            .with_min_max(0.0, 15.0)
            .with_min_content(Vec2::new(40.0, 0.0));
        assert_eq!(child_min_main(&child, FlowDirection::Row), 15.0);
    }
}
