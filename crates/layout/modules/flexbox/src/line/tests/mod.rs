//! Tests for single-line flex layout.

use super::*;
use crate::item::{Basis, FlexChild};
use boxflow_box::{Rect, Vec2};

mod distribution_tests;

/// Row container whose content box starts at the origin.
#[inline]
pub fn row_container(width: f32) -> FlexContainerInputs {
    FlexContainerInputs::new(FlowDirection::Row, Rect::new(0.0, 0.0, width, 50.0))
}

/// Inflexible child with a pixel basis.
#[inline]
pub fn fixed(size: f32) -> FlexChild {
    FlexChild::with_factors(0.0, 0.0, Basis::pixels(size))
}

/// Main sizes (widths for row flows) of a line's placements.
#[inline]
pub fn widths(line: &FlexLine) -> Vec<f32> {
    line.placements.iter().map(|rect| rect.width).collect()
}

/// Start positions (x for row flows) of a line's placements.
#[inline]
pub fn xs(line: &FlexLine) -> Vec<f32> {
    line.placements.iter().map(|rect| rect.x).collect()
}

/// Approximate float comparison for sizes that go through division.
#[inline]
pub fn approx(actual: f32, expected: f32) -> bool {
    (actual - expected).abs() < 0.01
}

#[test]
/// # Panics
/// Panics if an empty line produces placements or free space other than the full width.
fn empty_line() {
    let line = layout_single_line(&row_container(120.0), &[]);
    assert!(line.placements.is_empty());
    assert_eq!(line.free_space, 120.0);
}

#[test]
/// # Panics
/// Panics if a default child with a measured minimum is not sized to it.
fn content_basis_uses_measured_minimum() {
    let child = FlexChild::default().with_min_content(Vec2::new(40.0, 10.0));
    let line = layout_single_line(&row_container(300.0), &[child]);
    assert_eq!(widths(&line), vec![40.0]);
}
