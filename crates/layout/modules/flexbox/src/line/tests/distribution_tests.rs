//! Tests for grow/shrink resolution and freezing.

use super::*;
use crate::line::lengths::FactorMode;

#[test]
/// # Panics
/// Panics if a lone growing child does not fill the line.
fn single_grow_child_fills_container() {
    let child = FlexChild::with_factors(1.0, 1.0, Basis::pixels(0.0));
    let line = layout_single_line(&row_container(300.0), &[child]);
    assert_eq!(line.mode, FactorMode::Grow);
    assert_eq!(line.placements, vec![Rect::new(0.0, 0.0, 300.0, 50.0)]);
    assert_eq!(line.free_space, 0.0);
}

#[test]
/// # Panics
/// Panics if the fixed item does not keep its basis while the grow item takes the rest.
fn fixed_and_grow_split() {
    let grow = FlexChild::with_factors(1.0, 1.0, Basis::pixels(0.0));
    let fixed_b = FlexChild::with_factors(0.0, 1.0, Basis::pixels(100.0));
    let line = layout_single_line(&row_container(300.0), &[grow, fixed_b]);
    assert_eq!(widths(&line), vec![200.0, 100.0]);
    assert_eq!(xs(&line), vec![0.0, 200.0]);
}

#[test]
/// # Panics
/// Panics if a max-clamped item is not frozen and its excess redistributed.
fn grow_respects_max_and_redistributes() {
    let mut items = vec![
        FlexChild::with_factors(1.0, 0.0, Basis::pixels(50.0)),
        FlexChild::with_factors(1.0, 0.0, Basis::pixels(50.0)),
        FlexChild::with_factors(1.0, 0.0, Basis::pixels(50.0)),
    ];
    if let Some(first) = items.get_mut(0) {
        first.max_main = 80.0;
    }
    let line = layout_single_line(&row_container(300.0), &items);
    assert_eq!(widths(&line), vec![80.0, 110.0, 110.0]);
    assert_eq!(line.freeze_iterations, 2);
}

#[test]
/// # Panics
/// Panics if shrinking violates a minimum or the line does not fit exactly.
fn shrink_respects_min_and_freezes() {
    let mut items = vec![
        FlexChild::with_factors(0.0, 1.0, Basis::pixels(50.0)),
        FlexChild::with_factors(0.0, 1.0, Basis::pixels(50.0)),
        FlexChild::with_factors(0.0, 1.0, Basis::pixels(50.0)),
    ];
    if let Some(first) = items.get_mut(0) {
        first.min_main = 40.0;
    }
    let line = layout_single_line(&row_container(100.0), &items);
    assert_eq!(line.mode, FactorMode::Shrink);
    assert_eq!(widths(&line), vec![40.0, 30.0, 30.0]);
    assert_eq!(line.free_space, 0.0);
}

#[test]
/// # Panics
/// Panics if overflow blocked by minimums differs from the unmet amount.
fn shrink_blocked_by_minimums_overflows() {
    let item = FlexChild::with_factors(0.0, 1.0, Basis::pixels(80.0)).with_min_max(70.0, f32::INFINITY);
    let line = layout_single_line(&row_container(100.0), &[item, item]);
    assert_eq!(widths(&line), vec![70.0, 70.0]);
    assert_eq!(line.free_space, -40.0);
}

#[test]
/// # Panics
/// Panics if the distributed space differs from the free space when nothing clamps.
fn free_space_is_conserved() {
    let items = [
        FlexChild::with_factors(1.0, 1.0, Basis::pixels(50.0)),
        FlexChild::with_factors(2.0, 1.0, Basis::pixels(100.0)),
        FlexChild::with_factors(3.0, 1.0, Basis::pixels(30.0)),
    ];
    let line = layout_single_line(&row_container(400.0), &items);
    let grown: f32 = widths(&line)
        .iter()
        .zip([50.0f32, 100.0, 30.0])
        .map(|(target, base)| target - base)
        .sum();
    assert!(approx(grown, 220.0));
    let sizes = widths(&line);
    assert!(approx(sizes.first().copied().unwrap_or(0.0), 50.0 + 220.0 / 6.0));
    assert!(approx(sizes.get(2).copied().unwrap_or(0.0), 30.0 + 110.0));
}

#[test]
/// # Panics
/// Panics if a fractional grow total distributes the whole free space.
fn fractional_grow_total_scales_free_space() {
    let child = FlexChild::with_factors(0.5, 1.0, Basis::pixels(0.0));
    let line = layout_single_line(&row_container(200.0), &[child]);
    assert_eq!(widths(&line), vec![100.0]);
    assert_eq!(line.free_space, 100.0);
}

#[test]
/// # Panics
/// Panics if a zero grow total distributes space instead of keeping bases.
fn zero_grow_total_keeps_bases() {
    let child = FlexChild::with_factors(0.0, 1.0, Basis::pixels(50.0));
    let line = layout_single_line(&row_container(300.0), &[child]);
    assert_eq!(widths(&line), vec![50.0]);
}

#[test]
/// # Panics
/// Panics if a basis flagged as minimum shrinks below itself.
fn minimum_basis_does_not_shrink() {
    let floor = FlexChild::with_factors(0.0, 1.0, Basis::pixels(80.0).with_minimum(true));
    let plain = FlexChild::with_factors(0.0, 1.0, Basis::pixels(80.0));
    let line = layout_single_line(&row_container(100.0), &[floor, plain]);
    assert_eq!(widths(&line), vec![80.0, 20.0]);
}

#[test]
/// # Panics
/// Panics if an infeasible min/max pair does not resolve to the minimum.
fn infeasible_bounds_prefer_minimum() {
    let child = FlexChild::with_factors(1.0, 1.0, Basis::pixels(0.0)).with_min_max(60.0, 40.0);
    let line = layout_single_line(&row_container(300.0), &[child]);
    assert_eq!(widths(&line), vec![60.0]);
}

#[test]
/// # Panics
/// Panics if every resolved size is not inside its bounds after mixed clamping.
fn targets_respect_bounds() {
    let items = [
        FlexChild::with_factors(1.0, 1.0, Basis::pixels(10.0)).with_min_max(0.0, 30.0),
        FlexChild::with_factors(1.0, 1.0, Basis::pixels(10.0)).with_min_max(50.0, 60.0),
        FlexChild::with_factors(4.0, 1.0, Basis::pixels(10.0)).with_min_max(0.0, 100.0),
    ];
    let line = layout_single_line(&row_container(500.0), &items);
    for (size, item) in widths(&line).iter().zip(items.iter()) {
        assert!(*size >= item.min_main - 0.01, "{size} below {}", item.min_main);
        assert!(*size <= item.max_main + 0.01, "{size} above {}", item.max_main);
    }
    assert_eq!(widths(&line), vec![30.0, 60.0, 100.0]);
}
