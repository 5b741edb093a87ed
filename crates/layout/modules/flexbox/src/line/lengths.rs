//! Phase B: flex base sizes, hypothetical sizes and the factor mode.

use log::{debug, trace, warn};
use smallvec::SmallVec;

use crate::axis::FlowDirection;
use crate::item::{BasisUnit, FlexChild, clamp_main};
use crate::line::min_content::child_min_main;

/// Whether the line distributes positive space (grow) or absorbs overflow (shrink).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FactorMode {
    Grow,
    Shrink,
}

/// Per-child scratch state for one layout pass. Rebuilt from scratch on every
/// pass and never read outside it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexSlot {
    pub grow: f32,
    pub shrink: f32,
    pub base_size: f32,
    pub hypothetical_size: f32,
    pub target_size: f32,
    pub min_size: f32,
    pub max_size: f32,
    pub frozen: bool,
    pub scaled_shrink_factor: f32,
}

/// Inline capacity covers typical toolbars/rows without heap allocation.
pub type Slots = SmallVec<FlexSlot, 8>;

/// Output of [`measure_lengths`].
#[derive(Clone, Debug)]
pub struct LengthPlan {
    pub slots: Slots,
    pub mode: FactorMode,
    pub hypothetical_total: f32,
    pub unfrozen_grow_total: f32,
    pub unfrozen_shrink_total: f32,
}

/// Resolve aspect-unit base sizes.
///
/// Every aspect child gets `value * available / count`, where `available` is
/// the main space left after all declared minimums. A child whose share would
/// exceed its maximum is pinned to it and leaves the pool (returning its
/// minimum share, taking its pinned size); the factor is then recomputed once
/// for the others. This rebalancing is a single pass.
fn aspect_bases(available_main: f32, children: &[FlexChild]) -> SmallVec<Option<f32>, 8> {
    let mut bases: SmallVec<Option<f32>, 8> = children.iter().map(|_| None).collect();
    let aspect_count = children
        .iter()
        .filter(|child| child.factors.basis.unit == BasisUnit::Aspect)
        .count();
    if aspect_count == 0 {
        return bases;
    }
    let min_total: f32 = children.iter().map(|child| child.min_main).sum();
    let available = available_main - min_total;
    let factor = available / aspect_count as f32;

    let mut remaining_count = aspect_count;
    let mut remaining_available = available;
    for (child, base) in children.iter().zip(bases.iter_mut()) {
        if child.factors.basis.unit != BasisUnit::Aspect {
            continue;
        }
        if child.factors.basis.value * factor > child.max_main {
            *base = Some(child.max_main);
            remaining_count -= 1;
            remaining_available += child.min_main - child.max_main;
        }
    }
    let rest_factor = if remaining_count == 0 {
        0.0
    } else {
        remaining_available / remaining_count as f32
    };
    debug!(
        target: "boxflow::flexbox::lengths",
        "[FLEX-ASPECT] count={aspect_count} available={available:.3} factor={factor:.3} pinned={} rest_factor={rest_factor:.3}",
        aspect_count - remaining_count
    );
    for (child, base) in children.iter().zip(bases.iter_mut()) {
        if child.factors.basis.unit == BasisUnit::Aspect && base.is_none() {
            *base = Some((child.factors.basis.value * rest_factor).max(0.0));
        }
    }
    bases
}

/// Compute base and hypothetical sizes for each child and choose the factor mode.
///
/// `available_main` is the container's content main size minus gaps.
pub fn measure_lengths(
    available_main: f32,
    direction: FlowDirection,
    children: &[FlexChild],
) -> LengthPlan {
    let aspect = aspect_bases(available_main, children);
    let mut slots = Slots::with_capacity(children.len());
    let mut hypothetical_total = 0.0f32;
    let mut unfrozen_grow_total = 0.0f32;
    let mut unfrozen_shrink_total = 0.0f32;

    for (child, aspect_base) in children.iter().zip(aspect.iter()) {
        let measured_min = child_min_main(child, direction);
        let basis = child.factors.basis;
        let base_size = match basis.unit {
            BasisUnit::Pixel => basis.value.max(0.0),
            BasisUnit::Aspect => aspect_base.unwrap_or(0.0),
            BasisUnit::Content => measured_min,
        };
        let min_size = if basis.minimum {
            measured_min.max(base_size)
        } else {
            measured_min
        };
        if min_size > child.max_main {
            warn!(
                target: "boxflow::flexbox::lengths",
                "[FLEX-LENGTHS] infeasible bounds min={min_size:.3} max={:.3}",
                child.max_main
            );
        }
        let hypothetical_size = clamp_main(base_size, min_size, child.max_main);
        hypothetical_total += hypothetical_size;
        unfrozen_grow_total += child.factors.grow.max(0.0);
        unfrozen_shrink_total += child.factors.shrink.max(0.0);
        trace!(
            target: "boxflow::flexbox::lengths",
            "[FLEX-LENGTHS] unit={:?} base={base_size:.3} hypothetical={hypothetical_size:.3} min={min_size:.3} max={:.3}",
            basis.unit,
            child.max_main
        );
        slots.push(FlexSlot {
            grow: child.factors.grow.max(0.0),
            shrink: child.factors.shrink.max(0.0),
            base_size,
            hypothetical_size,
            target_size: hypothetical_size,
            min_size,
            max_size: child.max_main,
            frozen: false,
            scaled_shrink_factor: 0.0,
        });
    }

    let mode = if hypothetical_total < available_main {
        FactorMode::Grow
    } else {
        FactorMode::Shrink
    };
    debug!(
        target: "boxflow::flexbox::lengths",
        "[FLEX-LENGTHS] items={} available={available_main:.3} hypothetical_total={hypothetical_total:.3} mode={mode:?}",
        slots.len()
    );
    LengthPlan {
        slots,
        mode,
        hypothetical_total,
        unfrozen_grow_total,
        unfrozen_shrink_total,
    }
}
