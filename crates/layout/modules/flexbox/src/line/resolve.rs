//! Phase C: resolve flexible lengths by iterative freezing.
//!
//! Items that violate their min/max after a proportional distribution are
//! frozen at the clamped size, and the remaining free space is redistributed
//! over the rest until nothing new freezes.

use log::{debug, trace};

use crate::item::clamp_main;
use crate::line::lengths::{FactorMode, FlexSlot, LengthPlan};

/// Freeze inflexible items up front (target = hypothetical).
fn freeze_inflexible(mode: FactorMode, slots: &mut [FlexSlot]) {
    for slot in slots.iter_mut() {
        let inflexible = slot.grow == 0.0 && slot.shrink == 0.0;
        let wrong_side = match mode {
            FactorMode::Grow => slot.base_size > slot.hypothetical_size,
            FactorMode::Shrink => slot.base_size < slot.hypothetical_size,
        };
        if inflexible || wrong_side {
            slot.frozen = true;
            slot.target_size = slot.hypothetical_size;
        } else {
            slot.frozen = false;
            slot.scaled_shrink_factor = slot.shrink * slot.base_size;
        }
    }
}

/// Running totals over unfrozen items.
#[derive(Copy, Clone, Debug, Default)]
struct UnfrozenTotals {
    grow: f32,
    shrink: f32,
    scaled_shrink: f32,
}

impl UnfrozenTotals {
    fn collect(slots: &[FlexSlot]) -> Self {
        slots
            .iter()
            .filter(|slot| !slot.frozen)
            .fold(Self::default(), |acc, slot| Self {
                grow: acc.grow + slot.grow,
                shrink: acc.shrink + slot.shrink,
                scaled_shrink: acc.scaled_shrink + slot.scaled_shrink_factor,
            })
    }

    fn remove(&mut self, slot: &FlexSlot) {
        self.grow -= slot.grow;
        self.shrink -= slot.shrink;
        self.scaled_shrink -= slot.scaled_shrink_factor;
    }
}

/// Free space given the current frozen/unfrozen split.
fn current_free_space(available_main: f32, slots: &[FlexSlot]) -> f32 {
    let used: f32 = slots
        .iter()
        .map(|slot| {
            if slot.frozen {
                slot.target_size
            } else {
                slot.base_size
            }
        })
        .sum();
    available_main - used
}

/// Unclamped target for one unfrozen item. A zero factor total means there is
/// nothing to distribute and the item keeps its base size.
fn proportional_target(
    mode: FactorMode,
    slot: &FlexSlot,
    remaining_free_space: f32,
    totals: &UnfrozenTotals,
) -> f32 {
    match mode {
        FactorMode::Grow if totals.grow > 0.0 => {
            slot.base_size + slot.grow * (remaining_free_space / totals.grow)
        }
        FactorMode::Shrink if totals.scaled_shrink > 0.0 => {
            slot.base_size
                - remaining_free_space.abs() * (slot.scaled_shrink_factor / totals.scaled_shrink)
        }
        FactorMode::Grow | FactorMode::Shrink => slot.base_size,
    }
}

/// Resolve every slot's `target_size` for a line with `available_main` space.
///
/// Returns the number of distribution passes run. Each pass freezes at least
/// one item, so the loop is bounded by the item count.
pub fn resolve_flexible_lengths(available_main: f32, plan: &mut LengthPlan) -> usize {
    let mode = plan.mode;
    let slots = &mut plan.slots[..];
    freeze_inflexible(mode, slots);
    let mut totals = UnfrozenTotals::collect(slots);
    let mut passes = 0usize;
    let mut adjustments = vec![0.0f32; slots.len()];

    while slots.iter().any(|slot| !slot.frozen) && passes <= slots.len() {
        passes += 1;
        let free_space = current_free_space(available_main, slots);
        let factor_total = match mode {
            FactorMode::Grow => totals.grow,
            FactorMode::Shrink => totals.shrink,
        };
        let remaining_free_space = if factor_total < 1.0 {
            free_space * factor_total
        } else {
            free_space
        };

        let mut violation_total = 0.0f32;
        for (slot, adjustment) in slots.iter_mut().zip(adjustments.iter_mut()) {
            if slot.frozen {
                *adjustment = 0.0;
                continue;
            }
            let target = proportional_target(mode, slot, remaining_free_space, &totals);
            let clamped = clamp_main(target, slot.min_size, slot.max_size);
            slot.target_size = target;
            *adjustment = clamped - target;
            violation_total += *adjustment;
        }

        let mut newly_frozen = 0usize;
        for (slot, adjustment) in slots.iter_mut().zip(adjustments.iter()) {
            if slot.frozen {
                continue;
            }
            let freeze = if violation_total > 0.0 {
                *adjustment > 0.0
            } else if violation_total < 0.0 {
                *adjustment < 0.0
            } else {
                true
            };
            if freeze {
                slot.target_size = clamp_main(slot.target_size, slot.min_size, slot.max_size);
                slot.frozen = true;
                totals.remove(slot);
                newly_frozen += 1;
                trace!(
                    target: "boxflow::flexbox::resolve",
                    "[FLEX-FREEZE] pass={passes} base={:.3} target={:.3} adjustment={adjustment:.3}",
                    slot.base_size,
                    slot.target_size
                );
            }
        }
        debug!(
            target: "boxflow::flexbox::resolve",
            "[FLEX-RESOLVE] pass={passes} mode={mode:?} free={free_space:.3} remaining={remaining_free_space:.3} violation={violation_total:.3} frozen={newly_frozen}"
        );
        if newly_frozen == 0 {
            break;
        }
    }

    // Unreachable in exact arithmetic; keeps every target inside its bounds.
    for slot in slots.iter_mut().filter(|slot| !slot.frozen) {
        slot.target_size = clamp_main(slot.target_size, slot.min_size, slot.max_size);
        slot.frozen = true;
    }
    passes
}
