//! Per-call layout counters.
//!
//! The host owns a [`LayoutMetrics`] and passes it into
//! [`crate::LayoutTree::compute`]; counters accumulate until [`LayoutMetrics::reset`].

use core::ops::{Add, AddAssign};

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutMetrics {
    /// Flex containers laid out.
    pub flex_passes: u64,
    /// Grid containers laid out.
    pub grid_passes: u64,
    /// Leaf items whose box model was finalized.
    pub items_finalized: u64,
    /// Distribution passes summed over all flex lines.
    pub freeze_iterations: u64,
    /// `compute` calls that returned early on a clean node.
    pub skipped_clean: u64,
}

impl LayoutMetrics {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total nodes laid out.
    #[inline]
    pub const fn nodes_computed(&self) -> u64 {
        self.flex_passes + self.grid_passes + self.items_finalized
    }

    pub fn merge(&mut self, other: &Self) {
        *self += *other;
    }
}

impl Add for LayoutMetrics {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            flex_passes: self.flex_passes + rhs.flex_passes,
            grid_passes: self.grid_passes + rhs.grid_passes,
            items_finalized: self.items_finalized + rhs.items_finalized,
            freeze_iterations: self.freeze_iterations + rhs.freeze_iterations,
            skipped_clean: self.skipped_clean + rhs.skipped_clean,
        }
    }
}

impl AddAssign for LayoutMetrics {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if merging or resetting counters misbehaves.
    fn merge_and_reset() {
        let mut total = LayoutMetrics {
            flex_passes: 1,
            items_finalized: 2,
            ..LayoutMetrics::default()
        };
        total.merge(&LayoutMetrics {
            flex_passes: 2,
            grid_passes: 1,
            freeze_iterations: 4,
            ..LayoutMetrics::default()
        });
        assert_eq!(total.flex_passes, 3);
        assert_eq!(total.grid_passes, 1);
        assert_eq!(total.nodes_computed(), 6);
        assert_eq!(total.freeze_iterations, 4);
        total.reset();
        assert_eq!(total, LayoutMetrics::default());
    }
}
