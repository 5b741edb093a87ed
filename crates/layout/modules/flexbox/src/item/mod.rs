//! Flex item inputs: basis, flex factors and the per-child record the line
//! algorithm consumes.

use boxflow_box::Vec2;

/// Unit of a flex basis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum BasisUnit {
    /// Literal px value.
    Pixel,
    /// Share of the container's free main space, weighted by `value`.
    Aspect,
    /// The item's measured minimum content size.
    #[default]
    Content,
}

/// Flex base size specification.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Basis {
    pub unit: BasisUnit,
    pub value: f32,
    /// When set, the resolved base size doubles as a minimum main size.
    pub minimum: bool,
}

impl Basis {
    #[inline]
    pub const fn pixels(value: f32) -> Self {
        Self {
            unit: BasisUnit::Pixel,
            value,
            minimum: false,
        }
    }

    #[inline]
    pub const fn aspect(value: f32) -> Self {
        Self {
            unit: BasisUnit::Aspect,
            value,
            minimum: false,
        }
    }

    /// Content basis; `value` is used as the content size of leaves that
    /// report none.
    #[inline]
    pub const fn content(value: f32) -> Self {
        Self {
            unit: BasisUnit::Content,
            value,
            minimum: false,
        }
    }

    #[inline]
    pub const fn with_minimum(mut self, minimum: bool) -> Self {
        self.minimum = minimum;
        self
    }
}

/// Grow/shrink factors plus basis.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexFactors {
    pub grow: f32,
    pub shrink: f32,
    pub basis: Basis,
}

impl Default for FlexFactors {
    fn default() -> Self {
        Self {
            grow: 0.0,
            shrink: 1.0,
            basis: Basis::default(),
        }
    }
}

/// Everything the single-line algorithm needs to know about one child.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexChild {
    pub factors: FlexFactors,
    /// Declared minimum main size.
    pub min_main: f32,
    /// Declared maximum main size.
    pub max_main: f32,
    /// Measured minimum outer size (physical), from the min-content pass.
    pub min_content: Vec2,
}

impl Default for FlexChild {
    fn default() -> Self {
        Self {
            factors: FlexFactors::default(),
            min_main: 0.0,
            max_main: f32::INFINITY,
            min_content: Vec2::ZERO,
        }
    }
}

impl FlexChild {
    /// Child with the given factors and no constraints.
    #[inline]
    pub fn with_factors(grow: f32, shrink: f32, basis: Basis) -> Self {
        Self {
            factors: FlexFactors {
                grow,
                shrink,
                basis,
            },
            ..Self::default()
        }
    }

    #[inline]
    pub const fn with_min_max(mut self, min_main: f32, max_main: f32) -> Self {
        self.min_main = min_main;
        self.max_main = max_main;
        self
    }

    #[inline]
    pub const fn with_min_content(mut self, min_content: Vec2) -> Self {
        self.min_content = min_content;
        self
    }
}

/// Clamp a main size into `[min, max]` and at zero. On infeasible bounds
/// (`min > max`) the minimum wins.
#[inline]
pub fn clamp_main(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min).max(0.0)
}
