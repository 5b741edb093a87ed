//! Single-line flexible box layout.
//!
//! Pure functions over slices of [`FlexChild`]: the tree crate gathers child
//! inputs, calls [`layout_single_line`] and writes the returned rectangles back.

mod axis;
mod item;
mod line;

pub use axis::{Axes, FlexWrap, FlowDirection, Span, get_axis, set_axis};
pub use item::{Basis, BasisUnit, FlexChild, FlexFactors, clamp_main};
pub use line::lengths::{FactorMode, FlexSlot, LengthPlan, measure_lengths};
pub use line::min_content::{aggregate_min_content, child_min_main, gap_total};
pub use line::position::{align_cross, justify_params, quantize_layout};
pub use line::resolve::resolve_flexible_lengths;
pub use line::{AlignItems, FlexContainerInputs, FlexLine, JustifyContent, layout_single_line};
