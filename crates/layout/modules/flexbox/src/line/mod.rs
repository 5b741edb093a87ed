//! Single-line flex layout: lengths (B), flexible-length resolution (C) and
//! positioning (D). The min-content pass (A) lives in [`min_content`] and is
//! driven bottom-up by the tree before a container runs this module.

pub mod lengths;
pub mod min_content;
pub mod position;
pub mod resolve;

use boxflow_box::Rect;
use log::debug;

use crate::axis::{Axes, FlowDirection, get_axis};
use crate::item::FlexChild;
use lengths::{FactorMode, measure_lengths};
use min_content::gap_total;
use position::{PlacementPlan, position_items};
use resolve::resolve_flexible_lengths;

/// Main-axis distribution of leftover space.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    Start,
    End,
    Center,
    SpaceAround,
    SpaceBetween,
    SpaceEvenly,
}

/// Cross-axis placement of items within the line.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    Start,
    End,
    Center,
    #[default]
    Stretch,
}

/// Container inputs for one line.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlexContainerInputs {
    pub direction: FlowDirection,
    pub justify_content: JustifyContent,
    pub align: AlignItems,
    /// The container's content rectangle.
    pub content: Rect,
    /// Extra main-axis space between adjacent items.
    pub gap: f32,
    /// Snap main-axis sizes and offsets to 1/64 px.
    pub snap_to_layout_unit: bool,
}

impl FlexContainerInputs {
    /// Row-flow inputs with default justification and alignment.
    pub fn new(direction: FlowDirection, content: Rect) -> Self {
        Self {
            direction,
            justify_content: JustifyContent::default(),
            align: AlignItems::default(),
            content,
            gap: 0.0,
            snap_to_layout_unit: false,
        }
    }
}

/// Result of laying out one line.
#[derive(Clone, Debug, PartialEq)]
pub struct FlexLine {
    /// Outer rectangle per child, in input order.
    pub placements: Vec<Rect>,
    pub mode: FactorMode,
    /// Distribution passes run by the freezing loop.
    pub freeze_iterations: usize,
    /// Main-axis space left after resolution (negative on overflow).
    pub free_space: f32,
}

/// Lay out `children` on a single line inside `container.content`.
///
/// Children keep their list order; reversed flows only change where the
/// first item lands.
pub fn layout_single_line(container: &FlexContainerInputs, children: &[FlexChild]) -> FlexLine {
    let direction = container.direction;
    let content = get_axis(container.content, direction);
    let available_main = content.main.extent - gap_total(container.gap, children.len());

    let mut plan = measure_lengths(available_main, direction, children);
    let freeze_iterations = resolve_flexible_lengths(available_main, &mut plan);

    let targets: Vec<f32> = plan.slots.iter().map(|slot| slot.target_size).collect();
    let min_cross: Vec<f32> = children
        .iter()
        .map(|child| Axes::from_vec2(child.min_content, direction).cross)
        .collect();
    let placement = PlacementPlan {
        direction,
        justify: container.justify_content,
        align: container.align,
        content,
        gap: container.gap,
        snap: container.snap_to_layout_unit,
    };
    let (placements, free_space) = position_items(&placement, &targets, &min_cross);
    debug!(
        target: "boxflow::flexbox::single_line",
        "[FLEX-LINE] items={} direction={direction:?} mode={:?} passes={freeze_iterations} free={free_space:.3}",
        children.len(),
        plan.mode
    );
    FlexLine {
        placements,
        mode: plan.mode,
        freeze_iterations,
        free_space,
    }
}

#[cfg(test)]
mod tests;
