//! Phase D: main-axis justification and cross-axis placement.

use boxflow_box::Rect;
use log::debug;

use crate::axis::{Axes, FlowDirection, Span, set_axis};
use crate::line::{AlignItems, JustifyContent};

/// Quantize a px value to the layout unit (1/64 px).
#[inline]
pub fn quantize_layout(value: f32) -> f32 {
    (value * 64.0).round() / 64.0
}

/// Start offset and extra between-item spacing for `justify`.
///
/// Negative free space is not distributed. `SpaceBetween` with a single item
/// behaves like `Start`.
pub fn justify_params(justify: JustifyContent, free_space: f32, item_count: usize) -> (f32, f32) {
    let remaining = free_space.max(0.0);
    match (justify, item_count) {
        (JustifyContent::End, _) => (remaining, 0.0),
        (JustifyContent::Center, _) => (remaining * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 => {
            (0.0, remaining / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            let spacing = remaining / count as f32;
            (spacing * 0.5, spacing)
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            let spacing = remaining / (count as f32 + 1.0);
            (spacing, spacing)
        }
        _ => (0.0, 0.0),
    }
}

/// Cross span for one item inside a content cross span.
#[inline]
pub fn align_cross(align: AlignItems, content_cross: Span, item_min_cross: f32) -> Span {
    match align {
        AlignItems::Stretch => content_cross,
        AlignItems::Start => Span::new(content_cross.start, item_min_cross),
        AlignItems::Center => Span::new(
            content_cross.start + ((content_cross.extent - item_min_cross) * 0.5).max(0.0),
            item_min_cross,
        ),
        AlignItems::End => Span::new(
            content_cross.start + (content_cross.extent - item_min_cross).max(0.0),
            item_min_cross,
        ),
    }
}

/// Inputs for placing a resolved line.
#[derive(Copy, Clone, Debug)]
pub struct PlacementPlan {
    pub direction: FlowDirection,
    pub justify: JustifyContent,
    pub align: AlignItems,
    pub content: Axes<Span>,
    pub gap: f32,
    pub snap: bool,
}

/// Place items with resolved main sizes `targets` and minimum cross sizes
/// `min_cross` inside the content box. Returns outer rects in list order and
/// the leftover main-axis free space.
pub fn position_items(plan: &PlacementPlan, targets: &[f32], min_cross: &[f32]) -> (Vec<Rect>, f32) {
    let snap = |value: f32| if plan.snap { quantize_layout(value) } else { value };
    let gap = plan.gap.max(0.0);
    let count = targets.len();
    let final_total: f32 = targets.iter().sum();
    let free_space =
        plan.content.main.extent - final_total - gap * count.saturating_sub(1) as f32;
    let (start_offset, spacing) = justify_params(plan.justify, free_space, count);
    let reversed = plan.direction.is_reversed();
    debug!(
        target: "boxflow::flexbox::position",
        "[FLEX-JUSTIFY] justify={:?} reversed={reversed} free={free_space:.3} start_offset={start_offset:.3} spacing={spacing:.3}",
        plan.justify
    );

    let mut cursor = if reversed {
        plan.content.main.end() - start_offset
    } else {
        plan.content.main.start + start_offset
    };
    let mut rects = Vec::with_capacity(count);
    for (target, item_cross) in targets.iter().copied().zip(min_cross.iter().copied()) {
        let size = snap(target);
        let main_start = if reversed {
            cursor - size
        } else {
            cursor
        };
        let main = Span::new(snap(main_start), size);
        cursor = if reversed {
            main_start - (spacing + gap)
        } else {
            main_start + size + spacing + gap
        };
        let cross = align_cross(plan.align, plan.content.cross, item_cross);
        let mut rect = Rect::ZERO;
        set_axis(&mut rect, plan.direction, Axes::new(main, cross));
        rects.push(rect);
    }
    (rects, free_space)
}
