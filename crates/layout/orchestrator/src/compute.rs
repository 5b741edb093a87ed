//! Top-down layout: measure minimum sizes bottom-up, then place children and
//! recurse.

use boxflow_box::{Rect, Vec2};
use boxflow_flexbox::{
    Axes, BasisUnit, FlexChild, FlexContainerInputs, FlexWrap, FlowDirection,
    aggregate_min_content, layout_single_line,
};
use boxflow_grid::{GridSpec, grid_min_content, layout_grid};
use indextree::NodeId;
use log::{debug, trace, warn};

use crate::error::LayoutError;
use crate::metrics::LayoutMetrics;
use crate::node::{FlexFlow, NodeKind};
use crate::tree::LayoutTree;

impl LayoutTree {
    /// Lay out `root` and everything below it.
    ///
    /// A clean root is left untouched. Otherwise minimum sizes are measured for
    /// the whole subtree, the root keeps its declared outer rectangle (grown to
    /// its minimum when configured and it has no parent), and every container
    /// places its children and recomputes them.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] for a stale id and
    /// [`LayoutError::GridOverflow`] when a grid has more children than cells.
    /// Nodes that failed stay dirty.
    pub fn compute(&mut self, root: NodeId, metrics: &mut LayoutMetrics) -> Result<(), LayoutError> {
        if !self.node(root)?.dirty {
            metrics.skipped_clean += 1;
            trace!(target: "boxflow::tree", "[COMPUTE] {root:?} clean; skipped");
            return Ok(());
        }
        let min_content = self.measure_min_content(root)?;
        let mut outer = self.node(root)?.box_model.outer();
        if self.config.grow_root_to_min_content && self.parent(root)?.is_none() {
            outer.width = outer.width.max(min_content.x);
            outer.height = outer.height.max(min_content.y);
        }
        debug!(
            target: "boxflow::tree",
            "[COMPUTE] root={root:?} outer={outer:?} min_content={min_content:?}"
        );
        self.layout_node(root, outer, metrics)
    }

    /// Post-order minimum outer size of `id`'s subtree, cached on each node.
    fn measure_min_content(&mut self, id: NodeId) -> Result<Vec2, LayoutError> {
        let children: Vec<NodeId> = id.children(&self.arena).collect();
        for child in &children {
            self.measure_min_content(*child)?;
        }
        let node = self.node(id)?;
        let content = match node.kind {
            NodeKind::Item => node.style.content_size,
            NodeKind::Flex(flow) => {
                let items = self.flex_children(&children, flow.direction)?;
                aggregate_min_content(flow.direction, flow.gap, &items)
            }
            NodeKind::Grid(spec) => {
                let mins = children
                    .iter()
                    .map(|child| self.node(*child).map(|node| node.min_content))
                    .collect::<Result<Vec<_>, _>>()?;
                grid_min_content(&spec, &mins)
            }
        };
        let min = (content + node.box_model.insets().total()).non_negative();
        trace!(
            target: "boxflow::tree",
            "[MEASURE] {id:?} {} content={content:?} min={min:?}",
            node.kind.label()
        );
        self.node_mut(id)?.min_content = min;
        Ok(min)
    }

    /// Flex inputs for one child of a container flowing in `direction`.
    ///
    /// A leaf with a content basis never measures smaller than its basis value
    /// on the parent's main axis.
    fn flex_child(&self, id: NodeId, direction: FlowDirection) -> Result<FlexChild, LayoutError> {
        let node = self.node(id)?;
        let style = &node.style;
        let mut min_content = node.min_content;
        if matches!(node.kind, NodeKind::Item) && style.flex.basis.unit == BasisUnit::Content {
            let insets = Axes::from_vec2(node.box_model.insets().total(), direction);
            let mut measured = Axes::from_vec2(min_content, direction);
            measured.main = measured.main.max(style.flex.basis.value + insets.main);
            min_content = measured.to_vec2(direction);
        }
        Ok(FlexChild {
            factors: style.flex,
            min_main: style.min_width,
            max_main: style.max_width,
            min_content,
        })
    }

    fn flex_children(
        &self,
        children: &[NodeId],
        direction: FlowDirection,
    ) -> Result<Vec<FlexChild>, LayoutError> {
        children
            .iter()
            .map(|child| self.flex_child(*child, direction))
            .collect()
    }

    /// Assign `outer` to `id`, lay out its children and mark it clean.
    fn layout_node(
        &mut self,
        id: NodeId,
        outer: Rect,
        metrics: &mut LayoutMetrics,
    ) -> Result<(), LayoutError> {
        let node = self.node_mut(id)?;
        let content = node.box_model.compute(outer);
        let kind = node.kind;
        match kind {
            NodeKind::Item => metrics.items_finalized += 1,
            NodeKind::Flex(flow) => self.compute_flex(id, &flow, content, metrics)?,
            NodeKind::Grid(spec) => self.compute_grid(id, &spec, content, metrics)?,
        }
        self.node_mut(id)?.dirty = false;
        Ok(())
    }

    fn compute_flex(
        &mut self,
        id: NodeId,
        flow: &FlexFlow,
        content: Rect,
        metrics: &mut LayoutMetrics,
    ) -> Result<(), LayoutError> {
        if flow.wrap == FlexWrap::Wrap {
            warn!(target: "boxflow::tree", "[FLEX] {id:?} requests wrapping; laying out a single line");
        }
        let children: Vec<NodeId> = id.children(&self.arena).collect();
        let items = self.flex_children(&children, flow.direction)?;
        let inputs = FlexContainerInputs {
            direction: flow.direction,
            justify_content: flow.justify_content,
            align: flow.align,
            content,
            gap: flow.gap,
            snap_to_layout_unit: self.config.snap_to_layout_unit,
        };
        let line = layout_single_line(&inputs, &items);
        metrics.flex_passes += 1;
        metrics.freeze_iterations += u64::try_from(line.freeze_iterations).unwrap_or(u64::MAX);
        debug!(
            target: "boxflow::tree",
            "[FLEX] {id:?} children={} content={content:?} free={:.3}",
            children.len(),
            line.free_space
        );
        self.place_children(&children, line.placements, metrics)
    }

    fn compute_grid(
        &mut self,
        id: NodeId,
        spec: &GridSpec,
        content: Rect,
        metrics: &mut LayoutMetrics,
    ) -> Result<(), LayoutError> {
        let children: Vec<NodeId> = id.children(&self.arena).collect();
        let cells = layout_grid(content, spec, children.len())?;
        metrics.grid_passes += 1;
        debug!(
            target: "boxflow::tree",
            "[GRID] {id:?} {}x{} children={}",
            spec.columns,
            spec.rows,
            children.len()
        );
        self.place_children(&children, cells, metrics)
    }

    /// Children are always recomputed once their container runs.
    fn place_children(
        &mut self,
        children: &[NodeId],
        placements: Vec<Rect>,
        metrics: &mut LayoutMetrics,
    ) -> Result<(), LayoutError> {
        for (child, rect) in children.iter().zip(placements) {
            self.node_mut(*child)?.dirty = true;
            self.layout_node(*child, rect, metrics)?;
        }
        Ok(())
    }
}
