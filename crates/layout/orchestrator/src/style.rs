//! Host-facing setters. Each one marks the node and its ancestors dirty.

use boxflow_box::{Insets, Vec2};
use boxflow_flexbox::{AlignItems, Basis, BasisUnit, FlexWrap, FlowDirection, JustifyContent};
use boxflow_grid::{GridDirection, GridSpec};
use indextree::NodeId;

use crate::error::LayoutError;
use crate::node::{FlexFlow, LayoutNode, NodeKind};
use crate::tree::LayoutTree;

impl LayoutTree {
    fn update(
        &mut self,
        id: NodeId,
        apply: impl FnOnce(&mut LayoutNode),
    ) -> Result<(), LayoutError> {
        apply(self.node_mut(id)?);
        self.mark_dirty_and_propagate(id)
    }

    fn update_flex(
        &mut self,
        id: NodeId,
        apply: impl FnOnce(&mut FlexFlow),
    ) -> Result<(), LayoutError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Flex(flow) => apply(flow),
            NodeKind::Item | NodeKind::Grid(_) => return Err(LayoutError::NotAContainer(id)),
        }
        self.mark_dirty_and_propagate(id)
    }

    fn update_grid(
        &mut self,
        id: NodeId,
        apply: impl FnOnce(&mut GridSpec),
    ) -> Result<(), LayoutError> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Grid(spec) => apply(spec),
            NodeKind::Item | NodeKind::Flex(_) => return Err(LayoutError::NotAContainer(id)),
        }
        self.mark_dirty_and_propagate(id)
    }

    /// Outer origin. Only meaningful on roots; parents overwrite it for children.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_pos(&mut self, id: NodeId, pos: Vec2) -> Result<(), LayoutError> {
        self.update(id, |node| node.box_model.outer_pos = pos)
    }

    /// Outer size. Only meaningful on roots; parents overwrite it for children.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_size(&mut self, id: NodeId, size: Vec2) -> Result<(), LayoutError> {
        self.update(id, |node| node.box_model.outer_size = size)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_min_width(&mut self, id: NodeId, min_width: f32) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.min_width = min_width)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_max_width(&mut self, id: NodeId, max_width: f32) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.max_width = max_width)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_flex(&mut self, id: NodeId, grow: f32) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.flex.grow = grow)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_flex_shrink(&mut self, id: NodeId, grow: f32, shrink: f32) -> Result<(), LayoutError> {
        self.update(id, |node| {
            node.style.flex.grow = grow;
            node.style.flex.shrink = shrink;
        })
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_flex_basis(
        &mut self,
        id: NodeId,
        grow: f32,
        shrink: f32,
        basis: Basis,
    ) -> Result<(), LayoutError> {
        self.update(id, |node| {
            node.style.flex.grow = grow;
            node.style.flex.shrink = shrink;
            node.style.flex.basis = basis;
        })
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_basis(&mut self, id: NodeId, basis: Basis) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.flex.basis = basis)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_basis_value(&mut self, id: NodeId, value: f32) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.flex.basis.value = value)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_basis_unit(&mut self, id: NodeId, unit: BasisUnit) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.flex.basis.unit = unit)
    }

    /// When set, the resolved basis is also the node's minimum main size.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_basis_minimum(&mut self, id: NodeId, minimum: bool) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.flex.basis.minimum = minimum)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.hidden = hidden)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_disabled(&mut self, id: NodeId, disabled: bool) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.disabled = disabled)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_margin(&mut self, id: NodeId, margin: Insets) -> Result<(), LayoutError> {
        self.update(id, |node| node.box_model.set_margin(margin))
    }

    /// Negative sides are clamped to zero.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_padding(&mut self, id: NodeId, padding: Insets) -> Result<(), LayoutError> {
        self.update(id, |node| node.box_model.set_padding(padding))
    }

    /// Negative sides are clamped to zero.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_border(&mut self, id: NodeId, border: Insets) -> Result<(), LayoutError> {
        self.update(id, |node| node.box_model.set_border(border))
    }

    /// Intrinsic size of a leaf's content, measured by the host.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn set_content_size(&mut self, id: NodeId, size: Vec2) -> Result<(), LayoutError> {
        self.update(id, |node| node.style.content_size = size.non_negative())
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a flex container.
    pub fn set_flow(&mut self, id: NodeId, direction: FlowDirection) -> Result<(), LayoutError> {
        self.update_flex(id, |flow| flow.direction = direction)
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a flex container.
    pub fn set_flow_wrap(&mut self, id: NodeId, wrap: FlexWrap) -> Result<(), LayoutError> {
        self.update_flex(id, |flow| flow.wrap = wrap)
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a flex container.
    pub fn set_justify_content(
        &mut self,
        id: NodeId,
        justify: JustifyContent,
    ) -> Result<(), LayoutError> {
        self.update_flex(id, |flow| flow.justify_content = justify)
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a flex container.
    pub fn set_align(&mut self, id: NodeId, align: AlignItems) -> Result<(), LayoutError> {
        self.update_flex(id, |flow| flow.align = align)
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a flex container.
    pub fn set_gap(&mut self, id: NodeId, gap: f32) -> Result<(), LayoutError> {
        self.update_flex(id, |flow| flow.gap = gap.max(0.0))
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a grid container.
    pub fn set_grid_size(&mut self, id: NodeId, columns: usize, rows: usize) -> Result<(), LayoutError> {
        self.update_grid(id, |spec| {
            spec.columns = columns;
            spec.rows = rows;
        })
    }

    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] unless `id` is a grid container.
    pub fn set_grid_directions(
        &mut self,
        id: NodeId,
        row_direction: GridDirection,
        column_direction: GridDirection,
    ) -> Result<(), LayoutError> {
        self.update_grid(id, |spec| {
            spec.row_direction = row_direction;
            spec.column_direction = column_direction;
        })
    }
}
