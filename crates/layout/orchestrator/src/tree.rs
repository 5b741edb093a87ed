//! Arena-backed layout tree: structure, dirty tracking and queries.

use boxflow_box::{Rect, Vec2};
use indextree::{Arena, NodeId};
use log::debug;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::node::{LayoutNode, NodeKind};

/// Owns every layout node. Parent/child links are arena indices, so removing a
/// node drops its whole subtree and stale ids are reported as
/// [`LayoutError::UnknownNode`].
#[derive(Debug, Default)]
pub struct LayoutTree {
    pub(crate) arena: Arena<LayoutNode>,
    pub(crate) config: LayoutConfig,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            arena: Arena::new(),
            config,
        }
    }

    #[inline]
    pub const fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.iter().filter(|node| !node.is_removed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Create a detached node. Any node without a parent can be computed as a root.
    pub fn new_root(&mut self, kind: NodeKind) -> NodeId {
        self.arena.new_node(LayoutNode::new(kind))
    }

    /// Create a node and append it to `parent`'s children.
    ///
    /// # Errors
    /// Returns [`LayoutError::NotAContainer`] if `parent` is a leaf item, or
    /// [`LayoutError::UnknownNode`] if it is not in the tree.
    pub fn add_child(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, LayoutError> {
        if !self.node(parent)?.kind.is_container() {
            return Err(LayoutError::NotAContainer(parent));
        }
        let child = self.arena.new_node(LayoutNode::new(kind));
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|err| LayoutError::InvalidAttach(err.to_string()))?;
        debug!(target: "boxflow::tree", "[TREE] add {} under {parent:?}", kind.label());
        self.mark_dirty_and_propagate(parent)?;
        Ok(child)
    }

    /// Remove `node` and its whole subtree; its parent becomes dirty.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `node` is not in the tree.
    pub fn remove(&mut self, node: NodeId) -> Result<(), LayoutError> {
        let parent = self.parent(node)?;
        node.remove_subtree(&mut self.arena);
        debug!(target: "boxflow::tree", "[TREE] removed subtree {node:?}");
        if let Some(parent) = parent {
            self.mark_dirty_and_propagate(parent)?;
        }
        Ok(())
    }

    /// Whether `node` refers to a live node of this tree.
    pub fn contains(&self, node: NodeId) -> bool {
        self.arena.get(node).is_some() && !node.is_removed(&self.arena)
    }

    pub(crate) fn node(&self, id: NodeId) -> Result<&LayoutNode, LayoutError> {
        if !self.contains(id) {
            return Err(LayoutError::UnknownNode(id));
        }
        self.arena
            .get(id)
            .map(indextree::Node::get)
            .ok_or(LayoutError::UnknownNode(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Result<&mut LayoutNode, LayoutError> {
        if !self.contains(id) {
            return Err(LayoutError::UnknownNode(id));
        }
        self.arena
            .get_mut(id)
            .map(indextree::Node::get_mut)
            .ok_or(LayoutError::UnknownNode(id))
    }

    /// Mark `id` dirty and walk up until an already-dirty ancestor or the root.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn mark_dirty_and_propagate(&mut self, id: NodeId) -> Result<(), LayoutError> {
        self.node_mut(id)?.dirty = true;
        let mut marked = 1usize;
        let mut current = self.arena.get(id).and_then(indextree::Node::parent);
        while let Some(ancestor) = current {
            let node = self.node_mut(ancestor)?;
            if node.dirty {
                break;
            }
            node.dirty = true;
            marked += 1;
            current = self.arena.get(ancestor).and_then(indextree::Node::parent);
        }
        debug!(target: "boxflow::tree", "[TREE] dirty from {id:?}: marked={marked}");
        Ok(())
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn is_dirty(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.node(id)?.dirty)
    }

    /// Outer rectangle (margin box) from the last compute, or as set by the host.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn get_bounds(&self, id: NodeId) -> Result<Rect, LayoutError> {
        Ok(self.node(id)?.box_model.outer())
    }

    /// Content rectangle from the last compute.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn get_content_bounds(&self, id: NodeId) -> Result<Rect, LayoutError> {
        Ok(self.node(id)?.box_model.content())
    }

    /// Minimum outer size from the last measure pass.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn min_content(&self, id: NodeId) -> Result<Vec2, LayoutError> {
        Ok(self.node(id)?.min_content)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn kind(&self, id: NodeId) -> Result<NodeKind, LayoutError> {
        Ok(self.node(id)?.kind)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn is_hidden(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.node(id)?.style.hidden)
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn is_disabled(&self, id: NodeId) -> Result<bool, LayoutError> {
        Ok(self.node(id)?.style.disabled)
    }

    /// Children in layout order.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn children(&self, id: NodeId) -> Result<Vec<NodeId>, LayoutError> {
        self.node(id)?;
        Ok(id.children(&self.arena).collect())
    }

    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `id` is not in the tree.
    pub fn parent(&self, id: NodeId) -> Result<Option<NodeId>, LayoutError> {
        self.node(id)?;
        Ok(self.arena.get(id).and_then(indextree::Node::parent))
    }
}
