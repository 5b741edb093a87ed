//! Serializable per-node view of a computed subtree.

use boxflow_box::{Rect, Vec2};
use indextree::{NodeEdge, NodeId};
use serde::Serialize;

use crate::error::LayoutError;
use crate::node::NodeKind;
use crate::tree::LayoutTree;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    Item,
    Flex,
    Grid,
}

impl From<&NodeKind> for SnapshotKind {
    fn from(kind: &NodeKind) -> Self {
        match kind {
            NodeKind::Item => Self::Item,
            NodeKind::Flex(_) => Self::Flex,
            NodeKind::Grid(_) => Self::Grid,
        }
    }
}

/// One node in depth-first order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    /// Distance from the snapshot root.
    pub depth: usize,
    pub kind: SnapshotKind,
    pub bounds: Rect,
    pub content: Rect,
    pub min_content: Vec2,
    pub children: usize,
    pub dirty: bool,
    pub hidden: bool,
    pub disabled: bool,
}

impl LayoutTree {
    /// Depth-first snapshot of `root`'s subtree.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `root` or a descendant is not live.
    pub fn snapshot(&self, root: NodeId) -> Result<Vec<NodeSnapshot>, LayoutError> {
        self.node(root)?;
        let mut out = Vec::new();
        let mut depth = 0usize;
        for edge in root.traverse(&self.arena) {
            match edge {
                NodeEdge::Start(id) => {
                    let node = self.node(id)?;
                    out.push(NodeSnapshot {
                        depth,
                        kind: SnapshotKind::from(&node.kind),
                        bounds: node.box_model.outer(),
                        content: node.box_model.content(),
                        min_content: node.min_content,
                        children: id.children(&self.arena).count(),
                        dirty: node.dirty,
                        hidden: node.style.hidden,
                        disabled: node.style.disabled,
                    });
                    depth += 1;
                }
                NodeEdge::End(_) => depth = depth.saturating_sub(1),
            }
        }
        Ok(out)
    }
}
