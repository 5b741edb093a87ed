use std::fmt;

use boxflow_box::Rect;
use indextree::NodeId;

use crate::error::LayoutError;
use crate::node::{LayoutNode, NodeKind};
use crate::tree::LayoutTree;

/// Indented dump of one subtree.
struct TreeDump<'tree> {
    tree: &'tree LayoutTree,
    root: NodeId,
}

fn write_indent(f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        f.write_str("  ")?;
    }
    Ok(())
}

fn write_rect(f: &mut fmt::Formatter<'_>, rect: Rect) -> fmt::Result {
    write!(
        f,
        "[{} {} {} {}]",
        rect.x, rect.y, rect.width, rect.height
    )
}

fn write_kind(f: &mut fmt::Formatter<'_>, kind: &NodeKind) -> fmt::Result {
    match kind {
        NodeKind::Item => f.write_str("item"),
        NodeKind::Flex(flow) => write!(
            f,
            "flex {:?} justify={:?} align={:?}",
            flow.direction, flow.justify_content, flow.align
        ),
        NodeKind::Grid(spec) => write!(f, "grid {}x{}", spec.columns, spec.rows),
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &LayoutNode) -> fmt::Result {
    write_kind(f, &node.kind)?;
    f.write_str(" ")?;
    write_rect(f, node.box_model.outer())?;
    f.write_str(" content=")?;
    write_rect(f, node.box_model.content())?;
    if node.dirty {
        f.write_str(" dirty")?;
    }
    if node.style.hidden {
        f.write_str(" hidden")?;
    }
    if node.style.disabled {
        f.write_str(" disabled")?;
    }
    writeln!(f)
}

impl TreeDump<'_> {
    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, id: NodeId, depth: usize) -> fmt::Result {
        write_indent(f, depth)?;
        match self.tree.node(id) {
            Ok(node) => write_node(f, node)?,
            Err(_) => writeln!(f, "<removed>")?,
        }
        for child in id.children(&self.tree.arena) {
            self.fmt_node(f, child, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for TreeDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "LAYOUT")?;
        self.fmt_node(f, self.root, 0)
    }
}

impl LayoutTree {
    /// Indented dump of `root`'s subtree: kind, outer and content rects, flags.
    ///
    /// # Errors
    /// Returns [`LayoutError::UnknownNode`] if `root` is not in the tree.
    pub fn print_tree(&self, root: NodeId) -> Result<String, LayoutError> {
        self.node(root)?;
        Ok(TreeDump { tree: self, root }.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::LayoutMetrics;
    use boxflow_box::Vec2;

    #[test]
    /// # Panics
    /// Panics if the dump does not indent children under their container.
    fn dump_indents_children() {
        let mut tree = LayoutTree::new();
        let root = tree.new_root(NodeKind::flex());
        let leaf = tree.add_child(root, NodeKind::Item).unwrap();
        tree.set_size(root, Vec2::new(100.0, 20.0)).unwrap();
        tree.set_flex(leaf, 1.0).unwrap();
        tree.set_hidden(leaf, true).unwrap();
        tree.compute(root, &mut LayoutMetrics::default()).unwrap();

        let dump = tree.print_tree(root).unwrap();
        let expected = "LAYOUT\n\
            flex Row justify=Start align=Stretch [0 0 100 20] content=[0 0 100 20]\n  \
            item [0 0 100 20] content=[0 0 100 20] hidden\n";
        assert_eq!(dump, expected);
    }
}
