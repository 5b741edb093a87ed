//! Errors surfaced by the layout tree.

use boxflow_grid::GridOverflow;
use indextree::NodeId;

/// Layout tree errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A grid container holds more children than it has cells.
    GridOverflow { children: usize, cells: usize },
    /// The id was removed or never belonged to this tree.
    UnknownNode(NodeId),
    /// The operation needs a container of a different kind.
    NotAContainer(NodeId),
    /// The arena refused to attach a child (e.g. appending an ancestor).
    InvalidAttach(String),
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GridOverflow { children, cells } => {
                write!(f, "Grid overflow: {children} children for {cells} cells")
            }
            Self::UnknownNode(id) => write!(f, "Unknown node: {id:?}"),
            Self::NotAContainer(id) => write!(f, "Node {id:?} is not a matching container"),
            Self::InvalidAttach(msg) => write!(f, "Invalid attach: {msg}"),
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<GridOverflow> for LayoutError {
    fn from(overflow: GridOverflow) -> Self {
        Self::GridOverflow {
            children: overflow.children,
            cells: overflow.cells,
        }
    }
}
