//! Incremental box layout over an arena tree.
//!
//! Hosts build a [`LayoutTree`], mutate it through setters (each marks the node
//! and its ancestors dirty) and call [`LayoutTree::compute`] on a root. Flex
//! containers run the single-line algorithm from `boxflow_flexbox`; grid
//! containers use `boxflow_grid`.
//!
//! ```
//! use boxflow::{LayoutMetrics, LayoutTree, NodeKind, Vec2};
//!
//! # fn main() -> Result<(), boxflow::LayoutError> {
//! let mut tree = LayoutTree::new();
//! let root = tree.new_root(NodeKind::flex());
//! let child = tree.add_child(root, NodeKind::Item)?;
//! tree.set_size(root, Vec2::new(300.0, 40.0))?;
//! tree.set_flex(child, 1.0)?;
//! tree.compute(root, &mut LayoutMetrics::default())?;
//! assert_eq!(tree.get_bounds(child)?.width, 300.0);
//! # Ok(())
//! # }
//! ```

mod compute;
mod config;
mod error;
mod metrics;
mod node;
mod printing;
mod snapshot;
mod style;
mod tree;

pub use config::LayoutConfig;
pub use error::LayoutError;
pub use metrics::LayoutMetrics;
pub use node::{FlexFlow, ItemStyle, LayoutNode, NodeKind};
pub use snapshot::{NodeSnapshot, SnapshotKind};
pub use tree::LayoutTree;

pub use boxflow_box::{BoxModel, Insets, Rect, Vec2};
pub use boxflow_flexbox::{AlignItems, Basis, BasisUnit, FlexWrap, FlowDirection, JustifyContent};
pub use boxflow_grid::{GridDirection, GridSpec};
pub use indextree::NodeId;
