//! Node payload stored in the arena.

use boxflow_box::{BoxModel, Vec2};
use boxflow_flexbox::{AlignItems, FlexFactors, FlexWrap, FlowDirection, JustifyContent};
use boxflow_grid::GridSpec;

/// Flow parameters of a flex container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlexFlow {
    pub direction: FlowDirection,
    /// Stored for hosts; layout is always single-line.
    pub wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align: AlignItems,
    /// Main-axis spacing between adjacent children.
    pub gap: f32,
}

impl FlexFlow {
    #[inline]
    pub fn new(direction: FlowDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }
}

/// What a node lays out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Leaf box; computing it only finalizes its box model.
    Item,
    /// Single-line flex container.
    Flex(FlexFlow),
    /// Fixed-cell grid container.
    Grid(GridSpec),
}

impl NodeKind {
    /// Row flex container with default flow.
    #[inline]
    pub fn flex() -> Self {
        Self::Flex(FlexFlow::default())
    }

    #[inline]
    pub const fn grid(columns: usize, rows: usize) -> Self {
        Self::Grid(GridSpec::new(columns, rows))
    }

    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, Self::Flex(_) | Self::Grid(_))
    }

    /// Short label used by tree dumps and snapshots.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Flex(_) => "flex",
            Self::Grid(_) => "grid",
        }
    }
}

/// Sizing inputs a node exposes to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStyle {
    /// Minimum size along the parent's main axis.
    pub min_width: f32,
    /// Maximum size along the parent's main axis.
    pub max_width: f32,
    pub flex: FlexFactors,
    pub hidden: bool,
    pub disabled: bool,
    /// Intrinsic content size reported by the host (text, images).
    pub content_size: Vec2,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            min_width: 0.0,
            max_width: f32::INFINITY,
            flex: FlexFactors::default(),
            hidden: false,
            disabled: false,
            content_size: Vec2::ZERO,
        }
    }
}

/// One node of the layout tree.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub kind: NodeKind,
    pub style: ItemStyle,
    pub box_model: BoxModel,
    /// Minimum outer size from the last measure pass.
    pub min_content: Vec2,
    pub dirty: bool,
}

impl LayoutNode {
    /// New nodes start dirty so the first compute lays them out.
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            style: ItemStyle::default(),
            box_model: BoxModel::default(),
            min_content: Vec2::ZERO,
            dirty: true,
        }
    }
}
