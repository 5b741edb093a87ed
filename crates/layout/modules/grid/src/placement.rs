//! Cell placement for fixed-size grids.

use boxflow_box::{Rect, Vec2};
use std::error::Error;
use std::fmt;
use log::warn;
use tracing::debug;

/// Fill direction along one grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GridDirection {
    /// Left-to-right for columns within a row, top-to-bottom for rows.
    #[default]
    Forward,
    /// Right-to-left for columns within a row, bottom-to-top for rows.
    Reversed,
}

/// Grid container parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridSpec {
    pub columns: usize,
    pub rows: usize,
    /// Order in which cells of a row are filled.
    pub row_direction: GridDirection,
    /// Order in which rows are filled.
    pub column_direction: GridDirection,
}

impl GridSpec {
    /// Forward-filled grid of the given size.
    pub const fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            row_direction: GridDirection::Forward,
            column_direction: GridDirection::Forward,
        }
    }

    #[inline]
    pub const fn with_directions(mut self, row: GridDirection, column: GridDirection) -> Self {
        self.row_direction = row;
        self.column_direction = column;
        self
    }

    /// Total number of cells.
    #[inline]
    pub const fn cells(&self) -> usize {
        self.columns.saturating_mul(self.rows)
    }
}

/// More children than cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridOverflow {
    pub children: usize,
    pub cells: usize,
}

impl fmt::Display for GridOverflow {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "grid has {} children but only {} cells",
            self.children, self.cells
        )
    }
}

impl Error for GridOverflow {}

/// (column, row) of the `index`-th child after applying fill directions.
///
/// `spec.columns` must be non-zero.
#[inline]
pub const fn cell_index(spec: &GridSpec, index: usize) -> (usize, usize) {
    let mut column = index % spec.columns;
    let mut row = index / spec.columns;
    if matches!(spec.row_direction, GridDirection::Reversed) {
        column = spec.columns - 1 - column;
    }
    if matches!(spec.column_direction, GridDirection::Reversed) {
        row = spec.rows - 1 - row;
    }
    (column, row)
}

/// Outer rectangles for `child_count` children inside `content`.
///
/// # Errors
/// Returns [`GridOverflow`] when `child_count` exceeds the number of cells.
pub fn layout_grid(
    content: Rect,
    spec: &GridSpec,
    child_count: usize,
) -> Result<Vec<Rect>, GridOverflow> {
    let cells = spec.cells();
    if child_count > cells {
        warn!(
            "[GRID] {child_count} children do not fit {}x{} cells",
            spec.columns, spec.rows
        );
        return Err(GridOverflow {
            children: child_count,
            cells,
        });
    }
    if child_count == 0 {
        return Ok(Vec::new());
    }

    let cell_width = content.width / spec.columns as f32;
    let cell_height = content.height / spec.rows as f32;
    debug!(
        columns = spec.columns,
        rows = spec.rows,
        cell_width,
        cell_height,
        "[GRID] placing {child_count} children"
    );

    let rects = (0..child_count)
        .map(|index| {
            let (column, row) = cell_index(spec, index);
            Rect::new(
                cell_width.mul_add(column as f32, content.x),
                cell_height.mul_add(row as f32, content.y),
                cell_width,
                cell_height,
            )
        })
        .collect();
    Ok(rects)
}

/// Minimum outer size of a grid's content: every cell must fit the widest and
/// tallest child.
pub fn grid_min_content(spec: &GridSpec, child_min_sizes: &[Vec2]) -> Vec2 {
    let largest = child_min_sizes
        .iter()
        .fold(Vec2::ZERO, |acc, size| acc.max(*size));
    Vec2::new(
        largest.x * spec.columns as f32,
        largest.y * spec.rows as f32,
    )
}
