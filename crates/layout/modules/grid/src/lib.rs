//! Fixed-cell grid layout.
//!
//! A grid container divides its content rectangle into `columns × rows`
//! equal cells and places one child per cell in row-major order.

mod placement;
pub use placement::{
    GridDirection, GridOverflow, GridSpec, cell_index, grid_min_content, layout_grid,
};
