//! Canonical text rendering for grids
//!
//! The format is fixed so rendered grids can be checked in as test
//! fixtures: cells are comma-separated and right-aligned to one shared
//! column width, the whole grid is wrapped in a single pair of
//! parentheses, and continuation rows are indented one space to sit flush
//! with the opening parenthesis. Unpopulated sparse slots render as blank
//! padding of the same column width.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::traits::Grid;

/// Write `grid` to `f` in the canonical fixture format
pub fn write_grid<T, G>(grid: &G, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    G: Grid<T>,
    T: fmt::Display,
{
    let width = grid.width();
    let height = grid.height();

    // First pass renders every populated cell and finds the column width.
    let mut cells: Vec<Option<String>> = Vec::with_capacity(width * height);
    let mut column = 0;
    for c in grid.indices() {
        let cell = grid.lookup(c.x, c.y).map(|value| format!("{value}"));
        if let Some(rendered) = &cell {
            column = column.max(rendered.chars().count());
        }
        cells.push(cell);
    }

    for y in 0..height {
        f.write_str(if y == 0 { "(" } else { " " })?;
        for x in 0..width {
            if x > 0 {
                f.write_str(", ")?;
            }
            match &cells[x + y * width] {
                Some(rendered) => write!(f, "{rendered:>column$}")?,
                None => write!(f, "{:column$}", "")?,
            }
        }
        if y + 1 == height {
            f.write_str(")")?;
        } else {
            f.write_str("\n")?;
        }
    }
    Ok(())
}
