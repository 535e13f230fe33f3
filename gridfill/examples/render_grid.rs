//! Render dense and sparse grids in the canonical fixture format

use gridfill::{DenseGrid, Grid, SparseGrid};

fn main() -> gridfill::Result<()> {
    let dense = DenseGrid::from_fn(3, 4, |x, y| 1 + x + y * 3)?;
    println!("Dense {}x{}:", dense.width(), dense.height());
    println!("{dense}\n");

    let sparse = SparseGrid::from_fn(4, 3, |x, y| ((x + y) % 2 == 0).then(|| x * 10 + y))?;
    println!(
        "Sparse {}x{} with {} populated slots:",
        sparse.width(),
        sparse.height(),
        sparse.count()
    );
    println!("{sparse}");
    Ok(())
}
