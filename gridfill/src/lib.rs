//! Gridfill - Flood-Fill Game Engine over 2D Grid Containers
//!
//! ## Architecture
//!
//! Gridfill follows a clean definition/implementation separation:
//!
//! - **gridfill-core**: container definitions, access traits, and
//!   validation (no I/O)
//! - **gridfill**: the flood-fill game state machine and test-data
//!   fixtures built on top
//!
//! ## Quick Start
//!
//! ```rust
//! use gridfill::{DenseGrid, FloodGame, GameStatus};
//!
//! fn example() -> gridfill::Result<()> {
//!     // A small board of three colours
//!     let board = DenseGrid::from_fn(4, 4, |x, y| (x + 2 * y) % 3)?;
//!
//!     // Play floods against a move limit
//!     let mut game = FloodGame::new(&board, 8)?;
//!     game.flood(1);
//!     game.flood(2);
//!     assert_ne!(game.status(), GameStatus::Won);
//!     Ok(())
//! }
//! example().unwrap();
//! ```

// Re-export the core container surface
pub use gridfill_core::{
    // Container types
    Bitmap, Coord, DenseGrid, Indices, SparseGrid,
    // Access traits
    Grid, GridMut,
    // Error handling
    GridError, Result,
    // Validation utilities
    validate_dimensions,
    // Canonical rendering
    write_grid,
};

// Implementation modules
pub mod game;

#[cfg(feature = "serde")]
pub mod fixtures;

// Public exports
pub use game::{FloodGame, GameListener, GameStatus};

#[cfg(feature = "serde")]
pub use fixtures::{FixtureError, GridFixture};
