//! Test-data fixtures for dense grids
//!
//! A fixture carries a width, a height, and a flat row-major cell
//! sequence. It converts to a [`DenseGrid`] through the standard
//! construction entry points and back to the flat layout, and round-trips
//! through JSON so boards can be checked in next to the tests that use
//! them.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use gridfill_core::{DenseGrid, Grid, GridError};

/// Errors raised while loading or saving fixtures
#[derive(Debug)]
pub enum FixtureError {
    /// Cell count does not match `width * height`
    Shape { expected: usize, actual: usize },
    /// Grid construction rejected the fixture
    Grid(GridError),
    /// Malformed JSON payload
    Json(serde_json::Error),
}

impl fmt::Display for FixtureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureError::Shape { expected, actual } => {
                write!(f, "fixture holds {actual} cells, extent needs {expected}")
            }
            FixtureError::Grid(err) => write!(f, "grid construction failed: {err}"),
            FixtureError::Json(err) => write!(f, "malformed fixture JSON: {err}"),
        }
    }
}

impl std::error::Error for FixtureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FixtureError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<GridError> for FixtureError {
    fn from(err: GridError) -> Self {
        FixtureError::Grid(err)
    }
}

impl From<serde_json::Error> for FixtureError {
    fn from(err: serde_json::Error) -> Self {
        FixtureError::Json(err)
    }
}

/// Width, height, and flat row-major cells of a dense grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridFixture<T> {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<T>,
}

impl<T> GridFixture<T> {
    /// Flatten a dense grid into fixture form
    pub fn from_grid(grid: &DenseGrid<T>) -> Self
    where
        T: Clone,
    {
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.as_slice().to_vec(),
        }
    }

    /// Rebuild the dense grid this fixture describes
    pub fn to_grid(&self) -> Result<DenseGrid<T>, FixtureError>
    where
        T: Clone,
    {
        let expected = self
            .width
            .checked_mul(self.height)
            .ok_or(GridError::InvalidDimensions {
                width: self.width,
                height: self.height,
            })?;
        if self.cells.len() != expected {
            return Err(FixtureError::Shape {
                expected,
                actual: self.cells.len(),
            });
        }
        let grid = DenseGrid::from_fn(self.width, self.height, |x, y| {
            self.cells[x + y * self.width].clone()
        })?;
        Ok(grid)
    }

    /// Parse a fixture from its JSON form
    pub fn from_json(text: &str) -> Result<Self, FixtureError>
    where
        T: DeserializeOwned,
    {
        Ok(serde_json::from_str(text)?)
    }

    /// Serialize the fixture to its JSON form
    pub fn to_json(&self) -> Result<String, FixtureError>
    where
        T: Serialize,
    {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridfill_core::GridMut;

    #[test]
    fn test_grid_round_trip() {
        let grid = DenseGrid::from_fn(3, 2, |x, y| (x + y * 3) as i32).unwrap();
        let fixture = GridFixture::from_grid(&grid);
        assert_eq!(fixture.cells, [0, 1, 2, 3, 4, 5]);

        let rebuilt = fixture.to_grid().unwrap();
        assert!(rebuilt.content_equals(&grid));
    }

    #[test]
    fn test_json_round_trip() {
        let fixture = GridFixture {
            width: 2,
            height: 2,
            cells: vec![1u8, 2, 3, 4],
        };
        let text = fixture.to_json().unwrap();
        let parsed: GridFixture<u8> = GridFixture::from_json(&text).unwrap();
        assert_eq!(parsed, fixture);
    }

    #[test]
    fn test_parses_handwritten_fixture() {
        let text = r#"{"width":3,"height":1,"cells":[7,8,9]}"#;
        let fixture: GridFixture<u32> = GridFixture::from_json(text).unwrap();
        let grid = fixture.to_grid().unwrap();
        assert_eq!(grid.get(1, 0), Ok(&8));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let fixture = GridFixture {
            width: 2,
            height: 3,
            cells: vec![1u8, 2, 3],
        };
        match fixture.to_grid() {
            Err(FixtureError::Shape { expected, actual }) => {
                assert_eq!(expected, 6);
                assert_eq!(actual, 3);
            }
            other => panic!("expected shape error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_extent_rejected() {
        let fixture = GridFixture {
            width: 0,
            height: 3,
            cells: Vec::<u8>::new(),
        };
        match fixture.to_grid() {
            Err(FixtureError::Grid(GridError::InvalidDimensions { width: 0, height: 3 })) => {}
            other => panic!("expected dimension error, got {other:?}"),
        }
    }

    #[test]
    fn test_fixture_is_a_copy() {
        let mut grid = DenseGrid::filled(2, 2, 1u8).unwrap();
        let fixture = GridFixture::from_grid(&grid);
        grid.set(0, 0, 9).unwrap();
        assert_eq!(fixture.cells[0], 1);
    }
}
