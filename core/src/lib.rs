#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use persist::*;
pub use shift::*;
pub use tile::*;
pub use types::*;

mod analysis;
mod direction;
mod engine;
mod error;
mod generator;
mod persist;
mod shift;
mod tile;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub win_value: u32,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, win_value: u32) -> Self {
        Self { size, win_value }
    }

    pub fn new((rows, cols): Coord2, win_value: u32) -> Self {
        let rows = rows.clamp(1, Coord::MAX);
        let cols = cols.clamp(1, Coord::MAX);
        let win_value = win_value.max(4).next_power_of_two();
        Self::new_unchecked((rows, cols), win_value)
    }

    /// The traditional 4x4 board played to the 2048 tile.
    pub const fn classic() -> Self {
        Self::new_unchecked((4, 4), 2048)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

/// Owned rectangular grid of tiles, row-major.
///
/// Rectangularity is established once, at construction; every transform over
/// an existing `Board` is total and allocates fresh output instead of
/// aliasing its input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    tiles: Array2<Tile>,
}

impl Board {
    pub fn empty(size: Coord2) -> Self {
        Self {
            tiles: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a board from row slices, checking the shape contract: at least
    /// one row and one column, and every row as long as the first.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(GameError::EmptyBoard);
        };
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(GameError::EmptyBoard);
        }
        if rows.iter().any(|row| row.as_ref().len() != cols) {
            return Err(GameError::RaggedRows);
        }

        let flat: Vec<Tile> = rows
            .iter()
            .flat_map(|row| row.as_ref().iter().copied())
            .collect();
        let tiles =
            Array2::from_shape_vec((rows.len(), cols), flat).expect("row lengths checked above");
        Ok(Self { tiles })
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.tiles.len().try_into().unwrap()
    }

    pub fn tile_at(&self, coords: Coord2) -> Tile {
        self[coords]
    }

    /// Every coordinate with its tile, in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| ((row as Coord, col as Coord), tile))
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn iter_empty(&self) -> impl Iterator<Item = Coord2> {
        self.iter_tiles()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(coords, _)| coords)
    }

    /// Row-major view of the tiles, one slice per row.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles
            .rows()
            .into_iter()
            .map(|row| row.to_slice().expect("boards use standard layout"))
    }

    /// Rotates counter-clockwise by the given quarter turn, allocating a new
    /// board. For an `R x C` input:
    /// - `R90`:  output is `C x R` with `out[c][r] = in[r][C-1-c]`
    /// - `R180`: output is `R x C` with `out[r][c] = in[R-1-r][C-1-c]`
    /// - `R270`: output is `C x R` with `out[c][r] = in[R-1-r][c]`
    pub fn rotate_ccw(&self, rotation: Rotation) -> Board {
        let (rows, cols) = self.tiles.dim();
        let tiles = match rotation {
            Rotation::R0 => self.tiles.clone(),
            Rotation::R90 => {
                Array2::from_shape_fn((cols, rows), |(c, r)| self.tiles[[r, cols - 1 - c]])
            }
            Rotation::R180 => Array2::from_shape_fn((rows, cols), |(r, c)| {
                self.tiles[[rows - 1 - r, cols - 1 - c]]
            }),
            Rotation::R270 => {
                Array2::from_shape_fn((cols, rows), |(c, r)| self.tiles[[rows - 1 - r, c]])
            }
        };
        Board { tiles }
    }
}

impl Index<Coord2> for Board {
    type Output = Tile;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.tiles[(row as usize, col as usize)]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, (row, col): Coord2) -> &mut Self::Output {
        &mut self.tiles[(row as usize, col as usize)]
    }
}
