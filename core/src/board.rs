use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lit/unlit state of every cell, indexed by `(row, col)`.
///
/// Boards are values: the flip rule derives a new board and leaves the old one untouched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Wraps an existing cell array, which must have at least one row and one column.
    pub fn from_cells(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || cols == 0 || rows > Coord::MAX.into() || cols > Coord::MAX.into() {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn unlit(size: Coord2) -> Result<Self> {
        Self::from_cells(Array2::from_elem(size.to_nd_index(), false))
    }

    pub fn all_lit(size: Coord2) -> Result<Self> {
        Self::from_cells(Array2::from_elem(size.to_nd_index(), true))
    }

    pub fn from_lit_coords(size: Coord2, lit_coords: &[Coord2]) -> Result<Self> {
        let mut cells: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in lit_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()] = true;
        }

        Self::from_cells(cells)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        // from_cells caps both dimensions at Coord::MAX
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn is_lit(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn lit_count(&self) -> CellCount {
        // bounded by total_cells, which fits
        self.cells.iter().filter(|&&lit| lit).count() as CellCount
    }

    /// Whether every cell is lit, scanning row by row and stopping at the first unlit cell.
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&lit| lit)
    }

    /// Returns a copy with the cell at `coords` and its in-bounds orthogonal neighbors inverted.
    pub fn flip_cells_around(&self, coords: Coord2) -> Result<Board> {
        let coords = self.validate_coords(coords)?;

        let mut cells = self.cells.clone();
        for pos in self.cells.iter_flip_area(coords) {
            let cell = &mut cells[pos.to_nd_index()];
            *cell = !*cell;
        }

        Ok(Self { cells })
    }

    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = bool> + '_> + '_ {
        self.cells.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl Index<Coord2> for Board {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        Self::from_cells(cells)
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.cells
    }
}
