use ndarray::Array2;

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for lit-cell counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

pub trait FlipAreaIterExt {
    /// Cells affected by activating `index`: the cell itself, then its in-bounds orthogonal neighbors.
    fn iter_flip_area(&self, index: Coord2) -> FlipAreaIter;
}

impl<T> FlipAreaIterExt for Array2<T> {
    fn iter_flip_area(&self, index: Coord2) -> FlipAreaIter {
        let (rows, cols) = self.dim();
        let bounds = (
            rows.try_into().unwrap_or(Coord::MAX),
            cols.try_into().unwrap_or(Coord::MAX),
        );
        FlipAreaIter::new(index, bounds)
    }
}

/// Center, up, down, left, right.
const DISPLACEMENTS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct FlipAreaIter {
    center: Coord2,
    bounds: Coord2,
    index: u8,
}

impl FlipAreaIter {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for FlipAreaIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= DISPLACEMENTS.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, DISPLACEMENTS[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(size: Coord2, center: Coord2) -> ([Option<Coord2>; 5], usize) {
        let grid: Array2<bool> = Array2::default(size.to_nd_index());
        let mut out = [None; 5];
        let mut len = 0;
        for coords in grid.iter_flip_area(center) {
            out[len] = Some(coords);
            len += 1;
        }
        (out, len)
    }

    #[test]
    fn corner_area_skips_out_of_bounds_neighbors() {
        let (cells, len) = area((2, 2), (0, 0));

        assert_eq!(len, 3);
        assert_eq!(cells[..3], [Some((0, 0)), Some((1, 0)), Some((0, 1))]);
    }

    #[test]
    fn interior_area_has_center_and_four_neighbors() {
        let (cells, len) = area((3, 3), (1, 1));

        assert_eq!(len, 5);
        assert_eq!(
            cells,
            [
                Some((1, 1)),
                Some((0, 1)),
                Some((2, 1)),
                Some((1, 0)),
                Some((1, 2)),
            ]
        );
    }

    #[test]
    fn single_cell_area_is_only_the_center() {
        let (cells, len) = area((1, 1), (0, 0));

        assert_eq!(len, 1);
        assert_eq!(cells[0], Some((0, 0)));
    }

    #[test]
    fn apply_delta_does_not_wrap_at_max_coord() {
        assert_eq!(apply_delta((Coord::MAX - 1, 0), (1, 0), (Coord::MAX, 1)), None);
        assert_eq!(apply_delta((0, 0), (0, -1), (1, 1)), None);
    }
}
