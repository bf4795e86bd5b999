use ndarray::Array2;

/// Single grid axis, used for row and column indices as well as board
/// dimensions.
pub type Coord = u8;

/// Count type for area-sized values: total tiles, mine counts, reveal
/// tallies.
pub type CellCount = u16;

/// Board position as `(row, column)`, zero-based from the top-left corner.
pub type GridPos = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for GridPos {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(rows: Coord, columns: Coord) -> CellCount {
    (rows as CellCount).saturating_mul(columns as CellCount)
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, center: GridPos) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, center: GridPos) -> NeighborIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        NeighborIter::new(center, bounds)
    }
}

pub trait NeighborCellIterExt<T>: NeighborIterExt {
    fn iter_neighbor_cells_with_pos(&self, center: GridPos) -> impl Iterator<Item = (GridPos, T)>;

    fn iter_neighbor_cells(&self, center: GridPos) -> impl Iterator<Item = T> {
        self.iter_neighbor_cells_with_pos(center)
            .map(|(_, cell)| cell)
    }
}

impl<T: Copy> NeighborCellIterExt<T> for Array2<T> {
    fn iter_neighbor_cells_with_pos(&self, center: GridPos) -> impl Iterator<Item = (GridPos, T)> {
        self.iter_neighbors(center)
            .map(|pos| (pos, self[pos.to_nd_index()]))
    }
}

/// Row/column displacements of the 8-connected neighborhood, in reading
/// order.
const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, returning a value only when it stays in
/// bounds.
fn step(center: GridPos, delta: (i8, i8), bounds: GridPos) -> Option<GridPos> {
    let row = center.0.checked_add_signed(delta.0)?;
    let column = center.1.checked_add_signed(delta.1)?;
    if row < bounds.0 && column < bounds.1 {
        Some((row, column))
    } else {
        None
    }
}

/// Iterates the in-bounds 8-neighborhood of a cell without borrowing the
/// grid.
#[derive(Debug)]
pub struct NeighborIter {
    center: GridPos,
    bounds: GridPos,
    offsets: core::slice::Iter<'static, (i8, i8)>,
}

impl NeighborIter {
    fn new(center: GridPos, bounds: GridPos) -> Self {
        Self {
            center,
            bounds,
            offsets: DISPLACEMENTS.iter(),
        }
    }
}

impl Iterator for NeighborIter {
    type Item = GridPos;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &delta = self.offsets.next()?;
            if let Some(pos) = step(self.center, delta, self.bounds) {
                return Some(pos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_grid(rows: usize, columns: usize) -> Array2<u8> {
        Array2::default((rows, columns))
    }

    #[test]
    fn neighbor_iteration_clips_at_the_borders() {
        let grid = empty_grid(3, 3);

        assert_eq!(grid.iter_neighbors((0, 0)).count(), 3);
        assert_eq!(grid.iter_neighbors((0, 1)).count(), 5);
        assert_eq!(grid.iter_neighbors((1, 1)).count(), 8);
        assert_eq!(grid.iter_neighbors((2, 2)).count(), 3);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        let grid = empty_grid(1, 1);

        assert_eq!(grid.iter_neighbors((0, 0)).next(), None);
    }

    #[test]
    fn neighbors_come_out_in_reading_order() {
        let grid = empty_grid(3, 3);

        let neighbors: Vec<GridPos> = grid.iter_neighbors((1, 1)).collect();

        assert_eq!(
            neighbors,
            [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }
}
