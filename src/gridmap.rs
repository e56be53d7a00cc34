use std::ops::{Index, IndexMut};

/// The workhorse container for every dense field the carver builds:
/// an addressable two-dimensional grid of some copyable scalar.  One
/// type, three uses: the energy field (u8), the cumulative cost grid
/// (f64, with one extra synthetic row), and the raw pixel samples
/// ([u8; 3]).
#[derive(Debug, Clone, PartialEq)]
pub struct GridMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> GridMap<P> {
    /// A new grid, every cell at the type's default.  For the cost
    /// grid that default (0.0) *is* the synthetic zero boundary, so
    /// no separate initialization pass is needed.
    pub fn new(width: u32, height: u32) -> Self {
        GridMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Adopt an existing row-major vector of cells.  Panics if the
    /// vector's length disagrees with the stated dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Self {
        assert_eq!(cells.len(), width as usize * height as usize);
        GridMap {
            width,
            height,
            cells,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the value at a single cell's address.
    pub fn get_pt(&self, x: u32, y: u32) -> P {
        self.cells[self.get_index(x, y)]
    }

    /// Set a value at a single cell's address.
    pub fn put_pt(&mut self, x: u32, y: u32, p: P) {
        let index = self.get_index(x, y);
        self.cells[index] = p;
    }

    /// The row-major cells, for whoever needs to stream them out.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for GridMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for GridMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addressing_is_row_major() {
        let mut map: GridMap<u32> = GridMap::new(3, 2);
        map[(2, 0)] = 7;
        map[(0, 1)] = 9;
        assert_eq!(map.cells(), &[0, 0, 7, 9, 0, 0]);
        assert_eq!(map.get_pt(2, 0), 7);
        assert_eq!(map[(0, 1)], 9);
    }

    #[test]
    fn from_raw_round_trips() {
        let map = GridMap::from_raw(2, 2, vec![1u8, 2, 3, 4]);
        assert_eq!(map[(0, 0)], 1);
        assert_eq!(map[(1, 0)], 2);
        assert_eq!(map[(0, 1)], 3);
        assert_eq!(map[(1, 1)], 4);
    }

    #[test]
    #[should_panic]
    fn from_raw_rejects_bad_lengths() {
        let _ = GridMap::from_raw(2, 2, vec![1u8, 2, 3]);
    }
}
