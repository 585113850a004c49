/// A square 2D grid backed by a flat vector.
#[derive(Clone)]
pub struct Grid2<T> {
    pub size: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid2<T> {
    pub fn new_with(size: usize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }

    fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.size && y < self.size);
        y * self.size + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.size;
            let y = idx / self.size;
            (x, y, val)
        })
    }
}

/// A 3D grid over a square base, z-major within each column.
#[derive(Clone)]
pub struct Grid3<T> {
    pub size: usize,
    pub depth: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid3<T> {
    pub fn new_with(size: usize, depth: usize, value: T) -> Self {
        Self {
            size,
            depth,
            data: vec![value; size * size * depth],
        }
    }

    fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.size && y < self.size && z < self.depth);
        (y * self.size + x) * self.depth + z
    }

    pub fn get(&self, x: usize, y: usize, z: usize) -> &T {
        &self.data[self.index(x, y, z)]
    }

    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        let idx = self.index(x, y, z);
        self.data[idx] = value;
    }

    /// The vertical column at (x, y), from z = 0 upward.
    pub fn column(&self, x: usize, y: usize) -> &[T] {
        let start = self.index(x, y, 0);
        &self.data[start..start + self.depth]
    }

    /// Mutable vertical column at (x, y).
    pub fn column_mut(&mut self, x: usize, y: usize) -> &mut [T] {
        let start = self.index(x, y, 0);
        let depth = self.depth;
        &mut self.data[start..start + depth]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid2_get_set() {
        let mut grid = Grid2::new_with(4, 0u32);
        grid.set(3, 2, 7);
        assert_eq!(*grid.get(3, 2), 7);
        assert_eq!(*grid.get(0, 0), 0);
    }

    #[test]
    fn test_grid2_iter_covers_all_cells() {
        let grid = Grid2::new_with(3, 1u32);
        let cells: Vec<_> = grid.iter().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], (0, 0, &1));
        assert_eq!(cells[8], (2, 2, &1));
    }

    #[test]
    fn test_grid3_columns_are_contiguous() {
        let mut grid = Grid3::new_with(2, 3, false);
        grid.set(1, 0, 0, true);
        grid.set(1, 0, 2, true);
        assert_eq!(grid.column(1, 0), &[true, false, true]);
        assert_eq!(grid.column(0, 1), &[false, false, false]);
    }

    #[test]
    fn test_grid3_column_mut() {
        let mut grid = Grid3::new_with(2, 4, 0u8);
        grid.column_mut(0, 1)[..3].fill(9);
        assert_eq!(grid.column(0, 1), &[9, 9, 9, 0]);
        assert_eq!(*grid.get(0, 1, 2), 9);
    }
}
