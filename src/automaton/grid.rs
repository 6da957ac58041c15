//! Square row-major grid storage

/// Fixed-size N×N grid, origin at the top-left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T: Clone + Default> {
    dimension: usize,
    data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Allocate a grid with every element at `T::default()`
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            data: vec![T::default(); dimension * dimension],
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.dimension && col < self.dimension {
            Some(row * self.dimension + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.index(row, col).map(|i| &self.data[i])
    }

    #[inline]
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.index(row, col).map(move |i| &mut self.data[i])
    }

    /// Out-of-bounds writes are ignored
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        if let Some(i) = self.index(row, col) {
            self.data[i] = value;
        }
    }

    /// Reset every element to `T::default()`
    pub fn clear(&mut self) {
        self.data.fill(T::default());
    }

    /// Rows in top-to-bottom order
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; a zero-dimension grid simply has no rows
        self.data.chunks_exact(self.dimension.max(1))
    }

    pub fn row_mut(&mut self, row: usize) -> Option<&mut [T]> {
        if row < self.dimension {
            let start = row * self.dimension;
            Some(&mut self.data[start..start + self.dimension])
        } else {
            None
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    /// In-bounds Moore neighbors of (row, col), excluding the cell itself
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        const OFFSETS: [(isize, isize); 8] = [
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ];

        OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.dimension && c < self.dimension).then_some((r, c))
        })
    }
}
