//! Square height grids and their path-marked copies.
//!
//! [`HeightGrid`] is the input to every route query: a `size × size` matrix of
//! elevations clamped to `[MIN_HEIGHT, MAX_HEIGHT]`. It is validated once on
//! construction and never mutated by the path code. [`MarkedGrid`] is an
//! independent copy in which visited cells are overwritten with [`OFF`].

use crate::error::GridError;
use crate::geom::{Point, Range};

/// Lowest valid height.
pub const MIN_HEIGHT: i32 = 0;
/// Highest valid height.
pub const MAX_HEIGHT: i32 = 99;
/// Sentinel written into a [`MarkedGrid`] for cells on a path.
pub const OFF: i32 = -1;

/// A validated `size × size` grid of heights in `[0, 99]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeightGrid {
    size: usize,
    cells: Vec<i32>,
}

impl HeightGrid {
    /// Build a grid from a slice of rows. Every row must have as many cells
    /// as there are rows.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(size * size);
        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::NotSquare {
                    row: x,
                    expected: size,
                    got: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_cells(size, cells)
    }

    /// Build a grid by evaluating `f` at every cell in row-major order.
    pub fn from_fn(size: usize, f: impl FnMut(Point) -> i32) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        let cells = Range::square(size as i32).iter().map(f).collect();
        Self::from_cells(size, cells)
    }

    /// A grid in which every cell has height `value`.
    pub fn filled(size: usize, value: i32) -> Result<Self, GridError> {
        Self::from_fn(size, |_| value)
    }

    fn from_cells(size: usize, cells: Vec<i32>) -> Result<Self, GridError> {
        let grid = Self { size, cells };
        for (p, h) in grid.iter() {
            if !(MIN_HEIGHT..=MAX_HEIGHT).contains(&h) {
                return Err(GridError::HeightOutOfRange { pos: p, value: h });
            }
        }
        Ok(grid)
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells, which is also the vertex count of the derived graph.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: constructors reject empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding range of the grid.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size as i32)
    }

    /// Whether `p` is a cell of this grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// Height at `p`, or `None` outside the grid.
    #[inline]
    pub fn at(&self, p: Point) -> Option<i32> {
        self.vertex(p).map(|v| self.cells[v])
    }

    /// Vertex index `x * size + y` of `p`, or `None` outside the grid.
    #[inline]
    pub fn vertex(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.x as usize * self.size + p.y as usize)
    }

    /// Like [`vertex`](Self::vertex) but reports the offending point.
    pub fn try_vertex(&self, p: Point) -> Result<usize, GridError> {
        self.vertex(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size,
        })
    }

    /// Cell of vertex `v`. Inverse of [`vertex`](Self::vertex) for `v < len()`.
    #[inline]
    pub fn point(&self, v: usize) -> Point {
        Point::new((v / self.size) as i32, (v % self.size) as i32)
    }

    /// The north-west corner `(0, 0)`.
    #[inline]
    pub fn first_corner(&self) -> Point {
        Point::ZERO
    }

    /// The south-east corner `(size - 1, size - 1)`.
    #[inline]
    pub fn last_corner(&self) -> Point {
        let last = self.size as i32 - 1;
        Point::new(last, last)
    }

    /// Row-major iterator over `(Point, height)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.bounds().iter().zip(self.cells.iter().copied())
    }

    /// Rows as slices, north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.size)
    }
}

/// A copy of a [`HeightGrid`] with path cells replaced by [`OFF`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarkedGrid {
    size: usize,
    cells: Vec<i32>,
}

impl MarkedGrid {
    /// Unmarked copy of `grid`.
    pub fn new(grid: &HeightGrid) -> Self {
        Self {
            size: grid.size,
            cells: grid.cells.clone(),
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Mark `p` as visited. Points outside the grid are ignored.
    pub fn mark(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.cells[i] = OFF;
        }
    }

    /// Whether `p` has been marked.
    pub fn is_marked(&self, p: Point) -> bool {
        self.at(p) == Some(OFF)
    }

    /// Number of marked cells.
    pub fn marked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == OFF).count()
    }

    /// Cell value at `p`: a height, or [`OFF`] for marked cells.
    pub fn at(&self, p: Point) -> Option<i32> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Rows as slices, north to south.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.cells.chunks(self.size)
    }

    fn index(&self, p: Point) -> Option<usize> {
        if !Range::square(self.size as i32).contains(p) {
            return None;
        }
        Some(p.x as usize * self.size + p.y as usize)
    }
}
