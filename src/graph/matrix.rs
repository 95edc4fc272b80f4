//! Dense square matrices indexed by token id
//!
//! Sentences are short, so a row-major `Vec<T>` of V×V cells is both the
//! simplest and the fastest layout for the O(V³) solver's inner loop.
//! Larger graphs would want a sparse representation instead.

use serde::Serialize;

use crate::types::TokenId;

/// A square matrix stored row-major
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix<T> {
    /// Number of rows (and columns)
    size: usize,
    /// Cells, row after row
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Create a `size`×`size` matrix with every cell set to `value`
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }
}

impl<T> Matrix<T> {
    /// Build a matrix from rows, or `None` if the rows do not form a square
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no cells
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Get a cell, or `None` when out of range
    pub fn get(&self, row: TokenId, col: TokenId) -> Option<&T> {
        let (row, col) = (row as usize, col as usize);
        if row < self.size && col < self.size {
            Some(&self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Overwrite a cell; out-of-range writes are ignored
    pub fn set(&mut self, row: TokenId, col: TokenId, value: T) {
        let (row, col) = (row as usize, col as usize);
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = value;
        }
    }

    /// Borrow one row; empty when `row` is out of range
    pub fn row(&self, row: TokenId) -> &[T] {
        let row = row as usize;
        if row >= self.size {
            return &[];
        }
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks(0) panics, and an empty matrix has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Cell at `(row, col)` without bounds translation; panics when out of range
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.size + col]
    }

    #[inline]
    pub(crate) fn at_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.cells[row * self.size + col]
    }
}

impl<T: PartialEq> Matrix<T> {
    /// Whether `m[i][j] == m[j][i]` for every pair
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.at(i, j) == self.at(j, i)))
    }
}

impl<T> std::ops::Index<(TokenId, TokenId)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (TokenId, TokenId)) -> &T {
        self.at(row as usize, col as usize)
    }
}
