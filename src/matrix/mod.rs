mod block;
mod lu;
mod norm;
mod ops;
mod square;
mod util;

pub use lu::LuFactors;

use alloc::vec::Vec;
use core::cell::RefCell;
use core::ops::{Index, IndexMut};
use core::str::FromStr;

use crate::error::AlgebraError;
use crate::traits::Scalar;
use crate::vector::Vector;

/// Dense, heap-allocated matrix with runtime dimensions.
///
/// Row-major storage over a flat [`Vector`]: element `(i, j)` lives at
/// index `ncols * i + j`, so `dim() == nrows() * ncols()` always holds.
/// Carries a lazily computed LU factorization (partial pivoting) used
/// by [`det`](Matrix::det), [`solve`](Matrix::solve) and
/// [`inverse`](Matrix::inverse); every mutating operation invalidates
/// the cached factors through a single chokepoint, so a stale cache
/// cannot be observed.
///
/// # Examples
///
/// ```
/// use numkit::{Matrix, Vector};
///
/// let a = Matrix::from_rows_slice(2, 2, &[2.0_f64, 0.0, 0.0, 2.0]);
/// let x = a.solve(&Vector::from_slice(&[4.0, 6.0])).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-12);
/// assert!((x[1] - 3.0).abs() < 1e-12);
/// assert!((a.det().unwrap() - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct Matrix<T> {
    pub(crate) data: Vector<T>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
    // Absent/Valid LU cache. Populated through `&self` (single-threaded
    // interior mutability), cleared by `invalidate()`.
    pub(crate) factors: RefCell<Option<LuFactors<T>>>,
}

// The cache is never cloned or compared: a deep copy starts Absent, and
// equality is defined by shape and contents alone.

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            nrows: self.nrows,
            ncols: self.ncols,
            factors: RefCell::new(None),
        }
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.nrows == rhs.nrows && self.ncols == rhs.ncols && self.data == rhs.data
    }
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    pub(crate) fn from_parts(data: Vector<T>, nrows: usize, ncols: usize) -> Self {
        Self {
            data,
            nrows,
            ncols,
            factors: RefCell::new(None),
        }
    }

    /// Create an `nrows x ncols` matrix filled with zeros.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::from_parts(Vector::zeros(nrows * ncols), nrows, ncols)
    }

    /// Create an `nrows x ncols` matrix filled with ones.
    pub fn ones(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::one())
    }

    /// Create a matrix filled with a given value.
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self::from_parts(Vector::fill(nrows * ncols, value), nrows, ncols)
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self::from_parts(Vector::from_vec(data), nrows, ncols)
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `slice.len() != nrows * ncols`.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows_slice(nrows: usize, ncols: usize, slice: &[T]) -> Self {
        assert_eq!(
            slice.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            slice.len(),
            nrows,
            ncols,
        );
        Self::from_parts(Vector::from_slice(slice), nrows, ncols)
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self::from_parts(Vector::from_vec(data), nrows, ncols)
    }

    /// Reinterpret a flat [`Vector`] as an `nrows x ncols` matrix.
    ///
    /// Panics if `v.len() != nrows * ncols`.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let m = Matrix::from_vector(v, 2, 3);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_vector(v: Vector<T>, nrows: usize, ncols: usize) -> Self {
        assert_eq!(
            v.len(),
            nrows * ncols,
            "vector length {} does not match {}x{} matrix",
            v.len(),
            nrows,
            ncols,
        );
        Self::from_parts(v, nrows, ncols)
    }

    /// Canonical basis matrix: a single one at `(i, j)`, zeros
    /// elsewhere.
    ///
    /// Panics unless `i < nrows` and `j < ncols`.
    pub fn canonical(i: usize, j: usize, nrows: usize, ncols: usize) -> Self {
        assert!(
            i < nrows && j < ncols,
            "canonical index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            nrows,
            ncols,
        );
        let mut m = Self::zeros(nrows, ncols);
        let idx = m.offset(i, j);
        m.data[idx] = T::one();
        m
    }

    /// Create a matrix from nested rows. All rows must have the same
    /// length; panics otherwise or on empty input.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_nested(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
    /// assert_eq!(m[(1, 1)], 4.0);
    /// ```
    pub fn from_nested(rows: &[Vec<T>]) -> Self {
        assert!(!rows.is_empty(), "from_nested requires at least one row");
        let ncols = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            assert_eq!(
                row.len(),
                ncols,
                "row length {} does not match first row length {}",
                row.len(),
                ncols,
            );
            data.extend_from_slice(row);
        }
        Self::from_parts(Vector::from_vec(data), rows.len(), ncols)
    }

    /// Create a matrix whose rows are the given equal-length vectors.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let m = Matrix::from_row_vectors(&[
    ///     Vector::from_slice(&[1.0, 2.0]),
    ///     Vector::from_slice(&[3.0, 4.0]),
    /// ]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_row_vectors(rows: &[Vector<T>]) -> Self {
        assert!(
            !rows.is_empty(),
            "from_row_vectors requires at least one row"
        );
        let ncols = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * ncols);
        for row in rows {
            assert_eq!(
                row.len(),
                ncols,
                "row length {} does not match first row length {}",
                row.len(),
                ncols,
            );
            data.extend_from_slice(row.as_slice());
        }
        Self::from_parts(Vector::from_vec(data), rows.len(), ncols)
    }
}

impl<T: Scalar + FromStr> Matrix<T> {
    /// Lenient parse: each non-empty line is parsed as a row with
    /// [`Vector::from_text`] semantics. Lines yielding no numbers are
    /// skipped; remaining rows must have equal lengths (panics
    /// otherwise, or if nothing parsed).
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::<f64>::from_text("| 1 2 |\n| 3 4 |");
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_text(text: &str) -> Self {
        let rows: Vec<Vector<T>> = text
            .lines()
            .map(Vector::from_text)
            .filter(|v| !v.is_empty())
            .collect();
        Self::from_row_vectors(&rows)
    }
}

// ── Shape and access ────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Total number of elements (`nrows * ncols`).
    #[inline]
    pub fn dim(&self) -> usize {
        self.nrows * self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    pub(crate) fn offset(&self, i: usize, j: usize) -> usize {
        self.ncols * i + j
    }

    /// Clear the cached LU factors. The single chokepoint every
    /// mutating operation goes through, keeping the cache consistent
    /// with the current contents.
    #[inline]
    pub(crate) fn invalidate(&mut self) {
        *self.factors.get_mut() = None;
    }

    #[cfg(test)]
    pub(crate) fn has_cached_factors(&self) -> bool {
        self.factors.borrow().is_some()
    }

    /// Checked element access.
    pub fn get(&self, i: usize, j: usize) -> Result<&T, AlgebraError> {
        if i >= self.nrows {
            return Err(AlgebraError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        if j >= self.ncols {
            return Err(AlgebraError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        Ok(&self.data[self.offset(i, j)])
    }

    /// Checked mutable element access. Invalidates the LU cache.
    pub fn get_mut(&mut self, i: usize, j: usize) -> Result<&mut T, AlgebraError> {
        if i >= self.nrows {
            return Err(AlgebraError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        if j >= self.ncols {
            return Err(AlgebraError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        self.invalidate();
        let k = self.offset(i, j);
        Ok(&mut self.data[k])
    }

    /// View the matrix as a flat row-major slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// View the matrix as a flat mutable row-major slice.
    /// Invalidates the LU cache.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.invalidate();
        self.data.as_mut_slice()
    }

    /// Borrow the flat backing vector.
    #[inline]
    pub fn as_vector(&self) -> &Vector<T> {
        &self.data
    }

    /// Consume the matrix, returning its flat backing vector.
    pub fn into_vector(self) -> Vector<T> {
        self.data
    }

    /// View row `i` as a slice.
    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        let start = i * self.ncols;
        &self.data.as_slice()[start..start + self.ncols]
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.nrows,
            self.ncols,
        );
        &self.data[self.offset(i, j)]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.nrows && j < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            i,
            j,
            self.nrows,
            self.ncols,
        );
        self.invalidate();
        let k = self.offset(i, j);
        &mut self.data[k]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_shape() {
        let m = Matrix::<f64>::zeros(3, 4);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 4);
        assert_eq!(m.dim(), 12);
        assert!(!m.is_square());
        assert!(Matrix::<f64>::zeros(2, 2).is_square());
    }

    #[test]
    fn row_major_layout() {
        let m = Matrix::from_rows_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 2)], 3.0);
        assert_eq!(m[(1, 0)], 4.0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "slice length")]
    fn from_rows_slice_wrong_length() {
        let _ = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_vector_reinterprets() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let m = Matrix::from_vector(v, 2, 2);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn from_vector_wrong_shape() {
        let _ = Matrix::from_vector(Vector::<f64>::zeros(3), 2, 2);
    }

    #[test]
    fn from_nested_and_row_vectors() {
        let a = Matrix::from_nested(&[vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = Matrix::from_row_vectors(&[
            Vector::from_slice(&[1.0, 2.0]),
            Vector::from_slice(&[3.0, 4.0]),
        ]);
        assert_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "row length")]
    fn from_nested_ragged() {
        let _ = Matrix::from_nested(&[vec![1.0, 2.0], vec![3.0]]);
    }

    #[test]
    fn from_text_rows() {
        let m = Matrix::<f64>::from_text("1, 2, 3\n\n4 5 6\n");
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn checked_access() {
        let mut m = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(*m.get(1, 0).unwrap(), 3.0);
        assert_eq!(
            m.get(2, 0).unwrap_err(),
            AlgebraError::IndexOutOfBounds { index: 2, len: 2 }
        );
        assert!(m.get(0, 2).is_err());
        *m.get_mut(0, 0).unwrap() = 9.0;
        assert_eq!(m[(0, 0)], 9.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_col_overflow_panics() {
        // flat offset would still be in range; must panic regardless
        let m = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let _ = m[(0, 3)];
    }

    #[test]
    fn clone_starts_without_cache() {
        let a = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let _ = a.det().unwrap();
        assert!(a.has_cached_factors());
        let b = a.clone();
        assert!(!b.has_cached_factors());
        assert_eq!(a, b);
    }

    #[test]
    fn eq_ignores_cache_state() {
        let a = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = a.clone();
        let _ = a.det().unwrap();
        assert_eq!(a, b);
    }
}
