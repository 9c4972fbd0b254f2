use alloc::vec::Vec;
use core::fmt;

use crate::error::AlgebraError;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    fn check_row(&self, i: usize) -> Result<(), AlgebraError> {
        if i >= self.nrows {
            return Err(AlgebraError::IndexOutOfBounds {
                index: i,
                len: self.nrows,
            });
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> Result<(), AlgebraError> {
        if j >= self.ncols {
            return Err(AlgebraError::IndexOutOfBounds {
                index: j,
                len: self.ncols,
            });
        }
        Ok(())
    }

    /// Copy of row `i`.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
    /// ```
    pub fn row(&self, i: usize) -> Result<Vector<T>, AlgebraError> {
        self.check_row(i)?;
        Ok(Vector::from_slice(self.row_slice(i)))
    }

    /// Copy of column `j`.
    pub fn col(&self, j: usize) -> Result<Vector<T>, AlgebraError> {
        self.check_col(j)?;
        Ok(Vector::from_fn(self.nrows, |i| self.data[self.offset(i, j)]))
    }

    /// Copies of rows `i1..=i2`. The upper bound is clamped to the last
    /// row; an empty range yields an empty list.
    pub fn rows(&self, i1: usize, i2: usize) -> Vec<Vector<T>> {
        let end = i2.min(self.nrows.saturating_sub(1));
        (i1..=end)
            .filter(|&i| i < self.nrows)
            .map(|i| Vector::from_slice(self.row_slice(i)))
            .collect()
    }

    /// Copies of columns `j1..=j2`, clamped like [`rows`](Matrix::rows).
    pub fn cols(&self, j1: usize, j2: usize) -> Vec<Vector<T>> {
        let end = j2.min(self.ncols.saturating_sub(1));
        (j1..=end)
            .filter(|&j| j < self.ncols)
            .map(|j| Vector::from_fn(self.nrows, |i| self.data[self.offset(i, j)]))
            .collect()
    }

    /// Overwrite row `i`. Requires `row.len() == ncols`.
    pub fn set_row(&mut self, i: usize, row: &Vector<T>) -> Result<(), AlgebraError> {
        self.check_row(i)?;
        if row.len() != self.ncols {
            return Err(AlgebraError::DimensionMismatch {
                expected: (1, self.ncols),
                got: (1, row.len()),
            });
        }
        self.invalidate();
        let start = i * self.ncols;
        self.data.as_mut_slice()[start..start + self.ncols].copy_from_slice(row.as_slice());
        Ok(())
    }

    /// Overwrite column `j`. Requires `col.len() == nrows`.
    pub fn set_col(&mut self, j: usize, col: &Vector<T>) -> Result<(), AlgebraError> {
        self.check_col(j)?;
        if col.len() != self.nrows {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, 1),
                got: (col.len(), 1),
            });
        }
        self.invalidate();
        for i in 0..self.nrows {
            let k = self.offset(i, j);
            self.data[k] = col[i];
        }
        Ok(())
    }

    /// Overwrite consecutive rows starting at `i1`. Source rows that
    /// would land past the last row are ignored.
    pub fn set_rows(&mut self, i1: usize, rows: &[Vector<T>]) -> Result<(), AlgebraError> {
        for (off, row) in rows.iter().enumerate() {
            let i = i1 + off;
            if i >= self.nrows {
                break;
            }
            self.set_row(i, row)?;
        }
        Ok(())
    }

    /// Overwrite consecutive columns starting at `j1`, truncating like
    /// [`set_rows`](Matrix::set_rows).
    pub fn set_cols(&mut self, j1: usize, cols: &[Vector<T>]) -> Result<(), AlgebraError> {
        for (off, col) in cols.iter().enumerate() {
            let j = j1 + off;
            if j >= self.ncols {
                break;
            }
            self.set_col(j, col)?;
        }
        Ok(())
    }

    /// Swap elements `(i1, j1)` and `(i2, j2)`.
    ///
    /// Panics on out-of-bounds indices.
    pub fn swap(&mut self, i1: usize, j1: usize, i2: usize, j2: usize) {
        assert!(
            i1 < self.nrows && j1 < self.ncols && i2 < self.nrows && j2 < self.ncols,
            "swap indices out of bounds for {}x{} matrix",
            self.nrows,
            self.ncols,
        );
        self.invalidate();
        let a = self.offset(i1, j1);
        let b = self.offset(i2, j2);
        self.data.as_mut_slice().swap(a, b);
    }

    /// Swap rows `i1` and `i2`.
    pub fn swap_rows(&mut self, i1: usize, i2: usize) {
        assert!(
            i1 < self.nrows && i2 < self.nrows,
            "row index out of bounds for {} rows",
            self.nrows,
        );
        if i1 == i2 {
            return;
        }
        self.invalidate();
        for j in 0..self.ncols {
            let a = self.offset(i1, j);
            let b = self.offset(i2, j);
            self.data.as_mut_slice().swap(a, b);
        }
    }

    /// Swap columns `j1` and `j2`.
    pub fn swap_cols(&mut self, j1: usize, j2: usize) {
        assert!(
            j1 < self.ncols && j2 < self.ncols,
            "column index out of bounds for {} columns",
            self.ncols,
        );
        if j1 == j2 {
            return;
        }
        self.invalidate();
        for i in 0..self.nrows {
            let a = self.offset(i, j1);
            let b = self.offset(i, j2);
            self.data.as_mut_slice().swap(a, b);
        }
    }

    /// Rotate row `i` left by `iterations` positions (negative rotates
    /// right), modulo the row length.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let mut m = Matrix::from_rows_slice(1, 4, &[1.0, 2.0, 3.0, 4.0]);
    /// m.shift_row(0, 2);
    /// assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// ```
    pub fn shift_row(&mut self, i: usize, iterations: isize) {
        assert!(
            i < self.nrows,
            "row index out of bounds for {} rows",
            self.nrows,
        );
        self.invalidate();
        let start = i * self.ncols;
        let ncols = self.ncols;
        let k = iterations.rem_euclid(ncols as isize) as usize;
        if k != 0 {
            self.data.as_mut_slice()[start..start + ncols].rotate_left(k);
        }
    }

    /// Rotate column `j` up by `iterations` positions (negative rotates
    /// down), modulo the column length.
    pub fn shift_col(&mut self, j: usize, iterations: isize) {
        assert!(
            j < self.ncols,
            "column index out of bounds for {} columns",
            self.ncols,
        );
        self.invalidate();
        let mut col = Vector::from_fn(self.nrows, |i| self.data[self.offset(i, j)]);
        col.shift(iterations);
        for i in 0..self.nrows {
            let k = self.offset(i, j);
            self.data[k] = col[i];
        }
    }

    /// The transpose, `(n x p) -> (p x n)`.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// let t = m.transpose();
    /// assert_eq!(t.nrows(), 3);
    /// assert_eq!(t[(2, 1)], 6.0);
    /// assert_eq!(t.transpose(), m);
    /// ```
    pub fn transpose(&self) -> Matrix<T> {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self.data[self.offset(j, i)])
    }
}

// One row per line, the same sign-marker exponent format the flat
// vector uses, fenced with `|`.
impl<T: FloatScalar + fmt::LowerExp> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "|")?;
            for &x in self.row_slice(i) {
                let sign = if x >= T::zero() { "  " } else { " -" };
                write!(f, "{}{:.2e}", sign, x.abs())?;
            }
            write!(f, "  |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix<f64> {
        Matrix::from_rows_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    }

    #[test]
    fn row_col_copies() {
        let m = sample();
        assert_eq!(m.row(0).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(m.col(2).unwrap().as_slice(), &[3.0, 6.0]);
        assert!(m.row(2).is_err());
        assert!(m.col(3).is_err());
    }

    #[test]
    fn rows_cols_clamp() {
        let m = sample();
        let all = m.rows(0, 99);
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(m.cols(1, 2).len(), 2);
        assert!(m.rows(5, 9).is_empty());
    }

    #[test]
    fn set_row_col() {
        let mut m = sample();
        m.set_row(0, &Vector::from_slice(&[9.0, 8.0, 7.0])).unwrap();
        assert_eq!(m.row(0).unwrap().as_slice(), &[9.0, 8.0, 7.0]);
        m.set_col(1, &Vector::from_slice(&[0.0, 0.0])).unwrap();
        assert_eq!(m.col(1).unwrap().as_slice(), &[0.0, 0.0]);
        assert!(matches!(
            m.set_row(0, &Vector::from_slice(&[1.0])),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn set_rows_truncates() {
        let mut m = sample();
        let extra = [
            Vector::from_slice(&[0.0, 0.0, 0.0]),
            Vector::from_slice(&[1.0, 1.0, 1.0]),
            Vector::from_slice(&[2.0, 2.0, 2.0]),
        ];
        m.set_rows(1, &extra).unwrap();
        assert_eq!(m.row(1).unwrap().as_slice(), &[0.0, 0.0, 0.0]);
        assert_eq!(m.row(0).unwrap().as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn swaps() {
        let mut m = sample();
        m.swap_rows(0, 1);
        assert_eq!(m.as_slice(), &[4.0, 5.0, 6.0, 1.0, 2.0, 3.0]);
        m.swap_cols(0, 2);
        assert_eq!(m.row(0).unwrap().as_slice(), &[6.0, 5.0, 4.0]);
        m.swap(0, 0, 1, 2);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(1, 2)], 6.0);
    }

    #[test]
    fn shift_row_and_col() {
        let mut m = Matrix::from_rows_slice(1, 4, &[1.0, 2.0, 3.0, 4.0]);
        m.shift_row(0, 2);
        assert_eq!(m.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
        m.shift_row(0, -2);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        let mut c = Matrix::from_rows_slice(3, 1, &[1.0, 2.0, 3.0]);
        c.shift_col(0, 1);
        assert_eq!(c.as_slice(), &[2.0, 3.0, 1.0]);
        c.shift_col(0, -4);
        assert_eq!(c.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn mutators_invalidate_cache() {
        let mut m = Matrix::<f64>::eye(3);
        let _ = m.det().unwrap();
        m.swap_rows(0, 1);
        assert!(!m.has_cached_factors());
        // an odd permutation of the identity has determinant -1
        assert!((m.det().unwrap() + 1.0).abs() < 1e-12);
        m.shift_row(0, 1);
        assert!(!m.has_cached_factors());
    }

    #[test]
    fn transpose_involution() {
        let m = sample();
        assert_eq!(m.transpose().transpose(), m);
        let t = m.transpose();
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], t[(j, i)]);
            }
        }
    }

    #[test]
    fn display_fenced_rows() {
        let m = Matrix::from_rows_slice(2, 2, &[1.0_f64, -2.0, 0.5, 4.0]);
        let s = format!("{}", m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with('|') && lines[0].ends_with('|'));
        assert!(lines[0].contains(" -2.00e0"));
        assert!(lines[1].contains("5.00e-1"));
    }
}
