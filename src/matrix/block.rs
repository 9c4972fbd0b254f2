use crate::error::AlgebraError;
use crate::traits::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Copy of the block with corners `(i1, j1)` and `(i2, j2)`, both
    /// inclusive. Errors if a corner is out of bounds or the corners
    /// are not ordered.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows_slice(3, 3, &[
    ///     1.0, 2.0, 3.0,
    ///     4.0, 5.0, 6.0,
    ///     7.0, 8.0, 9.0,
    /// ]);
    /// let b = m.sub_matrix(1, 1, 2, 2).unwrap();
    /// assert_eq!(b.as_slice(), &[5.0, 6.0, 8.0, 9.0]);
    /// ```
    pub fn sub_matrix(
        &self,
        i1: usize,
        j1: usize,
        i2: usize,
        j2: usize,
    ) -> Result<Matrix<T>, AlgebraError> {
        if i2 >= self.nrows || i1 > i2 {
            return Err(AlgebraError::IndexOutOfBounds {
                index: i2,
                len: self.nrows,
            });
        }
        if j2 >= self.ncols || j1 > j2 {
            return Err(AlgebraError::IndexOutOfBounds {
                index: j2,
                len: self.ncols,
            });
        }
        Ok(Matrix::from_fn(i2 - i1 + 1, j2 - j1 + 1, |i, j| {
            self.data[self.offset(i1 + i, j1 + j)]
        }))
    }

    /// Overwrite the block whose upper-left corner is `(i1, j1)` with
    /// `src`. The block must fit entirely inside the matrix.
    pub fn set_sub_matrix(
        &mut self,
        i1: usize,
        j1: usize,
        src: &Matrix<T>,
    ) -> Result<(), AlgebraError> {
        let i2 = i1 + src.nrows;
        let j2 = j1 + src.ncols;
        if i2 > self.nrows || j2 > self.ncols {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, self.ncols),
                got: (i2, j2),
            });
        }
        self.invalidate();
        for i in 0..src.nrows {
            for j in 0..src.ncols {
                let k = self.offset(i1 + i, j1 + j);
                self.data[k] = src.data[src.offset(i, j)];
            }
        }
        Ok(())
    }

    /// Horizontal concatenation `[self | rhs]`. Errors unless both
    /// matrices have the same number of rows.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let aug = a.augmented(&Matrix::eye(2)).unwrap();
    /// assert_eq!(aug.ncols(), 4);
    /// assert_eq!(aug[(0, 2)], 1.0);
    /// assert_eq!(aug[(1, 0)], 3.0);
    /// ```
    pub fn augmented(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, AlgebraError> {
        if self.nrows != rhs.nrows {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(Matrix::from_fn(self.nrows, self.ncols + rhs.ncols, |i, j| {
            if j < self.ncols {
                self.data[self.offset(i, j)]
            } else {
                rhs.data[rhs.offset(i, j - self.ncols)]
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_matrix_corners() {
        let m = Matrix::from_fn(4, 4, |i, j| (4 * i + j) as f64);
        let b = m.sub_matrix(0, 0, 3, 3).unwrap();
        assert_eq!(b, m);
        let single = m.sub_matrix(2, 3, 2, 3).unwrap();
        assert_eq!(single.dim(), 1);
        assert_eq!(single[(0, 0)], 11.0);
    }

    #[test]
    fn sub_matrix_bounds() {
        let m = Matrix::<f64>::zeros(2, 2);
        assert!(m.sub_matrix(0, 0, 2, 1).is_err());
        assert!(m.sub_matrix(1, 0, 0, 1).is_err());
    }

    #[test]
    fn set_sub_matrix_writes_block() {
        let mut m = Matrix::<f64>::zeros(3, 3);
        let block = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        m.set_sub_matrix(1, 1, &block).unwrap();
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(2, 2)], 4.0);
        assert_eq!(m[(0, 0)], 0.0);
        assert!(m.set_sub_matrix(2, 2, &block).is_err());
    }

    #[test]
    fn set_sub_matrix_invalidates_cache() {
        let mut m = Matrix::<f64>::eye(2);
        let _ = m.det().unwrap();
        m.set_sub_matrix(0, 0, &Matrix::fill(1, 1, 5.0)).unwrap();
        assert!(!m.has_cached_factors());
        assert!((m.det().unwrap() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn augmented_then_split() {
        let a = Matrix::from_rows_slice(2, 2, &[2.0, 0.0, 0.0, 2.0]);
        let aug = a.augmented(&Matrix::eye(2)).unwrap();
        let left = aug.sub_matrix(0, 0, 1, 1).unwrap();
        let right = aug.sub_matrix(0, 2, 1, 3).unwrap();
        assert_eq!(left, a);
        assert_eq!(right, Matrix::eye(2));
    }

    #[test]
    fn augmented_row_mismatch() {
        let a = Matrix::<f64>::zeros(2, 2);
        assert!(matches!(
            a.augmented(&Matrix::<f64>::zeros(3, 1)),
            Err(AlgebraError::DimensionMismatch { .. })
        ));
    }
}
