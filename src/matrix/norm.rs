use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// Frobenius inner product: sum of elementwise products, the
    /// matrix counterpart of the vector dot product.
    ///
    /// Panics on shape mismatch.
    pub fn frobenius_dot(&self, rhs: &Self) -> T {
        assert!(
            self.nrows == rhs.nrows && self.ncols == rhs.ncols,
            "dimension mismatch: {}x{} . {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols,
        );
        self.data.dot(&rhs.data)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Frobenius norm: the L2 norm of the flattened matrix.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows_slice(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
    /// assert!((m.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        self.data.norm()
    }

    /// Frobenius distance to a matrix of the same shape.
    pub fn distance(&self, rhs: &Self) -> T {
        (self - rhs).norm()
    }

    /// Tolerance comparison: same shape and Frobenius distance below
    /// `eps`.
    pub fn approx_eq_eps(&self, rhs: &Self, eps: T) -> bool {
        self.nrows == rhs.nrows && self.ncols == rhs.ncols && self.distance(rhs) < eps
    }

    /// Tolerance comparison with machine epsilon.
    pub fn approx_eq(&self, rhs: &Self) -> bool {
        self.approx_eq_eps(rhs, T::epsilon())
    }
}
