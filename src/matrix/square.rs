use crate::error::AlgebraError;
use crate::traits::{FloatScalar, Scalar};
use crate::vector::Vector;

use super::Matrix;

// ── Square builders ─────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// The `n x n` identity matrix.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let i = Matrix::<f64>::eye(3);
    /// assert_eq!(i[(1, 1)], 1.0);
    /// assert_eq!(i[(0, 2)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { T::one() } else { T::zero() })
    }

    /// Diagonal matrix with the given main diagonal.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let d = Matrix::diag(&[1.0, 2.0, 3.0]);
    /// assert_eq!(d[(2, 2)], 3.0);
    /// assert_eq!(d[(0, 1)], 0.0);
    /// ```
    pub fn diag(values: &[T]) -> Self {
        let n = values.len();
        Self::from_fn(n, n, |i, j| if i == j { values[i] } else { T::zero() })
    }

    /// Scalar matrix `s * I`, order `n`.
    pub fn scalar(s: T, n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { s } else { T::zero() })
    }

    /// Banded matrix built from an odd number of diagonals. The middle
    /// vector of the list is the main diagonal; its neighbors fill the
    /// adjacent sub- and super-diagonals outward. A diagonal at offset
    /// `d` must have length `n - |d|`.
    ///
    /// Panics on an even diagonal count or a wrong diagonal length.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// // tridiagonal: sub, main, super
    /// let m = Matrix::ndiag(3, &[
    ///     Vector::from_slice(&[1.0, 1.0]),
    ///     Vector::from_slice(&[2.0, 2.0, 2.0]),
    ///     Vector::from_slice(&[3.0, 3.0]),
    /// ]);
    /// assert_eq!(m[(1, 0)], 1.0);
    /// assert_eq!(m[(1, 1)], 2.0);
    /// assert_eq!(m[(1, 2)], 3.0);
    /// assert_eq!(m[(0, 2)], 0.0);
    /// ```
    pub fn ndiag(n: usize, diagonals: &[Vector<T>]) -> Self {
        assert!(
            diagonals.len() % 2 == 1,
            "ndiag requires an odd number of diagonals, got {}",
            diagonals.len(),
        );
        let mid = diagonals.len() / 2;
        for (idx, d) in diagonals.iter().enumerate() {
            let offset = idx.abs_diff(mid);
            assert_eq!(
                d.len(),
                n - offset,
                "diagonal at offset {} must have length {}",
                offset,
                n - offset,
            );
        }
        Self::from_fn(n, n, |i, j| {
            // j - i is the signed offset from the main diagonal
            let off = j as isize - i as isize;
            let idx = mid as isize + off;
            if idx < 0 || idx as usize >= diagonals.len() {
                return T::zero();
            }
            diagonals[idx as usize][i.min(j)]
        })
    }

    /// Symmetric banded matrix from constant band values. The last
    /// scalar is the main diagonal; each earlier scalar fills the
    /// matching pair of bands one step further out, so
    /// `nscalar(n, &[s0, s1])` is tridiagonal with `s1` on the main
    /// diagonal and `s0` on both adjacent bands.
    ///
    /// Panics if more bands are requested than fit in the matrix.
    pub fn nscalar(n: usize, scalars: &[T]) -> Self {
        let q = scalars.len();
        assert!(
            q >= 1 && q <= n,
            "nscalar with {} bands does not fit an order-{} matrix",
            q,
            n,
        );
        Self::from_fn(n, n, |i, j| {
            let dist = i.abs_diff(j);
            if dist < q {
                scalars[q - 1 - dist]
            } else {
                T::zero()
            }
        })
    }

    /// Sum of the main diagonal. Errors if the matrix is not square.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let m = Matrix::from_rows_slice(2, 2, &[1.0, 9.0, 9.0, 2.0]);
    /// assert_eq!(m.trace().unwrap(), 3.0);
    /// ```
    pub fn trace(&self) -> Result<T, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, self.nrows),
                got: (self.nrows, self.ncols),
            });
        }
        let mut t = T::zero();
        for i in 0..self.nrows {
            t = t + self.data[self.offset(i, i)];
        }
        Ok(t)
    }

    /// Matrix power by repeated squaring; `pow(0)` is the identity.
    ///
    /// Panics if the matrix is not square.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows_slice(2, 2, &[1.0, 1.0, 0.0, 1.0]);
    /// assert_eq!(a.pow(3)[(0, 1)], 3.0);
    /// assert_eq!(a.pow(0), Matrix::eye(2));
    /// ```
    pub fn pow(&self, exp: u32) -> Matrix<T> {
        assert!(
            self.is_square(),
            "pow requires a square matrix, got {}x{}",
            self.nrows,
            self.ncols,
        );
        let mut result = Matrix::eye(self.nrows);
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = &result * &base;
            }
            e >>= 1;
            if e > 0 {
                base = &base * &base;
            }
        }
        result
    }
}

// ── Structure predicates and reduction ──────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Whether every element below the main diagonal is negligible.
    pub fn is_upper(&self) -> bool {
        (0..self.nrows)
            .flat_map(|i| (0..i.min(self.ncols)).map(move |j| (i, j)))
            .all(|(i, j)| self.data[self.offset(i, j)].abs() < T::epsilon())
    }

    /// Whether every element above the main diagonal is negligible.
    pub fn is_lower(&self) -> bool {
        (0..self.nrows)
            .flat_map(|i| (i + 1..self.ncols).map(move |j| (i, j)))
            .all(|(i, j)| self.data[self.offset(i, j)].abs() < T::epsilon())
    }

    /// Whether every off-diagonal element is negligible.
    pub fn is_diagonal(&self) -> bool {
        self.is_upper() && self.is_lower()
    }

    /// In-place Gauss-Jordan reduction to reduced row echelon form,
    /// with partial pivoting, sweeping every column. Works on
    /// rectangular shapes, in particular on augmented systems.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let mut aug = Matrix::from_rows_slice(2, 3, &[2.0, 0.0, 4.0, 0.0, 2.0, 6.0]);
    /// aug.reduce();
    /// assert_eq!(aug.as_slice(), &[1.0, 0.0, 2.0, 0.0, 1.0, 3.0]);
    /// ```
    pub fn reduce(&mut self) {
        self.invalidate();
        let n = self.nrows;
        let p = self.ncols;
        let mut r = 0;
        for c in 0..p {
            if r >= n {
                break;
            }
            let mut piv = r;
            let mut best = self.data[p * r + c].abs();
            for i in r + 1..n {
                let v = self.data[p * i + c].abs();
                if v > best {
                    best = v;
                    piv = i;
                }
            }
            if best < T::epsilon() {
                continue;
            }
            if piv != r {
                for j in 0..p {
                    self.data.as_mut_slice().swap(p * r + j, p * piv + j);
                }
            }
            let pv = self.data[p * r + c];
            for j in 0..p {
                self.data[p * r + j] = self.data[p * r + j] / pv;
            }
            for i in 0..n {
                if i == r {
                    continue;
                }
                let f = self.data[p * i + c];
                if f.abs() < T::epsilon() {
                    continue;
                }
                for j in 0..p {
                    self.data[p * i + j] = self.data[p * i + j] - f * self.data[p * r + j];
                }
            }
            r += 1;
        }
    }

    /// Signed matrix power: non-negative exponents behave like
    /// [`pow`](Matrix::pow), negative exponents raise the inverse, so
    /// `powi(-1)` is the inverse itself.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows_slice(2, 2, &[2.0_f64, 0.0, 0.0, 4.0]);
    /// let b = a.powi(-2).unwrap();
    /// assert!((b[(0, 0)] - 0.25).abs() < 1e-12);
    /// assert!((b[(1, 1)] - 0.0625).abs() < 1e-12);
    /// ```
    pub fn powi(&self, exp: i32) -> Result<Matrix<T>, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, self.nrows),
                got: (self.nrows, self.ncols),
            });
        }
        if exp >= 0 {
            Ok(self.pow(exp as u32))
        } else {
            Ok(self.inverse()?.pow(exp.unsigned_abs()))
        }
    }

    /// Inverse through Gauss-Jordan elimination of `[self | I]`.
    ///
    /// Slower than [`inverse`](Matrix::inverse) and does not touch the
    /// LU cache; kept as an independent cross-check.
    pub fn inverse_gauss_jordan(&self) -> Result<Matrix<T>, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, self.nrows),
                got: (self.nrows, self.ncols),
            });
        }
        let n = self.nrows;
        let mut aug = self.augmented(&Matrix::eye(n))?;
        aug.reduce();
        let left = aug.sub_matrix(0, 0, n - 1, n - 1)?;
        if !left.approx_eq_eps(&Matrix::eye(n), T::epsilon().sqrt()) {
            return Err(AlgebraError::Singular);
        }
        aug.sub_matrix(0, n, n - 1, 2 * n - 1)
    }
}
