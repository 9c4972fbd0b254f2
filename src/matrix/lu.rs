use alloc::vec;
use alloc::vec::Vec;

use crate::error::AlgebraError;
use crate::traits::FloatScalar;
use crate::vector::Vector;

use super::Matrix;

/// LU factorization with partial pivoting, `P * A = L * U`.
///
/// `L` (unit lower triangular) and `U` (upper triangular) share the
/// flat `lu` buffer; `perm[i]` is the source row of `A` that ended up
/// in position `i`. Factoring always completes, even for singular
/// input: a vanishing pivot column is left as-is and shows up as a
/// near-zero diagonal entry, so the determinant comes out ~0 while
/// [`solve`](Matrix::solve) and [`inverse`](Matrix::inverse) report
/// [`AlgebraError::Singular`].
#[derive(Debug, Clone)]
pub struct LuFactors<T> {
    lu: Vec<T>,
    n: usize,
    perm: Vec<usize>,
    even: bool,
}

impl<T: FloatScalar> LuFactors<T> {
    /// Factor a square matrix given as a flat row-major slice.
    pub(crate) fn compute(a: &[T], n: usize) -> Self {
        let mut lu = a.to_vec();
        let mut perm: Vec<usize> = (0..n).collect();
        let mut even = true;

        for k in 0..n {
            // Partial pivoting: largest magnitude in column k, rows k..n.
            let mut p = k;
            let mut best = lu[n * k + k].abs();
            for i in k + 1..n {
                let v = lu[n * i + k].abs();
                if v > best {
                    best = v;
                    p = i;
                }
            }
            if p != k {
                for j in 0..n {
                    lu.swap(n * k + j, n * p + j);
                }
                perm.swap(k, p);
                even = !even;
            }
            let pivot = lu[n * k + k];
            if pivot.abs() < T::epsilon() {
                continue;
            }
            for i in k + 1..n {
                let factor = lu[n * i + k] / pivot;
                lu[n * i + k] = factor;
                for j in k + 1..n {
                    lu[n * i + j] = lu[n * i + j] - factor * lu[n * k + j];
                }
            }
        }

        Self { lu, n, perm, even }
    }

    /// Matrix order.
    pub fn order(&self) -> usize {
        self.n
    }

    /// Row permutation: `perm()[i]` is the source row stored at
    /// position `i` of the factors.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Whether the permutation is even (an even number of row swaps).
    pub fn is_even(&self) -> bool {
        self.even
    }

    /// The unit lower triangular factor as a dense matrix.
    pub fn lower(&self) -> Matrix<T> {
        let n = self.n;
        Matrix::from_fn(n, n, |i, j| {
            if i == j {
                T::one()
            } else if i > j {
                self.lu[n * i + j]
            } else {
                T::zero()
            }
        })
    }

    /// The upper triangular factor as a dense matrix.
    pub fn upper(&self) -> Matrix<T> {
        let n = self.n;
        Matrix::from_fn(n, n, |i, j| if i <= j { self.lu[n * i + j] } else { T::zero() })
    }

    fn is_singular(&self) -> bool {
        (0..self.n).any(|k| self.lu[self.n * k + k].abs() < T::epsilon())
    }

    /// Determinant: signed product of the `U` diagonal.
    pub fn det(&self) -> T {
        let mut d = if self.even { T::one() } else { -T::one() };
        for k in 0..self.n {
            d = d * self.lu[self.n * k + k];
        }
        d
    }

    /// Solve `A * x = b` by forward then back substitution.
    pub(crate) fn solve(&self, b: &[T]) -> Result<Vec<T>, AlgebraError> {
        if self.is_singular() {
            return Err(AlgebraError::Singular);
        }
        let n = self.n;
        let mut x = vec![T::zero(); n];
        for i in 0..n {
            let mut s = b[self.perm[i]];
            for j in 0..i {
                s = s - self.lu[n * i + j] * x[j];
            }
            x[i] = s;
        }
        for i in (0..n).rev() {
            let mut s = x[i];
            for j in i + 1..n {
                s = s - self.lu[n * i + j] * x[j];
            }
            x[i] = s / self.lu[n * i + i];
        }
        Ok(x)
    }

    /// Invert by solving against each canonical basis vector.
    pub(crate) fn inverse(&self) -> Result<Vec<T>, AlgebraError> {
        let n = self.n;
        let mut out = vec![T::zero(); n * n];
        let mut e = vec![T::zero(); n];
        for j in 0..n {
            e[j] = T::one();
            let col = self.solve(&e)?;
            e[j] = T::zero();
            for i in 0..n {
                out[n * i + j] = col[i];
            }
        }
        Ok(out)
    }
}

impl<T: FloatScalar> Matrix<T> {
    /// Run `f` against the cached LU factors, computing them first if
    /// the cache is empty. Errors if the matrix is not square.
    fn with_factors<R>(&self, f: impl FnOnce(&LuFactors<T>) -> R) -> Result<R, AlgebraError> {
        if !self.is_square() {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, self.nrows),
                got: (self.nrows, self.ncols),
            });
        }
        let mut slot = self.factors.borrow_mut();
        let factors = slot.get_or_insert_with(|| LuFactors::compute(self.data.as_slice(), self.nrows));
        Ok(f(factors))
    }

    /// A copy of the LU factors of this matrix, computing and caching
    /// them if needed. Errors if the matrix is not square.
    pub fn lu(&self) -> Result<LuFactors<T>, AlgebraError> {
        self.with_factors(LuFactors::clone)
    }

    /// Determinant via the cached LU factorization.
    ///
    /// A singular matrix yields a determinant near zero rather than an
    /// error; only non-square input fails.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows_slice(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert!((a.det().unwrap() + 2.0).abs() < 1e-12);
    /// ```
    pub fn det(&self) -> Result<T, AlgebraError> {
        self.with_factors(LuFactors::det)
    }

    /// Solve `self * x = b` for `x` via the cached LU factorization.
    ///
    /// ```
    /// use numkit::{Matrix, Vector};
    /// let a = Matrix::from_rows_slice(2, 2, &[3.0_f64, 1.0, 1.0, 2.0]);
    /// let b = Vector::from_slice(&[9.0, 8.0]);
    /// let x = a.solve(&b).unwrap();
    /// assert!((&a * &x).approx_eq_eps(&b, 1e-12));
    /// ```
    pub fn solve(&self, b: &Vector<T>) -> Result<Vector<T>, AlgebraError> {
        if b.len() != self.nrows {
            return Err(AlgebraError::DimensionMismatch {
                expected: (self.nrows, 1),
                got: (b.len(), 1),
            });
        }
        let x = self.with_factors(|lu| lu.solve(b.as_slice()))??;
        Ok(Vector::from_vec(x))
    }

    /// Multiplicative inverse via the cached LU factorization.
    ///
    /// ```
    /// use numkit::Matrix;
    /// let a = Matrix::from_rows_slice(2, 2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let prod = &a * &a.inverse().unwrap();
    /// assert!(prod.approx_eq_eps(&Matrix::eye(2), 1e-12));
    /// ```
    pub fn inverse(&self) -> Result<Matrix<T>, AlgebraError> {
        let data = self.with_factors(LuFactors::inverse)??;
        Ok(Matrix::from_vec(self.nrows, self.nrows, data))
    }
}
