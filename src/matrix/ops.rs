use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::vector::Vector;

use super::Matrix;

fn assert_same_shape<T>(lhs: &Matrix<T>, rhs: &Matrix<T>, op: &str) {
    assert!(
        lhs.nrows == rhs.nrows && lhs.ncols == rhs.ncols,
        "dimension mismatch: {}x{} {} {}x{}",
        lhs.nrows,
        lhs.ncols,
        op,
        rhs.nrows,
        rhs.ncols,
    );
}

// ── Element-wise addition and subtraction ───────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_same_shape(self, rhs, "+");
        Matrix::from_parts(&self.data + &rhs.data, self.nrows, self.ncols)
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn add(self, rhs: Matrix<T>) -> Matrix<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Matrix<T>> for Matrix<T> {
    fn add_assign(&mut self, rhs: &Matrix<T>) {
        assert_same_shape(self, rhs, "+=");
        self.invalidate();
        self.data += &rhs.data;
    }
}

impl<T: Scalar> AddAssign for Matrix<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_same_shape(self, rhs, "-");
        Matrix::from_parts(&self.data - &rhs.data, self.nrows, self.ncols)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn sub(self, rhs: Matrix<T>) -> Matrix<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Matrix<T>> for Matrix<T> {
    fn sub_assign(&mut self, rhs: &Matrix<T>) {
        assert_same_shape(self, rhs, "-=");
        self.invalidate();
        self.data -= &rhs.data;
    }
}

impl<T: Scalar> SubAssign for Matrix<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        Matrix::from_parts(-&self.data, self.nrows, self.ncols)
    }
}

impl<T: Scalar> Neg for Matrix<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        Matrix::from_parts(&self.data * rhs, self.nrows, self.ncols)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Matrix<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.invalidate();
        self.data *= rhs;
    }
}

impl<T: Scalar> Div<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn div(self, rhs: T) -> Matrix<T> {
        Matrix::from_parts(&self.data / rhs, self.nrows, self.ncols)
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Matrix<T> {
    fn div_assign(&mut self, rhs: T) {
        self.invalidate();
        self.data /= rhs;
    }
}

macro_rules! impl_scalar_mul_matrix {
    ($($t:ty),*) => {
        $(
            impl Mul<Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }

            impl Mul<&Matrix<$t>> for $t {
                type Output = Matrix<$t>;
                fn mul(self, rhs: &Matrix<$t>) -> Matrix<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_matrix!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Matrix product ──────────────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Matrix product, `(n x p) * (p x q) -> (n x q)`.
    ///
    /// Panics if the inner dimensions disagree.
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut out = Matrix::zeros(self.nrows, rhs.ncols);
        // i-k-j order keeps the inner loop on contiguous rows
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let a = self.data[self.offset(i, k)];
                if a == T::zero() {
                    continue;
                }
                let row = k * rhs.ncols;
                let dst = i * rhs.ncols;
                for j in 0..rhs.ncols {
                    out.data[dst + j] = out.data[dst + j] + a * rhs.data[row + j];
                }
            }
        }
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;
    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        self * &rhs
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;

    /// Matrix-vector product, `(n x p) * p -> n`.
    ///
    /// Panics if `rhs.len() != ncols`.
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.ncols,
            rhs.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows,
            self.ncols,
            rhs.len(),
        );
        Vector::from_fn(self.nrows, |i| {
            let mut s = T::zero();
            for j in 0..self.ncols {
                s = s + self.data[self.offset(i, j)] * rhs[j];
            }
            s
        })
    }
}

impl<T: Scalar> Mul<Vector<T>> for &Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

impl<T: Scalar> Mul<Vector<T>> for Matrix<T> {
    type Output = Vector<T>;
    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub_elementwise() {
        let a = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = Matrix::from_rows_slice(2, 2, &[4.0, 3.0, 2.0, 1.0]);
        assert_eq!((&a + &b).as_slice(), &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!((&a - &b).as_slice(), &[-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((-&a)[(1, 1)], -4.0);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_shape_mismatch() {
        let _ = Matrix::<f64>::zeros(2, 2) + Matrix::<f64>::zeros(2, 3);
    }

    #[test]
    fn scalar_ops_both_sides() {
        let a = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(&a * 2.0, 2.0 * &a);
        assert_eq!((&a / 2.0)[(1, 1)], 2.0);
    }

    #[test]
    fn compound_assign_invalidates_cache() {
        let mut a = Matrix::from_rows_slice(2, 2, &[1.0_f64, 0.0, 0.0, 1.0]);
        let _ = a.det().unwrap();
        a += &Matrix::eye(2);
        assert!(!a.has_cached_factors());
        assert!((a.det().unwrap() - 4.0).abs() < 1e-12);
        a *= 2.0;
        assert!(!a.has_cached_factors());
        a -= &Matrix::eye(2);
        a /= 3.0;
        assert_eq!(a, Matrix::eye(2));
    }

    #[test]
    fn matrix_product() {
        let a = Matrix::from_rows_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Matrix::from_rows_slice(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = &a * &b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn identity_is_neutral() {
        let a = Matrix::from_rows_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(&a * &Matrix::eye(2), a);
        assert_eq!(&Matrix::eye(2) * &a, a);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn product_inner_mismatch() {
        let _ = &Matrix::<f64>::zeros(2, 3) * &Matrix::<f64>::zeros(2, 3);
    }

    #[test]
    fn matrix_vector_product() {
        let a = Matrix::from_rows_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let x = Vector::from_slice(&[1.0, 0.0, -1.0]);
        let y = &a * &x;
        assert_eq!(y.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    fn eye_times_canonical() {
        let e1 = Vector::canonical(1, 3);
        assert_eq!(&Matrix::<f64>::eye(3) * &e1, e1);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn matrix_vector_mismatch() {
        let _ = &Matrix::<f64>::zeros(2, 3) * &Vector::<f64>::zeros(2);
    }
}
