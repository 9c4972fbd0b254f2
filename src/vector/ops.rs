use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::Vector;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar> Add<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "dimension mismatch: {} + {}",
            self.len(),
            rhs.len(),
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Vector { data }
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Add<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: &Vector<T>) -> Vector<T> {
        &self + rhs
    }
}

impl<T: Scalar> Add<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn add(self, rhs: Vector<T>) -> Vector<T> {
        self + &rhs
    }
}

impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(
            self.len(),
            rhs.len(),
            "dimension mismatch: {} += {}",
            self.len(),
            rhs.len(),
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> AddAssign for Vector<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign(&rhs);
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&Vector<T>> for &Vector<T> {
    type Output = Vector<T>;

    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.len(),
            rhs.len(),
            "dimension mismatch: {} - {}",
            self.len(),
            rhs.len(),
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Vector { data }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar> Sub<&Vector<T>> for Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: &Vector<T>) -> Vector<T> {
        &self - rhs
    }
}

impl<T: Scalar> Sub<Vector<T>> for &Vector<T> {
    type Output = Vector<T>;
    fn sub(self, rhs: Vector<T>) -> Vector<T> {
        self - &rhs
    }
}

impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(
            self.len(),
            rhs.len(),
            "dimension mismatch: {} -= {}",
            self.len(),
            rhs.len(),
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar> SubAssign for Vector<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.sub_assign(&rhs);
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        let data = self.data.iter().map(|&x| T::zero() - x).collect();
        Vector { data }
    }
}

impl<T: Scalar> Neg for Vector<T> {
    type Output = Self;
    fn neg(self) -> Self {
        -&self
    }
}

// ── Scalar multiplication and division ──────────────────────────────

impl<T: Scalar> Mul<T> for &Vector<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: T) -> Vector<T> {
        let data = self.data.iter().map(|&x| x * rhs).collect();
        Vector { data }
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x * rhs;
        }
    }
}

impl<T: Scalar> Div<T> for &Vector<T> {
    type Output = Vector<T>;

    fn div(self, rhs: T) -> Vector<T> {
        let data = self.data.iter().map(|&x| x / rhs).collect();
        Vector { data }
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        &self / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Vector<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data.iter_mut() {
            *x = *x / rhs;
        }
    }
}

// ── scalar * vector (concrete impls) ────────────────────────────────

macro_rules! impl_scalar_mul_vector {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul_vector!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let u = Vector::from_slice(&[1.0, 2.0]);
        let v = Vector::from_slice(&[3.0, 5.0]);
        assert_eq!((&u + &v).as_slice(), &[4.0, 7.0]);
        assert_eq!((&v - &u).as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn add_sub_round_trip() {
        let u: Vector<f64> = Vector::from_slice(&[1.5, -2.0, 0.25]);
        let v = Vector::from_slice(&[4.0, 8.0, -1.0]);
        let w = (&u + &v) - &v;
        for k in 0..3 {
            assert!((w[k] - u[k]).abs() < 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_length_mismatch() {
        let _ = Vector::from_slice(&[1.0]) + Vector::from_slice(&[1.0, 2.0]);
    }

    #[test]
    fn compound_assign() {
        let mut u = Vector::from_slice(&[1.0, 2.0]);
        u += &Vector::from_slice(&[1.0, 1.0]);
        assert_eq!(u.as_slice(), &[2.0, 3.0]);
        u -= &Vector::from_slice(&[2.0, 3.0]);
        assert_eq!(u.as_slice(), &[0.0, 0.0]);
        let mut w = Vector::from_slice(&[2.0, 4.0]);
        w *= 2.0;
        assert_eq!(w.as_slice(), &[4.0, 8.0]);
        w /= 4.0;
        assert_eq!(w.as_slice(), &[1.0, 2.0]);
    }

    #[test]
    fn neg() {
        let u = Vector::from_slice(&[1.0, -2.0]);
        assert_eq!((-&u).as_slice(), &[-1.0, 2.0]);
    }

    #[test]
    fn scalar_mul_both_sides() {
        let u = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!((&u * 3.0), 3.0 * &u);
        assert_eq!((&u / 2.0).as_slice(), &[0.5, 1.0]);
    }

    #[test]
    fn ref_variants() {
        let u = Vector::from_slice(&[1.0, 2.0]);
        let v = Vector::from_slice(&[3.0, 4.0]);
        let s1 = &u + &v;
        let s2 = u.clone() + &v;
        let s3 = &u + v.clone();
        let s4 = u + v;
        assert_eq!(s1, s2);
        assert_eq!(s1, s3);
        assert_eq!(s1, s4);
    }
}
