use crate::traits::{FloatScalar, Scalar};

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Dot product: sum of elementwise products.
    ///
    /// Panics on length mismatch.
    ///
    /// ```
    /// use numkit::Vector;
    /// let u = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let v = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(u.dot(&v), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        assert_eq!(
            self.len(),
            rhs.len(),
            "dimension mismatch: dot of {} and {}",
            self.len(),
            rhs.len(),
        );
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(rhs.data.iter()) {
            sum = sum + a * b;
        }
        sum
    }

    /// Squared L2 norm (dot product with self).
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar> Vector<T> {
    /// L2 (Euclidean) norm.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Euclidean distance to another vector of the same length.
    pub fn distance(&self, rhs: &Self) -> T {
        (self - rhs).norm()
    }

    /// Return a unit vector in the same direction.
    ///
    /// Panics if the norm is zero.
    ///
    /// ```
    /// use numkit::Vector;
    /// let u = Vector::from_slice(&[3.0_f64, 4.0]).normalize();
    /// assert!((u[0] - 0.6).abs() < 1e-12);
    /// assert!((u.norm() - 1.0).abs() < 1e-12);
    /// ```
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        assert!(n > T::zero(), "cannot normalize a zero vector");
        self / n
    }

    /// Whether the vector is the zero vector within machine epsilon.
    pub fn is_null(&self) -> bool {
        self.norm() < T::epsilon()
    }

    /// Tolerance comparison: equal length and `distance < eps`.
    pub fn approx_eq_eps(&self, rhs: &Self, eps: T) -> bool {
        self.len() == rhs.len() && self.distance(rhs) < eps
    }

    /// Tolerance comparison with machine epsilon, absorbing
    /// floating-point round-off.
    ///
    /// ```
    /// use numkit::Vector;
    /// let u = Vector::from_slice(&[0.1_f64, 0.2]);
    /// let v = Vector::from_slice(&[0.3_f64, 0.3]);
    /// let w = &v - &Vector::from_slice(&[0.2, 0.1]);
    /// assert!(u.approx_eq(&w));
    /// assert!(!u.approx_eq(&v));
    /// ```
    pub fn approx_eq(&self, rhs: &Self) -> bool {
        self.approx_eq_eps(rhs, T::epsilon())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_symmetry() {
        let u = Vector::from_slice(&[1.0, -2.0, 3.0]);
        let v = Vector::from_slice(&[0.5, 4.0, -1.0]);
        assert_eq!(u.dot(&v), v.dot(&u));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn dot_length_mismatch() {
        let _ = Vector::from_slice(&[1.0]).dot(&Vector::from_slice(&[1.0, 2.0]));
    }

    #[test]
    fn norm_positive_definite() {
        let v: Vector<f64> = Vector::from_slice(&[1.0, -2.0, 2.0]);
        assert!((v.norm() - 3.0).abs() < 1e-12);
        assert!(v.norm() >= 0.0);
        assert!(Vector::<f64>::zeros(4).is_null());
        assert!(!v.is_null());
    }

    #[test]
    fn distance() {
        let u: Vector<f64> = Vector::from_slice(&[1.0, 1.0]);
        let v = Vector::from_slice(&[4.0, 5.0]);
        assert!((u.distance(&v) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn approx_eq_length_sensitive() {
        let u = Vector::from_slice(&[1.0_f64, 2.0]);
        let w = Vector::from_slice(&[1.0_f64, 2.0, 0.0]);
        assert!(!u.approx_eq(&w));
        assert!(u.approx_eq(&u.clone()));
    }

    #[test]
    #[should_panic(expected = "zero vector")]
    fn normalize_zero() {
        let _ = Vector::<f64>::zeros(2).normalize();
    }
}
