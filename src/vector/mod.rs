mod norm;
mod ops;
mod parse;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::AlgebraError;
use crate::traits::{FloatScalar, Scalar};

/// Dense, heap-allocated vector with runtime length.
///
/// Flat `Vec<T>` storage. Supports elementwise arithmetic, dot product
/// and norms, cyclic shifts, extremum queries, and inclusive sub-range
/// extraction/assignment. [`Matrix`](crate::Matrix) reinterprets a
/// `Vector` as its row-major backing store.
///
/// # Examples
///
/// ```
/// use numkit::Vector;
///
/// let u = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// let v = Vector::from_slice(&[4.0_f64, 5.0, 6.0]);
/// assert_eq!((&u + &v)[0], 5.0);
/// assert!((u.dot(&v) - 32.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) data: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a zero vector of length `n`.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::<f64>::zeros(4);
    /// assert_eq!(v.len(), 4);
    /// assert_eq!(v[3], 0.0);
    /// ```
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// Create a vector of length `n` filled with ones.
    pub fn ones(n: usize) -> Self {
        Self::fill(n, T::one())
    }

    /// Create a vector of length `n` filled with `value`.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::fill(3, 7.0_f64);
    /// assert_eq!(v[2], 7.0);
    /// ```
    pub fn fill(n: usize, value: T) -> Self {
        Self {
            data: vec![value; n],
        }
    }

    /// Create the `k`-th canonical basis vector of length `n` (one-hot).
    ///
    /// Panics if `k >= n`.
    ///
    /// ```
    /// use numkit::Vector;
    /// let e1 = Vector::<f64>::canonical(1, 3);
    /// assert_eq!(e1[0], 0.0);
    /// assert_eq!(e1[1], 1.0);
    /// ```
    pub fn canonical(k: usize, n: usize) -> Self {
        assert!(k < n, "canonical index {} out of bounds for length {}", k, n);
        let mut v = Self::zeros(n);
        v.data[k] = T::one();
        v
    }

    /// Create a vector from a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector from an owned `Vec`.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Create a vector by calling `f(k)` for each element.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_fn(4, |k| k as f64);
    /// assert_eq!(v[3], 3.0);
    /// ```
    pub fn from_fn(n: usize, f: impl Fn(usize) -> T) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    /// Sum of a non-empty list of equal-length vectors.
    ///
    /// Panics if `vectors` is empty or lengths differ.
    ///
    /// ```
    /// use numkit::Vector;
    /// let vs = [Vector::<f64>::ones(2), Vector::ones(2)];
    /// assert_eq!(Vector::sum(&vs)[0], 2.0);
    /// ```
    pub fn sum(vectors: &[Vector<T>]) -> Self {
        assert!(!vectors.is_empty(), "sum requires at least one vector");
        let mut acc = Self::zeros(vectors[0].len());
        for v in vectors {
            acc += v;
        }
        acc
    }

    /// Linear combination `scalars[0]*vectors[0] + ... + scalars[q]*vectors[q]`.
    ///
    /// Panics if the lists are empty or their lengths differ.
    ///
    /// ```
    /// use numkit::Vector;
    /// let vs = [Vector::ones(2), Vector::ones(2)];
    /// let c = Vector::sum_prod(&[2.0, 3.0], &vs);
    /// assert_eq!(c[1], 5.0);
    /// ```
    pub fn sum_prod(scalars: &[T], vectors: &[Vector<T>]) -> Self {
        assert!(!vectors.is_empty(), "sum_prod requires at least one vector");
        assert_eq!(
            scalars.len(),
            vectors.len(),
            "scalar list length {} does not match vector list length {}",
            scalars.len(),
            vectors.len(),
        );
        let mut acc = Self::zeros(vectors[0].len());
        for (&s, v) in scalars.iter().zip(vectors.iter()) {
            acc += &(v * s);
        }
        acc
    }
}

// ── Access ──────────────────────────────────────────────────────────

impl<T> Vector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the vector data as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Checked element access.
    pub fn get(&self, k: usize) -> Result<&T, AlgebraError> {
        self.data.get(k).ok_or(AlgebraError::IndexOutOfBounds {
            index: k,
            len: self.data.len(),
        })
    }

    /// Checked mutable element access.
    pub fn get_mut(&mut self, k: usize) -> Result<&mut T, AlgebraError> {
        let len = self.data.len();
        self.data
            .get_mut(k)
            .ok_or(AlgebraError::IndexOutOfBounds { index: k, len })
    }

    /// Iterate over the elements.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the elements.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Exchange elements `k1` and `k2` in place.
    ///
    /// Panics if either index is out of bounds.
    pub fn swap(&mut self, k1: usize, k2: usize) {
        self.data.swap(k1, k2);
    }

    /// Cyclic rotation by `iterations` positions.
    ///
    /// Positive rotates toward lower indices ("left"), negative toward
    /// higher; the amount is taken modulo `len()`, so a zero effective
    /// shift is a no-op.
    ///
    /// ```
    /// use numkit::Vector;
    /// let mut v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// v.shift(2);
    /// assert_eq!(v.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
    /// v.shift(-2);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn shift(&mut self, iterations: isize) {
        let n = self.data.len();
        if n == 0 {
            return;
        }
        let k = iterations.rem_euclid(n as isize) as usize;
        if k != 0 {
            self.data.rotate_left(k);
        }
    }
}

impl<T: Scalar> Vector<T> {
    /// Element access with negative indices counting from the end
    /// (`-1` = last).
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// assert_eq!(v.at(-1).unwrap(), 3.0);
    /// assert!(v.at(3).is_err());
    /// ```
    pub fn at(&self, k: isize) -> Result<T, AlgebraError> {
        let n = self.data.len();
        let resolved = if k < 0 { k + n as isize } else { k };
        if resolved < 0 || resolved as usize >= n {
            return Err(AlgebraError::IndexOutOfBounds {
                index: k.unsigned_abs(),
                len: n,
            });
        }
        Ok(self.data[resolved as usize])
    }

    /// Copy out the inclusive sub-range `[k1, k2]` as a new vector.
    ///
    /// Fails if `k1 > k2` or `k2 >= len()`.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// let s = v.sub_vector(1, 2).unwrap();
    /// assert_eq!(s.as_slice(), &[2.0, 3.0]);
    /// ```
    pub fn sub_vector(&self, k1: usize, k2: usize) -> Result<Self, AlgebraError> {
        if k1 > k2 || k2 >= self.data.len() {
            return Err(AlgebraError::IndexOutOfBounds {
                index: k2.max(k1),
                len: self.data.len(),
            });
        }
        Ok(Self::from_slice(&self.data[k1..=k2]))
    }

    /// Overwrite the elements starting at `k1` with the contents of `src`.
    ///
    /// Fails if `src` does not fit.
    ///
    /// ```
    /// use numkit::Vector;
    /// let mut v = Vector::<f64>::zeros(4);
    /// v.set_sub_vector(1, &Vector::from_slice(&[7.0, 8.0])).unwrap();
    /// assert_eq!(v.as_slice(), &[0.0, 7.0, 8.0, 0.0]);
    /// ```
    pub fn set_sub_vector(&mut self, k1: usize, src: &Self) -> Result<(), AlgebraError> {
        let end = k1 + src.len();
        if end > self.data.len() {
            return Err(AlgebraError::IndexOutOfBounds {
                index: end.saturating_sub(1),
                len: self.data.len(),
            });
        }
        self.data[k1..end].copy_from_slice(&src.data);
        Ok(())
    }
}

// ── Extremum queries ────────────────────────────────────────────────

impl<T: FloatScalar> Vector<T> {
    /// Largest element. Panics on an empty vector.
    pub fn max(&self) -> T {
        self.data[self.max_index()]
    }

    /// Smallest element. Panics on an empty vector.
    pub fn min(&self) -> T {
        self.data[self.min_index()]
    }

    /// Index of the largest element; first index wins ties.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_slice(&[1.0, 9.0, 9.0, 2.0]);
    /// assert_eq!(v.max_index(), 1);
    /// ```
    pub fn max_index(&self) -> usize {
        self.extremum_index(|a, b| a > b)
    }

    /// Index of the smallest element; first index wins ties.
    pub fn min_index(&self) -> usize {
        self.extremum_index(|a, b| a < b)
    }

    /// Largest magnitude. Panics on an empty vector.
    pub fn max_abs(&self) -> T {
        self.data[self.max_abs_index()].abs()
    }

    /// Smallest magnitude. Panics on an empty vector.
    pub fn min_abs(&self) -> T {
        self.data[self.min_abs_index()].abs()
    }

    /// Index of the largest-magnitude element; first index wins ties.
    ///
    /// ```
    /// use numkit::Vector;
    /// let v = Vector::from_slice(&[1.0, -5.0, 4.0]);
    /// assert_eq!(v.max_abs_index(), 1);
    /// assert_eq!(v.max_abs(), 5.0);
    /// ```
    pub fn max_abs_index(&self) -> usize {
        self.extremum_index(|a, b| a.abs() > b.abs())
    }

    /// Index of the smallest-magnitude element; first index wins ties.
    pub fn min_abs_index(&self) -> usize {
        self.extremum_index(|a, b| a.abs() < b.abs())
    }

    fn extremum_index(&self, better: impl Fn(T, T) -> bool) -> usize {
        assert!(!self.data.is_empty(), "extremum of an empty vector");
        let mut idx = 0;
        for k in 1..self.data.len() {
            if better(self.data[k], self.data[idx]) {
                idx = k;
            }
        }
        idx
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.data[k]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, k: usize) -> &mut T {
        &mut self.data[k]
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_ones_fill() {
        let z = Vector::<f64>::zeros(3);
        assert_eq!(z.as_slice(), &[0.0, 0.0, 0.0]);
        let o = Vector::<f64>::ones(2);
        assert_eq!(o.as_slice(), &[1.0, 1.0]);
        let f = Vector::fill(2, 4.5);
        assert_eq!(f.as_slice(), &[4.5, 4.5]);
    }

    #[test]
    fn canonical() {
        let e = Vector::<f64>::canonical(2, 4);
        assert_eq!(e.as_slice(), &[0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "canonical index")]
    fn canonical_out_of_bounds() {
        let _ = Vector::<f64>::canonical(4, 4);
    }

    #[test]
    fn at_negative_index() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.at(0).unwrap(), 1.0);
        assert_eq!(v.at(-1).unwrap(), 3.0);
        assert_eq!(v.at(-3).unwrap(), 1.0);
        assert!(v.at(-4).is_err());
        assert!(v.at(3).is_err());
    }

    #[test]
    fn get_checked() {
        let mut v = Vector::from_slice(&[1.0, 2.0]);
        assert_eq!(*v.get(1).unwrap(), 2.0);
        assert_eq!(
            v.get(2).unwrap_err(),
            AlgebraError::IndexOutOfBounds { index: 2, len: 2 }
        );
        *v.get_mut(0).unwrap() = 9.0;
        assert_eq!(v[0], 9.0);
    }

    #[test]
    fn swap() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        v.swap(0, 2);
        assert_eq!(v.as_slice(), &[3.0, 2.0, 1.0]);
    }

    #[test]
    fn shift_round_trip() {
        let orig = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        for k in -7_isize..=7 {
            let mut v = orig.clone();
            v.shift(k);
            v.shift(-k);
            assert_eq!(v, orig, "shift({k}) then shift({})", -k);
        }
    }

    #[test]
    fn shift_modulo() {
        let mut v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        v.shift(6); // same as shift(2)
        assert_eq!(v.as_slice(), &[3.0, 4.0, 1.0, 2.0]);
        let mut w = Vector::from_slice(&[1.0, 2.0, 3.0]);
        w.shift(3); // no-op
        assert_eq!(w.as_slice(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn shift_empty_is_noop() {
        let mut v = Vector::<f64>::zeros(0);
        v.shift(5);
        assert!(v.is_empty());
    }

    #[test]
    fn sub_vector() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v.sub_vector(0, 3).unwrap(), v);
        assert_eq!(v.sub_vector(2, 2).unwrap().as_slice(), &[3.0]);
        assert!(v.sub_vector(2, 1).is_err());
        assert!(v.sub_vector(1, 4).is_err());
    }

    #[test]
    fn set_sub_vector() {
        let mut v = Vector::<f64>::zeros(4);
        v.set_sub_vector(2, &Vector::from_slice(&[1.0, 2.0])).unwrap();
        assert_eq!(v.as_slice(), &[0.0, 0.0, 1.0, 2.0]);
        assert!(v
            .set_sub_vector(3, &Vector::from_slice(&[1.0, 2.0]))
            .is_err());
    }

    #[test]
    fn extremums() {
        let v = Vector::from_slice(&[3.0, -7.0, 5.0, -7.0, 5.0]);
        assert_eq!(v.max(), 5.0);
        assert_eq!(v.max_index(), 2);
        assert_eq!(v.min(), -7.0);
        assert_eq!(v.min_index(), 1);
        assert_eq!(v.max_abs(), 7.0);
        assert_eq!(v.max_abs_index(), 1);
        assert_eq!(v.min_abs(), 3.0);
        assert_eq!(v.min_abs_index(), 0);
    }

    #[test]
    fn sum_and_sum_prod() {
        let vs = [
            Vector::from_slice(&[1.0, 2.0]),
            Vector::from_slice(&[3.0, 4.0]),
        ];
        assert_eq!(Vector::sum(&vs).as_slice(), &[4.0, 6.0]);
        let c = Vector::sum_prod(&[2.0, -1.0], &vs);
        assert_eq!(c.as_slice(), &[-1.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "at least one vector")]
    fn sum_empty_list() {
        let _ = Vector::<f64>::sum(&[]);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn sum_prod_length_mismatch() {
        let vs = [Vector::<f64>::ones(2)];
        let _ = Vector::sum_prod(&[1.0, 2.0], &vs);
    }
}
