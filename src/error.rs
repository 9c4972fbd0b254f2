/// Errors from checked vector and matrix operations.
///
/// Returned by checked accessors (`get`, `at`, `sub_vector`,
/// `sub_matrix`) and by the fallible algebra surface (`trace`, `det`,
/// `solve`, `inverse`, `augmented`, `powi`). Operator impls (`+`, `*`,
/// indexing) keep a panicking contract instead, since `core::ops`
/// traits cannot return `Result`.
///
/// ```
/// use numkit::{AlgebraError, Matrix};
///
/// let singular = Matrix::from_rows_slice(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.inverse().unwrap_err(), AlgebraError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Element or range access outside the current bounds, or an
    /// ill-formed range (`lo > hi`).
    IndexOutOfBounds {
        /// Offending (resolved) index.
        index: usize,
        /// Extent of the dimension that was indexed.
        len: usize,
    },
    /// Operand shapes incompatible for the requested operation.
    DimensionMismatch {
        /// Expected `(rows, cols)`.
        expected: (usize, usize),
        /// Got `(rows, cols)`.
        got: (usize, usize),
    },
    /// Inversion or solve hit a pivot within epsilon of zero.
    Singular,
}

impl core::fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AlgebraError::IndexOutOfBounds { index, len } => {
                write!(f, "index {} out of bounds for extent {}", index, len)
            }
            AlgebraError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            AlgebraError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AlgebraError {}
