//! Shorthand aliases for the common element types.

use crate::matrix::Matrix;
use crate::vector::Vector;

pub type Vectorf32 = Vector<f32>;
pub type Vectorf64 = Vector<f64>;
pub type Vectori32 = Vector<i32>;
pub type Vectori64 = Vector<i64>;
pub type Vectoru32 = Vector<u32>;
pub type Vectoru64 = Vector<u64>;

pub type Matrixf32 = Matrix<f32>;
pub type Matrixf64 = Matrix<f64>;
pub type Matrixi32 = Matrix<i32>;
pub type Matrixi64 = Matrix<i64>;
pub type Matrixu32 = Matrix<u32>;
pub type Matrixu64 = Matrix<u64>;
