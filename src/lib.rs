//! Dense vector and matrix kernel with runtime dimensions.
//!
//! The two workhorse types are [`Vector`] and [`Matrix`], generic over
//! any [`Scalar`] element (floats, integers). Matrices are stored
//! row-major over a flat vector and carry a lazily computed LU
//! factorization that backs [`Matrix::det`], [`Matrix::solve`] and
//! [`Matrix::inverse`]; the cache is transparent and is dropped on any
//! mutation.
//!
//! # Examples
//!
//! ```
//! use numkit::{Matrix, Vector};
//!
//! let a = Matrix::from_rows_slice(2, 2, &[3.0_f64, 1.0, 1.0, 2.0]);
//! let b = Vector::from_slice(&[9.0, 8.0]);
//!
//! let x = a.solve(&b).unwrap();
//! assert!((&a * &x).approx_eq_eps(&b, 1e-12));
//!
//! let inv = a.inverse().unwrap();
//! assert!((&a * &inv).approx_eq_eps(&Matrix::eye(2), 1e-12));
//! ```
//!
//! # Features
//!
//! * `std` (default) - float math through the standard library.
//! * `libm` - float math through `libm` for `no_std` targets; the
//!   crate itself only needs `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod aliases;
mod error;
mod traits;

pub mod matrix;
pub mod vector;

pub use aliases::*;
pub use error::AlgebraError;
pub use matrix::{LuFactors, Matrix};
pub use traits::{FloatScalar, Scalar};
pub use vector::Vector;
