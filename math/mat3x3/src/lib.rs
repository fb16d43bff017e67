//! A fixed size 3x3 real matrix value type.
//!
//! The matrix is stored row major: `a*` is the first row, `b*` the second and `c*` the third.
//! Note that `Mat3 * Mat3` is the element-wise (Hadamard) product, use [`Mat3::matmul`] for
//! the row by column product.
//!
//! No internal synchronization is provided. A matrix is a plain `Copy` value, sharing one
//! instance mutably across threads requires external locking by the caller.

use std::fmt::{Debug, Display};
use std::num::ParseFloatError;
use std::str::FromStr;

pub use num_traits::Zero;
pub use serde::{Deserialize, Serialize};

#[macro_use]
mod marcos;

mod error;
mod format;
mod mat;

pub use error::*;
pub use mat::*;

pub trait Scalar:
  num_traits::Float
  + Default
  + Debug
  + Display
  + FromStr<Err = ParseFloatError>
  + Send
  + Sync
  + 'static
{
}

impl Scalar for f32 {}
impl Scalar for f64 {}

/// The double precision matrix, the primary type of this crate.
pub type Mat3x3 = Mat3<f64>;
