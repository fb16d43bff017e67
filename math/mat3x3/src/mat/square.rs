use crate::{Mat3Result, Scalar};

pub trait SquareMatrix<T: Scalar>: Sized {
  #[must_use]
  fn identity() -> Self;

  #[must_use]
  fn transpose(&self) -> Self;

  fn inverse(&self) -> Mat3Result<Self>;

  #[must_use]
  fn inverse_or_identity(&self) -> Self {
    self.inverse().unwrap_or(Self::identity())
  }

  #[must_use]
  fn det(&self) -> T;
}
