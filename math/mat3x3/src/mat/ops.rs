use std::ops::{Div, Neg, Not};

use crate::*;

impl_element_wise_operator!(Add, add, +);
impl_element_wise_operator!(Sub, sub, -);
// element-wise (Hadamard) product, see Mat3::matmul for the matrix product
impl_element_wise_operator!(Mul, mul, *);

impl<T: Scalar> Neg for Mat3<T> {
  type Output = Self;

  fn neg(self) -> Self {
    self.map(|v| -v)
  }
}

impl<T: Scalar> Div<T> for Mat3<T> {
  type Output = Mat3Result<Self>;

  fn div(self, scalar: T) -> Mat3Result<Self> {
    let mut result = self;
    result.try_div_assign(scalar)?;
    Ok(result)
  }
}

/// `!m` is true when `m` is not invertible.
impl<T: Scalar> Not for Mat3<T> {
  type Output = bool;

  fn not(self) -> bool {
    !self.is_invertible()
  }
}

impl<T: Scalar> Not for &Mat3<T> {
  type Output = bool;

  fn not(self) -> bool {
    !self.is_invertible()
  }
}

/// A matrix is truthy when it is invertible.
impl<T: Scalar> From<Mat3<T>> for bool {
  fn from(m: Mat3<T>) -> bool {
    m.is_invertible()
  }
}

impl<T: Scalar> Mat3<T> {
  /// Divide every scalar, the receiver is untouched when `scalar` is exactly zero.
  pub fn try_div_assign(&mut self, scalar: T) -> Mat3Result<&mut Self> {
    if scalar == T::zero() {
      return Err(Mat3Error::DivideByZero);
    }
    *self *= T::one() / scalar;
    Ok(self)
  }

  /// Unary plus.
  #[must_use]
  pub fn pos(&self) -> Self {
    *self
  }

  pub fn pre_increment(&mut self) -> &mut Self {
    *self += T::one();
    self
  }

  /// Returns the value before the increment.
  pub fn post_increment(&mut self) -> Self {
    let snapshot = *self;
    self.pre_increment();
    snapshot
  }

  pub fn pre_decrement(&mut self) -> &mut Self {
    *self -= T::one();
    self
  }

  /// Returns the value before the decrement.
  pub fn post_decrement(&mut self) -> Self {
    let snapshot = *self;
    self.pre_decrement();
    snapshot
  }
}

#[cfg(test)]
mod test {
  use crate::*;

  fn seq() -> Mat3x3 {
    Mat3x3::from([1., 2., 3., 4., 5., 6., 7., 8., 9.])
  }

  #[test]
  fn matrix_add_sub() {
    let m = seq() + Mat3x3::from([1.; 9]);
    assert_eq!(m, Mat3x3::from([2., 3., 4., 5., 6., 7., 8., 9., 10.]));
    assert_eq!(m - Mat3x3::from([1.; 9]), seq());

    let mut m = seq();
    m += seq();
    assert_eq!(m, seq() * 2.);
    m -= seq();
    assert_eq!(m, seq());
  }

  #[test]
  fn product_is_element_wise() {
    let m = seq() * seq();
    assert_eq!(
      m,
      Mat3x3::from([1., 4., 9., 16., 25., 36., 49., 64., 81.])
    );
    assert_eq!(seq().hadamard(&seq()), m);
    assert_ne!(m, seq().matmul(&seq()));

    let mut m = seq();
    m *= Mat3x3::identity();
    assert_eq!(m, Mat3x3::from([1., 0., 0., 0., 5., 0., 0., 0., 9.]));
  }

  #[test]
  fn scalar_ops() {
    assert_eq!(seq() + 1., Mat3x3::from([2., 3., 4., 5., 6., 7., 8., 9., 10.]));
    assert_eq!(seq() - 1., Mat3x3::from([0., 1., 2., 3., 4., 5., 6., 7., 8.]));
    assert_eq!(seq() * 2., Mat3x3::from([2., 4., 6., 8., 10., 12., 14., 16., 18.]));
    assert_eq!((seq() * 2. / 2.).unwrap(), seq());

    let mut m = seq();
    m += 1.;
    m -= 2.;
    m *= 3.;
    assert_eq!(m, Mat3x3::from([0., 3., 6., 9., 12., 15., 18., 21., 24.]));

    m.try_div_assign(0.25).unwrap().try_div_assign(2.).unwrap();
    assert_eq!(m, Mat3x3::from([0., 6., 12., 18., 24., 30., 36., 42., 48.]));
  }

  #[test]
  fn divide_by_zero() {
    let mut m = seq();
    assert!(matches!(m.try_div_assign(0.), Err(Mat3Error::DivideByZero)));
    assert!(matches!(m.try_div_assign(-0.), Err(Mat3Error::DivideByZero)));
    assert_eq!(m, seq());
    assert!(matches!(seq() / 0., Err(Mat3Error::DivideByZero)));
  }

  #[test]
  fn unary() {
    let m = -seq();
    assert_eq!(m, Mat3x3::from([-1., -2., -3., -4., -5., -6., -7., -8., -9.]));
    assert_eq!(-m, seq());
    assert_eq!(seq().pos(), seq());
  }

  #[test]
  fn increment_decrement() {
    let mut m = seq();
    assert_eq!(*m.pre_increment(), seq() + 1.);
    assert_eq!(*m.pre_decrement(), seq());

    let before = m.post_increment();
    assert_eq!(before, seq());
    assert_eq!(m, seq() + 1.);

    let before = m.post_decrement();
    assert_eq!(before, seq() + 1.);
    assert_eq!(m, seq());

    m.pre_increment().pre_increment();
    assert_eq!(m, seq() + 2.);
  }

  #[test]
  fn truthiness() {
    let singular = Mat3x3::from([3.; 9]);
    assert!(!singular);
    assert!(!bool::from(singular));

    let regular = Mat3x3::identity() * 2.;
    assert!(!(!regular));
    assert!(bool::from(regular));
    assert!(!&singular);
  }
}
