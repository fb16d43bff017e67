use crate::*;

/// A 3x3 matrix stored row major, `a*`, `b*`, `c*` being the first, second and third row.
///
/// The default value is the zero matrix.
#[repr(C)]
#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Mat3<T> {
  pub a1: T, pub a2: T, pub a3: T,
  pub b1: T, pub b2: T, pub b3: T,
  pub c1: T, pub c2: T, pub c3: T,
}

unsafe impl<T: bytemuck::Zeroable> bytemuck::Zeroable for Mat3<T> {}
unsafe impl<T: bytemuck::Pod> bytemuck::Pod for Mat3<T> {}

impl<T: Scalar> SquareMatrix<T> for Mat3<T> {
  fn identity() -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: T::one(),  a2: T::zero(), a3: T::zero(),
      b1: T::zero(), b2: T::one(),  b3: T::zero(),
      c1: T::zero(), c2: T::zero(), c3: T::one(),
    };
    m
  }

  fn transpose(&self) -> Self {
    #[rustfmt::skip]
    let m = Mat3::new(
      self.a1, self.b1, self.c1,
      self.a2, self.b2, self.c2,
      self.a3, self.b3, self.c3,
    );
    m
  }

  /// cofactor expansion along the first row
  fn det(&self) -> T {
    self.a1 * (self.b2 * self.c3 - self.c2 * self.b3)
      - self.a2 * (self.b1 * self.c3 - self.c1 * self.b3)
      + self.a3 * (self.b1 * self.c2 - self.c1 * self.b2)
  }

  /// Fails with [`Mat3Error::NotInvertible`] only when the determinant is exactly zero.
  /// A determinant that passes this check but fails [`Mat3::is_invertible`] still yields
  /// a (poorly conditioned) result.
  fn inverse(&self) -> Mat3Result<Self> {
    let det = self.det();
    if det == T::zero() {
      return Err(Mat3Error::NotInvertible);
    }
    if det.abs() <= T::epsilon() {
      log::warn!("inverting a nearly singular matrix, determinant is {det}");
    }

    let inv_det = T::one() / det;
    Ok(self.adjoint() * inv_det)
  }
}

impl<T> Mat3<T>
where
  T: Copy,
{
  pub fn new(m11: T, m12: T, m13: T, m21: T, m22: T, m23: T, m31: T, m32: T, m33: T) -> Self {
    #[rustfmt::skip]
    let m = Self {
      a1: m11, a2: m12, a3: m13,
      b1: m21, b2: m22, b3: m23,
      c1: m31, c2: m32, c3: m33,
    };
    m
  }

  pub fn rows(&self) -> [[T; 3]; 3] {
    [
      [self.a1, self.a2, self.a3],
      [self.b1, self.b2, self.b3],
      [self.c1, self.c2, self.c3],
    ]
  }

  #[must_use]
  pub fn map(self, f: impl Fn(T) -> T) -> Self {
    let arr: [T; 9] = self.into();
    arr.map(f).into()
  }

  #[must_use]
  pub fn zip(self, other: Self, f: impl Fn(T, T) -> T) -> Self {
    let lhs: [T; 9] = self.into();
    let rhs: [T; 9] = other.into();
    std::array::from_fn::<T, 9, _>(|i| f(lhs[i], rhs[i])).into()
  }
}

impl<T> Mat3<T> {
  fn slot(&self, row: usize, col: usize) -> Option<&T> {
    Some(match (row, col) {
      (0, 0) => &self.a1,
      (0, 1) => &self.a2,
      (0, 2) => &self.a3,
      (1, 0) => &self.b1,
      (1, 1) => &self.b2,
      (1, 2) => &self.b3,
      (2, 0) => &self.c1,
      (2, 1) => &self.c2,
      (2, 2) => &self.c3,
      _ => return None,
    })
  }

  fn slot_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
    Some(match (row, col) {
      (0, 0) => &mut self.a1,
      (0, 1) => &mut self.a2,
      (0, 2) => &mut self.a3,
      (1, 0) => &mut self.b1,
      (1, 1) => &mut self.b2,
      (1, 2) => &mut self.b3,
      (2, 0) => &mut self.c1,
      (2, 1) => &mut self.c2,
      (2, 2) => &mut self.c3,
      _ => return None,
    })
  }

  /// Read the scalar at (row, col), both must be in [0, 3).
  pub fn get(&self, row: isize, col: isize) -> Mat3Result<T>
  where
    T: Copy,
  {
    checked_index(row, col)
      .and_then(|(r, c)| self.slot(r, c))
      .copied()
      .ok_or(Mat3Error::OutOfRange { row, col })
  }

  /// Mutable access to the scalar at (row, col), both must be in [0, 3).
  pub fn get_mut(&mut self, row: isize, col: isize) -> Mat3Result<&mut T> {
    checked_index(row, col)
      .and_then(|(r, c)| self.slot_mut(r, c))
      .ok_or(Mat3Error::OutOfRange { row, col })
  }
}

fn checked_index(row: isize, col: isize) -> Option<(usize, usize)> {
  Some((usize::try_from(row).ok()?, usize::try_from(col).ok()?))
}

impl<T: Scalar> Mat3<T> {
  /// Same as [`SquareMatrix::det`].
  pub fn determinant(&self) -> T {
    self.det()
  }

  /// Call style evaluation, yields the determinant.
  pub fn evaluate(&self) -> T {
    self.det()
  }

  pub fn trace(&self) -> T {
    self.a1 + self.b2 + self.c3
  }

  /// Exact comparison against the identity, no tolerance is applied. Results of floating
  /// point arithmetic that should be the identity may well fail this check.
  pub fn is_identity(&self) -> bool {
    *self == Self::identity()
  }

  /// Exact comparison of the off diagonal pairs.
  pub fn is_symmetric(&self) -> bool {
    self.a2 == self.b1 && self.a3 == self.c1 && self.b3 == self.c2
  }

  /// Exact comparison of the off diagonal pairs against their negation.
  ///
  /// The diagonal is not required to be zero, so this accepts matrices that are not
  /// antisymmetric in the mathematical sense.
  pub fn is_antisymmetric(&self) -> bool {
    self.a2 == -self.b1 && self.a3 == -self.c1 && self.b3 == -self.c2
  }

  pub fn is_invertible(&self) -> bool {
    self.det().abs() > T::epsilon()
  }

  /// Checks `self * transpose(self)` against the identity, where `*` is the element-wise
  /// product. This is not mathematical orthogonality (which needs [`Mat3::matmul`]): only
  /// diagonal matrices with entries of ±1 pass.
  pub fn is_orthogonal(&self) -> bool {
    (*self * self.transpose()).is_identity()
  }

  /// The adjugate, the transposed cofactor matrix.
  #[must_use]
  pub fn adjoint(&self) -> Self {
    let (a1, a2, a3) = (self.a1, self.a2, self.a3);
    let (b1, b2, b3) = (self.b1, self.b2, self.b3);
    let (c1, c2, c3) = (self.c1, self.c2, self.c3);

    Self {
      a1: b2 * c3 - c2 * b3,
      a2: a3 * c2 - a2 * c3,
      a3: a2 * b3 - a3 * b2,
      b1: b3 * c1 - b1 * c3,
      b2: a1 * c3 - a3 * c1,
      b3: b1 * a3 - a1 * b3,
      c1: b1 * c2 - c1 * b2,
      c2: c1 * a2 - a1 * c2,
      c3: a1 * b2 - b1 * a2,
    }
  }

  /// The row by column matrix product.
  #[must_use]
  pub fn matmul(&self, m: &Self) -> Self {
    let a = self;

    Self {
      a1: a.a1 * m.a1 + a.a2 * m.b1 + a.a3 * m.c1,
      a2: a.a1 * m.a2 + a.a2 * m.b2 + a.a3 * m.c2,
      a3: a.a1 * m.a3 + a.a2 * m.b3 + a.a3 * m.c3,

      b1: a.b1 * m.a1 + a.b2 * m.b1 + a.b3 * m.c1,
      b2: a.b1 * m.a2 + a.b2 * m.b2 + a.b3 * m.c2,
      b3: a.b1 * m.a3 + a.b2 * m.b3 + a.b3 * m.c3,

      c1: a.c1 * m.a1 + a.c2 * m.b1 + a.c3 * m.c1,
      c2: a.c1 * m.a2 + a.c2 * m.b2 + a.c3 * m.c2,
      c3: a.c1 * m.a3 + a.c2 * m.b3 + a.c3 * m.c3,
    }
  }

  /// The element-wise product, same as `*`.
  #[must_use]
  pub fn hadamard(&self, m: &Self) -> Self {
    *self * *m
  }

  pub fn approx_eq(&self, other: &Self, epsilon: T) -> bool {
    let lhs: [T; 9] = (*self).into();
    let rhs: [T; 9] = (*other).into();
    lhs.iter().zip(rhs).all(|(a, b)| (*a - b).abs() <= epsilon)
  }
}

impl<T> num_traits::Zero for Mat3<T>
where
  T: Scalar,
{
  #[inline(always)]
  fn zero() -> Self {
    Self::default()
  }
  #[inline(always)]
  fn is_zero(&self) -> bool {
    self.eq(&Self::zero())
  }
}

impl<T: Copy> From<[T; 9]> for Mat3<T> {
  fn from(v: [T; 9]) -> Self {
    let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = v;
    Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
  }
}

impl<T: Copy> From<[[T; 3]; 3]> for Mat3<T> {
  fn from(v: [[T; 3]; 3]) -> Self {
    let [[m11, m12, m13], [m21, m22, m23], [m31, m32, m33]] = v;
    Self::new(m11, m12, m13, m21, m22, m23, m31, m32, m33)
  }
}

impl<T> From<Mat3<T>> for [T; 9] {
  fn from(m: Mat3<T>) -> Self {
    let Mat3 {
      a1,
      a2,
      a3,
      b1,
      b2,
      b3,
      c1,
      c2,
      c3,
    } = m;
    [a1, a2, a3, b1, b2, b3, c1, c2, c3]
  }
}

impl<T: Copy> From<Mat3<T>> for [[T; 3]; 3] {
  fn from(m: Mat3<T>) -> Self {
    m.rows()
  }
}

impl<T> AsRef<Mat3<T>> for Mat3<T> {
  fn as_ref(&self) -> &Mat3<T> {
    self
  }
}

impl<T> AsMut<Mat3<T>> for Mat3<T> {
  fn as_mut(&mut self) -> &mut Mat3<T> {
    self
  }
}
