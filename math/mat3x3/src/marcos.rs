/// Generates an element-wise binary operator together with its compound assignment form,
/// for both a matrix and a scalar right operand.
macro_rules! impl_element_wise_operator {
  ($Op:ident, $op:ident, $symbol:tt) => {
    paste::paste! {
      impl<T: Scalar> std::ops::$Op for Mat3<T> {
        type Output = Self;
        #[inline]
        fn $op(self, rhs: Self) -> Self {
          self.zip(rhs, |a, b| a $symbol b)
        }
      }

      impl<T: Scalar> std::ops::$Op<T> for Mat3<T> {
        type Output = Self;
        #[inline]
        fn $op(self, scalar: T) -> Self {
          self.map(|v| v $symbol scalar)
        }
      }

      impl<T: Scalar> std::ops::[<$Op Assign>] for Mat3<T> {
        #[inline]
        fn [<$op _assign>](&mut self, rhs: Self) {
          *self = std::ops::$Op::$op(*self, rhs);
        }
      }

      impl<T: Scalar> std::ops::[<$Op Assign>]<T> for Mat3<T> {
        #[inline]
        fn [<$op _assign>](&mut self, scalar: T) {
          *self = std::ops::$Op::$op(*self, scalar);
        }
      }
    }
  };
}
