use std::num::ParseFloatError;

#[derive(thiserror::Error, Debug)]
pub enum Mat3Error {
  #[error("index ({row}, {col}) out of bounds, both must be in [0, 3)")]
  OutOfRange { row: isize, col: isize },
  #[error("division by zero")]
  DivideByZero,
  #[error("matrix is not invertible, determinant is zero")]
  NotInvertible,
  #[error("failed to parse scalar #{index}: {source}")]
  ParseScalar {
    index: usize,
    #[source]
    source: ParseFloatError,
  },
  #[error("expect 9 scalars, but only {found} found")]
  MissingScalars { found: usize },
  #[error("unexpected input after the 9th scalar")]
  TrailingInput,
  #[error("failed to read matrix text: {0}")]
  Io(#[from] std::io::Error),
}

pub type Mat3Result<T> = Result<T, Mat3Error>;
