//! Textual form of a matrix: 9 whitespace separated scalars in row major order. Written as
//! 3 lines of 3 scalars, read back from any whitespace layout.

use std::{
  fmt,
  io::{self, BufRead},
  str::FromStr,
};

use crate::*;

impl<T: Scalar> fmt::Display for Mat3<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for [x, y, z] in self.rows() {
      writeln!(f, "{x} {y} {z}")?;
    }
    Ok(())
  }
}

impl<T: Scalar> FromStr for Mat3<T> {
  type Err = Mat3Error;

  /// Expects exactly 9 scalars.
  fn from_str(s: &str) -> Mat3Result<Self> {
    let mut input = s.as_bytes();
    let m = Self::read_from(&mut input)?;
    if input.iter().any(|b| !b.is_ascii_whitespace()) {
      return Err(Mat3Error::TrailingInput);
    }
    Ok(m)
  }
}

impl<T: Scalar> Mat3<T> {
  /// Read 9 scalars from a stream. The reader is left right after the 9th token, so
  /// consecutive matrices can be read from the same stream.
  pub fn read_from<R: BufRead>(reader: &mut R) -> Mat3Result<Self> {
    let mut values = [T::zero(); 9];
    for (index, slot) in values.iter_mut().enumerate() {
      let token = next_token(reader)?.ok_or(Mat3Error::MissingScalars { found: index })?;
      *slot = token.parse().map_err(|source| {
        log::debug!("invalid matrix scalar #{index}: {token:?}");
        Mat3Error::ParseScalar { index, source }
      })?;
    }
    Ok(values.into())
  }
}

fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
  let mut token = Vec::new();
  loop {
    let buf = reader.fill_buf()?;
    if buf.is_empty() {
      break;
    }

    let mut used = 0;
    let mut finished = false;
    for &byte in buf {
      if byte.is_ascii_whitespace() {
        if !token.is_empty() {
          finished = true;
          break;
        }
      } else {
        token.push(byte);
      }
      used += 1;
    }
    reader.consume(used);

    if finished {
      break;
    }
  }

  if token.is_empty() {
    return Ok(None);
  }
  String::from_utf8(token)
    .map(Some)
    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
