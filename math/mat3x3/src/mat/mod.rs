mod mat3;
mod ops;
mod square;

pub use mat3::*;
pub use square::*;
