pub(crate) use num::{BigInt, BigUint, BigRational, Integer, One, Signed, ToPrimitive, Zero};
pub(crate) use num::bigint::Sign;
pub use astro_float::BigFloat;

mod number;
mod float;
mod error;
mod settings;
pub mod long;

pub use number::*;
pub use float::*;
pub use error::*;
pub use settings::*;
