//! English descriptions of numbers.
//!
//! The entry point is [`describe_number`] (or the [`Describe`] trait), which states what kind of
//! number a value is and what it is worth:
//!
//! ```
//! use numdescribe::*;
//!
//! assert_eq!(describe_number(&Number::integer(65536)),
//!     "65536 is an exact positive integer sixty-five thousand five hundred and thirty-six");
//! assert_eq!(0.1f32.describe(),
//!     "0.1f0 is an inexact positive real number whose exact decimal value is 0.100000001490116119384765625");
//! ```
//!
//! The building blocks are available separately: [`name_integer`] spells out exact integers and
//! [`expand_decimal`] renders approximate numbers as their exact decimal value.

pub mod base;
mod parser;
mod names;
mod decimal;
mod classify;
mod describe;
pub mod tracing;

#[cfg(test)]
mod testutils;

pub use base::*;
pub use parser::{parse, Parser};
pub use names::name_integer;
pub use decimal::expand_decimal;
pub use classify::{classify, Category};
pub use describe::{describe_number, describe_number_traced, Describe};
