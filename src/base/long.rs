//! Conversions between [`BigFloat`], the arbitrary-precision float behind [`Float::Long`], and
//! exact rationals.
//!
//! `BigFloat` keeps its precision in whole machine words, so any requested precision is rounded up
//! to a multiple of [`WORD_BIT_SIZE`] bits.

use super::*;
use astro_float::{Exponent, RoundingMode, Word, INF_NEG, INF_POS, NAN, WORD_BIT_SIZE};
use std::fmt::Formatter;

const WORD_BYTES: usize = WORD_BIT_SIZE / 8;

pub fn zero(negative: bool, precision: usize) -> BigFloat {
    let x = BigFloat::new(precision);
    if negative { x.neg() } else { x }
}

pub fn infinity(negative: bool) -> BigFloat {
    if negative { INF_NEG } else { INF_POS }
}

pub fn nan() -> BigFloat {
    NAN
}

/// Rounds `value` to the nearest number with `precision` significant bits, ties to even.
pub fn from_rational(value: &BigRational, precision: usize) -> BigFloat {
    if value.is_zero() {
        return BigFloat::new(precision);
    }
    let num = from_integer(value.numer().magnitude());
    let den = from_integer(value.denom().magnitude());
    let x = num.div(&den, precision, RoundingMode::ToEven);
    if value.is_negative() { x.neg() } else { x }
}

/// Represents a nonzero integer exactly, with as many words as it takes.
fn from_integer(n: &BigUint) -> BigFloat {
    let bits = n.bits();
    let Ok(exponent) = Exponent::try_from(bits) else {
        return INF_POS;
    };
    let width = (bits as usize).div_ceil(WORD_BIT_SIZE) * WORD_BIT_SIZE;
    // the mantissa is normalized: its top bit is the top bit of the last word
    let mut bytes = (n << (width - bits as usize)).to_bytes_le();
    bytes.resize(width / 8, 0);
    let words = bytes.chunks_exact(WORD_BYTES)
        .map(|chunk| chunk.iter().rev().fold(0 as Word, |acc, &byte| acc << 8 | Word::from(byte)))
        .collect::<Vec<_>>();
    BigFloat::from_raw_parts(&words, width, astro_float::Sign::Pos, exponent, false)
}

/// The exact value of `x`, or `None` for infinities and NaN.
pub fn to_exact(x: &BigFloat) -> Option<BigRational> {
    let (words, _, sign, exponent, _) = x.as_raw_parts()?;
    let bytes = words.iter().flat_map(|w| w.to_le_bytes()).collect::<Vec<_>>();
    let mantissa = BigInt::from(BigUint::from_bytes_le(&bytes));
    // value = mantissa * 2^(exponent - width)
    let shift = i64::from(exponent) - (words.len() * WORD_BIT_SIZE) as i64;
    let magnitude = if shift >= 0 {
        BigRational::from_integer(mantissa << shift as usize)
    } else {
        BigRational::new(mantissa, BigInt::one() << shift.unsigned_abs() as usize)
    };
    Some(if sign == astro_float::Sign::Neg { -magnitude } else { magnitude })
}

/// Precision in bits. Infinities and NaN carry none and report the default.
pub fn precision(x: &BigFloat) -> usize {
    x.mantissa_max_bit_len().unwrap_or(Settings::default().long_precision as usize)
}

pub(super) fn decimal_len_bound(x: &BigFloat) -> Option<u64> {
    let (words, _, _, exponent, _) = x.as_raw_parts()?;
    let width = (words.len() * WORD_BIT_SIZE) as i64;
    let exponent = i64::from(exponent);
    Some(if exponent >= width {
        super::float::len_bound(exponent as u64, 0)
    } else {
        super::float::len_bound(exponent.max(0) as u64, (width - exponent) as u64)
    })
}

/// Prints `x` in scientific notation with a `t` exponent marker, using the fewest significant
/// digits that read back as the same value, e.g. `1.0t-1`.
pub(super) fn fmt(x: &BigFloat, f: &mut Formatter<'_>) -> std::fmt::Result {
    if x.is_nan() {
        return write!(f, "+nan.t");
    }
    if x.is_inf() {
        return write!(f, "{}inf.t", if x.is_inf_neg() { '-' } else { '+' });
    }
    let sign = if x.is_negative() { "-" } else { "" };
    let Some(exact) = to_exact(x).filter(|q| !q.is_zero()) else {
        return write!(f, "{sign}0.0t0");
    };
    let (digits, exp10) = shortest_digits(&exact.abs(), precision(x));
    let (first, rest) = digits.split_at(1);
    let rest = rest.trim_end_matches('0');
    let rest = if rest.is_empty() { "0" } else { rest };
    write!(f, "{sign}{first}.{rest}t{exp10}")
}

/// Significant digits and decimal exponent of the shortest decimal that rounds to `value` at
/// `precision` bits. `value` must be positive.
fn shortest_digits(value: &BigRational, precision: usize) -> (String, i64) {
    let exp10 = decimal_exponent(value);
    // this many digits always identify a float of the given precision
    let max_count = (precision as u64 * 30103 / 100000) as u32 + 2;
    let mut count = 1;
    loop {
        let (digits, exp) = round_digits(value, exp10, count);
        let candidate = BigRational::from_integer(digits.clone()) * pow10(exp - i64::from(count) + 1);
        if count >= max_count || to_exact(&from_rational(&candidate, precision)).as_ref() == Some(value) {
            return (digits.to_string(), exp);
        }
        count += 1;
    }
}

/// `value` rounded to `count` significant digits, as an integer and the decimal exponent of its
/// leading digit.
fn round_digits(value: &BigRational, exp10: i64, count: u32) -> (BigInt, i64) {
    let digits = (value * pow10(i64::from(count) - 1 - exp10)).round().to_integer();
    if digits == BigInt::from(10).pow(count) {
        (digits / 10, exp10 + 1)
    } else {
        (digits, exp10)
    }
}

/// The `e` with `10^e <= value < 10^(e+1)`. `value` must be positive.
fn decimal_exponent(value: &BigRational) -> i64 {
    let bits = value.numer().bits() as i64 - value.denom().bits() as i64;
    let mut exp = bits * 30103 / 100000;
    while pow10(exp) > *value {
        exp -= 1;
    }
    while pow10(exp + 1) <= *value {
        exp += 1;
    }
    exp
}

fn pow10(exp: i64) -> BigRational {
    let power = BigRational::from_integer(BigInt::from(10).pow(exp.unsigned_abs() as u32));
    if exp >= 0 { power } else { power.recip() }
}
