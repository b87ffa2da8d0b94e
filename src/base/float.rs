use super::*;
use std::fmt::{Display, Formatter};

/// An approximate number. Every finite value of every width converts losslessly into a
/// [`BigRational`] via [`Float::to_exact()`].
#[derive(Debug, Clone, PartialEq)]
pub enum Float {
    /// Reduced precision, 24-bit significand.
    Single(f32),
    /// Standard precision, 53-bit significand.
    Double(f64),
    /// Extended or arbitrary precision, see [`long`](super::long).
    Long(BigFloat)
}

impl Float {
    pub fn is_nan(&self) -> bool {
        match self {
            Float::Single(x) => x.is_nan(),
            Float::Double(x) => x.is_nan(),
            Float::Long(x) => x.is_nan()
        }
    }

    pub fn is_infinite(&self) -> bool {
        match self {
            Float::Single(x) => x.is_infinite(),
            Float::Double(x) => x.is_infinite(),
            Float::Long(x) => x.is_inf()
        }
    }

    pub fn is_finite(&self) -> bool {
        !self.is_nan() && !self.is_infinite()
    }

    /// True for both signed zeros.
    pub fn is_zero(&self) -> bool {
        match self {
            Float::Single(x) => *x == 0.0,
            Float::Double(x) => *x == 0.0,
            Float::Long(x) => x.is_zero()
        }
    }

    /// Looks at the sign bit only, so `-0.0` and `-inf.0` are both negative.
    pub fn is_sign_negative(&self) -> bool {
        match self {
            Float::Single(x) => x.is_sign_negative(),
            Float::Double(x) => x.is_sign_negative(),
            Float::Long(x) => x.is_negative()
        }
    }

    /// The sign in the arithmetic sense: zeros and NaN report [`Sign::NoSign`].
    pub fn sign(&self) -> Sign {
        if self.is_nan() || self.is_zero() {
            Sign::NoSign
        } else if self.is_sign_negative() {
            Sign::Minus
        } else {
            Sign::Plus
        }
    }

    /// Whether the value is finite and has no fractional part.
    pub fn is_integer(&self) -> bool {
        match self {
            Float::Single(x) => x.is_finite() && x.fract() == 0.0,
            Float::Double(x) => x.is_finite() && x.fract() == 0.0,
            Float::Long(x) => long::to_exact(x).is_some_and(|q| q.is_integer())
        }
    }

    /// The exact value of `self`, or `None` for infinities and NaN. Never rounds.
    pub fn to_exact(&self) -> Option<BigRational> {
        match self {
            Float::Single(x) => BigRational::from_float(*x),
            Float::Double(x) => BigRational::from_float(*x),
            Float::Long(x) => long::to_exact(x)
        }
    }

    /// Rounds an exact value into the same width as `like`.
    pub fn from_exact(value: &BigRational, like: &Float) -> Float {
        match like {
            Float::Single(_) => Float::Single(value.to_f32().unwrap_or_else(|| overflow(value) as f32)),
            Float::Double(_) => Float::Double(value.to_f64().unwrap_or_else(|| overflow(value))),
            Float::Long(x) => Float::Long(long::from_rational(value, long::precision(x)))
        }
    }

    /// An upper bound on the length of the string [`expand_decimal`](crate::expand_decimal)
    /// produces for `self`, or `None` for non-finite values. Computed without expanding, so it is
    /// cheap even where the expansion itself is not.
    pub fn decimal_len_bound(&self) -> Option<u64> {
        match self {
            Float::Long(x) => long::decimal_len_bound(x),
            _ => {
                let exact = self.to_exact()?;
                // the denominator is a power of two: 2^k has exactly k decimal places
                let frac_bits = exact.denom().bits() - 1;
                let int_bits = exact.numer().bits().saturating_sub(frac_bits);
                Some(len_bound(int_bits, frac_bits))
            }
        }
    }
}

fn overflow(value: &BigRational) -> f64 {
    if value.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY }
}

/// Sign, integer digits, decimal point and fractional digits of a dyadic rational whose integer
/// part has `int_bits` bits and whose denominator is `2^frac_bits`.
pub(super) fn len_bound(int_bits: u64, frac_bits: u64) -> u64 {
    let int_digits = int_bits.saturating_mul(30103) / 100000 + 1;
    1 + int_digits + 1 + frac_bits.max(1)
}

impl Display for Float {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Float::Single(x) => {
                if let Some(special) = special_repr(x.is_nan(), x.is_infinite(), x.is_sign_negative(), 'f') {
                    return write!(f, "{special}");
                }
                let s = format!("{x:?}");
                match s.find('e') {
                    Some(pos) => write!(f, "{}f{}", &s[..pos], &s[(pos + 1)..]),
                    None => write!(f, "{s}f0")
                }
            },
            Float::Double(x) => {
                match special_repr(x.is_nan(), x.is_infinite(), x.is_sign_negative(), '0') {
                    Some(special) => write!(f, "{special}"),
                    None => write!(f, "{x:?}")
                }
            },
            Float::Long(x) => long::fmt(x, f)
        }
    }
}

fn special_repr(nan: bool, inf: bool, negative: bool, marker: char) -> Option<String> {
    if nan {
        Some(format!("+nan.{marker}"))
    } else if inf {
        Some(format!("{}inf.{marker}", if negative { '-' } else { '+' }))
    } else {
        None
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_exact() {
        assert_eq!(Float::Double(0.5).to_exact(), Some(BigRational::new(1.into(), 2.into())));
        assert_eq!(Float::Single(-3.0).to_exact(), Some(BigRational::from_integer((-3).into())));
        assert_eq!(Float::Double(-0.0).to_exact(), Some(BigRational::zero()));
        assert_eq!(Float::Double(f64::INFINITY).to_exact(), None);
        assert_eq!(Float::Single(f32::NAN).to_exact(), None);
        assert_eq!(Float::Long(long::infinity(true)).to_exact(), None);
    }

    #[test]
    fn test_from_exact() {
        let tenth = BigRational::new(1.into(), 10.into());
        assert_eq!(Float::from_exact(&tenth, &Float::Double(0.0)), Float::Double(0.1));
        assert_eq!(Float::from_exact(&tenth, &Float::Single(0.0)), Float::Single(0.1));
        let huge = BigRational::from_integer(BigInt::one() << 2000usize);
        assert_eq!(Float::from_exact(&huge, &Float::Double(0.0)), Float::Double(f64::INFINITY));
        let Float::Long(x) = Float::from_exact(&tenth, &Float::Long(long::zero(false, 128))) else { panic!() };
        assert_eq!(long::precision(&x), 128);
        let x = Float::Long(long::from_rational(&BigRational::from_integer((-6).into()), 64));
        assert!(x.is_integer());
        assert!(x.is_sign_negative());
        assert!(!Float::Long(long::from_rational(&tenth, 64)).is_integer());
    }

    #[test]
    fn test_facts() {
        assert_eq!(Float::Double(-0.0).sign(), Sign::NoSign);
        assert!(Float::Double(-0.0).is_sign_negative());
        assert_eq!(Float::Single(-2.5).sign(), Sign::Minus);
        assert_eq!(Float::Double(f64::NAN).sign(), Sign::NoSign);
        assert!(Float::Double(3.0).is_integer());
        assert!(!Float::Double(3.5).is_integer());
        assert!(!Float::Double(f64::INFINITY).is_integer());
        assert!(Float::Long(long::zero(true, 64)).is_zero());
        assert!(Float::Long(long::infinity(true)).is_sign_negative());
        assert!(Float::Long(long::nan()).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Float::Double(0.1).to_string(), "0.1");
        assert_eq!(Float::Double(1.0).to_string(), "1.0");
        assert_eq!(Float::Double(-0.0).to_string(), "-0.0");
        assert_eq!(Float::Double(1e300).to_string(), "1e300");
        assert_eq!(Float::Double(f64::NEG_INFINITY).to_string(), "-inf.0");
        assert_eq!(Float::Double(f64::NAN).to_string(), "+nan.0");
        assert_eq!(Float::Single(0.1).to_string(), "0.1f0");
        assert_eq!(Float::Single(f32::INFINITY).to_string(), "+inf.f");
        let tenth = BigRational::new(1.into(), 10.into());
        assert_eq!(Float::Long(long::from_rational(&tenth, 64)).to_string(), "1.0t-1");
        assert_eq!(Float::Long(long::from_rational(&BigRational::from_integer(1500.into()), 64)).to_string(), "1.5t3");
        assert_eq!(Float::Long(long::zero(true, 64)).to_string(), "-0.0t0");
        assert_eq!(Float::Long(long::nan()).to_string(), "+nan.t");
    }

    #[test]
    fn test_len_bound() {
        let x = Float::Double(0.1);
        let bound = x.decimal_len_bound().unwrap();
        assert!(bound >= crate::expand_decimal(&x).len() as u64);
        let x = Float::Double(-1e300);
        assert!(x.decimal_len_bound().unwrap() >= crate::expand_decimal(&x).len() as u64);
        let x = Float::Long(long::from_rational(&BigRational::new(1.into(), 3.into()), 200));
        assert!(x.decimal_len_bound().unwrap() >= crate::expand_decimal(&x).len() as u64);
        let x = Float::Long(long::from_rational(&BigRational::from_integer(BigInt::one() << 300usize), 64));
        assert!(x.decimal_len_bound().unwrap() >= crate::expand_decimal(&x).len() as u64);
        assert_eq!(Float::Double(f64::NAN).decimal_len_bound(), None);
    }
}
