use super::*;
use std::fmt::{Display, Formatter};

/// A real number, either exact or approximate.
#[derive(Debug, Clone, PartialEq)]
pub enum Real {
    Exact(BigRational),
    Inexact(Float)
}

impl Real {
    pub fn is_exact(&self) -> bool {
        matches!(self, Real::Exact(_))
    }

    /// True only for an exact zero, not for `0.0`.
    pub fn is_exact_zero(&self) -> bool {
        matches!(self, Real::Exact(q) if q.is_zero())
    }

    pub fn is_zero(&self) -> bool {
        match self {
            Real::Exact(q) => q.is_zero(),
            Real::Inexact(x) => x.is_zero()
        }
    }

    pub fn sign(&self) -> Sign {
        match self {
            Real::Exact(q) => q.numer().sign(),
            Real::Inexact(x) => x.sign()
        }
    }

    /// Converts an exact value to a double, leaves approximate values alone.
    pub fn to_inexact(self) -> Real {
        match self {
            Real::Exact(q) => Real::Inexact(Float::Double(q.to_f64().unwrap_or(f64::NAN))),
            inexact => inexact
        }
    }
}

impl From<BigRational> for Real {
    fn from(value: BigRational) -> Real {
        Real::Exact(value)
    }
}

impl From<Float> for Real {
    fn from(value: Float) -> Real {
        Real::Inexact(value)
    }
}

impl Display for Real {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Real::Exact(q) if q.is_integer() => write!(f, "{}", q.numer()),
            Real::Exact(q) => write!(f, "{}/{}", q.numer(), q.denom()),
            Real::Inexact(x) => write!(f, "{x}")
        }
    }
}


/// Any value of the numeric tower.
///
/// `Complex` should normally be built through [`Number::rect()`], which keeps the representation
/// canonical. Constructing the variant directly is allowed and is the only way to obtain, e.g., an
/// exact complex number with both parts zero.
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Real(Real),
    Complex { re: Real, im: Real }
}

impl Number {
    pub fn integer(value: impl Into<BigInt>) -> Number {
        Number::Real(Real::Exact(BigRational::from_integer(value.into())))
    }

    pub fn exact(value: BigRational) -> Number {
        Number::Real(Real::Exact(value))
    }

    pub fn inexact(value: Float) -> Number {
        Number::Real(Real::Inexact(value))
    }

    /// Builds a number from rectangular coordinates.
    ///
    /// An exact zero imaginary part yields a real. If one part is exact and the other is not, the
    /// exact part is rounded to the width of the other, except for an exact zero real part which
    /// stays exact.
    pub fn rect(re: Real, im: Real) -> Number {
        match (re, im) {
            (re, im) if im.is_exact_zero() => Number::Real(re),
            (Real::Exact(re), Real::Inexact(im)) if !re.is_zero() =>
                Number::Complex { re: Real::Inexact(Float::from_exact(&re, &im)), im: Real::Inexact(im) },
            (Real::Inexact(re), Real::Exact(im)) =>
                Number::Complex { im: Real::Inexact(Float::from_exact(&im, &re)), re: Real::Inexact(re) },
            (re, im) => Number::Complex { re, im }
        }
    }

    /// Exact iff every part is exact.
    pub fn is_exact(&self) -> bool {
        match self {
            Number::Real(x) => x.is_exact(),
            Number::Complex { re, im } => re.is_exact() && im.is_exact()
        }
    }

    pub fn real_part(&self) -> &Real {
        match self {
            Number::Real(x) => x,
            Number::Complex { re, .. } => re
        }
    }

    /// The imaginary part, `None` for reals.
    pub fn imag_part(&self) -> Option<&Real> {
        match self {
            Number::Real(_) => None,
            Number::Complex { im, .. } => Some(im)
        }
    }
}

impl From<Real> for Number {
    fn from(value: Real) -> Number {
        Number::Real(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Number {
        Number::integer(value)
    }
}

impl From<BigRational> for Number {
    fn from(value: BigRational) -> Number {
        Number::exact(value)
    }
}

impl From<Float> for Number {
    fn from(value: Float) -> Number {
        Number::inexact(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Number {
        Number::inexact(Float::Double(value))
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Number {
        Number::inexact(Float::Single(value))
    }
}

macro_rules! impl_from_primitive {
    ($($t: ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Number {
                    Number::integer(value)
                }
            }
        )*
    }
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Real(x) => write!(f, "{x}"),
            Number::Complex { re, im } => {
                let im = im.to_string();
                if im.starts_with(['+', '-']) {
                    write!(f, "{re}{im}i")
                } else {
                    write!(f, "{re}+{im}i")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(n: i64) -> Real {
        Real::Exact(BigRational::from_integer(n.into()))
    }

    fn double(x: f64) -> Real {
        Real::Inexact(Float::Double(x))
    }

    #[test]
    fn test_rect() {
        assert_eq!(Number::rect(exact(3), exact(0)), Number::integer(3));
        assert_eq!(Number::rect(double(1.5), exact(0)), Number::from(1.5));
        assert_eq!(Number::rect(exact(1), double(2.0)), Number::Complex { re: double(1.0), im: double(2.0) });
        assert_eq!(Number::rect(double(1.0), exact(2)), Number::Complex { re: double(1.0), im: double(2.0) });
        assert_eq!(Number::rect(exact(0), double(2.0)), Number::Complex { re: exact(0), im: double(2.0) });
        assert_eq!(Number::rect(double(1.0), double(0.0)), Number::Complex { re: double(1.0), im: double(0.0) });
        let single = Number::rect(exact(1), Real::Inexact(Float::Single(2.0)));
        assert_eq!(single, Number::Complex { re: Real::Inexact(Float::Single(1.0)), im: Real::Inexact(Float::Single(2.0)) });
    }

    #[test]
    fn test_exactness() {
        assert!(Number::exact(BigRational::new(1.into(), 2.into())).is_exact());
        assert!(!Number::from(0.5).is_exact());
        assert!(!Number::Complex { re: exact(0), im: double(1.0) }.is_exact());
        assert!(Number::Complex { re: exact(0), im: exact(0) }.is_exact());
        assert!(Real::Exact(BigRational::zero()).is_exact_zero());
        assert!(!double(0.0).is_exact_zero());
    }

    #[test]
    fn test_to_inexact() {
        assert_eq!(Real::Exact(BigRational::new(1.into(), 4.into())).to_inexact(), double(0.25));
        assert_eq!(exact(-3).to_inexact(), double(-3.0));
        assert_eq!(double(1.5).to_inexact(), double(1.5));
    }

    #[test]
    fn test_display() {
        assert_eq!(Number::integer(-42).to_string(), "-42");
        assert_eq!(Number::exact(BigRational::new(6.into(), (-8).into())).to_string(), "-3/4");
        assert_eq!(Number::from(2.5).to_string(), "2.5");
        assert_eq!(Number::Complex { re: exact(1), im: exact(2) }.to_string(), "1+2i");
        assert_eq!(Number::Complex { re: exact(0), im: double(-2.5) }.to_string(), "0-2.5i");
        assert_eq!(Number::Complex { re: double(f64::INFINITY), im: double(f64::NAN) }.to_string(), "+inf.0+nan.0i");
        assert_eq!(Number::Complex { re: exact(0), im: Real::Exact(BigRational::new(1.into(), 2.into())) }.to_string(), "0+1/2i");
    }
}
