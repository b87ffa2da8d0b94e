use crate::base::*;
use crate::classify::{classify, Category};
use crate::decimal::expand_decimal;
use crate::names::{name_integer, name_magnitude, NAME_LIMIT};
use crate::tracing::{Event, NoTracer, Tracer};

/// A trait for the ability to describe a numeric value as an English sentence.
pub trait Describe {
    /// A sentence starting with the printed form of `self` and stating its kind and value, e.g.
    /// `1/2 is an exact positive rational number with a numerator of 1 and a denominator of 2`.
    fn describe(&self) -> String;
}

/// Describes any number in English. See [`Describe`].
pub fn describe_number(z: &Number) -> String {
    describe_number_traced(z, &mut NoTracer)
}

/// Like [`describe_number`], reporting each step of the classification to `tracer`.
pub fn describe_number_traced(z: &Number, tracer: &mut dyn Tracer) -> String {
    tracer.log(Event::Enter(z));
    let category = classify(z);
    tracer.log(Event::Classified(category));
    let ret = compose(z, category, tracer);
    tracer.log(Event::Leave(&ret));
    ret
}

fn compose(z: &Number, category: Category, tracer: &mut dyn Tracer) -> String {
    use Category::*;
    match (category, z) {
        (PositiveInfinity, _) => format!("{z} is positive infinity"),
        (NegativeInfinity, _) => format!("{z} is negative infinity"),
        (NotANumber, _) => format!("{z} is not-a-number"),
        (ExactIntegerValue, Number::Real(Real::Exact(q))) => exact_integer(z, q.numer()),
        (ExactRationalValue, Number::Real(Real::Exact(q))) => exact_rational(z, q),
        (ExactImaginary, Number::Complex { im, .. }) => exact_imaginary(z, im),
        (ExactComplex, Number::Complex { re, im }) => exact_complex(z, re, im),
        (ApproximateIntegerValue, Number::Real(Real::Inexact(x))) => inexact_integer(z, x),
        (ApproximateReal, Number::Real(Real::Inexact(x))) => inexact_real(z, x),
        (ApproximateImaginary, Number::Complex { im: Real::Inexact(im), .. }) => inexact_imaginary(z, im),
        (ApproximateComplex, Number::Complex { re, im }) => inexact_complex(z, re, im, tracer),
        _ => format!("{z} is a number")
    }
}

fn sign_word(sign: Sign) -> &'static str {
    match sign {
        Sign::Plus => "positive",
        Sign::Minus => "negative",
        Sign::NoSign => "zero"
    }
}

/// `0+x i` for a printed imaginary part, which may carry its own sign.
fn pure_imaginary(im: String) -> String {
    if im.starts_with(['+', '-']) {
        format!("0{im}i")
    } else {
        format!("0+{im}i")
    }
}

fn exact_integer(z: &Number, n: &BigInt) -> String {
    if n.is_zero() {
        return format!("{z} is a byte (exact integer) zero");
    }
    if n.to_u8().is_some() {
        return format!("{z} is a byte (exact positive integer) {}", name_integer(n));
    }
    let sign = sign_word(n.sign());
    if n.magnitude() >= &*NAME_LIMIT {
        format!("{z} is an exact {sign} integer value whose absolute value is >= 10^102")
    } else {
        format!("{z} is an exact {sign} integer {}", name_magnitude(n.magnitude()))
    }
}

fn exact_rational(z: &Number, q: &BigRational) -> String {
    format!("{z} is an exact {} rational number with a numerator of {} and a denominator of {}",
        sign_word(q.numer().sign()), q.numer(), q.denom())
}

fn exact_imaginary(z: &Number, im: &Real) -> String {
    format!("{z} is an exact {} imaginary number", sign_word(im.sign()))
}

fn exact_complex(z: &Number, re: &Real, im: &Real) -> String {
    format!("{z} is an exact complex number whose real part is {re} and whose imaginary part is {}",
        pure_imaginary(im.to_string()))
}

fn inexact_integer(z: &Number, x: &Float) -> String {
    match x.sign() {
        Sign::NoSign => format!("{z} is an inexact integer zero"),
        sign => format!("{z} is an inexact {} integer whose exact decimal value is {}",
            sign_word(sign), expand_decimal(x))
    }
}

fn inexact_real(z: &Number, x: &Float) -> String {
    format!("{z} is an inexact {} real number whose exact decimal value is {}",
        sign_word(x.sign()), expand_decimal(x))
}

fn inexact_imaginary(z: &Number, im: &Float) -> String {
    format!("{z} is an inexact {} imaginary number whose exact decimal value is {}",
        sign_word(im.sign()), pure_imaginary(expand_decimal(im)))
}

fn inexact_complex(z: &Number, re: &Real, im: &Real, tracer: &mut dyn Tracer) -> String {
    let real = describe_number_traced(&Number::Real(re.clone()), tracer);
    let imag = describe_number_traced(&Number::Complex { re: Real::Exact(BigRational::zero()), im: im.clone() }, tracer);
    format!("{z} is an inexact complex number whose real part {real} and whose imaginary part {imag}")
}

impl Describe for Number {
    fn describe(&self) -> String {
        describe_number(self)
    }
}

macro_rules! impl_describe_clone {
    ($($t: ty),*) => {
        $(
            impl Describe for $t {
                fn describe(&self) -> String {
                    describe_number(&Number::from(self.clone()))
                }
            }
        )*
    }
}

macro_rules! impl_describe_copy {
    ($($t: ty),*) => {
        $(
            impl Describe for $t {
                fn describe(&self) -> String {
                    describe_number(&Number::from(*self))
                }
            }
        )*
    }
}

impl_describe_clone!(Real, Float, BigInt, BigRational);
impl_describe_copy!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl<T: Describe> Describe for &T {
    fn describe(&self) -> String {
        (**self).describe()
    }
}
