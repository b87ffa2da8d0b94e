use crate::base::*;
use std::fmt::{Display, Formatter};

/// The category of a number as far as its English description is concerned. Each category has its
/// own sentence shape; see [`describe_number`](crate::describe_number).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
    ExactIntegerValue,
    ExactRationalValue,
    /// Exact number with an exact zero real part and a nonzero imaginary part, or, by the same
    /// rule, an exact complex number with both parts zero.
    ExactImaginary,
    ExactComplex,
    ApproximateIntegerValue,
    ApproximateReal,
    /// Any number whose real part is an exact zero and whose imaginary part is a finite
    /// approximate value, including `0+0.0i`.
    ApproximateImaginary,
    ApproximateComplex,
    Other
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        use Category::*;
        let name = match self {
            PositiveInfinity => "positive infinity",
            NegativeInfinity => "negative infinity",
            NotANumber => "not-a-number",
            ExactIntegerValue => "exact integer",
            ExactRationalValue => "exact rational",
            ExactImaginary => "exact imaginary",
            ExactComplex => "exact complex",
            ApproximateIntegerValue => "inexact integer",
            ApproximateReal => "inexact real",
            ApproximateImaginary => "inexact imaginary",
            ApproximateComplex => "inexact complex",
            Other => "other"
        };
        write!(f, "{name}")
    }
}

/// Sorts a number into its [`Category`]. The tests are tried in order and the first match wins:
/// the special values, then exact numbers, then approximate ones.
pub fn classify(z: &Number) -> Category {
    if let Some(special) = classify_special(z) {
        return special;
    }
    if z.is_exact() {
        classify_exact(z)
    } else {
        classify_inexact(z)
    }
}

/// Infinities and NaN of any width. Only reals can be special, a complex number with an infinite
/// part is not itself an infinity.
fn classify_special(z: &Number) -> Option<Category> {
    let Number::Real(Real::Inexact(x)) = z else { return None; };
    if x.is_nan() {
        Some(Category::NotANumber)
    } else if x.is_infinite() && x.is_sign_negative() {
        Some(Category::NegativeInfinity)
    } else if x.is_infinite() {
        Some(Category::PositiveInfinity)
    } else {
        None
    }
}

fn classify_exact(z: &Number) -> Category {
    match z {
        Number::Real(Real::Exact(q)) if q.is_integer() => Category::ExactIntegerValue,
        Number::Real(Real::Exact(_)) => Category::ExactRationalValue,
        Number::Complex { re, .. } if re.is_exact_zero() => Category::ExactImaginary,
        Number::Complex { .. } => Category::ExactComplex,
        Number::Real(Real::Inexact(_)) => Category::Other
    }
}

fn classify_inexact(z: &Number) -> Category {
    match z {
        Number::Real(Real::Inexact(x)) if x.is_integer() => Category::ApproximateIntegerValue,
        Number::Real(Real::Inexact(x)) if x.is_finite() => Category::ApproximateReal,
        Number::Complex { re, im: Real::Inexact(im) } if re.is_exact_zero() && im.is_finite()
            => Category::ApproximateImaginary,
        Number::Complex { re, im } if !re.is_zero() && !im.is_zero() => Category::ApproximateComplex,
        _ => Category::Other
    }
}
