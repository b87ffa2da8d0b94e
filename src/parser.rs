use crate::base::*;

/// Reads a numeric literal with default [`Settings`].
pub fn parse(input: &str) -> Result<Number, ParseError<'_>> {
    Parser::new(input).parse()
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Exactness {
    Unspecified,
    Exact,
    Inexact
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Width {
    Single,
    Double,
    Long
}

/// A reader of Scheme-style numeric literals: `42`, `-3/4`, `#x1F`, `#e1.5`, `0.1f0`, `1.5t0`,
/// `+inf.0`, `1+2i`, `-i`.
pub struct Parser<'a> {
    input: &'a str,
    long_precision: usize,
    max_exponent: u64
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Parser<'a> {
        Parser::with_settings(input, &Settings::default())
    }

    pub fn with_settings(input: &'a str, settings: &Settings) -> Parser<'a> {
        Parser {
            input,
            long_precision: settings.long_precision as usize,
            max_exponent: settings.max_exponent
        }
    }

    pub fn parse(&self) -> Result<Number, ParseError<'a>> {
        let text = self.input.trim();
        if text.is_empty() {
            return Err(ParseError::new("empty input", text));
        }
        let (exactness, radix, body) = read_prefixes(text)?;
        if body.is_empty() {
            return Err(ParseError::new("missing number after prefix", text));
        }
        match body.strip_suffix(['i', 'I']) {
            Some(inner) => self.parse_complex(inner, body, exactness, radix),
            None => Ok(Number::Real(self.parse_real(body, exactness, radix)?))
        }
    }

    fn parse_complex(&self, inner: &'a str, whole: &'a str, exactness: Exactness, radix: u32)
        -> Result<Number, ParseError<'a>>
    {
        let (re, im) = match split_point(inner, radix) {
            Some(pos) => (Some(&inner[..pos]), &inner[pos..]),
            None => (None, inner)
        };
        let im = match im {
            "+" | "-" => {
                let one = BigRational::from_integer(if im == "-" { -BigInt::one() } else { BigInt::one() });
                match exactness {
                    Exactness::Inexact => Real::Exact(one).to_inexact(),
                    _ => Real::Exact(one)
                }
            },
            _ if im.starts_with(['+', '-']) => self.parse_real(im, exactness, radix)?,
            _ => return Err(ParseError::new("imaginary part must start with a sign", whole))
        };
        let re = match re {
            Some(re) => self.parse_real(re, exactness, radix)?,
            None => Real::Exact(BigRational::zero())
        };
        Ok(Number::rect(re, im))
    }

    fn parse_real(&self, text: &'a str, exactness: Exactness, radix: u32) -> Result<Real, ParseError<'a>> {
        if let Some(special) = self.special(text) {
            if exactness == Exactness::Exact {
                return Err(ParseError::new("no exact representation", text));
            }
            return Ok(Real::Inexact(special));
        }
        let (negative, unsigned) = match text.as_bytes().first() {
            Some(b'+') => (false, &text[1..]),
            Some(b'-') => (true, &text[1..]),
            _ => (false, text)
        };
        if let Some((num, den)) = unsigned.split_once('/') {
            let num = digits(num, radix, text)?;
            let den = digits(den, radix, text)?;
            if den.is_zero() {
                return Err(ParseError::new("division by zero", text));
            }
            let q = BigRational::new(signed(negative, num), BigInt::from(den));
            return Ok(match exactness {
                Exactness::Inexact => Real::Exact(q).to_inexact(),
                _ => Real::Exact(q)
            });
        }
        if radix != 10 {
            let n = BigRational::from_integer(signed(negative, digits(unsigned, radix, text)?));
            return Ok(match exactness {
                Exactness::Inexact => Real::Exact(n).to_inexact(),
                _ => Real::Exact(n)
            });
        }
        self.parse_decimal(text, negative, unsigned, exactness)
    }

    fn parse_decimal(&self, text: &'a str, negative: bool, unsigned: &'a str, exactness: Exactness)
        -> Result<Real, ParseError<'a>>
    {
        let (mantissa, width, exponent) = match unsigned.find(is_marker) {
            Some(pos) => {
                let width = match unsigned.as_bytes()[pos].to_ascii_lowercase() {
                    b's' | b'f' => Width::Single,
                    b'l' | b't' => Width::Long,
                    _ => Width::Double
                };
                (&unsigned[..pos], width, Some(self.exponent(&unsigned[(pos + 1)..], text)?))
            },
            None => (unsigned, Width::Double, None)
        };
        let (int, frac) = match mantissa.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (mantissa, None)
        };
        if int.is_empty() && frac.map_or(true, str::is_empty) {
            return Err(ParseError::new("missing digits", text));
        }
        check_digits(int, 10)?;
        let frac_digits = frac.unwrap_or_default();
        check_digits(frac_digits, 10)?;
        let exponent = exponent.unwrap_or(0);

        let inexact = match exactness {
            Exactness::Exact => false,
            Exactness::Inexact => true,
            Exactness::Unspecified => frac.is_some() || exponent != 0 || unsigned.len() != mantissa.len()
        };
        if inexact && width != Width::Long {
            let normalized = format!("{}{}.{}e{exponent}",
                if negative { "-" } else { "" },
                if int.is_empty() { "0" } else { int },
                if frac_digits.is_empty() { "0" } else { frac_digits });
            let value = match width {
                Width::Single => normalized.parse().map(Float::Single).ok(),
                _ => normalized.parse().map(Float::Double).ok()
            };
            return value.map(Real::Inexact).ok_or_else(|| ParseError::new("invalid number", text));
        }

        let all_digits = format!("{int}{frac_digits}");
        let mantissa = BigUint::parse_bytes(all_digits.as_bytes(), 10)
            .ok_or_else(|| ParseError::new("invalid number", text))?;
        let scale = exponent - frac_digits.len() as i64;
        let power = |n: i64| -> Result<BigInt, ParseError<'a>> {
            let n = u32::try_from(n.unsigned_abs()).map_err(|_| ParseError::new("exponent too large", text))?;
            Ok(BigInt::from(10).pow(n))
        };
        let q = if scale >= 0 {
            BigRational::from_integer(signed(negative, mantissa) * power(scale)?)
        } else {
            BigRational::new(signed(negative, mantissa), power(scale)?)
        };
        if !inexact {
            return Ok(Real::Exact(q));
        }
        Ok(Real::Inexact(Float::Long(if q.is_zero() {
            long::zero(negative, self.long_precision)
        } else {
            long::from_rational(&q, self.long_precision)
        })))
    }

    fn exponent(&self, text: &'a str, whole: &'a str) -> Result<i64, ParseError<'a>> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'+') => (false, &text[1..]),
            Some(b'-') => (true, &text[1..]),
            _ => (false, text)
        };
        if digits.is_empty() {
            return Err(ParseError::new("missing exponent", whole));
        }
        check_digits(digits, 10)?;
        let value = digits.parse::<u64>().ok()
            .filter(|value| *value <= self.max_exponent)
            .and_then(|value| i64::try_from(value).ok())
            .ok_or_else(|| ParseError::new("exponent too large", text))?;
        Ok(if negative { -value } else { value })
    }

    fn special(&self, text: &str) -> Option<Float> {
        let lower = text.to_ascii_lowercase();
        let (negative, rest) = match lower.as_bytes().first() {
            Some(b'+') => (false, &lower[1..]),
            Some(b'-') => (true, &lower[1..]),
            _ => return None
        };
        let inf = |x: f64| if negative { -x } else { x };
        Some(match rest {
            "inf.0" => Float::Double(inf(f64::INFINITY)),
            "nan.0" => Float::Double(f64::NAN),
            "inf.f" => Float::Single(inf(f64::INFINITY) as f32),
            "nan.f" => Float::Single(f32::NAN),
            "inf.t" => Float::Long(long::infinity(negative)),
            "nan.t" => Float::Long(long::nan()),
            _ => return None
        })
    }
}

fn read_prefixes(mut text: &str) -> Result<(Exactness, u32, &str), ParseError<'_>> {
    let mut exactness = None;
    let mut radix = None;
    while text.starts_with('#') {
        let prefix = text.get(0..2).ok_or_else(|| ParseError::new("invalid prefix", text))?;
        match prefix.to_ascii_lowercase().as_str() {
            "#e" | "#i" if exactness.is_some() => return Err(ParseError::new("duplicate exactness prefix", prefix)),
            "#x" | "#o" | "#b" | "#d" if radix.is_some() => return Err(ParseError::new("duplicate radix prefix", prefix)),
            "#e" => exactness = Some(Exactness::Exact),
            "#i" => exactness = Some(Exactness::Inexact),
            "#x" => radix = Some(16),
            "#o" => radix = Some(8),
            "#b" => radix = Some(2),
            "#d" => radix = Some(10),
            _ => return Err(ParseError::new("invalid prefix", prefix))
        }
        text = &text[2..];
    }
    Ok((exactness.unwrap_or(Exactness::Unspecified), radix.unwrap_or(10), text))
}

/// Position of the sign separating the real and imaginary parts, skipping signs that belong to
/// an exponent (`1e-5+2i`).
fn split_point(inner: &str, radix: u32) -> Option<usize> {
    let bytes = inner.as_bytes();
    (1..bytes.len()).rev()
        .find(|&ix| matches!(bytes[ix], b'+' | b'-') && !(radix == 10 && is_exponent_sign(bytes, ix)))
}

fn is_exponent_sign(bytes: &[u8], ix: usize) -> bool {
    if ix < 2 || !is_marker(char::from(bytes[ix - 1])) {
        return false;
    }
    match bytes[ix - 2] {
        b'0'..=b'9' => true,
        b'.' => ix >= 3 && bytes[ix - 3].is_ascii_digit(),
        _ => false
    }
}

fn is_marker(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'e' | 'd' | 's' | 'f' | 'l' | 't')
}

fn check_digits(text: &str, radix: u32) -> Result<(), ParseError<'_>> {
    match text.char_indices().find(|(_, ch)| !ch.is_digit(radix)) {
        Some((pos, ch)) => Err(ParseError::new(format!("invalid digit '{ch}'"), &text[pos..(pos + ch.len_utf8())])),
        None => Ok(())
    }
}

fn digits<'a>(text: &'a str, radix: u32, whole: &'a str) -> Result<BigUint, ParseError<'a>> {
    if text.is_empty() {
        return Err(ParseError::new("missing digits", whole));
    }
    check_digits(text, radix)?;
    BigUint::parse_bytes(text.as_bytes(), radix)
        .ok_or_else(|| ParseError::new("invalid number", whole))
}

fn signed(negative: bool, magnitude: BigUint) -> BigInt {
    BigInt::from_biguint(if negative { Sign::Minus } else { Sign::Plus }, magnitude)
}
