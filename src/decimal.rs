use crate::base::*;

/// The exact decimal value of an approximate number, e.g. `0.1f0` expands to
/// `0.100000001490116119384765625`.
///
/// The expansion always terminates because the exact value of a binary float is a dyadic rational,
/// but its length grows with the magnitude and precision of the input without any cap. Use
/// [`Float::decimal_len_bound()`] to decide beforehand whether the result is affordable.
///
/// Infinities and NaN have no decimal expansion and are returned in their printed form.
pub fn expand_decimal(x: &Float) -> String {
    let Some(exact) = x.to_exact() else {
        return x.to_string();
    };
    let mut ret = String::new();
    if x.sign() == Sign::Minus {
        ret.push('-');
    }
    write_expansion(exact.numer().magnitude(), exact.denom().magnitude(), &mut ret);
    ret
}

/// Appends `num / den` to `out`. The fraction must have a terminating expansion.
fn write_expansion(num: &BigUint, den: &BigUint, out: &mut String) {
    let (int, rem) = num.div_rem(den);
    out.extend(int.to_radix_be(10).into_iter().map(|dig| char::from(b'0' + dig)));
    out.push('.');
    let mut digits = FracDigits{rem, den}.peekable();
    if digits.peek().is_none() {
        out.push('0');
    }
    out.extend(digits.map(|dig| char::from(b'0' + dig)));
}

/// Digits after the decimal point of `rem / den`, produced by long division.
struct FracDigits<'a> {
    rem: BigUint,
    den: &'a BigUint
}

impl Iterator for FracDigits<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.rem.is_zero() {
            return None;
        }
        self.rem *= 10u32;
        let (dig, rem) = self.rem.div_rem(self.den);
        self.rem = rem;
        Some(dig.to_u8().expect("decimal digit should fit into u8"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_decimal(s: &str) -> BigRational {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => (-1, rest),
            None => (1, s)
        };
        let (int, frac) = digits.split_once('.').unwrap();
        let scale = BigInt::from(10).pow(frac.len() as u32);
        let num: BigInt = format!("{int}{frac}").parse().unwrap();
        BigRational::new(num * sign, scale)
    }

    #[test]
    fn test_expand() {
        assert_eq!(expand_decimal(&Float::Double(0.0)), "0.0");
        assert_eq!(expand_decimal(&Float::Double(-0.0)), "0.0");
        assert_eq!(expand_decimal(&Float::Double(1.0)), "1.0");
        assert_eq!(expand_decimal(&Float::Double(-2.5)), "-2.5");
        assert_eq!(expand_decimal(&Float::Double(0.125)), "0.125");
        assert_eq!(expand_decimal(&Float::Single(0.1)), "0.100000001490116119384765625");
        assert_eq!(expand_decimal(&Float::Double(0.1)), "0.1000000000000000055511151231257827021181583404541015625");
        assert_eq!(expand_decimal(&Float::Double(1e22)), "10000000000000000000000.0");
        assert_eq!(expand_decimal(&Float::Double(1e23)), "99999999999999991611392.0");
        assert_eq!(expand_decimal(&Float::Double(f64::from_bits(1))).len(), 1076);
    }

    #[test]
    fn test_long() {
        let tenth = BigRational::new(1.into(), 10.into());
        let x = Float::Long(long::from_rational(&tenth, 64));
        assert_eq!(expand_decimal(&x), "0.1000000000000000000013552527156068805425093160010874271392822265625");
        let x = Float::Long(long::from_rational(&-tenth, 128));
        assert_eq!(parse_decimal(&expand_decimal(&x)), x.to_exact().unwrap());
        let x = Float::Long(long::from_rational(&BigRational::from_integer(BigInt::from(1) << 200usize), 64));
        assert_eq!(expand_decimal(&x), "1606938044258990275541962092341162602522202993782792835301376.0");
    }

    #[test]
    fn test_round_trip() {
        let samples = [0.1, -0.3, 1.0 / 3.0, 123456.789, 5e-324, f64::MAX, -f64::MIN_POSITIVE, 2.0f64.powi(60)];
        for x in samples {
            let x = Float::Double(x);
            assert_eq!(parse_decimal(&expand_decimal(&x)), x.to_exact().unwrap());
        }
        for x in [0.1f32, 16777217.0, -1e-45, f32::MAX] {
            let x = Float::Single(x);
            assert_eq!(parse_decimal(&expand_decimal(&x)), x.to_exact().unwrap());
        }
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(expand_decimal(&Float::Double(f64::INFINITY)), "+inf.0");
        assert_eq!(expand_decimal(&Float::Single(f32::NAN)), "+nan.f");
    }
}
