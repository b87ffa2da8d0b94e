use crate::base::*;
use once_cell::sync::Lazy;

static UNITS: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    "ten", "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen",
    "eighteen", "nineteen"
];

static TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"
];

/// Names of 1000^(i+1).
static SCALES: [&str; 33] = [
    "thousand", "million", "billion", "trillion", "quadrillion", "quintillion", "sextillion",
    "septillion", "octillion", "nonillion", "decillion", "undecillion", "duodecillion",
    "tredecillion", "quattuordecillion", "quindecillion", "sexdecillion", "septendecillion",
    "octodecillion", "novemdecillion", "vigintillion", "unvigintillion", "duovigintillion",
    "trevigintillion", "quattuorvigintillion", "quinvigintillion", "sexvigintillion",
    "septenvigintillion", "octovigintillion", "novemvigintillion", "trigintillion",
    "untrigintillion", "duotrigillion"
];

/// Smallest magnitude the scale table cannot name.
pub(crate) static NAME_LIMIT: Lazy<BigUint> = Lazy::new(|| BigUint::from(1000u32).pow(SCALES.len() as u32 + 1));

/// What [`name_integer`] returns for magnitudes of [`NAME_LIMIT`] and above.
pub(crate) const BEYOND_LIMIT: &str = "at least 10^102";

/// Spells out an exact integer in English, e.g. `-1005` as `minus one thousand and five`.
/// Magnitudes of 10^102 or more are reported as `at least 10^102`.
pub fn name_integer(n: &BigInt) -> String {
    match n.sign() {
        Sign::NoSign => UNITS[0].to_string(),
        Sign::Minus => format!("minus {}", name_magnitude(n.magnitude())),
        Sign::Plus => name_magnitude(n.magnitude())
    }
}

/// Name of a magnitude, grouped by powers of one thousand.
pub(crate) fn name_magnitude(n: &BigUint) -> String {
    if n >= &*NAME_LIMIT {
        return BEYOND_LIMIT.to_string();
    }
    let groups = thousands(n);
    if groups.len() <= 1 {
        return name_below_thousand(groups.first().copied().unwrap_or(0));
    }
    let mut words = Vec::with_capacity(groups.len());
    for (index, &group) in groups.iter().enumerate().rev() {
        match (index, group) {
            (_, 0) => (),
            (0, 1..=19) => words.push(format!("and {}", UNITS[group as usize])),
            (0, _) => words.push(name_below_thousand(group)),
            _ => words.push(format!("{} {}", name_below_thousand(group), SCALES[index - 1]))
        }
    }
    words.join(" ")
}

/// Base-1000 digits of `n`, least significant first. Empty for zero.
fn thousands(n: &BigUint) -> Vec<u32> {
    let thousand = BigUint::from(1000u32);
    let mut groups = Vec::new();
    let mut rest = n.clone();
    while !rest.is_zero() {
        let (quot, rem) = rest.div_rem(&thousand);
        groups.push(rem.to_u32().expect("remainder of division by 1000 should fit into u32"));
        rest = quot;
    }
    groups
}

fn name_below_thousand(n: u32) -> String {
    let n = n as usize;
    match n {
        0..=19 => UNITS[n].to_string(),
        20..=99 => match n % 10 {
            0 => TENS[n / 10].to_string(),
            unit => format!("{}-{}", TENS[n / 10], UNITS[unit])
        },
        _ => match n % 100 {
            0 => format!("{} hundred", UNITS[n / 100]),
            rest => format!("{} hundred and {}", UNITS[n / 100], name_below_thousand(rest as u32))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutils::*;

    #[test]
    fn test_small() {
        test_name!(0 => "zero");
        test_name!(7 => "seven");
        test_name!(13 => "thirteen");
        test_name!(19 => "nineteen");
        test_name!(20 => "twenty");
        test_name!(21 => "twenty-one");
        test_name!(40 => "forty");
        test_name!(99 => "ninety-nine");
        test_name!(100 => "one hundred");
        test_name!(101 => "one hundred and one");
        test_name!(110 => "one hundred and ten");
        test_name!(342 => "three hundred and forty-two");
        test_name!(999 => "nine hundred and ninety-nine");
    }

    #[test]
    fn test_grouped() {
        test_name!(1000 => "one thousand");
        test_name!(1005 => "one thousand and five");
        test_name!(1019 => "one thousand and nineteen");
        test_name!(1020 => "one thousand twenty");
        test_name!(1100 => "one thousand one hundred");
        test_name!(2_000_001 => "two million and one");
        test_name!(65536 => "sixty-five thousand five hundred and thirty-six");
        test_name!(1_000_000_000 => "one billion");
        test_name!(12_000_345_000u64 => "twelve billion three hundred and forty-five thousand");
        test_name!(u64::MAX => "eighteen quintillion four hundred and forty-six quadrillion seven hundred \
and forty-four trillion seventy-three billion seven hundred and nine million five hundred and fifty-one \
thousand six hundred and fifteen");
    }

    #[test]
    fn test_negative() {
        test_name!(-1 => "minus one");
        test_name!(-65536 => "minus sixty-five thousand five hundred and thirty-six");
        for n in [1u32, 17, 256, 1001, 999_999] {
            assert_eq!(name_integer(&-BigInt::from(n)), format!("minus {}", name_integer(&BigInt::from(n))));
        }
    }

    #[test]
    fn test_limit() {
        let ten = BigInt::from(10);
        assert_eq!(name_integer(&ten.pow(100u32)), "ten duotrigillion");
        assert_eq!(name_integer(&ten.pow(99u32)), "one duotrigillion");
        assert_eq!(name_integer(&(ten.pow(102u32) - 1)).split(' ').take(2).collect::<Vec<_>>(),
            ["nine", "hundred"]);
        assert_eq!(name_integer(&ten.pow(102u32)), "at least 10^102");
        assert_eq!(name_integer(&ten.pow(150u32)), "at least 10^102");
        assert_eq!(name_integer(&-ten.pow(150u32)), "minus at least 10^102");
    }

    #[test]
    fn test_deterministic() {
        let n = BigInt::from(10).pow(60u32) + 123_456;
        assert_eq!(name_integer(&n), name_integer(&n));
    }
}
