//! Default amount formatting.

use std::fmt;

use num_bigint::BigUint;

use crate::traits::AmountFormatter;

/// Formats plain decimal strings with `,` thousands separators.
///
/// Leading zeros of the integer part and trailing zeros of the fraction are dropped, so
/// `0001234567.500` becomes `1,234,567.5`. Scientific notation is expanded first, so `1e18` is
/// grouped like any other integer. Anything else (hex, words, empty input, exponents beyond
/// ±1000) is returned unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupedDecimalFormatter;

impl AmountFormatter for GroupedDecimalFormatter {
    fn format(&self, raw: &str) -> String {
        match Decimal::parse(raw.trim()) {
            Some(decimal) => decimal.to_string(),
            None => raw.to_string(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct Decimal {
    negative: bool,
    integer: BigUint,
    fraction: String,
}

const MAX_EXPONENT: i64 = 1_000;

impl Decimal {
    fn parse(raw: &str) -> Option<Self> {
        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw.strip_prefix('+').unwrap_or(raw)),
        };
        let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
            Some((mantissa, exponent)) => {
                let exponent = exponent
                    .parse::<i64>()
                    .ok()
                    .filter(|exponent| exponent.abs() <= MAX_EXPONENT)?;
                (mantissa, exponent)
            }
            None => (unsigned, 0),
        };
        let (integer, fraction) = mantissa
            .split_once('.')
            .unwrap_or((mantissa, ""));

        if integer.is_empty() && fraction.is_empty() {
            return None;
        }
        let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !is_digits(integer) || !is_digits(fraction) {
            return None;
        }
        let (integer, fraction) = shift_point(integer, fraction, exponent);

        let integer =
            if integer.is_empty() { BigUint::default() } else { integer.parse::<BigUint>().ok()? };
        let fraction = fraction.trim_end_matches('0').to_string();
        let is_zero = integer == BigUint::default() && fraction.is_empty();

        Some(Self { negative: negative && !is_zero, integer, fraction })
    }
}

/// Moves the decimal point of `integer.fraction` by `exponent` places to the right.
fn shift_point(integer: &str, fraction: &str, exponent: i64) -> (String, String) {
    if exponent == 0 {
        return (integer.to_string(), fraction.to_string());
    }
    let digits = format!("{integer}{fraction}");
    let point = integer.len() as i64 + exponent;
    if point <= 0 {
        (String::new(), format!("{}{digits}", "0".repeat(point.unsigned_abs() as usize)))
    } else if point as usize >= digits.len() {
        let padding = "0".repeat(point as usize - digits.len());
        (format!("{digits}{padding}"), String::new())
    } else {
        let (integer, fraction) = digits.split_at(point as usize);
        (integer.to_string(), fraction.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.integer.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(c);
        }

        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{grouped}")?;
        if !self.fraction.is_empty() {
            write!(f, ".{}", self.fraction)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::integer("1000", "1,000")]
    #[case::small("999", "999")]
    #[case::fraction("1.5", "1.5")]
    #[case::trailing_zeros("1234567.500", "1,234,567.5")]
    #[case::leading_zeros("0001234", "1,234")]
    #[case::only_fraction(".25", "0.25")]
    #[case::trailing_dot("12.", "12")]
    #[case::negative("-1234.0", "-1,234")]
    #[case::negative_zero("-0.000", "0")]
    #[case::exponent("1e18", "1,000,000,000,000,000,000")]
    #[case::exponent_with_fraction("1.5E3", "1,500")]
    #[case::negative_exponent("25e-3", "0.025")]
    #[case::negative_mantissa("-1.2e-1", "-0.12")]
    #[case::partial_shift("1.23456e2", "123.456")]
    #[case::huge("115792089237316195423570985008687907853269984665640564039457584007913129639935", "115,792,089,237,316,195,423,570,985,008,687,907,853,269,984,665,640,564,039,457,584,007,913,129,639,935")]
    fn test_format_decimal(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(GroupedDecimalFormatter.format(raw), expected);
    }

    #[rstest]
    #[case::word("abc")]
    #[case::missing_exponent("1e")]
    #[case::exponent_out_of_range("1e5000")]
    #[case::bare_exponent("e18")]
    #[case::hex("0x10")]
    #[case::empty("")]
    #[case::lone_dot(".")]
    #[case::double_dot("1.2.3")]
    fn test_unparseable_is_returned_unchanged(#[case] raw: &str) {
        assert_eq!(GroupedDecimalFormatter.format(raw), raw);
    }
}
