use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{bytes::units::Unit, errors::ParseError};

static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]*)(?:\.([0-9]*))?$").unwrap());

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DecimalError {
    Malformed,
    TooLarge,
}

/// A non-negative decimal literal: an integer part plus every fractional digit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Decimal {
    int: u128,
    frac: Vec<u8>,
}

impl Decimal {
    /// Accepts digits with at most one decimal point (`"12"`, `"1.5"`, `".5"`, `"5."`).
    pub(crate) fn parse(s: &str) -> Result<Self, DecimalError> {
        let caps = DECIMAL.captures(s).ok_or(DecimalError::Malformed)?;
        let int = caps.get(1).map_or("", |m| m.as_str());
        let frac = caps.get(2).map_or("", |m| m.as_str());
        if int.is_empty() && frac.is_empty() {
            return Err(DecimalError::Malformed);
        }

        let int: u128 = if int.is_empty() {
            0
        } else {
            int.parse().map_err(|_| DecimalError::TooLarge)?
        };
        let frac = frac.trim_end_matches('0').bytes().map(|b| b - b'0').collect();

        Ok(Self { int, frac })
    }

    /// `self * factor`, rounded half-up to a whole number.
    ///
    /// The fraction is multiplied digit by digit from the least significant
    /// end, so the result is exact however many digits were written.
    pub fn scale_round(&self, factor: u64) -> Option<u64> {
        let factor = factor as u128;
        let mut carry = 0u128;
        let mut first_digit = 0u128;
        for &digit in self.frac.iter().rev() {
            let t = digit as u128 * factor + carry;
            first_digit = t % 10;
            carry = t / 10;
        }

        let mut whole = self.int.checked_mul(factor)?.checked_add(carry)?;
        if first_digit >= 5 {
            whole = whole.checked_add(1)?;
        }
        u64::try_from(whole).ok()
    }
}

/// A size as written: a magnitude and the unit it is expressed in.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Quantity {
    pub magnitude: Decimal,
    pub unit: Unit,
}

impl Quantity {
    /// The byte count, or `None` if it overflows a `u64`.
    pub fn bytes(&self) -> Option<u64> {
        self.magnitude.scale_round(self.unit.factor())
    }
}

impl FromStr for Quantity {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Err(ParseError::Empty);
        }

        let (number, suffix) =
            input.split_at(input.trim_end_matches(|c: char| c.is_ascii_alphabetic()).len());
        let number = number.trim_end();

        if number.is_empty() {
            return Err(ParseError::MissingNumber(input.to_string()));
        }
        if number.starts_with('-') {
            return Err(ParseError::Negative(input.to_string()));
        }

        let unit = Unit::lookup(suffix).ok_or_else(|| ParseError::UnknownUnit {
            input: input.to_string(),
            unit: suffix.to_string(),
        })?;

        let magnitude = Decimal::parse(number).map_err(|err| match err {
            DecimalError::Malformed => ParseError::InvalidNumber {
                input: input.to_string(),
                number: number.to_string(),
            },
            DecimalError::TooLarge => ParseError::Overflow(input.to_string()),
        })?;

        Ok(Self { magnitude, unit })
    }
}

/// Parses a human-readable size such as `"2.5 GB"` or `"10.4MiB"` into bytes.
///
/// A number with no unit is taken as a byte count. Fractional results are
/// rounded half-up to the nearest byte.
pub fn parse(text: &str) -> Result<u64, ParseError> {
    let quantity: Quantity = text.parse()?;
    quantity
        .bytes()
        .ok_or_else(|| ParseError::Overflow(text.trim().to_string()))
}
