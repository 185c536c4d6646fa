use crate::{
    bytes::{
        parse::{Decimal, DecimalError},
        units::Unit,
    },
    errors::FormatError,
};

/// Values that can be turned into a whole, non-negative number of bytes.
pub trait IntoByteCount {
    fn into_byte_count(self) -> Result<u64, FormatError>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl IntoByteCount for $t {
                fn into_byte_count(self) -> Result<u64, FormatError> {
                    u64::try_from(self).map_err(|_| FormatError::OutOfRange(self.to_string()))
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl IntoByteCount for $t {
                fn into_byte_count(self) -> Result<u64, FormatError> {
                    if self < 0 {
                        return Err(FormatError::Negative(self.to_string()));
                    }
                    u64::try_from(self).map_err(|_| FormatError::OutOfRange(self.to_string()))
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

impl IntoByteCount for f64 {
    fn into_byte_count(self) -> Result<u64, FormatError> {
        if !self.is_finite() {
            return Err(FormatError::NotFinite(self));
        }
        if self < 0.0 {
            return Err(FormatError::Negative(self.to_string()));
        }

        let rounded = self.round();
        // 2^64 is the first float above u64::MAX
        if rounded >= 18_446_744_073_709_551_616.0 {
            return Err(FormatError::OutOfRange(self.to_string()));
        }
        Ok(rounded as u64)
    }
}

impl IntoByteCount for &str {
    fn into_byte_count(self) -> Result<u64, FormatError> {
        let text = self.trim();
        if text.starts_with('-') && Decimal::parse(&text[1..]).is_ok() {
            return Err(FormatError::Negative(text.to_string()));
        }

        let decimal = Decimal::parse(text).map_err(|err| match err {
            DecimalError::Malformed => FormatError::NotNumeric(text.to_string()),
            DecimalError::TooLarge => FormatError::OutOfRange(text.to_string()),
        })?;

        decimal
            .scale_round(1)
            .ok_or_else(|| FormatError::OutOfRange(text.to_string()))
    }
}

impl IntoByteCount for &String {
    fn into_byte_count(self) -> Result<u64, FormatError> {
        self.as_str().into_byte_count()
    }
}

impl IntoByteCount for String {
    fn into_byte_count(self) -> Result<u64, FormatError> {
        self.as_str().into_byte_count()
    }
}

/// Formats a byte count using SI units with two decimals, e.g. `"123.46 kB"`.
///
/// Picks the largest unit (up to PB) that keeps the value at or above 1.
pub fn format_bytes(bytes: u64) -> String {
    let unit = Unit::SI_TIERS
        .iter()
        .rev()
        .find(|unit| bytes >= unit.factor())
        .unwrap_or(&Unit::BYTE);

    let divisor = unit.factor() as u128;
    let hundredths = (bytes as u128 * 100 + divisor / 2) / divisor;

    format!("{}.{:02} {}", hundredths / 100, hundredths % 100, unit.symbol)
}

/// Coerces `value` to a byte count and formats it with [`format_bytes`].
pub fn format<T: IntoByteCount>(value: T) -> Result<String, FormatError> {
    Ok(format_bytes(value.into_byte_count()?))
}
