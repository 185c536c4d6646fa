use thiserror::Error;

use crate::convert::Direction;

/// Input text is not `<number><optional unit>`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    #[error("cannot parse an empty size")]
    Empty,
    #[error("missing number in size '{0}'")]
    MissingNumber(String),
    #[error("invalid number '{number}' in size '{input}'")]
    InvalidNumber { input: String, number: String },
    #[error("negative size '{0}' is not allowed")]
    Negative(String),
    #[error("unknown unit '{unit}' in size '{input}'")]
    UnknownUnit { input: String, unit: String },
    #[error("size '{0}' does not fit in 64 bits")]
    Overflow(String),
}

/// Value cannot be coerced to a non-negative byte count.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum FormatError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),
    #[error("negative byte count '{0}'")]
    Negative(String),
    #[error("byte count '{0}' is not finite")]
    NotFinite(f64),
    #[error("byte count '{0}' does not fit in 64 bits")]
    OutOfRange(String),
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    #[error(
        "invalid conversion direction '{direction}' for field '{field}' (expected one of: {})",
        Direction::VALID.join(", ")
    )]
    InvalidDirection { field: String, direction: String },
    #[error("invalid conversion '{0}' (expected FIELD=DIRECTION)")]
    InvalidMapping(String),
}

/// A conversion that failed on a specific record field.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("field '{field}': {source}")]
    Parse {
        field: String,
        #[source]
        source: ParseError,
    },
    #[error("field '{field}': {source}")]
    Format {
        field: String,
        #[source]
        source: FormatError,
    },
}

impl ConvertError {
    pub fn field(&self) -> &str {
        match self {
            Self::Parse { field, .. } | Self::Format { field, .. } => field,
        }
    }
}
