use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::{
    bytes::{format, parse},
    errors::{ConvertError, FormatError},
};

/// Which way a field is converted.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    /// Byte count to human-readable text.
    Human,
    /// Human-readable text to byte count.
    Bytes,
}

impl Direction {
    pub const VALID: [&str; 2] = ["human", "bytes"];

    /// Converts a single scalar JSON value.
    pub fn apply(&self, field: &str, value: &Value) -> Result<Value, ConvertError> {
        match self {
            Self::Bytes => {
                let text = match value {
                    Value::String(s) => s.clone(),
                    // serde_json prints large floats as `1e+16`; Rust's own float
                    // formatting never uses an exponent
                    Value::Number(n) if n.is_f64() => {
                        n.as_f64().map_or_else(|| n.to_string(), |f| f.to_string())
                    }
                    other => other.to_string(),
                };
                parse(&text)
                    .map(Value::from)
                    .map_err(|source| ConvertError::Parse {
                        field: field.to_string(),
                        source,
                    })
            }
            Self::Human => {
                let formatted = match value {
                    Value::Number(n) => {
                        if let Some(u) = n.as_u64() {
                            format(u)
                        } else if let Some(i) = n.as_i64() {
                            format(i)
                        } else {
                            n.as_f64()
                                .map_or_else(|| Err(FormatError::NotNumeric(n.to_string())), format)
                        }
                    }
                    Value::String(s) => format(s),
                    other => Err(FormatError::NotNumeric(other.to_string())),
                };
                formatted
                    .map(Value::String)
                    .map_err(|source| ConvertError::Format {
                        field: field.to_string(),
                        source,
                    })
            }
        }
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(Self::Human),
            "bytes" => Ok(Self::Bytes),
            _ => Err(format!("invalid direction: {s}")),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Bytes => write!(f, "bytes"),
        }
    }
}
