//! Conversion between human-readable byte sizes and exact byte counts.
//!
//! [`parse`] turns text such as `"2.5 GB"` or `"10.4MiB"` into a byte count,
//! accepting both SI (base 1000) and IEC (base 1024) units. [`format`] goes
//! the other way and always renders SI units with two decimals:
//!
//! ```
//! assert_eq!(bytes2human::parse("10.4mib").unwrap(), 10_905_190);
//! assert_eq!(bytes2human::format(123456u64).unwrap(), "123.46 kB");
//! ```
//!
//! The [`convert`] module applies these conversions to fields of JSON records.

pub mod bytes;
pub mod cli;
pub mod config;
pub mod convert;
pub mod errors;
pub mod filter;
pub mod output;
pub mod stats;
pub mod utils;

pub use bytes::{format, format_bytes, parse, IntoByteCount};
pub use convert::{Converter, Direction, FailurePolicy, FieldOutcome};
pub use errors::{ConfigError, ConvertError, FormatError, ParseError};
