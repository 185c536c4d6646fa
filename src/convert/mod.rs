//! Applies byte conversions to the fields of JSON records.
//!
//! A [`Converter`] is built once from a field → direction mapping and then
//! run over each record. Absent and null fields are skipped, nested objects
//! are left alone, and lists are converted element by element.

pub mod direction;
pub mod value;

use serde_json::{Map, Value};
use tracing::{debug, warn};

pub use direction::Direction;
pub use value::FieldValue;

use crate::errors::{ConfigError, ConvertError};

pub type Record = Map<String, Value>;

/// What to do when a field holds a value the engine rejects.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum FailurePolicy {
    /// Log the failure and leave the field as it was.
    #[default]
    Skip,
    /// Fail the whole record without modifying it.
    Abort,
}

#[derive(Clone, Debug, PartialEq)]
pub enum FieldOutcome {
    Converted,
    Missing,
    Null,
    Unsupported,
    Failed(ConvertError),
}

#[derive(Clone, Debug)]
pub struct Converter {
    conversions: Vec<(String, Direction)>,
    on_failure: FailurePolicy,
}

impl Converter {
    /// Validates every direction before anything is converted.
    pub fn new<I, K, V>(conversions: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let conversions = conversions
            .into_iter()
            .map(|(field, direction)| {
                let field = field.into();
                let direction = direction.as_ref();
                match direction.parse::<Direction>() {
                    Ok(d) => Ok((field, d)),
                    Err(_) => Err(ConfigError::InvalidDirection {
                        field,
                        direction: direction.to_string(),
                    }),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            conversions,
            on_failure: FailurePolicy::default(),
        })
    }

    pub fn with_failure_policy(mut self, on_failure: FailurePolicy) -> Self {
        self.on_failure = on_failure;
        self
    }

    pub fn conversions(&self) -> &[(String, Direction)] {
        &self.conversions
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.on_failure
    }

    /// Converts the configured fields of `record` in place.
    ///
    /// Returns one outcome per configured field, in configuration order. Under
    /// [`FailurePolicy::Abort`] the first failure is returned instead and the
    /// record is not modified.
    pub fn convert(&self, record: &mut Record) -> Result<Vec<FieldOutcome>, ConvertError> {
        let mut outcomes = Vec::with_capacity(self.conversions.len());
        let mut updates = Vec::new();

        for (field, direction) in &self.conversions {
            let Some(original) = record.get(field) else {
                outcomes.push(FieldOutcome::Missing);
                continue;
            };

            let converted = match FieldValue::classify(original) {
                FieldValue::Null => {
                    outcomes.push(FieldOutcome::Null);
                    continue;
                }
                FieldValue::Unsupported => {
                    debug!(field = %field, value = %original, "cannot convert a nested value, skipping");
                    outcomes.push(FieldOutcome::Unsupported);
                    continue;
                }
                FieldValue::Scalar(v) => direction.apply(field, v),
                FieldValue::List(items) => items
                    .iter()
                    .map(|v| direction.apply(field, v))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array),
            };

            match converted {
                Ok(value) => {
                    updates.push((field, value));
                    outcomes.push(FieldOutcome::Converted);
                }
                Err(err) => match self.on_failure {
                    FailurePolicy::Abort => return Err(err),
                    FailurePolicy::Skip => {
                        warn!(field = err.field(), error = %err, "conversion failed, leaving field unchanged");
                        outcomes.push(FieldOutcome::Failed(err));
                    }
                },
            }
        }

        for (field, value) in updates {
            record.insert(field.clone(), value);
        }

        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::{FormatError, ParseError};

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn rejects_invalid_direction_up_front() {
        let err = Converter::new([("size", "bytes"), ("other", "kilo")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidDirection {
                field: "other".into(),
                direction: "kilo".into(),
            }
        );
        assert!(err.to_string().ends_with("(expected one of: human, bytes)"));
    }

    #[test]
    fn converts_to_bytes() {
        let converter = Converter::new([("size", "bytes")]).unwrap();
        let mut rec = record(json!({ "size": "10.4mib", "keep": "10kb" }));

        let outcomes = converter.convert(&mut rec).unwrap();

        assert_eq!(outcomes, vec![FieldOutcome::Converted]);
        assert_eq!(rec["size"], json!(10_905_190));
        assert_eq!(rec["keep"], json!("10kb"));
    }

    #[test]
    fn converts_to_human() {
        let converter = Converter::new([("a", "human"), ("b", "human")]).unwrap();
        let mut rec = record(json!({ "a": 123456, "b": "987654321" }));

        converter.convert(&mut rec).unwrap();

        assert_eq!(rec["a"], json!("123.46 kB"));
        assert_eq!(rec["b"], json!("987.65 MB"));
    }

    #[test]
    fn maps_lists_element_wise() {
        let converter = Converter::new([("sizes", "bytes")]).unwrap();
        let mut rec = record(json!({ "sizes": ["1kb", "2 KiB", 3] }));

        converter.convert(&mut rec).unwrap();

        assert_eq!(rec["sizes"], json!([1000, 2048, 3]));
    }

    #[test]
    fn skips_missing_null_and_nested() {
        let converter =
            Converter::new([("gone", "bytes"), ("null", "bytes"), ("obj", "human"), ("list", "human")])
                .unwrap();
        let original = json!({ "null": null, "obj": { "x": 1 }, "list": [1, [2]] });
        let mut rec = record(original.clone());

        let outcomes = converter.convert(&mut rec).unwrap();

        assert_eq!(
            outcomes,
            vec![
                FieldOutcome::Missing,
                FieldOutcome::Null,
                FieldOutcome::Unsupported,
                FieldOutcome::Unsupported,
            ]
        );
        assert_eq!(Value::Object(rec), original);
    }

    #[test]
    fn skip_policy_leaves_failed_field() {
        let converter = Converter::new([("bad", "bytes"), ("good", "bytes")]).unwrap();
        let mut rec = record(json!({ "bad": "-5kb", "good": "1kb" }));

        let outcomes = converter.convert(&mut rec).unwrap();

        assert_eq!(
            outcomes[0],
            FieldOutcome::Failed(ConvertError::Parse {
                field: "bad".into(),
                source: ParseError::Negative("-5kb".into()),
            })
        );
        assert_eq!(outcomes[1], FieldOutcome::Converted);
        assert_eq!(rec["bad"], json!("-5kb"));
        assert_eq!(rec["good"], json!(1000));
    }

    #[test]
    fn abort_policy_leaves_record_untouched() {
        let converter = Converter::new([("good", "human"), ("bad", "human")])
            .unwrap()
            .with_failure_policy(FailurePolicy::Abort);
        let original = json!({ "good": 1000, "bad": -3 });
        let mut rec = record(original.clone());

        let err = converter.convert(&mut rec).unwrap_err();

        assert_eq!(
            err,
            ConvertError::Format {
                field: "bad".into(),
                source: FormatError::Negative("-3".into()),
            }
        );
        assert_eq!(err.field(), "bad");
        assert_eq!(Value::Object(rec), original);
    }
}
