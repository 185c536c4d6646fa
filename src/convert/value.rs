use serde_json::Value;

/// The shape of a record field, as far as conversion is concerned.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FieldValue<'a> {
    Null,
    Scalar(&'a Value),
    /// A list whose elements are all scalars.
    List(&'a [Value]),
    /// Objects, and lists containing anything other than scalars.
    Unsupported,
}

impl<'a> FieldValue<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Array(items) if items.iter().all(is_scalar) => Self::List(items),
            Value::Array(_) | Value::Object(_) => Self::Unsupported,
            scalar => Self::Scalar(scalar),
        }
    }
}

fn is_scalar(value: &Value) -> bool {
    matches!(value, Value::String(_) | Value::Number(_) | Value::Bool(_))
}
