use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// A single scalar value: the element type of list fields, and the payload
/// of non-text scalar fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl Scalar {
    fn from_json(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Number(n) => Ok(Self::Number(n)),
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::Null => Err("a null list element"),
            Value::Array(_) => Err("a nested array"),
            Value::Object(_) => Err("a nested object"),
        }
    }
}

/// Canonical text form: the string itself, the JSON text of a number,
/// `true`/`false` for booleans. This is the form the index tokenizes.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// The value of one record field. The four supported shapes; anything else
/// (a nested object, an array holding arrays or objects) is rejected at
/// construction so the tokenizer can be an exhaustive match.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    List(Vec<Scalar>),
    Scalar(Scalar),
    Null,
}

impl FieldValue {
    fn from_json(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => Ok(Self::Text(s)),
            Value::Number(n) => Ok(Self::Scalar(Scalar::Number(n))),
            Value::Bool(b) => Ok(Self::Scalar(Scalar::Bool(b))),
            Value::Null => Ok(Self::Null),
            Value::Array(elems) => {
                let mut list = Vec::with_capacity(elems.len());
                for elem in elems {
                    list.push(Scalar::from_json(elem)?);
                }
                Ok(Self::List(list))
            }
            Value::Object(_) => Err("an object"),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Null => f.write_str("null"),
            Self::List(elems) => {
                f.write_str("[")?;
                for (i, elem) in elems.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{elem}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Why a JSON value could not become a [`Record`]. Fatal to loading the
/// collection it came from; a silently mis-tokenized field would corrupt
/// the index.
#[derive(Debug, Error, PartialEq)]
pub enum RecordError {
    #[error("record is not a JSON object")]
    NotAnObject,
    #[error("field `{field}` holds {shape}; fields must be text, a number, a boolean, null, or a list of those")]
    UnsupportedShape { field: String, shape: &'static str },
}

/// One searchable item: a flat, sparse mapping from field name to value.
/// Records in the same collection need not share a schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    /// Convert a parsed JSON object into a record, rejecting unsupported
    /// field shapes.
    pub fn from_json(value: Value) -> Result<Self, RecordError> {
        let Value::Object(map) = value else {
            return Err(RecordError::NotAnObject);
        };
        let mut fields = BTreeMap::new();
        for (name, value) in map {
            let value = FieldValue::from_json(value).map_err(|shape| {
                RecordError::UnsupportedShape { field: name.clone(), shape }
            })?;
            fields.insert(name, value);
        }
        Ok(Self { fields })
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field/value pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}
