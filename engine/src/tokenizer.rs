use crate::record::{FieldValue, Scalar};
use std::collections::BTreeSet;

/// Token emitted for null and absent values, alongside the empty string.
pub const NULL_TOKEN: &str = "null";

/// The distinct space-separated pieces of a string. The empty string has
/// exactly one piece: itself. Text field values and query strings are split
/// with the same rule, which is what makes null/absent records findable via
/// an empty query.
pub fn pieces(s: &str) -> BTreeSet<&str> {
    s.split(' ').collect()
}

/// Tokens a record contributes to one field's index.
///
/// Absent fields and explicit nulls are conflated: both index under `""` and
/// `"null"`. List elements are de-duplicated within the record, matching the
/// set semantics of text pieces, so a posting list never carries the same
/// record id twice.
pub fn field_tokens(value: Option<&FieldValue>) -> Vec<String> {
    match value {
        None | Some(FieldValue::Null) => vec![String::new(), NULL_TOKEN.to_string()],
        Some(FieldValue::Text(text)) => pieces(text).into_iter().map(str::to_string).collect(),
        Some(FieldValue::Scalar(scalar)) => vec![scalar.to_string()],
        Some(FieldValue::List(elems)) => {
            let distinct: BTreeSet<String> = elems.iter().map(Scalar::to_string).collect();
            distinct.into_iter().collect()
        }
    }
}
