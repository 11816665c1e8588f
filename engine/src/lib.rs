//! In-memory field search over collections of loosely structured records.
//!
//! A collection is an ordered list of [`Record`]s; each record is a sparse
//! mapping from field name to a [`FieldValue`]. [`SearchableCollection`]
//! builds one inverted index per field at construction time and answers
//! multi-term AND queries by intersecting posting lists. Everything is
//! immutable after construction; a changed collection means building a new
//! `SearchableCollection`.

pub mod index;
pub mod record;
pub mod tokenizer;

pub use index::{FieldIndex, RecordId, SearchableCollection};
pub use record::{FieldValue, Record, RecordError, Scalar};
