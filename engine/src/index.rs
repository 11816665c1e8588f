use crate::record::Record;
use crate::tokenizer::{field_tokens, pieces};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// A record's position in its collection. Assigned once at construction,
/// never reused.
pub type RecordId = u32;

/// token -> ascending record ids, for a single field.
#[derive(Debug, Default)]
pub struct FieldIndex {
    postings: HashMap<String, Vec<RecordId>>,
}

impl FieldIndex {
    fn add(&mut self, token: String, id: RecordId) {
        self.postings.entry(token).or_default().push(id);
    }

    pub fn get(&self, token: &str) -> Option<&[RecordId]> {
        self.postings.get(token).map(Vec::as_slice)
    }

    /// Number of distinct tokens in this field's vocabulary.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// A collection of records with one inverted index per field, built eagerly
/// at construction and immutable afterwards.
pub struct SearchableCollection {
    records: Vec<Record>,
    fields: Vec<String>,
    index: HashMap<String, FieldIndex>,
}

impl SearchableCollection {
    pub fn new(records: Vec<Record>) -> Self {
        let fields = collect_fields(&records);
        let mut index = HashMap::with_capacity(fields.len());
        for field in &fields {
            index.insert(field.clone(), build_field_index(&records, field));
        }
        debug!(records = records.len(), fields = fields.len(), "built collection index");
        Self { records, fields, index }
    }

    /// The field catalog: the sorted union of field names across all
    /// records. A field only some records define is still searchable.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find every record whose `field` value contains all the distinct
    /// space-separated terms of `query`, in collection order.
    ///
    /// Term order and repetition do not affect the result. An unknown field
    /// or a term with no postings yields an empty result rather than an
    /// error. The empty query is the single term `""`, so it finds records
    /// where `field` is null or absent.
    pub fn search(&self, field: &str, query: &str) -> Vec<&Record> {
        let terms = pieces(query);
        if terms.is_empty() {
            return Vec::new();
        }
        let Some(field_index) = self.index.get(field) else {
            return Vec::new();
        };
        let mut result: Option<Vec<RecordId>> = None;
        for term in terms {
            let Some(postings) = field_index.get(term) else {
                return Vec::new();
            };
            let narrowed = match result {
                None => postings.to_vec(),
                Some(acc) => intersect_ascending(&acc, postings),
            };
            // once empty, no further term can bring records back
            if narrowed.is_empty() {
                return Vec::new();
            }
            result = Some(narrowed);
        }
        result
            .unwrap_or_default()
            .into_iter()
            .map(|id| &self.records[id as usize])
            .collect()
    }
}

fn collect_fields(records: &[Record]) -> Vec<String> {
    let mut fields = BTreeSet::new();
    for record in records {
        for name in record.field_names() {
            fields.insert(name.to_string());
        }
    }
    fields.into_iter().collect()
}

/// Scan records in id order and append each id to the posting list of every
/// token its value for `field` produces. Appending in scan order is what
/// keeps posting lists ascending.
fn build_field_index(records: &[Record], field: &str) -> FieldIndex {
    let mut index = FieldIndex::default();
    for (id, record) in records.iter().enumerate() {
        for token in field_tokens(record.get(field)) {
            index.add(token, id as RecordId);
        }
    }
    index
}

/// Two-pointer intersection of two strictly ascending id lists: advance the
/// smaller head, emit on equality. O(|a| + |b|).
fn intersect_ascending(a: &[RecordId], b: &[RecordId]) -> Vec<RecordId> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}
