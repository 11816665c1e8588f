use anyhow::{anyhow, bail, Context, Result};
use engine::{Record, SearchableCollection};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::info;

/// Load one collection file: a JSON array of flat objects. The file stem
/// becomes the collection name; array position becomes the record id.
pub fn load_collection(path: &Path) -> Result<(String, SearchableCollection)> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("cannot derive a collection name from {}", path.display()))?;
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let json: Value = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))?;
    let records = records_from_json(json).with_context(|| format!("loading {}", path.display()))?;
    let collection = SearchableCollection::new(records);
    info!(
        collection = %name,
        records = collection.len(),
        fields = collection.fields().len(),
        "loaded collection"
    );
    Ok((name, collection))
}

/// Convert a parsed JSON value into records. Anything other than an array of
/// supported-shape objects is a hard error for the whole collection; a
/// mis-shapen record would otherwise corrupt the index.
pub fn records_from_json(json: Value) -> Result<Vec<Record>> {
    let Value::Array(items) = json else {
        bail!("expected a JSON array of records");
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Record::from_json(item).with_context(|| format!("record {i}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_an_array_of_records() {
        let records = records_from_json(json!([
            {"id": 1, "name": "foo"},
            {"id": 2, "tags": ["a", "b"]},
        ]))
        .unwrap();
        assert_eq!(records.len(), 2);
        let collection = SearchableCollection::new(records);
        assert_eq!(collection.fields(), ["id", "name", "tags"]);
    }

    #[test]
    fn rejects_a_top_level_object() {
        let err = records_from_json(json!({"id": 1})).unwrap_err();
        assert!(err.to_string().contains("expected a JSON array"));
    }

    #[test]
    fn shape_errors_name_the_offending_record() {
        let err = records_from_json(json!([
            {"id": 1},
            {"id": 2, "meta": {"nested": true}},
        ]))
        .unwrap_err();
        assert!(format!("{err:#}").contains("record 1"));
    }
}
