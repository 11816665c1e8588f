use engine::{Record, SearchableCollection};
use serde_json::{json, Value};

fn collection(data: Value) -> SearchableCollection {
    let Value::Array(items) = data else {
        panic!("test data must be a JSON array");
    };
    let records = items
        .into_iter()
        .map(|item| Record::from_json(item).expect("valid test record"))
        .collect();
    SearchableCollection::new(records)
}

fn as_json(results: Vec<&Record>) -> Value {
    serde_json::to_value(results).expect("records serialize")
}

#[test]
fn finds_nothing_for_an_unindexed_token() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
        {"id": 2, "name": "bar"},
    ]));
    assert!(c.search("name", "baz").is_empty());
}

#[test]
fn finds_a_single_record_by_field_token() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
        {"id": 2, "name": "bar"},
    ]));
    assert_eq!(as_json(c.search("name", "bar")), json!([{"id": 2, "name": "bar"}]));
}

#[test]
fn returns_multiple_matches_in_collection_order() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
        {"id": 2, "name": "bar"},
        {"id": 3, "name": "foo"},
    ]));
    assert_eq!(
        as_json(c.search("name", "foo")),
        json!([{"id": 1, "name": "foo"}, {"id": 3, "name": "foo"}])
    );
}

#[test]
fn matches_a_whole_word_inside_text() {
    let c = collection(json!([
        {"id": 1, "msg": "I love ice cream"},
        {"id": 2, "msg": "I hate ice cream"},
    ]));
    assert_eq!(
        as_json(c.search("msg", "love")),
        json!([{"id": 1, "msg": "I love ice cream"}])
    );
}

#[test]
fn does_not_match_a_partial_word() {
    let c = collection(json!([
        {"id": 1, "msg": "I love ice cream"},
    ]));
    assert!(c.search("msg", "lov").is_empty());
}

#[test]
fn matches_a_list_element() {
    let c = collection(json!([
        {"id": 1, "keys": ["foo", "bar"]},
        {"id": 2, "keys": ["baz", "bid"]},
    ]));
    assert_eq!(
        as_json(c.search("keys", "bid")),
        json!([{"id": 2, "keys": ["baz", "bid"]}])
    );
}

#[test]
fn empty_query_finds_records_missing_the_field() {
    let c = collection(json!([
        {"id": 1, "message": "How do you do?"},
        {"id": 2},
        {"id": 3, "message": "My name is Sue!"},
    ]));
    assert_eq!(as_json(c.search("message", "")), json!([{"id": 2}]));
}

#[test]
fn null_values_match_both_sentinels() {
    let c = collection(json!([
        {"id": 1, "alias": "Miss Joni"},
        {"id": 2, "alias": null},
    ]));
    assert_eq!(as_json(c.search("alias", "")), json!([{"id": 2, "alias": null}]));
    assert_eq!(as_json(c.search("alias", "null")), json!([{"id": 2, "alias": null}]));
}

#[test]
fn empty_query_is_empty_when_every_record_has_the_field() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
        {"id": 2, "name": "bar"},
    ]));
    assert!(c.search("name", "").is_empty());
}

#[test]
fn multi_term_queries_are_order_invariant() {
    let c = collection(json!([
        {"id": 1, "message": "How much wood"},
        {"id": 2, "message": "could a woodchuck chuck"},
        {"id": 3, "message": "if a woodchuck could chuck wood"},
    ]));
    let expected = json!([{"id": 3, "message": "if a woodchuck could chuck wood"}]);
    assert_eq!(as_json(c.search("message", "woodchuck if")), expected);
    assert_eq!(as_json(c.search("message", "if woodchuck")), expected);
}

#[test]
fn repeated_terms_are_idempotent() {
    let c = collection(json!([
        {"id": 1, "message": "How much wood"},
        {"id": 2, "message": "could a woodchuck chuck"},
    ]));
    assert_eq!(
        as_json(c.search("message", "wood wood")),
        as_json(c.search("message", "wood"))
    );
}

#[test]
fn terms_must_all_match_the_same_record() {
    let c = collection(json!([
        {"id": 1, "tags": ["ayy", "bee"]},
        {"id": 2, "tags": ["ayy", "cee"]},
    ]));
    assert!(c.search("tags", "bee cee").is_empty());
    assert_eq!(as_json(c.search("tags", "ayy bee")), json!([{"id": 1, "tags": ["ayy", "bee"]}]));
}

#[test]
fn unknown_field_degrades_to_no_results() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
    ]));
    assert!(c.search("nonexistent", "foo").is_empty());
}

#[test]
fn repeated_list_elements_do_not_duplicate_results() {
    let c = collection(json!([
        {"id": 1, "tags": ["bid", "bid", "bid"]},
        {"id": 2, "tags": ["bid"]},
    ]));
    let results = c.search("tags", "bid");
    assert_eq!(results.len(), 2);
    assert_eq!(
        as_json(results),
        json!([{"id": 1, "tags": ["bid", "bid", "bid"]}, {"id": 2, "tags": ["bid"]}])
    );
}

#[test]
fn scalar_fields_match_their_canonical_text() {
    let c = collection(json!([
        {"id": 1, "active": true},
        {"id": 2, "active": false},
    ]));
    assert_eq!(as_json(c.search("active", "false")), json!([{"id": 2, "active": false}]));
    assert_eq!(as_json(c.search("id", "2")), json!([{"id": 2, "active": false}]));
}

#[test]
fn field_catalog_is_the_union_across_records() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
        {"id": 2, "tags": ["a"]},
    ]));
    assert_eq!(c.fields(), ["id", "name", "tags"]);
    assert_eq!(c.len(), 2);
}

#[test]
fn sparse_fields_are_searchable_on_the_records_that_have_them() {
    let c = collection(json!([
        {"id": 1, "name": "foo"},
        {"id": 2, "tags": ["a"]},
    ]));
    assert_eq!(as_json(c.search("tags", "a")), json!([{"id": 2, "tags": ["a"]}]));
}
