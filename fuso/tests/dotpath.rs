//! Integration tests for dot-path conversion.

use fuso::{DotPathOptions, from_dotpath, from_dotpath_with, to_dotpath};
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case::number(json!(123), json!(123))]
#[case::boolean(json!(false), json!(false))]
#[case::null(json!(null), json!(null))]
#[case::string_is_not_a_path(json!("a.b.c"), json!("a.b.c"))]
#[case::sequence_elements(
    json!(["a.b.c", {"a.b": 1, "a.c": 2}]),
    json!(["a.b.c", {"a": {"b": 1, "c": 2}}])
)]
#[case::shared_prefix(json!({"a.b": 1, "a.c": 2}), json!({"a": {"b": 1, "c": 2}}))]
#[case::sequence_leaf(json!({"a.b.c": [1, 2, 3]}), json!({"a": {"b": {"c": [1, 2, 3]}}}))]
#[case::nested_dotted_keys(
    json!({"a.b": {"c.d": 4, "e": 5}}),
    json!({"a": {"b": {"c": {"d": 4}, "e": 5}}})
)]
#[case::sequence_of_null(json!([null]), json!([null]))]
fn expands_dotted_keys(#[case] value: Value, #[case] expected: Value) {
    assert_eq!(from_dotpath(&value), expected);
}

#[test]
fn ignored_keys_stay_whole() {
    let value = json!({
        "a.b.c": 1,
        "a.b.d": 2,
        "x.y": 3,
        "ignore.this.key": 4,
    });
    let options = DotPathOptions::new().with_ignores(["ignore.this.key"]);
    assert_eq!(
        from_dotpath_with(&value, &options),
        json!({
            "a": {"b": {"c": 1, "d": 2}},
            "x": {"y": 3},
            "ignore.this.key": 4,
        })
    );
}

#[test]
fn ignores_match_whole_keys_only() {
    let options = DotPathOptions::new().with_ignores(["a"]);
    assert_eq!(
        from_dotpath_with(&json!({"a.b": 1}), &options),
        json!({"a": {"b": 1}})
    );
}

#[rstest]
#[case::nested(
    json!({"a": {"b": {"c": 1, "d": 2}}, "x": {"y": 3}}),
    json!({"a.b.c": 1, "a.b.d": 2, "x.y": 3})
)]
#[case::dotted_inner_key(
    json!({"key": "value", "nested": {"inner.key": "inner.value"}}),
    json!({"key": "value", "nested.inner.key": "inner.value"})
)]
#[case::sequences_end_paths(
    json!({"list": [{"a": 1}, {"b": 2}], "values": [10, 20]}),
    json!({"list": [{"a": 1}, {"b": 2}], "values": [10, 20]})
)]
#[case::already_flat(json!({"simple": "test"}), json!({"simple": "test"}))]
#[case::deep_chain(json!({"a": {"b": {"c": {"d": {"e": [123, 123]}}}}}), json!({"a.b.c.d.e": [123, 123]}))]
#[case::scalar(json!("a.b"), json!("a.b"))]
fn flattens_nested_mappings(#[case] value: Value, #[case] expected: Value) {
    assert_eq!(to_dotpath(&value), expected);
}

#[rstest]
#[case(json!({"a.b.c": 1, "a.b.d": 2, "x.y": 3, "z": null}))]
#[case(json!({"server.port": 8080, "server.tls.enabled": true, "tags": ["a", "b"]}))]
fn flat_mappings_round_trip(#[case] flat: Value) {
    assert_eq!(to_dotpath(&from_dotpath(&flat)), flat);
}

#[test]
fn flattening_preserves_key_order() {
    let flat = to_dotpath(&json!({"z": {"b": 1, "a": 2}, "m": 3}));
    let keys: Vec<&String> = flat.as_object().map(|m| m.keys().collect()).unwrap_or_default();
    assert_eq!(keys, ["z.b", "z.a", "m"]);
}
