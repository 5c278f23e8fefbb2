//! Unit tests for keyed reshaping and ordering.

use std::cmp::Ordering;

use rstest::rstest;
use serde_json::{Map, Value, json};

use super::{
    KeyedMapping, compare_values, from_keyed_mapping, sort_by_key_order, sort_sequence_by_field,
    to_keyed_mapping,
};

fn rows(value: Value) -> Vec<Map<String, Value>> {
    serde_json::from_value(value).expect("fixture is a list of objects")
}

fn object(value: Value) -> Map<String, Value> {
    serde_json::from_value(value).expect("fixture is an object")
}

#[test]
fn reshapes_rows_by_name() {
    let keyed = to_keyed_mapping(
        &rows(json!([
            {"name": "item1", "value": 10},
            {"name": "item2", "value": 20},
        ])),
        "name",
    )
    .expect("every row has a name");
    assert_eq!(keyed.len(), 2);
    assert_eq!(keyed.get(&json!("item1")), Some(&object(json!({"value": 10}))));
    assert_eq!(keyed.get(&json!("item2")), Some(&object(json!({"value": 20}))));
}

#[test]
fn reshapes_rows_by_numeric_identity() {
    let keyed = to_keyed_mapping(
        &rows(json!([
            {"name": "Alice", "age": 30},
            {"name": "Bob", "age": 25},
        ])),
        "age",
    )
    .expect("every row has an age");
    assert_eq!(keyed.get(&json!(30)), Some(&object(json!({"name": "Alice"}))));
    assert!(!keyed.contains(&json!("30")));
}

#[test]
fn missing_identity_reports_available_keys() {
    let err = to_keyed_mapping(
        &rows(json!([
            {"name": "item1", "value": 10},
            {"value": 20},
        ])),
        "name",
    )
    .expect_err("second row has no name");
    assert_eq!(
        err.to_string(),
        "Key 'name' not found in value. Available keys: value"
    );
}

#[test]
fn empty_rows_give_empty_mapping() {
    let keyed = to_keyed_mapping(&[], "name").expect("nothing to reshape");
    assert!(keyed.is_empty());
}

#[test]
fn duplicate_identity_keeps_first_position() {
    let keyed = to_keyed_mapping(
        &rows(json!([
            {"id": 1, "v": "a"},
            {"id": 2, "v": "b"},
            {"id": 1, "v": "c"},
        ])),
        "id",
    )
    .expect("every row has an id");
    let identities: Vec<&Value> = keyed.iter().map(|(identity, _)| identity).collect();
    assert_eq!(identities, [&json!(1), &json!(2)]);
    assert_eq!(keyed.get(&json!(1)), Some(&object(json!({"v": "c"}))));
}

#[test]
fn integral_float_identity_matches_integer_row() {
    let keyed = to_keyed_mapping(
        &rows(json!([
            {"id": 1, "v": "int"},
            {"id": 1.0, "v": "float"},
            {"id": 1.5, "v": "fraction"},
            {"id": "1", "v": "text"},
        ])),
        "id",
    )
    .expect("every row has an id");
    assert_eq!(keyed.len(), 3);
    assert_eq!(keyed.get(&json!(1)), Some(&object(json!({"v": "float"}))));
    assert_eq!(keyed.get(&json!(1.0)), Some(&object(json!({"v": "float"}))));
    assert_eq!(keyed.get(&json!(1.5)), Some(&object(json!({"v": "fraction"}))));
    assert_eq!(keyed.get(&json!("1")), Some(&object(json!({"v": "text"}))));
}

#[test]
fn remove_keeps_remaining_order_addressable() {
    let mut keyed = KeyedMapping::new();
    for id in ["a", "b", "c"] {
        keyed.insert(json!(id), Map::new());
    }
    assert_eq!(keyed.remove(&json!("a")), Some(Map::new()));
    assert_eq!(keyed.remove(&json!("a")), None);
    keyed.insert(json!("d"), object(json!({"x": 1})));
    let identities: Vec<&Value> = keyed.iter().map(|(identity, _)| identity).collect();
    assert_eq!(identities, [&json!("b"), &json!("c"), &json!("d")]);
    assert_eq!(keyed.get(&json!("d")), Some(&object(json!({"x": 1}))));
    assert!(keyed.contains(&json!("c")));
}

#[test]
fn rebuilt_rows_lead_with_identity() {
    let source = rows(json!([{"value": 10, "name": "item1"}]));
    let keyed = to_keyed_mapping(&source, "name").expect("row has a name");
    let rebuilt = from_keyed_mapping(&keyed, "name");
    let keys: Vec<&String> = rebuilt.iter().flat_map(Map::keys).collect();
    assert_eq!(keys, ["name", "value"]);
}

#[rstest]
#[case(json!({"b": 2, "a": 1, "c": 3}), vec!["a", "b"], vec!["a", "b", "c"])]
#[case(json!({"x": 24, "y": 25, "z": 26}), vec!["z", "x"], vec!["z", "x", "y"])]
#[case(json!({"two": 2, "one": 1, "three": 3}), vec![], vec!["two", "one", "three"])]
#[case(
    json!({"two": 2, "one": 1, "three": 3}),
    vec!["three", "two", "one"],
    vec!["three", "two", "one"]
)]
#[case(json!({"a": 1}), vec!["missing", "a"], vec!["a"])]
fn sorts_mapping_by_key_order(
    #[case] value: Value,
    #[case] key_order: Vec<&str>,
    #[case] expected: Vec<&str>,
) {
    let mapping = object(value);
    let sorted = sort_by_key_order(&mapping, &key_order);
    assert_eq!(sorted.keys().collect::<Vec<_>>(), expected);
    assert_eq!(sorted, mapping);
}

#[test]
fn sorts_rows_by_field() {
    let source = rows(json!([
        {"name": "b", "value": 2},
        {"name": "a", "value": 1},
        {"name": "c", "value": 3},
    ]));
    let sorted = sort_sequence_by_field(&source, "name", false).expect("rows have names");
    let names: Vec<&Value> = sorted.iter().filter_map(|row| row.get("name")).collect();
    assert_eq!(names, [&json!("a"), &json!("b"), &json!("c")]);
}

#[test]
fn reverse_sort_is_stable_for_ties() {
    let source = rows(json!([
        {"name": "Alice", "age": 30},
        {"name": "Bob", "age": 25},
        {"name": "Carol", "age": 30},
    ]));
    let sorted = sort_sequence_by_field(&source, "age", true).expect("rows have ages");
    let names: Vec<&Value> = sorted.iter().filter_map(|row| row.get("name")).collect();
    assert_eq!(names, [&json!("Alice"), &json!("Carol"), &json!("Bob")]);
}

#[test]
fn sorting_requires_the_field() {
    let source = rows(json!([{"name": "a"}, {"label": "b"}]));
    let err = sort_sequence_by_field(&source, "name", false).expect_err("second row lacks name");
    assert_eq!(
        err.to_string(),
        "Key 'name' not found in value. Available keys: label"
    );
}

#[rstest]
#[case(json!(null), json!(false), Ordering::Less)]
#[case(json!(true), json!(1), Ordering::Less)]
#[case(json!(2), json!(10), Ordering::Less)]
#[case(json!(-1), json!(u64::MAX), Ordering::Less)]
#[case(json!(1.5), json!(1), Ordering::Greater)]
#[case(json!("10"), json!("9"), Ordering::Less)]
#[case(json!([1, 2]), json!([1, 2, 0]), Ordering::Less)]
#[case(json!({"a": 1}), json!({"a": 1}), Ordering::Equal)]
#[case(json!("z"), json!([]), Ordering::Less)]
fn compares_values_with_total_order(
    #[case] left: Value,
    #[case] right: Value,
    #[case] expected: Ordering,
) {
    assert_eq!(compare_values(&left, &right), expected);
}
