#![cfg(feature = "serde")]

//! Integration tests for serde support in superset.
//!
//! A SuperSet serializes as a sequence in insertion order and deserializes
//! from any sequence, collapsing duplicates to their first occurrence.

use std::collections::HashMap;

use rstest::rstest;
use superset::set::SuperSet;

#[rstest]
fn test_json_roundtrip_preserves_order() {
    let set = SuperSet::from([3, 1, 2]);
    let json = serde_json::to_string(&set).unwrap();
    assert_eq!(json, "[3,1,2]");

    let restored: SuperSet<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.to_vec(), vec![3, 1, 2]);
}

#[rstest]
fn test_serialize_after_removals() {
    let mut set: SuperSet<i32> = (1..=5).collect();
    set.remove(&2).remove(&4).add(2);
    assert_eq!(serde_json::to_string(&set).unwrap(), "[1,3,5,2]");
}

#[rstest]
fn test_deserialize_collapses_duplicates() {
    let restored: SuperSet<String> = serde_json::from_str(r#"["b","a","b","c","a"]"#).unwrap();
    assert_eq!(
        restored.to_vec(),
        vec!["b".to_string(), "a".to_string(), "c".to_string()]
    );
}

#[rstest]
fn test_empty_set_roundtrip() {
    let empty: SuperSet<i32> = SuperSet::new();
    let json = serde_json::to_string(&empty).unwrap();
    assert_eq!(json, "[]");

    let restored: SuperSet<i32> = serde_json::from_str(&json).unwrap();
    assert!(restored.is_empty());
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<SuperSet<i32>, _> = serde_json::from_str(r#"{"a": 1}"#);
    assert!(result.is_err());
}

#[rstest]
fn test_nested_in_map() {
    let mut groups: HashMap<String, SuperSet<i32>> = HashMap::new();
    groups.insert("odd".to_string(), SuperSet::from([1, 3, 5]));
    groups.insert("even".to_string(), SuperSet::from([2, 4]));

    let json = serde_json::to_string(&groups).unwrap();
    let restored: HashMap<String, SuperSet<i32>> = serde_json::from_str(&json).unwrap();

    assert_eq!(restored["odd"].to_vec(), vec![1, 3, 5]);
    assert_eq!(restored["even"].to_vec(), vec![2, 4]);
}
