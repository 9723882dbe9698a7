use std::collections::HashMap;

use mlog_core::stable_hash_string;

#[test]
fn hash_ignores_map_insertion_order() {
    let mut first = HashMap::new();
    first.insert("TerminalArea_m2", 400.0);
    first.insert("LoadBearing_ton_per_m2", 10.0);
    let mut second = HashMap::new();
    second.insert("LoadBearing_ton_per_m2", 10.0);
    second.insert("TerminalArea_m2", 400.0);
    assert_eq!(
        stable_hash_string(&first).unwrap(),
        stable_hash_string(&second).unwrap()
    );
}

#[test]
fn hash_changes_with_content() {
    let a = stable_hash_string(&vec![1.0, 2.0]).unwrap();
    let b = stable_hash_string(&vec![1.0, 2.5]).unwrap();
    assert_ne!(a, b);
    assert_eq!(a.len(), 64);
}

#[test]
fn hash_sorts_nested_objects() {
    let first = serde_json::json!({
        "vessels": {"Tugboat": [1, 2], "Crane Barge": [3]},
        "equipment": {}
    });
    let second = serde_json::json!({
        "equipment": {},
        "vessels": {"Crane Barge": [3], "Tugboat": [1, 2]}
    });
    assert_eq!(
        stable_hash_string(&first).unwrap(),
        stable_hash_string(&second).unwrap()
    );
}
