use rstest::rstest;
use serde::Serialize;
use serde_json::json;

use super::*;

#[rstest]
#[case(json!(null), DepKind::Null)]
#[case(json!(false), DepKind::Bool)]
#[case(json!(0), DepKind::Number)]
#[case(json!(-1.5), DepKind::Number)]
#[case(json!(""), DepKind::String)]
#[case(json!([]), DepKind::Array)]
#[case(json!({}), DepKind::Object)]
fn kind_of(#[case] dep: Dep, #[case] kind: DepKind) {
    assert_eq!(DepKind::of(&dep), kind);
}

#[test]
fn primitive_kinds() {
    assert!(DepKind::Null.is_primitive());
    assert!(DepKind::Bool.is_primitive());
    assert!(DepKind::Number.is_primitive());
    assert!(DepKind::String.is_primitive());
    assert!(!DepKind::Array.is_primitive());
    assert!(!DepKind::Object.is_primitive());
}

#[test]
fn kind_display() {
    assert_eq!(DepKind::Null.to_string(), "null");
    assert_eq!(DepKind::Object.to_string(), "object");
}

#[test]
fn all_primitive() {
    assert!(Deps::from([json!(1), json!("a"), json!(true)]).is_all_primitive());
    assert!(Deps::from([json!(null)]).is_all_primitive());
    assert!(!Deps::from([json!(0), json!(false), json!(""), json!({"id": 1})]).is_all_primitive());
    assert!(!Deps::from([json!([1, 2])]).is_all_primitive());
}

#[test]
fn push_values() {
    let mut deps = Deps::new();
    deps.push(1);
    deps.push("x");
    deps.push(json!({"id": 1}));
    assert_eq!(deps.len(), 3);
    assert_eq!(
        deps.kinds().collect::<Vec<_>>(),
        vec![DepKind::Number, DepKind::String, DepKind::Object]
    );
}

#[test]
fn push_serialize() {
    #[derive(Serialize)]
    struct User {
        id: u32,
        name: &'static str,
    }

    let deps = Deps::new()
        .with(&User { id: 1, name: "a" })
        .unwrap()
        .with(&[1, 2, 3])
        .unwrap();
    assert_eq!(
        deps.into_vec(),
        vec![json!({"id": 1, "name": "a"}), json!([1, 2, 3])]
    );
}

#[test]
fn push_serialize_error() {
    use std::collections::HashMap;

    let mut map = HashMap::new();
    map.insert((1, 2), "non-string key");

    let mut deps = Deps::new();
    assert!(deps.push_serialize(&map).is_err());
    assert!(deps.is_empty());
}

#[test]
fn structural_equality() {
    let a = Deps::from([json!({"id": 1, "tags": ["x"]})]);
    let b: Deps = vec![json!({"tags": ["x"], "id": 1})].into_iter().collect();
    assert_eq!(a, b);
}
