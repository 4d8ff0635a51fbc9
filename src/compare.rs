use crate::Deps;


/// Comparator that treats structurally equal dependency lists as unchanged.
///
/// An absent previous list is always a change.
pub fn deep_equal(current: &Deps, previous: Option<&Deps>) -> bool {
    previous.is_some_and(|previous| current == previous)
}

/// Build a comparator that compares the keys extracted by `key`.
///
/// ```
/// use compare_effect::{compare_by, Deps};
/// use serde_json::json;
///
/// let mut by_id = compare_by(|deps: &Deps| deps[0]["id"].clone());
/// let a = Deps::from([json!({ "id": 1, "name": "a" })]);
/// let b = Deps::from([json!({ "id": 1, "name": "b" })]);
/// assert!(by_id(&b, Some(&a)));
/// assert!(!by_id(&a, None));
/// ```
pub fn compare_by<K: PartialEq>(
    mut key: impl FnMut(&Deps) -> K,
) -> impl FnMut(&Deps, Option<&Deps>) -> bool {
    move |current, previous| match previous {
        Some(previous) => key(current) == key(previous),
        None => false,
    }
}
