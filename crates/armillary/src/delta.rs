//! Differencing and patching of flat JSON documents.
//!
//! [`diff`] and [`patch`] are inverse to each other: for any two documents
//! `base` and `target`, `patch(base, &diff(base, target)) == target`.

use log::{debug, trace};

use armillary_core::document::{Addition, Delta, FlatDocument, Update};

/// Computes the delta that turns `base` into `target`.
///
/// - `additions`: keys only in `target`, in `target` order.
/// - `deletions`: keys only in `base`, in `base` order.
/// - `updates`: keys in both with unequal values, in `base` order.
///
/// Values are compared as a whole. Keys whose values are equal appear in
/// no sequence.
pub fn diff(base: &FlatDocument, target: &FlatDocument) -> Delta {
    let additions = target
        .iter()
        .filter(|(key, _)| !base.contains_key(key))
        .map(|(key, value)| Addition {
            key: key.clone(),
            value: value.clone(),
        })
        .collect();

    let mut deletions = Vec::new();
    let mut updates = Vec::new();
    for (key, from) in base.iter() {
        match target.get(key) {
            None => deletions.push(key.clone()),
            Some(to) if to != from => updates.push(Update {
                key: key.clone(),
                from: from.clone(),
                to: to.clone(),
            }),
            Some(_) => {}
        }
    }

    let delta = Delta {
        additions,
        deletions,
        updates,
    };
    debug!(
        additions = delta.additions.len(),
        deletions = delta.deletions.len(),
        updates = delta.updates.len();
        "Documents compared"
    );
    delta
}

/// Applies `delta` to a copy of `base`.
///
/// Deletions are applied first, then additions, then updates. Deleting an
/// absent key does nothing. Deltas are never validated, so for a key listed
/// more than once the last applied entry wins.
pub fn patch(base: &FlatDocument, delta: &Delta) -> FlatDocument {
    let mut result = base.clone();

    for key in &delta.deletions {
        if result.remove(key).is_none() {
            trace!(key = key.as_str(); "Deleted key not present in base");
        }
    }
    for addition in &delta.additions {
        result.insert(addition.key.as_str(), addition.value.clone());
    }
    for update in &delta.updates {
        result.insert(update.key.as_str(), update.to.clone());
    }

    debug!(keys = result.len(); "Delta applied");
    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::{Value, json};

    use super::*;

    fn document(value: Value) -> FlatDocument {
        FlatDocument::try_from(value).unwrap()
    }

    fn keys(document: &FlatDocument) -> Vec<&str> {
        document.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_diff_scenario() {
        let base = document(json!({"a": 1, "b": 2}));
        let target = document(json!({"b": 3, "c": 4}));

        let delta = diff(&base, &target);

        assert_eq!(
            serde_json::to_value(&delta).unwrap(),
            json!({
                "additions": [{"key": "c", "value": 4}],
                "deletions": ["a"],
                "updates": [{"key": "b", "from": 2, "to": 3}]
            })
        );
    }

    #[test]
    fn test_patch_scenario() {
        let base = document(json!({"a": 1, "b": 2}));
        let target = document(json!({"b": 3, "c": 4}));

        let patched = patch(&base, &diff(&base, &target));

        assert_eq!(patched, target);
        assert_eq!(keys(&patched), ["b", "c"]);
    }

    #[test]
    fn test_diff_of_identical_documents_is_empty() {
        let base = document(json!({"a": [1, 2], "b": {"nested": true}}));

        assert!(diff(&base, &base).is_empty());
    }

    #[test]
    fn test_values_compared_whole() {
        let base = document(json!({"a": {"x": 1, "y": 2}}));
        let target = document(json!({"a": {"x": 1, "y": 3}}));

        let delta = diff(&base, &target);

        assert!(delta.additions.is_empty());
        assert!(delta.deletions.is_empty());
        assert_eq!(delta.updates.len(), 1);
        assert_eq!(delta.updates[0].from, json!({"x": 1, "y": 2}));
        assert_eq!(delta.updates[0].to, json!({"x": 1, "y": 3}));
    }

    #[test]
    fn test_sequence_orders() {
        let base = document(json!({"d2": 0, "u2": 0, "d1": 0, "u1": 0}));
        let target = document(json!({"a2": 0, "u1": 1, "a1": 0, "u2": 1}));

        let delta = diff(&base, &target);

        let additions: Vec<_> = delta.additions.iter().map(|a| a.key.as_str()).collect();
        let updates: Vec<_> = delta.updates.iter().map(|u| u.key.as_str()).collect();
        assert_eq!(additions, ["a2", "a1"]);
        assert_eq!(delta.deletions, ["d2", "d1"]);
        assert_eq!(updates, ["u2", "u1"]);
    }

    #[test]
    fn test_patch_tolerates_missing_deletion() {
        let base = document(json!({"a": 1}));
        let delta = Delta {
            deletions: vec!["zzz".to_string()],
            ..Delta::default()
        };

        assert_eq!(patch(&base, &delta), base);
    }

    #[test]
    fn test_patch_applies_updates_last() {
        let base = document(json!({"a": 1}));
        let delta = Delta {
            additions: vec![Addition {
                key: "a".to_string(),
                value: json!("added"),
            }],
            deletions: vec!["a".to_string()],
            updates: vec![Update {
                key: "a".to_string(),
                from: json!(1),
                to: json!("updated"),
            }],
        };

        let patched = patch(&base, &delta);

        assert_eq!(patched.get("a"), Some(&json!("updated")));
    }

    #[test]
    fn test_patch_does_not_touch_base() {
        let base = document(json!({"a": 1}));
        let delta = Delta {
            deletions: vec!["a".to_string()],
            ..Delta::default()
        };

        let patched = patch(&base, &delta);

        assert!(patched.is_empty());
        assert_eq!(base.len(), 1);
    }

    fn flat_document() -> impl Strategy<Value = FlatDocument> {
        let value = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            any::<i32>().prop_map(Value::from),
            "[a-z]{0,4}".prop_map(Value::from),
        ];
        prop::collection::vec(("[a-e]{1,2}", value), 0..8)
            .prop_map(|entries| entries.into_iter().collect())
    }

    fn check_patch_inverts_diff(
        base: FlatDocument,
        target: FlatDocument,
    ) -> Result<(), TestCaseError> {
        let delta = diff(&base, &target);
        let patched = patch(&base, &delta);

        // Equal as maps; key order may differ from the target.
        prop_assert_eq!(Value::from(patched), Value::from(target));
        Ok(())
    }

    fn check_each_key_in_one_sequence(
        base: FlatDocument,
        target: FlatDocument,
    ) -> Result<(), TestCaseError> {
        let delta = diff(&base, &target);

        let mut listed: Vec<&str> = delta.deletions.iter().map(String::as_str).collect();
        listed.extend(delta.additions.iter().map(|a| a.key.as_str()));
        listed.extend(delta.updates.iter().map(|u| u.key.as_str()));
        let total = listed.len();
        listed.sort_unstable();
        listed.dedup();
        prop_assert_eq!(listed.len(), total);

        for (key, value) in base.iter() {
            if target.get(key) == Some(value) {
                prop_assert!(!listed.contains(&key.as_str()));
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn patch_inverts_diff(base in flat_document(), target in flat_document()) {
            check_patch_inverts_diff(base, target)?;
        }

        #[test]
        fn each_key_in_one_sequence(base in flat_document(), target in flat_document()) {
            check_each_key_in_one_sequence(base, target)?;
        }
    }
}
