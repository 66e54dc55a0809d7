//! Extension traits for insertion-ordered maps.

use crate::ext::collection::Compact;
use indexmap::{Equivalent, IndexMap};
use serde_json::{Map, Value};
use std::fmt::Display;
use std::hash::Hash;

/// Extension trait for `IndexMap`.
///
/// `len`, `is_empty`, `keys`, `values`, `get` and `clear` are the map's own methods. Filtering
/// helpers return entry vectors in insertion order rather than new maps.
pub trait MapExt<K, V> {
    /// All `(key, value)` pairs in insertion order.
    fn entries(&self) -> Vec<(&K, &V)>;

    /// New map with every key passed through `f`.
    ///
    /// When two keys map to the same new key the later value wins and the entry keeps the
    /// position of the first one.
    fn transform_keys<K2, F>(&self, f: F) -> IndexMap<K2, V>
    where
        K2: Hash + Eq,
        V: Clone,
        F: FnMut(&K) -> K2;
    fn transform_values<V2, F>(&self, f: F) -> IndexMap<K, V2>
    where
        K: Clone,
        F: FnMut(&V) -> V2;
    /// Copy without the listed keys.
    fn except<Q>(&self, keys: &[&Q]) -> IndexMap<K, V>
    where
        K: Clone,
        V: Clone,
        Q: ?Sized + Hash + Equivalent<K>;
    /// Same keys and, for every key, equal values.
    fn eql(&self, other: &IndexMap<K, V>) -> bool
    where
        V: PartialEq;

    fn select<F>(&self, pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool;
    fn keep_if<F>(&self, pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool;
    fn reject<F>(&self, pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool;
    fn delete_if<F>(&self, pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool;
    fn any_matching<F>(&self, pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool;
    fn is_non_empty(&self) -> bool;

    fn fetch_values<Q>(&self, keys: &[&Q]) -> Vec<Option<&V>>
    where
        Q: ?Sized + Hash + Equivalent<K>;
    fn has_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>;
    fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq;
    /// The first key whose value equals `value`.
    fn key_for(&self, value: &V) -> Option<&K>
    where
        V: PartialEq;
    /// Rendering like `"{ a: 1, b: 2 }"`.
    fn to_s(&self) -> String
    where
        K: Display,
        V: Display;
}

impl<K: Hash + Eq, V> MapExt<K, V> for IndexMap<K, V> {
    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }

    fn transform_keys<K2, F>(&self, mut f: F) -> IndexMap<K2, V>
    where
        K2: Hash + Eq,
        V: Clone,
        F: FnMut(&K) -> K2,
    {
        self.iter().map(|(k, v)| (f(k), v.clone())).collect()
    }

    fn transform_values<V2, F>(&self, mut f: F) -> IndexMap<K, V2>
    where
        K: Clone,
        F: FnMut(&V) -> V2,
    {
        self.iter().map(|(k, v)| (k.clone(), f(v))).collect()
    }

    fn except<Q>(&self, keys: &[&Q]) -> IndexMap<K, V>
    where
        K: Clone,
        V: Clone,
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.iter()
            .filter(|(k, _)| !keys.iter().any(|key| Equivalent::equivalent(*key, *k)))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    fn eql(&self, other: &IndexMap<K, V>) -> bool
    where
        V: PartialEq,
    {
        if self.len() != other.len() {
            return false;
        }
        self.iter()
            .all(|(k, v)| other.get(k).is_some_and(|theirs| v == theirs))
    }

    fn select<F>(&self, mut pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().filter(|(k, v)| pred(k, v)).collect()
    }

    fn keep_if<F>(&self, pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.select(pred)
    }

    fn reject<F>(&self, mut pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().filter(|(k, v)| !pred(k, v)).collect()
    }

    fn delete_if<F>(&self, pred: F) -> Vec<(&K, &V)>
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.reject(pred)
    }

    fn any_matching<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&K, &V) -> bool,
    {
        self.iter().any(|(k, v)| pred(k, v))
    }

    fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }

    fn fetch_values<Q>(&self, keys: &[&Q]) -> Vec<Option<&V>>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        keys.iter().map(|key| self.get(*key)).collect()
    }

    fn has_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.contains_key(key)
    }

    fn has_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values().any(|v| v == value)
    }

    fn key_for(&self, value: &V) -> Option<&K>
    where
        V: PartialEq,
    {
        self.iter().find(|(_, v)| *v == value).map(|(k, _)| k)
    }

    fn to_s(&self) -> String
    where
        K: Display,
        V: Display,
    {
        let body = self
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{{ {body} }}")
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Compact for IndexMap<K, Option<V>> {
    type Output = IndexMap<K, V>;

    fn compact(&self) -> IndexMap<K, V> {
        self.iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.clone())))
            .collect()
    }
}

impl Compact for Map<String, Value> {
    type Output = Map<String, Value>;

    fn compact(&self) -> Map<String, Value> {
        self.iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IndexMap<String, i32> {
        IndexMap::from([
            ("a".to_string(), 1),
            ("b".to_string(), 2),
            ("c".to_string(), 3),
        ])
    }

    #[test]
    fn test_transform_keys_last_write_wins() {
        let map = sample();
        let folded = map.transform_keys(|k| if k == "c" { "a".to_string() } else { k.clone() });
        assert_eq!(folded.len(), 2);
        assert_eq!(folded.get_index(0), Some((&"a".to_string(), &3)));
        assert_eq!(folded.get_index(1), Some((&"b".to_string(), &2)));
    }

    #[test]
    fn test_transform_values_keeps_order() {
        let doubled = sample().transform_values(|v| v * 2);
        assert_eq!(doubled.values().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
    }

    #[test]
    fn test_except() {
        let map = sample();
        let rest = map.except(&["a", "z"]);
        assert_eq!(rest.keys().cloned().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_eql() {
        let map = sample();
        let mut reordered = IndexMap::new();
        reordered.insert("c".to_string(), 3);
        reordered.insert("a".to_string(), 1);
        reordered.insert("b".to_string(), 2);
        assert!(map.eql(&reordered));

        reordered.insert("b".to_string(), 5);
        assert!(!map.eql(&reordered));

        let mut shorter = sample();
        shorter.shift_remove("c");
        assert!(!map.eql(&shorter));
    }

    #[test]
    fn test_filters_return_entries() {
        let map = sample();
        let odd = map.select(|_, v| v % 2 == 1);
        assert_eq!(odd, vec![(&"a".to_string(), &1), (&"c".to_string(), &3)]);
        assert_eq!(map.keep_if(|_, v| v % 2 == 1), odd);
        assert_eq!(map.reject(|_, v| v % 2 == 1), vec![(&"b".to_string(), &2)]);
        assert_eq!(map.delete_if(|_, v| v % 2 == 1), map.reject(|_, v| v % 2 == 1));
    }

    #[test]
    fn test_lookups() {
        let map = sample();
        assert!(map.has_key("b"));
        assert!(!map.has_key("z"));
        assert!(map.has_value(&3));
        assert_eq!(map.key_for(&2), Some(&"b".to_string()));
        assert_eq!(map.key_for(&9), None);
        assert_eq!(map.fetch_values(&["c", "z"]), vec![Some(&3), None]);
    }

    #[test]
    fn test_to_s() {
        assert_eq!(sample().to_s(), "{ a: 1, b: 2, c: 3 }");
    }

    #[test]
    fn test_compact() {
        let map = IndexMap::from([("a", Some(1)), ("b", None), ("c", Some(3))]);
        let compacted = map.compact();
        assert_eq!(compacted, IndexMap::from([("a", 1), ("c", 3)]));
        assert_eq!(map.len(), 3);
    }
}
