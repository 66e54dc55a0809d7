//! Walking nested `serde_json` structures by a path of keys and indices.

use indexmap::IndexMap;
use serde_json::{Map, Value};

/// One step of a `dig` path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object member lookup.
    Key(String),
    /// Array position; negative values count from the end.
    Index(isize),
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<isize> for Segment {
    fn from(index: isize) -> Self {
        Segment::Index(index)
    }
}

impl From<i32> for Segment {
    fn from(index: i32) -> Self {
        Segment::Index(index as isize)
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index as isize)
    }
}

/// Resolves a possibly negative index against a length.
pub(crate) fn resolve_index(index: isize, len: usize) -> Option<usize> {
    let resolved = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    (resolved < len).then_some(resolved)
}

fn step<'a>(value: &'a Value, segment: &Segment) -> Option<&'a Value> {
    match (value, segment) {
        (Value::Object(map), Segment::Key(key)) => map.get(key),
        (Value::Array(items), Segment::Index(index)) => {
            items.get(resolve_index(*index, items.len())?)
        }
        _ => None,
    }
}

fn walk<'a>(start: Option<&'a Value>, rest: &[Segment]) -> Option<&'a Value> {
    rest.iter().try_fold(start?, |current, segment| step(current, segment))
}

/// Extension trait for looking up values nested inside JSON-like structures.
///
/// The walk stops with `None` as soon as a step does not exist: a missing key, an index out of
/// bounds, or a segment of the wrong kind for the value it is applied to.
pub trait Dig {
    /// Follows `path` from `self`. An empty path yields `None` for containers.
    fn dig(&self, path: &[Segment]) -> Option<&Value>;
}

impl Dig for Value {
    fn dig(&self, path: &[Segment]) -> Option<&Value> {
        if path.is_empty() {
            return Some(self);
        }
        walk(Some(self), path)
    }
}

impl Dig for [Value] {
    fn dig(&self, path: &[Segment]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let start = match first {
            Segment::Index(index) => self.get(resolve_index(*index, self.len())?),
            Segment::Key(_) => None,
        };
        walk(start, rest)
    }
}

impl Dig for Map<String, Value> {
    fn dig(&self, path: &[Segment]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let start = match first {
            Segment::Key(key) => self.get(key),
            Segment::Index(_) => None,
        };
        walk(start, rest)
    }
}

impl Dig for IndexMap<String, Value> {
    fn dig(&self, path: &[Segment]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let start = match first {
            Segment::Key(key) => self.get(key),
            Segment::Index(_) => None,
        };
        walk(start, rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_index() {
        assert_eq!(resolve_index(0, 3), Some(0));
        assert_eq!(resolve_index(-1, 3), Some(2));
        assert_eq!(resolve_index(-3, 3), Some(0));
        assert_eq!(resolve_index(-4, 3), None);
        assert_eq!(resolve_index(3, 3), None);
        assert_eq!(resolve_index(0, 0), None);
    }

    #[test]
    fn test_dig_value_mixed_path() {
        let value = json!({"users": [{"name": "Ruby"}, {"name": "Dooby"}]});
        assert_eq!(
            value.dig(&["users".into(), 1.into(), "name".into()]),
            Some(&json!("Dooby"))
        );
        assert_eq!(
            value.dig(&["users".into(), (-2).into(), "name".into()]),
            Some(&json!("Ruby"))
        );
        assert_eq!(value.dig(&["users".into(), 5.into()]), None);
        assert_eq!(value.dig(&["users".into(), "name".into()]), None);
    }

    #[test]
    fn test_dig_short_circuits_through_scalars() {
        let value = json!({"a": 1});
        assert_eq!(value.dig(&["a".into(), "b".into(), "c".into()]), None);
    }

    #[test]
    fn test_dig_empty_path() {
        let value = json!([1]);
        assert_eq!(value.dig(&[]), Some(&value));
        let items = vec![json!(1)];
        assert_eq!(items.dig(&[]), None);
    }

    #[test]
    fn test_dig_map_types() {
        let mut map = IndexMap::new();
        map.insert("a".to_string(), json!({"b": [10, 20]}));
        assert_eq!(map.dig(&["a".into(), "b".into(), 1.into()]), Some(&json!(20)));
        assert_eq!(map.dig(&[0.into()]), None);

        let object = json!({"a": {"b": true}});
        let object = object.as_object().unwrap();
        assert_eq!(object.dig(&["a".into(), "b".into()]), Some(&json!(true)));
    }
}
