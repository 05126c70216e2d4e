use indexmap::IndexMap;
use std::fmt;

/// Dynamically-typed structured value: exactly one of scalar, mapping or sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Mapping(Mapping),
    Sequence(Vec<Value>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Scalar(scalar) => scalar.kind(),
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }
}

impl Scalar {
    pub fn kind(&self) -> &'static str {
        match self {
            Scalar::Text(_) => "text",
            Scalar::Integer(_) | Scalar::Unsigned(_) | Scalar::Float(_) => "number",
            Scalar::Bool(_) => "bool",
            Scalar::Null => "null",
        }
    }
}

/// Plain text form: no quoting anywhere.
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Unsigned(n) => write!(f, "{}", n),
            Scalar::Float(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Null => f.write_str("null"),
        }
    }
}

/// Plain text form used by tree rendering for leaves and sequence elements.
/// Nested containers fall back to their flat rendering.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Scalar(scalar) => fmt::Display::fmt(scalar, f),
            Value::Mapping(mapping) => f.write_str(&super::render::render_flat(mapping, None)),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// String-keyed mapping that remembers insertion order. Keys are unique; inserting
/// an existing key replaces the value in its original position.
///
/// Equality is order-sensitive, matching how the mapping renders in flat form.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: IndexMap<String, Value>,
}

impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
    }
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns the previous value when `key` was already present.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries ordered by key, byte-wise ascending.
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<(&str, &Value)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Mapping {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl From<Scalar> for Value {
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Scalar(Scalar::Null), Into::into)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Scalar(Scalar::Text(text.to_string()))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Scalar(Scalar::Text(text))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Scalar(Scalar::Float(n))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Scalar(Scalar::Float(f64::from(n)))
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Scalar(Scalar::Integer(i64::from(n)))
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Scalar(Scalar::Unsigned(u64::from(n)))
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64);
impl_from_unsigned!(u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Scalar(Scalar::Unsigned(n as u64))
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => {
                let scalar = if let Some(i) = n.as_i64() {
                    Scalar::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Scalar::Unsigned(u)
                } else {
                    Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
                };
                Value::Scalar(scalar)
            }
            serde_json::Value::String(s) => Value::Scalar(Scalar::Text(s)),
            serde_json::Value::Array(items) => {
                Value::Sequence(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Mapping(Mapping::from(map)),
        }
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Mapping {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter()
            .map(|(key, value)| (key, Value::from(value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut mapping = Mapping::new();
        assert!(mapping.insert("b", 1).is_none());
        mapping.insert("a", 2);
        let previous = mapping.insert("b", 3);
        assert_eq!(previous, Some(Value::from(1)));
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(mapping.get("b"), Some(&Value::from(3)));
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_large_json_object_converts_in_linear_time() {
        let map: serde_json::Map<String, serde_json::Value> = (0..200_000)
            .map(|i| (format!("key{i}"), json!(i)))
            .collect();

        let started = std::time::Instant::now();
        let value = Value::from(serde_json::Value::Object(map));
        let elapsed = started.elapsed();

        let mapping = value.as_mapping().unwrap();
        assert_eq!(mapping.len(), 200_000);
        assert_eq!(mapping.keys().next(), Some("key0"));
        assert_eq!(mapping.get("key199999"), Some(&Value::from(199_999)));
        assert!(elapsed.as_secs() < 10, "conversion took {elapsed:?}");
    }

    #[test]
    fn test_duplicate_keys_in_iterator_keep_last_value() {
        let mapping: Mapping = [("a", 1), ("b", 2), ("a", 3)].into_iter().collect();
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(mapping.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        assert_ne!(Mapping::from([("a", 1), ("b", 2)]), Mapping::from([("b", 2), ("a", 1)]));
        assert_eq!(Mapping::from([("a", 1), ("b", 2)]), Mapping::from([("a", 1), ("b", 2)]));
    }

    #[test]
    fn test_sorted_is_bytewise() {
        let mapping = Mapping::from([("beta", 1), ("Alpha", 2), ("alpha", 3)]);
        let keys: Vec<&str> = mapping.sorted().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Alpha", "alpha", "beta"]);
    }

    #[test]
    fn test_from_json_preserves_document_order() {
        let value = Value::from(json!({"zeta": 1, "alpha": [true, null, 2.5], "mid": "x"}));
        let mapping = value.as_mapping().unwrap();
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(
            mapping.get("alpha"),
            Some(&Value::Sequence(vec![
                Value::from(true),
                Value::Scalar(Scalar::Null),
                Value::from(2.5),
            ]))
        );
    }

    #[test]
    fn test_json_numbers() {
        assert_eq!(Value::from(json!(-7)), Value::Scalar(Scalar::Integer(-7)));
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Scalar(Scalar::Unsigned(u64::MAX))
        );
        assert_eq!(Value::from(json!(0.5)), Value::Scalar(Scalar::Float(0.5)));
    }

    #[test]
    fn test_display_is_unquoted() {
        assert_eq!(Value::from("John").to_string(), "John");
        assert_eq!(Value::from(30).to_string(), "30");
        assert_eq!(Value::from(95.0).to_string(), "95");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(None::<i32>).to_string(), "null");
        assert_eq!(Value::from(vec!["a", "b"]).to_string(), "[a, b]");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from("x").kind(), "text");
        assert_eq!(Value::from(1u8).kind(), "number");
        assert_eq!(Value::from(Mapping::new()).kind(), "mapping");
        assert_eq!(Value::from(Vec::<Value>::new()).kind(), "sequence");
    }
}
