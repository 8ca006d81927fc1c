//! Structured payload values attached to logged statements
//!
//! [`DataValue`] is deliberately wider than JSON: integers are 128-bit,
//! map keys may be any value, and [`DataValue::Other`] carries the display
//! text of types JSON cannot represent. The composer narrows it to
//! `serde_json::Value` during sanitization.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Null,
    Bool(bool),
    Int(i128),
    Float(f64),
    String(String),
    Seq(Vec<DataValue>),
    /// Ordered key/value pairs; keys are coerced to text on export
    Map(Vec<(DataValue, DataValue)>),
    /// Display text of a value with no JSON representation
    Other(String),
}

impl DataValue {
    /// Wrap any displayable value that has no JSON shape of its own
    ///
    /// ```
    /// use lifecycle_logging::DataValue;
    ///
    /// let value = DataValue::other(std::net::Ipv4Addr::LOCALHOST);
    /// assert_eq!(value, DataValue::Other("127.0.0.1".to_string()));
    /// ```
    pub fn other(value: impl fmt::Display) -> Self {
        DataValue::Other(value.to_string())
    }

    /// Start an empty ordered map
    pub fn map() -> Self {
        DataValue::Map(Vec::new())
    }

    /// Append an entry to a map value. Non-map values are returned unchanged.
    #[must_use]
    pub fn entry(mut self, key: impl Into<DataValue>, value: impl Into<DataValue>) -> Self {
        if let DataValue::Map(ref mut entries) = self {
            entries.push((key.into(), value.into()));
        }
        self
    }

    pub fn is_map(&self) -> bool {
        matches!(self, DataValue::Map(_))
    }

    /// Null, empty strings, empty sequences and empty maps carry nothing to
    /// export
    pub fn is_empty(&self) -> bool {
        match self {
            DataValue::Null => true,
            DataValue::String(s) => s.is_empty(),
            DataValue::Seq(items) => items.is_empty(),
            DataValue::Map(entries) => entries.is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => write!(f, "null"),
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(fl) => write!(f, "{}", fl),
            DataValue::String(s) | DataValue::Other(s) => write!(f, "{}", s),
            DataValue::Seq(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            DataValue::Map(entries) => {
                write!(f, "{{")?;
                for (idx, (key, value)) in entries.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for DataValue {
                fn from(i: $ty) -> Self {
                    DataValue::Int(i as i128)
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, usize);

impl From<u128> for DataValue {
    fn from(i: u128) -> Self {
        // Values beyond i128 are past the safe-integer limit anyway
        i128::try_from(i)
            .map(DataValue::Int)
            .unwrap_or_else(|_| DataValue::Other(i.to_string()))
    }
}

impl From<f32> for DataValue {
    fn from(f: f32) -> Self {
        DataValue::Float(f as f64)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DataValue::Null)
    }
}

impl<T: Into<DataValue>> From<Vec<T>> for DataValue {
    fn from(items: Vec<T>) -> Self {
        DataValue::Seq(items.into_iter().map(Into::into).collect())
    }
}

/// A pair exports as a two-element array
impl<A: Into<DataValue>, B: Into<DataValue>> From<(A, B)> for DataValue {
    fn from((first, second): (A, B)) -> Self {
        DataValue::Seq(vec![first.into(), second.into()])
    }
}

impl<K: Into<DataValue>, V: Into<DataValue>> From<BTreeMap<K, V>> for DataValue {
    fn from(map: BTreeMap<K, V>) -> Self {
        DataValue::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<DataValue>, V: Into<DataValue>, S> From<HashMap<K, V, S>> for DataValue {
    fn from(map: HashMap<K, V, S>) -> Self {
        DataValue::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<serde_json::Value> for DataValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => DataValue::Null,
            serde_json::Value::Bool(b) => DataValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    DataValue::Int(i as i128)
                } else if let Some(u) = n.as_u64() {
                    DataValue::Int(u as i128)
                } else {
                    n.as_f64()
                        .map(DataValue::Float)
                        .unwrap_or_else(|| DataValue::Other(n.to_string()))
                }
            }
            serde_json::Value::String(s) => DataValue::String(s),
            serde_json::Value::Array(items) => {
                DataValue::Seq(items.into_iter().map(DataValue::from).collect())
            }
            serde_json::Value::Object(map) => DataValue::Map(
                map.into_iter()
                    .map(|(k, v)| (DataValue::String(k), DataValue::from(v)))
                    .collect(),
            ),
        }
    }
}
