//! The value model shared by the encoder and the decoder.
//!
//! [`Value`] is a closed tagged union over the six JSON shapes. Objects keep
//! insertion order through [`IndexMap`], so a decoded document re-encodes
//! with its members in source order.

use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;
use std::ops::Index;
use std::str::FromStr;

use crate::error::SyntaxError;

/// Insertion-ordered object members.
pub type Map = IndexMap<String, Value>;

/// A JSON document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Non-finite numbers are representable but encode as `null`.
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
}

static NULL: Value = Value::Null;

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up an object member. Returns `None` for missing keys and for
    /// values that are not objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Short name of the variant, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

/// Builds an object from members that may be absent.
///
/// `None` members are dropped entirely rather than stored as `null`, the
/// way an unset field disappears from the wire. Empty strings are kept.
///
/// ```
/// use jsonkit_core::{encode, object_from_members, Value};
///
/// let config = object_from_members([
///     ("token", Some(Value::from("abc"))),
///     ("domain", None),
///     ("path", Some(Value::from(""))),
/// ]);
/// assert_eq!(encode(&config), r#"{"token":"abc","path":""}"#);
/// ```
pub fn object_from_members<K, I>(members: I) -> Value
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Option<Value>)>,
{
    Value::Object(
        members
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key.into(), v)))
            .collect(),
    )
}

// Indexing never panics: a missing member, an out-of-range element, or a
// shape mismatch all yield `Null`.

impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Self::Output {
        self.get(key).unwrap_or(&NULL)
    }
}

impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Self::Output {
        self.as_array()
            .and_then(|items| items.get(index))
            .unwrap_or(&NULL)
    }
}

impl FromStr for Value {
    type Err = SyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::encode(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

macro_rules! from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Value::Object(map)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// A type that can supply the [`Value`] it should be encoded as.
///
/// This is the explicit serialization hook: implement it for your own types
/// and pass them straight to [`encode`](crate::encode). Nested members are
/// converted by calling `to_json` on them while building the replacement.
///
/// ```
/// use std::borrow::Cow;
/// use jsonkit_core::{encode, object_from_members, Serializable, Value};
///
/// struct Session {
///     id: u32,
///     user: Option<String>,
/// }
///
/// impl Serializable for Session {
///     fn to_json(&self) -> Cow<'_, Value> {
///         Cow::Owned(object_from_members([
///             ("id", Some(Value::from(self.id))),
///             ("user", self.user.clone().map(Value::from)),
///         ]))
///     }
/// }
///
/// let anonymous = Session { id: 7, user: None };
/// assert_eq!(encode(&anonymous), r#"{"id":7}"#);
/// ```
pub trait Serializable {
    fn to_json(&self) -> Cow<'_, Value>;
}

impl Serializable for Value {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Borrowed(self)
    }
}

impl<T: Serializable + ?Sized> Serializable for &T {
    fn to_json(&self) -> Cow<'_, Value> {
        (**self).to_json()
    }
}

macro_rules! serializable_via_from {
    ($($ty:ty),*) => {
        $(
            impl Serializable for $ty {
                fn to_json(&self) -> Cow<'_, Value> {
                    Cow::Owned(Value::from(*self))
                }
            }
        )*
    };
}

serializable_via_from!(bool, f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Serializable for str {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::from(self))
    }
}

impl Serializable for String {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Owned(Value::String(self.clone()))
    }
}

impl<T: Serializable> Serializable for Option<T> {
    fn to_json(&self) -> Cow<'_, Value> {
        match self {
            Some(inner) => inner.to_json(),
            None => Cow::Owned(Value::Null),
        }
    }
}

impl<T: Serializable> Serializable for [T] {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Owned(self.iter().map(|item| item.to_json().into_owned()).collect())
    }
}

impl<T: Serializable> Serializable for Vec<T> {
    fn to_json(&self) -> Cow<'_, Value> {
        self.as_slice().to_json()
    }
}

impl<T: Serializable, S: BuildHasher> Serializable for IndexMap<String, T, S> {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Owned(members_to_object(self.iter()))
    }
}

impl<T: Serializable> Serializable for BTreeMap<String, T> {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Owned(members_to_object(self.iter()))
    }
}

impl<T: Serializable, S: BuildHasher> Serializable for HashMap<String, T, S> {
    fn to_json(&self) -> Cow<'_, Value> {
        Cow::Owned(members_to_object(self.iter()))
    }
}

fn members_to_object<'a, T, I>(members: I) -> Value
where
    T: Serializable + 'a,
    I: Iterator<Item = (&'a String, &'a T)>,
{
    Value::Object(
        members
            .map(|(key, value)| (key.clone(), value.to_json().into_owned()))
            .collect(),
    )
}

#[cfg(feature = "serde")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::{SerializeMap, SerializeSeq};

        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) if !n.is_finite() => serializer.serialize_unit(),
            // Whole numbers inside the exactly-representable range go out as integers.
            #[allow(clippy::cast_possible_truncation)]
            Value::Number(n) if n.fract() == 0.0 && n.abs() < 9_007_199_254_740_992.0 => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut ser = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    ser.serialize_entry(key, value)?;
                }
                ser.end()
            }
        }
    }
}
