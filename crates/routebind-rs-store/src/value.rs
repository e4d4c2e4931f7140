//! Field value types for representing entity data in a store-agnostic way.
//!
//! The [`Value`] enum is the type used to carry entity field values between
//! stores and the binding layer. It covers the types that commonly identify a
//! record from a URL segment (strings, integers, UUIDs) plus the usual
//! payload types, and provides conversions from standard Rust types.

use std::fmt;

/// A store-agnostic representation of an entity field value.
///
/// # Examples
///
/// ```
/// use routebind_rs_store::value::Value;
///
/// let v = Value::from(42_i64);
/// assert_eq!(v, Value::Int(42));
///
/// let v = Value::from("acme");
/// assert_eq!(v, Value::String("acme".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    /// An absent value.
    Null,
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
    /// A date and time with UTC timezone.
    DateTime(chrono::DateTime<chrono::Utc>),
    /// A UUID value.
    Uuid(uuid::Uuid),
    /// A JSON value.
    Json(serde_json::Value),
    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Returns `true` if this value identifies the same record as the raw
    /// string captured from a URL segment.
    ///
    /// String values compare directly; integers, UUIDs, and booleans compare
    /// after parsing the raw segment. Payload-only types (`Json`, `List`,
    /// `DateTime`, `Float`, `Null`) never match a raw segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use routebind_rs_store::value::Value;
    ///
    /// assert!(Value::from("acme").matches_raw("acme"));
    /// assert!(Value::Int(42).matches_raw("42"));
    /// assert!(!Value::Int(42).matches_raw("forty-two"));
    /// ```
    pub fn matches_raw(&self, raw: &str) -> bool {
        match self {
            Self::String(s) => s == raw,
            Self::Int(i) => raw.parse::<i64>().is_ok_and(|parsed| parsed == *i),
            Self::Uuid(u) => raw.parse::<uuid::Uuid>().is_ok_and(|parsed| parsed == *u),
            Self::Bool(b) => raw.parse::<bool>().is_ok_and(|parsed| parsed == *b),
            Self::Null
            | Self::Float(_)
            | Self::DateTime(_)
            | Self::Json(_)
            | Self::List(_) => false,
        }
    }

    /// Returns the string form if this is a `String` value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the integer form if this is an `Int` value.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Uuid(u) => write!(f, "{u}"),
            Self::Json(j) => write!(f, "{j}"),
            Self::List(vals) => {
                write!(f, "[")?;
                for (i, v) in vals.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
        }
    }
}

// ── From implementations ───────────────────────────────────────────────

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<uuid::Uuid> for Value {
    fn from(v: uuid::Uuid) -> Self {
        Self::Uuid(v)
    }
}

impl From<chrono::DateTime<chrono::Utc>> for Value {
    fn from(v: chrono::DateTime<chrono::Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Json(v)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}
