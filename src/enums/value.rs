//! # Value Module - *Single Cell Container*
//!
//! Contains the `Value` type for holding one element of a column.
//!
//! ## Purpose
//! - Supports boolean, integer, float, string, optional datetime, and the
//! universal missing marker `Value::Null`.
//! - Every column stores its elements as `Value`s; the column's `DType`
//! guarantees that all non-missing elements share one variant.

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "datetime")]
use time::PrimitiveDateTime;

use crate::enums::dtype::DType;

/// # Value
///
/// A single element, or the missing marker.
///
/// ## Description
/// - `Null` is the one missing marker for every dtype. Float `NaN` is *not*
/// missing once inside an array; translate it at ingestion if required.
/// - Includes accessor methods to avoid needing to match on a known type.
/// - The `try_<type>` methods return `None` instead of panicking.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Boolean(bool),
    Int64(i64),
    Float64(f64),
    String(String),
    #[cfg(feature = "datetime")]
    Datetime(PrimitiveDateTime),
}

impl Value {
    /// Dtype of this value; `DType::Null` for the missing marker.
    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            Value::Null => DType::Null,
            Value::Boolean(_) => DType::Boolean,
            Value::Int64(_) => DType::Int64,
            Value::Float64(_) => DType::Float64,
            Value::String(_) => DType::String,
            #[cfg(feature = "datetime")]
            Value::Datetime(_) => DType::Datetime,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean payload.
    ///
    /// # Panics
    /// - If the value is not `Boolean`. Consider `try_bool`.
    #[inline]
    pub fn bool(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            other => panic!("Value::bool called on {}", other.dtype()),
        }
    }

    /// Returns the integer payload.
    ///
    /// # Panics
    /// - If the value is not `Int64`. Consider `try_i64`.
    #[inline]
    pub fn i64(&self) -> i64 {
        match self {
            Value::Int64(v) => *v,
            other => panic!("Value::i64 called on {}", other.dtype()),
        }
    }

    /// Returns the value as `f64`, widening integers.
    ///
    /// # Panics
    /// - If the value is not numeric. Consider `try_f64`.
    #[inline]
    pub fn f64(&self) -> f64 {
        match self.try_f64() {
            Some(v) => v,
            None => panic!("Value::f64 called on {}", self.dtype()),
        }
    }

    /// Returns the string payload.
    ///
    /// # Panics
    /// - If the value is not `String`. Consider `try_str`.
    #[inline]
    pub fn str(&self) -> &str {
        match self {
            Value::String(s) => s,
            other => panic!("Value::str called on {}", other.dtype()),
        }
    }

    #[inline]
    pub fn try_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn try_i64(&self) -> Option<i64> {
        match self {
            Value::Int64(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn try_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            _ => None,
        }
    }

    #[inline]
    pub fn try_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    #[cfg(feature = "datetime")]
    #[inline]
    pub fn try_datetime(&self) -> Option<PrimitiveDateTime> {
        match self {
            Value::Datetime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Truthiness of a non-missing value: `false`, `0`, `0.0` and `""` are false.
    pub(crate) fn is_truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Int64(v) => *v != 0,
            Value::Float64(v) => *v != 0.0,
            Value::String(s) => !s.is_empty(),
            #[cfg(feature = "datetime")]
            Value::Datetime(_) => true,
        }
    }

    /// Equality that treats `Int64` and `Float64` as one numeric domain.
    ///
    /// Used by elementwise `eq`/`ne` and by `isin`. Two missing markers match.
    pub fn loose_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Int64(a), Value::Float64(b)) => (*a as f64) == *b,
            (Value::Float64(a), Value::Int64(b)) => *a == (*b as f64),
            _ => self == other,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Int64(v) => write!(f, "{v}"),
            Value::Float64(v) => write!(f, "{v}"),
            Value::String(s) => write!(f, "{s}"),
            #[cfg(feature = "datetime")]
            Value::Datetime(dt) => write!(f, "{dt}"),
        }
    }
}

/// Hashable identity of a value, used by `unique` and `isin`.
///
/// Floats hash by bit pattern with `-0.0` folded onto `0.0`, so every `NaN`
/// with the same payload collapses to one key.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValueKey<'a>(pub(crate) &'a Value);

impl ValueKey<'_> {
    fn float_bits(v: f64) -> u64 {
        if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() }
    }
}

impl PartialEq for ValueKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (Value::Float64(a), Value::Float64(b)) => Self::float_bits(*a) == Self::float_bits(*b),
            (a, b) => a == b,
        }
    }
}

impl Eq for ValueKey<'_> {}

impl Hash for ValueKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self.0).hash(state);
        match self.0 {
            Value::Null => {}
            Value::Boolean(b) => b.hash(state),
            Value::Int64(v) => v.hash(state),
            Value::Float64(v) => Self::float_bits(*v).hash(state),
            Value::String(s) => s.hash(state),
            #[cfg(feature = "datetime")]
            Value::Datetime(dt) => dt.hash(state),
        }
    }
}

macro_rules! impl_value_from {
    ($variant:ident: $($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                #[inline] fn from(v: $t) -> Self { Value::$variant(v.into()) }
            }
        )+
    };
}

impl_value_from!(Boolean: bool);
impl_value_from!(Int64: i8, i16, i32, i64, u8, u16, u32);
impl_value_from!(Float64: f32, f64);
impl_value_from!(String: String, &str, &String);

macro_rules! impl_value_from_wide_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Value {
                /// Saturates at `i64::MAX`.
                #[inline] fn from(v: $t) -> Self { Value::Int64(i64::try_from(v).unwrap_or(i64::MAX)) }
            }
        )+
    };
}

impl_value_from_wide_int!(u64, usize, isize);

#[cfg(feature = "datetime")]
impl From<PrimitiveDateTime> for Value {
    #[inline]
    fn from(v: PrimitiveDateTime) -> Self {
        Value::Datetime(v)
    }
}

#[cfg(feature = "datetime")]
impl From<time::Date> for Value {
    #[inline]
    fn from(v: time::Date) -> Self {
        Value::Datetime(v.midnight())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<&Value> for Value {
    #[inline]
    fn from(v: &Value) -> Self {
        v.clone()
    }
}
