//! # Payload Module
//!
//! Right-hand side of an assignment, and operand of an elementwise operator.
//!
//! A payload is either one scalar, broadcast over the addressed positions,
//! or a list. Nested lists carry per-column values when assigning to several
//! columns at once, e.g. `vec![vec![1, 2], vec![3, 4]]` for two columns of
//! two rows. A `&DataFrame` converts to the list of its columns.

use crate::enums::error::{DFResult, DFrameError};
use crate::enums::value::Value;
use crate::structs::dataframe::DataFrame;
use crate::structs::typed_array::TypedArray;

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Scalar(Value),
    List(Vec<Payload>),
}

impl Payload {
    #[inline]
    pub fn is_scalar(&self) -> bool {
        matches!(self, Payload::Scalar(_))
    }

    /// Flattens a list of scalars into values.
    ///
    /// A scalar payload is rejected, as is any nested list.
    pub fn into_values(self) -> DFResult<Vec<Value>> {
        match self {
            Payload::Scalar(v) => Err(DFrameError::InvalidAssignment(format!(
                "expected a sequence, found the scalar {v}"
            ))),
            Payload::List(items) => items
                .into_iter()
                .map(|p| match p {
                    Payload::Scalar(v) => Ok(v),
                    Payload::List(_) => Err(DFrameError::InvalidAssignment(
                        "a nested sequence cannot be stored as an element".into(),
                    )),
                })
                .collect(),
        }
    }

    /// Expands into exactly `n` values: a scalar is repeated, a list must have length `n`.
    pub(crate) fn broadcast(self, n: usize) -> DFResult<Vec<Value>> {
        match self {
            Payload::Scalar(v) => Ok(vec![v; n]),
            list => {
                let values = list.into_values()?;
                if values.len() != n {
                    return Err(DFrameError::LengthMismatch {
                        expected: n,
                        found: values.len(),
                    });
                }
                Ok(values)
            }
        }
    }
}

macro_rules! impl_payload_from_scalar {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Payload {
                #[inline]
                fn from(v: $t) -> Self {
                    Payload::Scalar(Value::from(v))
                }
            }
        )+
    };
}

impl_payload_from_scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, String, &str, &String, &Value);

#[cfg(feature = "datetime")]
impl_payload_from_scalar!(time::PrimitiveDateTime, time::Date);

impl From<Value> for Payload {
    #[inline]
    fn from(v: Value) -> Self {
        Payload::Scalar(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Payload {
    #[inline]
    fn from(v: Option<T>) -> Self {
        Payload::Scalar(Value::from(v))
    }
}

impl<T: Into<Payload>> From<Vec<T>> for Payload {
    fn from(v: Vec<T>) -> Self {
        Payload::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Payload>, const N: usize> From<[T; N]> for Payload {
    fn from(v: [T; N]) -> Self {
        Payload::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Payload>> From<&[T]> for Payload {
    fn from(v: &[T]) -> Self {
        Payload::List(v.iter().cloned().map(Into::into).collect())
    }
}

impl From<&TypedArray> for Payload {
    fn from(v: &TypedArray) -> Self {
        Payload::List(v.iter().cloned().map(Payload::Scalar).collect())
    }
}

impl From<TypedArray> for Payload {
    fn from(v: TypedArray) -> Self {
        Payload::from(&v)
    }
}

/// A frame becomes the list of its columns.
impl From<&DataFrame> for Payload {
    fn from(v: &DataFrame) -> Self {
        Payload::List(v.cols().iter().map(Payload::from).collect())
    }
}

impl From<DataFrame> for Payload {
    fn from(v: DataFrame) -> Self {
        Payload::from(&v)
    }
}

impl<V: Into<Value>> FromIterator<V> for Payload {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Payload::List(iter.into_iter().map(|v| Payload::Scalar(v.into())).collect())
    }
}
