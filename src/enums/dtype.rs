//! # DType Module
//!
//! Logical element type of a [`crate::TypedArray`] column.
//!
//! `DType::Null` is the *unknown* dtype: it is carried by empty arrays and by
//! arrays whose elements are all missing, and is compatible with every other
//! dtype until a non-missing value arrives.

use std::fmt::{Display, Formatter};

use crate::enums::error::{DFResult, DFrameError};
use crate::enums::value::Value;

/// Element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DType {
    /// Unknown - no non-missing element has been seen.
    #[default]
    Null,
    Boolean,
    Int64,
    Float64,
    String,
    #[cfg(feature = "datetime")]
    Datetime,
}

impl DType {
    /// Infers the dtype of a run of values.
    ///
    /// Missing values are ignored. If no non-missing value exists the result is
    /// [`DType::Null`]; if two different dtypes appear, inference fails.
    pub fn infer<'a, I>(values: I) -> DFResult<DType>
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut found = DType::Null;
        for v in values {
            let dt = v.dtype();
            if dt == DType::Null {
                continue;
            }
            if found == DType::Null {
                found = dt;
            } else if found != dt {
                return Err(DFrameError::DtypeConflict {
                    first: found,
                    second: dt,
                });
            }
        }
        Ok(found)
    }

    /// Dtype of the first non-missing value, for runs already known to be homogeneous.
    pub(crate) fn first_of<'a, I>(values: I) -> DType
    where
        I: IntoIterator<Item = &'a Value>,
    {
        values
            .into_iter()
            .map(Value::dtype)
            .find(|dt| *dt != DType::Null)
            .unwrap_or(DType::Null)
    }

    /// `true` if a value of dtype `other` may live in a column of `self`.
    #[inline]
    pub fn accepts(&self, other: DType) -> bool {
        *self == DType::Null || other == DType::Null || *self == other
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, DType::Int64 | DType::Float64)
    }

    pub fn name(&self) -> &'static str {
        match self {
            DType::Null => "null",
            DType::Boolean => "bool",
            DType::Int64 => "int64",
            DType::Float64 => "float64",
            DType::String => "string",
            #[cfg(feature = "datetime")]
            DType::Datetime => "datetime",
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infer_ignores_missing() {
        let vals = vec![Value::Null, Value::Int64(1), Value::Null, Value::Int64(3)];
        assert_eq!(DType::infer(&vals).unwrap(), DType::Int64);
    }

    #[test]
    fn test_infer_all_missing_is_unknown() {
        let vals = vec![Value::Null, Value::Null];
        assert_eq!(DType::infer(&vals).unwrap(), DType::Null);
        assert_eq!(DType::infer(&Vec::<Value>::new()).unwrap(), DType::Null);
    }

    #[test]
    fn test_infer_conflict() {
        let vals = vec![Value::Int64(1), Value::String("a".into())];
        let err = DType::infer(&vals).unwrap_err();
        assert_eq!(
            err,
            DFrameError::DtypeConflict {
                first: DType::Int64,
                second: DType::String
            }
        );
    }

    #[test]
    fn test_int_and_float_conflict() {
        let vals = vec![Value::Int64(1), Value::Float64(1.5)];
        assert!(DType::infer(&vals).is_err());
    }

    #[test]
    fn test_accepts() {
        assert!(DType::Null.accepts(DType::String));
        assert!(DType::Int64.accepts(DType::Null));
        assert!(!DType::Int64.accepts(DType::Float64));
    }
}
