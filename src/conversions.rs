//! # **Conversions** - *Dtype casts for TypedArray*
//!
//! - [`TypedArray::cast`] converts every non-missing element to a target dtype,
//! failing with `TypeError` on the first element that does not convert.
//! - [`TypedArray::to_best_dtype`] narrows a string column to the first of
//! int64, float64, datetime *(feature `datetime`)* and bool that fits every
//! element, leaving it unchanged when none does.
//!
//! ## Rules
//! - **Boolean**: numbers are `true` when non-zero; strings must be
//! `"True"` or `"False"`.
//! - **Int64**: booleans give `0`/`1`; floats truncate toward zero and must be
//! finite; strings are parsed after trimming whitespace.
//! - **Float64**: booleans give `0.0`/`1.0`; strings are parsed after trimming.
//! - **String**: the `Display` form of the value.
//! - **Datetime**: strings in `YYYY-MM-DD[ T]HH:MM:SS` or `YYYY-MM-DD` form.
//!
//! Missing elements stay missing under every cast.

use crate::enums::dtype::DType;
use crate::enums::error::{DFResult, DFrameError};
use crate::enums::value::Value;
use crate::structs::typed_array::TypedArray;

fn cast_value(v: &Value, to: DType) -> Option<Value> {
    if v.is_null() {
        return Some(Value::Null);
    }
    match to {
        DType::Null => None,
        DType::Boolean => match v {
            Value::Boolean(b) => Some(Value::Boolean(*b)),
            Value::Int64(i) => Some(Value::Boolean(*i != 0)),
            Value::Float64(f) => Some(Value::Boolean(*f != 0.0)),
            Value::String(s) => match s.trim() {
                "True" => Some(Value::Boolean(true)),
                "False" => Some(Value::Boolean(false)),
                _ => None,
            },
            _ => None,
        },
        DType::Int64 => match v {
            Value::Boolean(b) => Some(Value::Int64(i64::from(*b))),
            Value::Int64(i) => Some(Value::Int64(*i)),
            Value::Float64(f) => num_traits::cast::<f64, i64>(f.trunc()).map(Value::Int64),
            Value::String(s) => s.trim().parse::<i64>().ok().map(Value::Int64),
            _ => None,
        },
        DType::Float64 => match v {
            Value::Boolean(b) => Some(Value::Float64(if *b { 1.0 } else { 0.0 })),
            Value::Int64(i) => Some(Value::Float64(*i as f64)),
            Value::Float64(f) => Some(Value::Float64(*f)),
            Value::String(s) => s.trim().parse::<f64>().ok().map(Value::Float64),
            _ => None,
        },
        DType::String => Some(Value::String(v.to_string())),
        #[cfg(feature = "datetime")]
        DType::Datetime => match v {
            Value::Datetime(dt) => Some(Value::Datetime(*dt)),
            Value::String(s) => crate::utils::parse_datetime_str(s).map(Value::Datetime),
            _ => None,
        },
    }
}

impl TypedArray {
    /// Converts every non-missing element to `to`.
    ///
    /// # Errors
    /// `TypeError` naming the first element that cannot be converted.
    ///
    /// # Example
    /// ```rust
    /// use dframe::{DType, TypedArray, Value};
    ///
    /// let a = TypedArray::new(vec![Some("1"), None, Some(" 3")]).unwrap();
    /// let b = a.cast(DType::Int64).unwrap();
    /// assert_eq!(b.values(), &[Value::Int64(1), Value::Null, Value::Int64(3)]);
    /// ```
    pub fn cast(&self, to: DType) -> DFResult<TypedArray> {
        if self.dtype() == to {
            return Ok(self.clone());
        }
        let mut out = Vec::with_capacity(self.len());
        for (i, v) in self.iter().enumerate() {
            match cast_value(v, to) {
                Some(c) => out.push(c),
                None => {
                    return Err(DFrameError::TypeError {
                        from: self.dtype().name(),
                        to: to.name(),
                        message: Some(format!("cannot convert {v} at position {i}")),
                    });
                }
            }
        }
        TypedArray::new(out)
    }

    /// Narrowest dtype that every element of a string array converts to.
    ///
    /// Non-string arrays are returned as they are.
    pub fn to_best_dtype(&self) -> TypedArray {
        if self.dtype() != DType::String {
            return self.clone();
        }
        #[cfg(feature = "datetime")]
        let candidates = [DType::Int64, DType::Float64, DType::Datetime, DType::Boolean];
        #[cfg(not(feature = "datetime"))]
        let candidates = [DType::Int64, DType::Float64, DType::Boolean];

        candidates
            .into_iter()
            .find_map(|to| self.cast(to).ok())
            .unwrap_or_else(|| self.clone())
    }
}
