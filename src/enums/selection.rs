//! # Selection Module
//!
//! Result of `get` on an array or a frame: a single element, a column, or a
//! sub-frame, depending on the address.

use crate::enums::error::{DFResult, DFrameError};
use crate::enums::shape_dim::ShapeDim;
use crate::enums::value::Value;
use crate::structs::dataframe::DataFrame;
use crate::structs::typed_array::TypedArray;
use crate::traits::shape::Shape;

/// # Selection
///
/// What an address evaluated to.
///
/// ## Details
/// - `Scalar` for an integer key on an array, or an integer row with an
/// integer or name column on a frame.
/// - `Array` for a single column key on a frame, or any non-scalar key on an array.
/// - `Frame` for every other frame key.
/// - Includes borrowing accessors and consuming `into_*` conversions that
/// fail with `TypeError` instead of panicking.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Scalar(Value),
    Array(TypedArray),
    Frame(DataFrame),
}

impl Selection {
    #[inline]
    pub fn scalar(&self) -> Option<&Value> {
        match self {
            Selection::Scalar(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    pub fn array(&self) -> Option<&TypedArray> {
        match self {
            Selection::Array(a) => Some(a),
            _ => None,
        }
    }

    #[inline]
    pub fn frame(&self) -> Option<&DataFrame> {
        match self {
            Selection::Frame(f) => Some(f),
            _ => None,
        }
    }

    pub fn into_scalar(self) -> DFResult<Value> {
        match self {
            Selection::Scalar(v) => Ok(v),
            other => Err(other.type_error("Value")),
        }
    }

    pub fn into_array(self) -> DFResult<TypedArray> {
        match self {
            Selection::Array(a) => Ok(a),
            other => Err(other.type_error("TypedArray")),
        }
    }

    pub fn into_frame(self) -> DFResult<DataFrame> {
        match self {
            Selection::Frame(f) => Ok(f),
            other => Err(other.type_error("DataFrame")),
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Selection::Scalar(_) => "Selection::Scalar",
            Selection::Array(_) => "Selection::Array",
            Selection::Frame(_) => "Selection::Frame",
        }
    }

    fn type_error(&self, to: &'static str) -> DFrameError {
        DFrameError::TypeError {
            from: self.variant_name(),
            to,
            message: None,
        }
    }
}

impl Shape for Selection {
    fn shape(&self) -> ShapeDim {
        match self {
            Selection::Scalar(_) => ShapeDim::Rank0(1),
            Selection::Array(a) => a.shape(),
            Selection::Frame(f) => f.shape(),
        }
    }
}

impl From<Value> for Selection {
    fn from(v: Value) -> Self {
        Selection::Scalar(v)
    }
}

impl From<TypedArray> for Selection {
    fn from(v: TypedArray) -> Self {
        Selection::Array(v)
    }
}

impl From<DataFrame> for Selection {
    fn from(v: DataFrame) -> Self {
        Selection::Frame(v)
    }
}
