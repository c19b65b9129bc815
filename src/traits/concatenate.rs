//! # Concatenate Trait Module
//!
//! Provides uniform concatenation across dframe types.
//!
//! ## Overview
//! The `Concatenate` trait enables combining two instances of the same type:
//! - **Arrays**: TypedArray + TypedArray -> TypedArray (dtypes must agree, unknown adopts the other)
//! - **Frames**: DataFrame + DataFrame -> DataFrame (positional vertical stack)
//!
//! ## Consuming Semantics
//! **The `concat` method consumes both inputs.** The first buffer is reused
//! when it is not shared; clone first to keep an input.
//!
//! ## Example
//! ```rust
//! # use dframe::{Concatenate, TypedArray};
//! let a = TypedArray::new(vec![1, 2]).unwrap();
//! let b = TypedArray::new(vec![3]).unwrap();
//! let c = a.concat(b).unwrap();
//! assert_eq!(c.len(), 3);
//! ```

use crate::enums::error::DFResult;

/// Concatenate trait for combining two instances of the same type.
pub trait Concatenate {
    /// Concatenates `self` with `other`, **consuming both** and returning a new instance.
    ///
    /// # Errors
    /// - `DtypeConflict`: the arrays hold different dtypes.
    /// - `IncompatibleFrames`: the frames differ in column count or dtype sequence.
    fn concat(self, other: Self) -> DFResult<Self>
    where
        Self: Sized;
}
