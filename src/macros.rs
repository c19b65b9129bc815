//! # **Macros** - *Literal constructors*
//!
//! - [`values!`](crate::values) - `Vec<Value>` from mixed literals.
//! - [`arr!`](crate::arr) - `DFResult<TypedArray>` from literals.
//! - [`df!`](crate::df) - `DFResult<DataFrame>` from `name => column` pairs.
//!
//! Use `Value::Null` for a missing entry; a bare `None` has no type to infer.

/// Builds a `Vec<Value>`, converting each element with `Value::from`.
///
/// ```rust
/// use dframe::{values, Value};
///
/// let v = values![1, "a", 2.5, Value::Null];
/// assert_eq!(v[1], Value::from("a"));
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($x:expr),+ $(,)?) => {
        vec![$($crate::Value::from($x)),+]
    };
}

/// Builds a `TypedArray`, inferring the dtype. Evaluates to `DFResult<TypedArray>`.
///
/// ```rust
/// use dframe::{arr, DType};
///
/// let a = arr![1, 2, 3].unwrap();
/// assert_eq!(a.dtype(), DType::Int64);
/// assert!(arr![1, "x"].is_err());
/// ```
#[macro_export]
macro_rules! arr {
    ($($x:expr),* $(,)?) => {
        $crate::TypedArray::new($crate::values![$($x),*])
    };
}

/// Builds a `DataFrame` from `name => column` pairs. Evaluates to `DFResult<DataFrame>`.
///
/// A column is anything convertible into a `Payload`: a vector, an array, or
/// a scalar to broadcast.
///
/// ```rust
/// use dframe::df;
///
/// let frame = df! {
///     "a" => vec![1, 2, 3],
///     "b" => "k",
/// }
/// .unwrap();
/// assert_eq!(frame.n_rows(), 3);
/// ```
#[macro_export]
macro_rules! df {
    () => {
        $crate::DataFrame::from_named_columns(::std::vec::Vec::<(&str, $crate::Payload)>::new())
    };
    ($($name:expr => $col:expr),+ $(,)?) => {
        $crate::DataFrame::from_named_columns(vec![
            $(($name, $crate::Payload::from($col))),+
        ])
    };
}
