//! # **dframe** - *In-memory, column-oriented dataframe*
//!
//! A [`DataFrame`] is an ordered set of uniquely named [`TypedArray`] columns of
//! equal length. Each column holds [`Value`]s of one [`DType`] plus missing
//! entries, and is addressed with Python-style keys: positions (negative
//! from the end), slices, position lists, name lists, logical masks and
//! `(row, column)` pairs. See [`Address`].
//!
//! ```rust
//! use dframe::{df, hstack, Address, DataFrame, Value};
//!
//! let mut frame = df! { "a" => vec![1, 2, 3], "b" => vec!["x", "y", "z"] }.unwrap();
//! assert_eq!(frame.get((0, "a")).unwrap().into_scalar().unwrap(), Value::Int64(1));
//!
//! frame.set("a", vec![9, 9, 9]).unwrap();
//! frame.delete((Address::full(), "b")).unwrap();
//! assert_eq!(frame.col_names(), vec!["a"]);
//!
//! let extra = df! { "c" => vec![true, false, true] }.unwrap();
//! assert_eq!(hstack(&[frame, extra]).unwrap().n_cols(), 2);
//! ```
//!
//! ## Features
//! - `parallel_proc`: parallel column iteration and row gathering via `rayon`.
//! - `datetime`: the `Datetime` dtype, backed by `time::PrimitiveDateTime`.
//! - `fast_hash`: `ahash` for the name index, `unique` and `isin`.

pub mod enums {
    pub mod address;
    pub mod dtype;
    pub mod error;
    pub mod operators;
    pub mod payload;
    pub mod selection;
    pub mod shape_dim;
    pub mod value;
}

pub mod structs {
    pub mod dataframe;
    pub mod frame_indexing;
    pub mod typed_array;
}

pub mod traits {
    pub mod concatenate;
    pub mod selection;
    pub mod shape;
    pub mod sources;
}

pub mod kernels {
    pub mod elementwise;
    pub mod stack;
}

pub mod aliases;
pub mod conversions;
pub mod macros;
pub mod utils;

pub use aliases::Row;

pub use enums::address::{Address, ListKey, SliceSpec};
pub use enums::dtype::DType;
pub use enums::error::{DFResult, DFrameError};
pub use enums::operators::{ArithmeticOperator, ComparisonOperator, LogicalOperator, UnaryOperator};
pub use enums::payload::Payload;
pub use enums::selection::Selection;
pub use enums::shape_dim::ShapeDim;
pub use enums::value::Value;

pub use structs::dataframe::DataFrame;
pub use structs::typed_array::TypedArray;

pub use traits::concatenate::Concatenate;
pub use traits::selection::{ColumnSelection, RowSelection, Selection2D};
pub use traits::shape::Shape;
pub use traits::sources::{GridSource, RowSource, TabularSource};

pub use kernels::elementwise::{scalar_arithmetic, scalar_comparison, scalar_logical, scalar_unary};
pub use kernels::stack::{cbind, hstack, rbind, vstack};
