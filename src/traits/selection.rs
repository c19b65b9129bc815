//! # **Selection Traits** - *Selection across dimensions*
//!
//! Traits for column and row selection on two-dimensional types.
//!
//! ## Architecture
//! - **ColumnSelection**: select columns by position, name, slice, list or mask
//! - **RowSelection**: select rows by position, slice, list or mask
//! - **Selection2D**: combined 2D selection
//!
//! Any key convertible into an [`Address`] is accepted. A pair address on a
//! frame is evaluated as `r(row)` followed by a column selection on the result.

use crate::enums::address::Address;
use crate::enums::error::DFResult;

/// Trait for types that support column selection
pub trait ColumnSelection {
    /// The type returned by column selection
    type View;
    /// The type of a single column
    type ColView;

    /// Select columns by name, position, slice, list or mask
    ///
    /// Always returns the multi-column view, even for a single key.
    ///
    /// # Examples
    /// ```text
    /// df.c("age")            // single column by name
    /// df.c(vec!["a", "b"])   // multiple columns by name
    /// df.c(0)                // single column by position
    /// df.c(0..3)             // columns by range
    /// ```
    fn c(&self, selection: impl Into<Address>) -> DFResult<Self::View>;

    /// Single column by name
    fn col(&self, name: &str) -> DFResult<Self::ColView>;

    /// Single column by position
    fn col_ix(&self, idx: usize) -> Option<Self::ColView>;

    /// All columns
    fn col_vec(&self) -> Vec<Self::ColView>;
}

/// Trait for types that support row selection
pub trait RowSelection {
    /// The type returned by row selection
    type View;

    /// Select rows by position, slice, list or mask
    ///
    /// # Examples
    /// ```text
    /// df.r(5)                     // single row, still a frame
    /// df.r(vec![1, 3, 5])         // specific rows
    /// df.r(0..10)                 // row range
    /// df.r(vec![true, false])     // logical mask
    /// ```
    fn r(&self, selection: impl Into<Address>) -> DFResult<Self::View>;

    /// Get the count for row resolution
    fn get_row_count(&self) -> usize;
}

/// Combined trait for 2D selection (column + row dimensions)
///
/// Automatically implemented for any type that implements both
/// `ColumnSelection` and `RowSelection` with the same `View` type.
pub trait Selection2D: ColumnSelection + RowSelection {}

impl<T> Selection2D for T where T: ColumnSelection + RowSelection<View = <T as ColumnSelection>::View>
{}
