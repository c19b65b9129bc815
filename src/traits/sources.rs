//! # **Source Traits** - *Collaborator interfaces for frame construction*
//!
//! The frame does not parse files or talk to other libraries. Anything that
//! can present itself as rows, as a 2-D grid, or as named columns can be
//! turned into a [`crate::DataFrame`] through these traits:
//!
//! - [`RowSource`] -> [`crate::DataFrame::from_row_source`]
//! - [`GridSource`] -> [`crate::DataFrame::from_grid`]
//! - [`TabularSource`] -> [`crate::DataFrame::from_external_table`]

use crate::aliases::Row;
use crate::enums::value::Value;

/// Finite, restartable sequence of rows with an optional header.
///
/// A CSV reader, a database cursor snapshot, or an in-memory record list.
pub trait RowSource {
    /// Column names, if the source carries them.
    fn header(&self) -> Option<Vec<String>>;

    /// Every row, in order. Calling again restarts from the first row.
    fn rows(&self) -> impl Iterator<Item = Row> + '_;
}

/// Rectangular grid of cells, e.g. a numeric matrix.
///
/// Float `NaN` cells are read as missing by `DataFrame::from_grid`.
pub trait GridSource {
    /// `(rows, columns)`
    fn grid_shape(&self) -> (usize, usize);

    /// Cell at `(row, col)`, or `None` if the grid is ragged there.
    fn cell(&self, row: usize, col: usize) -> Option<Value>;
}

/// Ordered, named columns from another tabular library.
pub trait TabularSource {
    fn column_names(&self) -> Vec<String>;

    /// Values of the column at `idx`, `0 <= idx < column_names().len()`.
    fn column(&self, idx: usize) -> Vec<Value>;
}

impl RowSource for Vec<Row> {
    fn header(&self) -> Option<Vec<String>> {
        None
    }

    fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.iter().cloned()
    }
}

impl<T: Clone + Into<Value>> GridSource for Vec<Vec<T>> {
    fn grid_shape(&self) -> (usize, usize) {
        (self.len(), self.first().map_or(0, Vec::len))
    }

    fn cell(&self, row: usize, col: usize) -> Option<Value> {
        self.get(row)?.get(col).cloned().map(Into::into)
    }
}

impl TabularSource for Vec<(String, Vec<Value>)> {
    fn column_names(&self) -> Vec<String> {
        self.iter().map(|(name, _)| name.clone()).collect()
    }

    fn column(&self, idx: usize) -> Vec<Value> {
        self.get(idx).map(|(_, values)| values.clone()).unwrap_or_default()
    }
}
