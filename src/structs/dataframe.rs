//! # **DataFrame Module** - *Named, column-oriented table of TypedArrays*
//!
//! Ordered collection of uniquely named [`TypedArray`] columns of equal
//! length, with a name-to-position index kept in step with the names.
//!
//! This module holds construction, introspection and the structural name
//! operations. Addressing (`get`, `set`, `delete`, `r`, `c`) lives in
//! [`crate::structs::frame_indexing`], and stacking in [`crate::kernels::stack`].

#[cfg(feature = "parallel_proc")]
use rayon::iter::{IntoParallelRefIterator, IntoParallelRefMutIterator};
use vec64::Vec64;

use crate::aliases::{HashMap, Row};
use crate::enums::dtype::DType;
use crate::enums::error::{DFResult, DFrameError};
use crate::enums::payload::Payload;
use crate::enums::shape_dim::ShapeDim;
use crate::enums::value::Value;
use crate::structs::typed_array::TypedArray;
use crate::traits::shape::Shape;
use crate::traits::sources::{GridSource, RowSource, TabularSource};
use crate::utils::{generic_names, validate_unique_names};

/// # DataFrame
///
/// # Description
/// - Ordered, uniquely named columns (`TypedArray`), all of one length.
/// - Columns may differ in dtype; each column is internally homogeneous.
/// - Every operation that can fail validates fully before mutating, so a
/// failed call leaves the frame exactly as it was.
///
/// # Structure
/// - `cols`: the columns, in order.
/// - `names`: one unique name per column.
/// - `index`: name to position, always consistent with `names`.
/// - `n_rows`: shared column length; `0` when there are no columns.
///
/// # Usage
/// - Build with `from_named_columns`, `from_rows`, `from_columns`,
/// `from_shape`, `from_grid`, `from_external_table` or `from_row_source`.
/// - Address with `get`, `set` and `delete`, or with the `c`/`r` selection traits.
/// - Combine with [`crate::hstack`], [`crate::vstack`] and [`crate::rbind`].
///
/// # Notes
/// - Column selections share buffers with the source frame; writes on either
/// side copy first, so neither observes the other's changes.
/// - Clones are cheap for the same reason.
///
/// # Example
/// ```rust
/// use dframe::{DataFrame, Value};
///
/// let mut df = DataFrame::from_named_columns(vec![
///     ("a", vec![1, 2, 3]),
///     ("b", vec![4, 5, 6]),
/// ]).unwrap();
/// df.set("c", 0).unwrap();
/// assert_eq!(df.names(), &["a", "b", "c"]);
/// assert_eq!(df.get((1, "b")).unwrap().into_scalar().unwrap(), Value::Int64(5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DataFrame {
    cols: Vec<TypedArray>,
    names: Vec<String>,
    index: HashMap<String, usize>,
    n_rows: usize,
}

fn build_index(names: &[String]) -> HashMap<String, usize> {
    names
        .iter()
        .enumerate()
        .map(|(i, n)| (n.clone(), i))
        .collect()
}

impl DataFrame {
    /// Constructs an empty frame: no columns, no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a frame from parts that are already known to be consistent.
    pub(crate) fn assemble(names: Vec<String>, cols: Vec<TypedArray>, n_rows: usize) -> Self {
        let index = build_index(&names);
        Self {
            cols,
            names,
            index,
            n_rows,
        }
    }

    /// Validated assembly: name count, unique names, equal column lengths.
    pub(crate) fn from_parts(names: Vec<String>, cols: Vec<TypedArray>) -> DFResult<Self> {
        if names.len() != cols.len() {
            return Err(DFrameError::NameCountMismatch {
                expected: cols.len(),
                found: names.len(),
            });
        }
        validate_unique_names(&names)?;
        let n_rows = cols.first().map_or(0, TypedArray::len);
        if let Some(bad) = cols.iter().find(|c| c.len() != n_rows) {
            return Err(DFrameError::RowCountMismatch {
                expected: n_rows,
                found: bad.len(),
            });
        }
        Ok(Self::assemble(names, cols, n_rows))
    }

    /// Builds a frame from ordered `(name, values)` pairs.
    ///
    /// Each value is a sequence or a scalar. All sequences must share one
    /// length; scalars are broadcast to it. With only scalars the frame has a
    /// single row. Names must be unique.
    pub fn from_named_columns<I, K, P>(items: I) -> DFResult<Self>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<Payload>,
    {
        let (names, payloads): (Vec<String>, Vec<Payload>) = items
            .into_iter()
            .map(|(k, p)| (k.into(), p.into()))
            .unzip();
        validate_unique_names(&names)?;

        let mut n_rows: Option<usize> = None;
        for p in &payloads {
            if let Payload::List(items) = p {
                match n_rows {
                    None => n_rows = Some(items.len()),
                    Some(n) if n != items.len() => {
                        return Err(DFrameError::RowCountMismatch {
                            expected: n,
                            found: items.len(),
                        });
                    }
                    Some(_) => {}
                }
            }
        }
        let n_rows = n_rows.unwrap_or(if payloads.is_empty() { 0 } else { 1 });

        let cols = payloads
            .into_iter()
            .map(|p| TypedArray::new(p.broadcast(n_rows)?))
            .collect::<DFResult<Vec<_>>>()?;
        Self::from_parts(names, cols)
    }

    /// Builds a frame from row-major data.
    ///
    /// Every row must have the same length. Names default to `C0, C1, ..`.
    pub fn from_rows<I, R, V>(rows: I, names: Option<Vec<String>>) -> DFResult<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let rows: Vec<Row> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let n_cols = rows.first().map_or(0, Vec::len);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n_cols) {
            return Err(DFrameError::RaggedRows {
                row,
                expected: n_cols,
                found: r.len(),
            });
        }
        let names = resolve_names(names, n_cols)?;

        let n_rows = rows.len();
        let mut columns: Vec<Vec64<Value>> =
            (0..n_cols).map(|_| Vec64::with_capacity(n_rows)).collect();
        for row in rows {
            for (j, v) in row.into_iter().enumerate() {
                columns[j].push(v);
            }
        }
        let cols = columns
            .into_iter()
            .map(TypedArray::from_vec64)
            .collect::<DFResult<Vec<_>>>()?;
        Self::from_parts(names, cols)
    }

    /// Builds a frame from column-major data.
    ///
    /// Every column must have the same length. Names default to `C0, C1, ..`.
    pub fn from_columns<I, C, V>(columns: I, names: Option<Vec<String>>) -> DFResult<Self>
    where
        I: IntoIterator<Item = C>,
        C: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let columns: Vec<Vec64<Value>> = columns
            .into_iter()
            .map(|c| c.into_iter().map(Into::into).collect())
            .collect();
        let names = resolve_names(names, columns.len())?;
        let n_rows = columns.first().map_or(0, |c| c.len());
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(DFrameError::RowCountMismatch {
                expected: n_rows,
                found: bad.len(),
            });
        }
        let cols = columns
            .into_iter()
            .map(TypedArray::from_vec64)
            .collect::<DFResult<Vec<_>>>()?;
        Self::from_parts(names, cols)
    }

    /// Builds a frame from existing arrays, sharing their buffers.
    pub fn from_arrays(arrays: Vec<TypedArray>, names: Option<Vec<String>>) -> DFResult<Self> {
        let names = resolve_names(names, arrays.len())?;
        Self::from_parts(names, arrays)
    }

    /// All-missing frame of `(n_rows, n_cols)`.
    pub fn from_shape(shape: (usize, usize), names: Option<Vec<String>>) -> DFResult<Self> {
        let (n_rows, n_cols) = shape;
        let names = resolve_names(names, n_cols)?;
        let col = TypedArray::nulls(n_rows);
        let cols = vec![col; n_cols];
        Self::from_parts(names, cols)
    }

    /// Builds a frame from a 2-D grid, reading float `NaN` cells as missing.
    pub fn from_grid<G: GridSource>(grid: &G, names: Option<Vec<String>>) -> DFResult<Self> {
        let (n_rows, n_cols) = grid.grid_shape();
        let names = resolve_names(names, n_cols)?;
        let mut cols = Vec::with_capacity(n_cols);
        for j in 0..n_cols {
            let mut data = Vec64::with_capacity(n_rows);
            for i in 0..n_rows {
                let cell = grid.cell(i, j).ok_or(DFrameError::RaggedRows {
                    row: i,
                    expected: n_cols,
                    found: j,
                })?;
                data.push(match cell {
                    Value::Float64(f) if f.is_nan() => Value::Null,
                    other => other,
                });
            }
            cols.push(TypedArray::from_vec64(data)?);
        }
        Self::from_parts(names, cols)
    }

    /// Builds a frame from another library's named columns.
    ///
    /// Duplicate names are rejected before any column is read.
    pub fn from_external_table<T: TabularSource>(table: &T) -> DFResult<Self> {
        let names = table.column_names();
        validate_unique_names(&names)?;
        let cols = (0..names.len())
            .map(|i| TypedArray::new(table.column(i)))
            .collect::<DFResult<Vec<_>>>()?;
        Self::from_parts(names, cols)
    }

    /// Builds a frame from a row source, using its header when present.
    ///
    /// With `infer_dtypes`, every string column is narrowed to the best
    /// fitting dtype (see [`TypedArray::to_best_dtype`]).
    pub fn from_row_source<S: RowSource>(source: &S, infer_dtypes: bool) -> DFResult<Self> {
        let mut df = Self::from_rows(source.rows(), source.header())?;
        if infer_dtypes {
            for col in df.cols.iter_mut() {
                *col = col.to_best_dtype();
            }
        }
        Ok(df)
    }

    /// Returns the number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.cols.len()
    }

    /// Returns the number of rows.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns true if the frame holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_cols() == 0 || self.n_rows == 0
    }

    /// Column names, in order.
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the list of column names.
    pub fn col_names(&self) -> Vec<&str> {
        self.names.iter().map(String::as_str).collect()
    }

    pub fn dtypes(&self) -> Vec<DType> {
        self.cols.iter().map(TypedArray::dtype).collect()
    }

    /// Returns the index of a column by name.
    #[inline]
    pub fn col_name_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Checks if a column with the given name exists.
    #[inline]
    pub fn has_col(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns all columns.
    #[inline]
    pub fn cols(&self) -> &[TypedArray] {
        &self.cols
    }

    /// Returns an iterator over the columns.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, TypedArray> {
        self.cols.iter()
    }

    /// `(name, column)` pairs, in order.
    pub fn items(&self) -> impl Iterator<Item = (&str, &TypedArray)> {
        self.names.iter().map(String::as_str).zip(self.cols.iter())
    }

    /// Independent copies of the columns.
    pub fn columns(&self) -> Vec<TypedArray> {
        self.cols.clone()
    }

    /// Row-major copy of the data.
    pub fn rows(&self) -> Vec<Row> {
        (0..self.n_rows)
            .map(|i| self.cols.iter().map(|c| c.values()[i].clone()).collect())
            .collect()
    }

    /// First `n` rows, or all of them if there are fewer.
    pub fn head(&self, n: usize) -> DataFrame {
        let positions: Vec<usize> = (0..n.min(self.n_rows)).collect();
        let cols = self.cols.iter().map(|c| c.gather(&positions)).collect();
        Self::assemble(self.names.clone(), cols, positions.len())
    }

    /// Same names in the same order, and pairwise equal columns.
    pub fn equals(&self, other: &DataFrame) -> bool {
        self.names == other.names
            && self.cols.len() == other.cols.len()
            && self.cols.iter().zip(&other.cols).all(|(a, b)| a.equals(b))
    }

    /// Replaces every name. The count must match and names must be unique.
    pub fn set_names(&mut self, names: Vec<String>) -> DFResult<()> {
        if names.len() != self.n_cols() {
            return Err(DFrameError::NameCountMismatch {
                expected: self.n_cols(),
                found: names.len(),
            });
        }
        validate_unique_names(&names)?;
        self.index = build_index(&names);
        self.names = names;
        Ok(())
    }

    /// Resets names to `C0, C1, ..`.
    pub fn reset_names(&mut self) {
        self.names = generic_names(self.n_cols());
        self.index = build_index(&self.names);
    }

    /// Renames columns from `(current, new)` pairs, all at once.
    ///
    /// Every current name must exist and the resulting names must be unique;
    /// otherwise nothing changes. Swaps such as `[("a", "b"), ("b", "a")]`
    /// are fine because uniqueness is checked on the final set.
    pub fn rename<I, K, V>(&mut self, mapping: I) -> DFResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut updated = self.names.clone();
        for (current, new) in mapping {
            let current = current.as_ref();
            let idx = self
                .col_name_index(current)
                .ok_or_else(|| DFrameError::ColumnNotFound(current.to_owned()))?;
            updated[idx] = new.into();
        }
        validate_unique_names(&updated)?;
        self.index = build_index(&updated);
        self.names = updated;
        Ok(())
    }

    /// Appends a new column.
    ///
    /// A scalar is broadcast to the row count; a sequence must match it. On a
    /// frame without columns, the new column sets the row count (a scalar
    /// gives one row).
    pub fn add_col(&mut self, name: impl Into<String>, payload: impl Into<Payload>) -> DFResult<()> {
        let name = name.into();
        if self.has_col(&name) {
            return Err(DFrameError::DuplicateColumnName(name));
        }
        let payload = payload.into();
        let col = if self.cols.is_empty() {
            match payload {
                Payload::Scalar(v) => TypedArray::new([v])?,
                list => TypedArray::new(list.into_values()?)?,
            }
        } else {
            self.column_from_payload(payload)?
        };
        self.n_rows = col.len();
        self.index.insert(name.clone(), self.cols.len());
        self.names.push(name);
        self.cols.push(col);
        self.check_invariants()
    }

    /// Builds a full-height column from a scalar or a row-count sequence.
    pub(crate) fn column_from_payload(&self, payload: Payload) -> DFResult<TypedArray> {
        match payload {
            Payload::Scalar(v) => TypedArray::new(vec![v; self.n_rows]),
            list => {
                let values = list.into_values()?;
                if values.len() != self.n_rows {
                    return Err(DFrameError::RowCountMismatch {
                        expected: self.n_rows,
                        found: values.len(),
                    });
                }
                TypedArray::new(values)
            }
        }
    }

    /// Column subset sharing buffers with `self`. Positions must be in range and distinct.
    pub(crate) fn select_cols(&self, positions: &[usize]) -> DataFrame {
        let names = positions.iter().map(|&i| self.names[i].clone()).collect();
        let cols = positions.iter().map(|&i| self.cols[i].clone()).collect();
        Self::assemble(names, cols, if positions.is_empty() { 0 } else { self.n_rows })
    }

    pub(crate) fn replace_col(&mut self, idx: usize, col: TypedArray) {
        self.cols[idx] = col;
    }

    /// Removes columns at in-range positions; duplicates are ignored.
    pub(crate) fn remove_cols(&mut self, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }
        let mut dropped = vec![false; self.n_cols()];
        for &p in positions {
            dropped[p] = true;
        }
        let (names, cols): (Vec<String>, Vec<TypedArray>) = std::mem::take(&mut self.names)
            .into_iter()
            .zip(std::mem::take(&mut self.cols))
            .zip(dropped)
            .filter(|(_, d)| !*d)
            .map(|(pair, _)| pair)
            .unzip();
        let n_rows = if cols.is_empty() { 0 } else { self.n_rows };
        *self = Self::assemble(names, cols, n_rows);
    }

    /// Removes rows at in-range positions from every column; duplicates are ignored.
    pub(crate) fn remove_rows(&mut self, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }
        let mut dropped = vec![false; self.n_rows];
        for &p in positions {
            dropped[p] = true;
        }
        let removed = dropped.iter().filter(|d| **d).count();
        for col in self.cols.iter_mut() {
            col.remove_positions(positions);
        }
        self.n_rows -= removed;
    }

    /// Verifies the structural invariants.
    ///
    /// A failure here is a bug in this crate, never a user error.
    pub fn check_invariants(&self) -> DFResult<()> {
        if self.names.len() != self.cols.len() {
            return Err(DFrameError::InternalInvariantViolation(format!(
                "{} names for {} columns",
                self.names.len(),
                self.cols.len()
            )));
        }
        if self.index.len() != self.names.len()
            || self
                .names
                .iter()
                .enumerate()
                .any(|(i, n)| self.index.get(n) != Some(&i))
        {
            return Err(DFrameError::InternalInvariantViolation(
                "name index out of step with names".into(),
            ));
        }
        if let Some(col) = self.cols.iter().position(|c| c.len() != self.n_rows) {
            return Err(DFrameError::InternalInvariantViolation(format!(
                "column {} has {} rows, frame has {}",
                col,
                self.cols[col].len(),
                self.n_rows
            )));
        }
        Ok(())
    }

    /// Returns a parallel iterator over the columns.
    #[cfg(feature = "parallel_proc")]
    #[inline]
    pub fn par_iter(&self) -> rayon::slice::Iter<'_, TypedArray> {
        self.cols.par_iter()
    }

    /// Returns a parallel mutable iterator over the columns.
    #[cfg(feature = "parallel_proc")]
    #[inline]
    pub fn par_iter_mut(&mut self) -> rayon::slice::IterMut<'_, TypedArray> {
        self.cols.par_iter_mut()
    }
}

/// Explicit names must match `n_cols`; absent names default to `C0, C1, ..`.
fn resolve_names(names: Option<Vec<String>>, n_cols: usize) -> DFResult<Vec<String>> {
    match names {
        Some(names) if names.len() != n_cols => Err(DFrameError::NameCountMismatch {
            expected: n_cols,
            found: names.len(),
        }),
        Some(names) => Ok(names),
        None => Ok(generic_names(n_cols)),
    }
}

impl PartialEq for DataFrame {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Shape for DataFrame {
    fn shape(&self) -> ShapeDim {
        ShapeDim::Rank2 {
            rows: self.n_rows(),
            cols: self.n_cols(),
        }
    }
}

impl IntoIterator for DataFrame {
    type Item = TypedArray;
    type IntoIter = <Vec<TypedArray> as IntoIterator>::IntoIter;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cols.into_iter()
    }
}

impl<'a> IntoIterator for &'a DataFrame {
    type Item = &'a TypedArray;
    type IntoIter = std::slice::Iter<'a, TypedArray>;
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cols.iter()
    }
}
