//! # **Frame Indexing** - *get / set / delete over a DataFrame*
//!
//! One-dimensional keys address columns. A `(row, col)` pair is evaluated in
//! two stages: rows are selected from every column first (`r`), then the
//! column key is applied to that intermediate frame (`c`). The order decides
//! which error surfaces first for a malformed pair, so it is fixed.
//!
//! Every mutation is staged on copies and committed only after the whole
//! operation has validated.

#[cfg(feature = "parallel_proc")]
use rayon::prelude::*;

use crate::enums::address::{Address, ListKey, mask_positions, resolve_positions};
use crate::enums::error::{DFResult, DFrameError};
use crate::enums::payload::Payload;
use crate::enums::selection::Selection;
use crate::enums::value::Value;
use crate::structs::dataframe::DataFrame;
use crate::structs::typed_array::TypedArray;
use crate::traits::selection::{ColumnSelection, RowSelection};
use crate::utils::{first_repeated_position, normalise_index};

/// Resolved column key.
#[derive(Debug, Clone, PartialEq)]
enum ColumnKey {
    /// Integer or name: addresses the column itself.
    One(usize),
    /// Slice, list or mask: addresses a sub-frame.
    Many(Vec<usize>),
}

impl ColumnKey {
    fn into_positions(self) -> Vec<usize> {
        match self {
            ColumnKey::One(i) => vec![i],
            ColumnKey::Many(v) => v,
        }
    }
}

impl DataFrame {
    fn resolve_columns(&self, addr: &Address) -> DFResult<ColumnKey> {
        let n = self.n_cols();
        match addr {
            Address::Float(_) => Err(DFrameError::InvalidAddressType(
                "float column keys are not supported, cast to an integer".into(),
            )),
            Address::Bool(_) => Err(DFrameError::AmbiguousLogicalIndex(
                "a boolean scalar is not a column key, provide a full-length mask".into(),
            )),
            Address::Int(i) => Ok(ColumnKey::One(normalise_index(*i, n)?)),
            Address::Name(name) => self
                .col_name_index(name)
                .map(ColumnKey::One)
                .ok_or_else(|| DFrameError::ColumnNotFound(name.clone())),
            Address::Slice(s) => Ok(ColumnKey::Many(s.indices(n)?)),
            Address::List(items) => {
                let positions = match Address::classify_list(items)? {
                    ListKey::Positions(ps) => ps
                        .into_iter()
                        .map(|p| normalise_index(p, n))
                        .collect::<DFResult<Vec<_>>>()?,
                    ListKey::Names(names) => names
                        .iter()
                        .map(|name| {
                            self.col_name_index(name)
                                .ok_or_else(|| DFrameError::ColumnNotFound(name.clone()))
                        })
                        .collect::<DFResult<Vec<_>>>()?,
                    ListKey::Mask(mask) => mask_positions(&mask, n)?,
                };
                if let Some(dup) = first_repeated_position(&positions) {
                    return Err(DFrameError::DuplicateColumnSelection(self.names()[dup].clone()));
                }
                Ok(ColumnKey::Many(positions))
            }
            Address::Pair(_, _) => Err(DFrameError::InvalidAddress(
                "pairs cannot be nested inside a column key".into(),
            )),
        }
    }

    /// Reads by address.
    ///
    /// - Integer or name: the column itself, as `Selection::Array`.
    /// - Slice, list or mask: the selected columns, as `Selection::Frame`.
    /// - `(row, col)`: rows first, then columns. Two integer keys, or an integer
    /// row and a name, unbox to `Selection::Scalar`.
    ///
    /// # Example
    /// ```rust
    /// use dframe::{DataFrame, Value};
    ///
    /// let df = DataFrame::from_named_columns(vec![("a", vec![1, 2, 3])]).unwrap();
    /// assert_eq!(df.get((0, "a")).unwrap().into_scalar().unwrap(), Value::Int64(1));
    /// assert_eq!(df.get((0..2, "a")).unwrap().into_array().unwrap().len(), 2);
    /// ```
    pub fn get(&self, addr: impl Into<Address>) -> DFResult<Selection> {
        match addr.into() {
            Address::Pair(row, col) => self.get_pair(&row, &col),
            other => self.get_columns(&other),
        }
    }

    fn get_columns(&self, addr: &Address) -> DFResult<Selection> {
        Ok(match self.resolve_columns(addr)? {
            ColumnKey::One(i) => Selection::Array(self.cols()[i].clone()),
            ColumnKey::Many(positions) => Selection::Frame(self.select_cols(&positions)),
        })
    }

    fn get_pair(&self, row: &Address, col: &Address) -> DFResult<Selection> {
        let rows = self.r(row)?;
        let picked = rows.get_columns(col)?;
        let unbox = matches!(row, Address::Int(_)) && matches!(col, Address::Int(_) | Address::Name(_));
        match picked {
            Selection::Array(a) if unbox => {
                Ok(Selection::Scalar(a.values().first().cloned().unwrap_or(Value::Null)))
            }
            other => Ok(other),
        }
    }

    /// Writes by address.
    ///
    /// - Integer or existing name: replaces that column with a broadcast
    /// scalar or a row-count sequence.
    /// - New name: appends a column.
    /// - Slice, list or mask: a scalar goes to every selected column; a
    /// sequence must hold one value per selected column.
    /// - `(row, col)`: delegates to each selected column's `set(row, ..)`.
    ///
    /// Nothing changes unless every column write succeeds.
    pub fn set(&mut self, addr: impl Into<Address>, payload: impl Into<Payload>) -> DFResult<()> {
        let addr = addr.into();
        let payload = payload.into();
        match addr {
            Address::Name(name) if !self.has_col(&name) => self.add_col(name, payload),
            Address::Pair(row, col) => self.set_pair(&row, &col, payload),
            other => match self.resolve_columns(&other)? {
                ColumnKey::One(i) => {
                    let col = self.column_from_payload(payload)?;
                    self.replace_col(i, col);
                    self.check_invariants()
                }
                ColumnKey::Many(positions) => self.set_columns(&positions, payload),
            },
        }
    }

    fn set_columns(&mut self, positions: &[usize], payload: Payload) -> DFResult<()> {
        let staged: Vec<TypedArray> = match payload {
            Payload::Scalar(v) => positions
                .iter()
                .map(|_| self.column_from_payload(Payload::Scalar(v.clone())))
                .collect::<DFResult<_>>()?,
            Payload::List(items) => {
                if items.len() != positions.len() {
                    return Err(DFrameError::LengthMismatch {
                        expected: positions.len(),
                        found: items.len(),
                    });
                }
                items
                    .into_iter()
                    .map(|p| self.column_from_payload(p))
                    .collect::<DFResult<_>>()?
            }
        };
        for (&i, col) in positions.iter().zip(staged) {
            self.replace_col(i, col);
        }
        self.check_invariants()
    }

    fn set_pair(&mut self, row: &Address, col: &Address, payload: Payload) -> DFResult<()> {
        resolve_positions(row, self.n_rows())?;
        let mut staged: Vec<(usize, TypedArray)> = Vec::new();
        match self.resolve_columns(col)? {
            ColumnKey::One(i) => {
                let mut c = self.cols()[i].clone();
                c.set(row, payload)?;
                staged.push((i, c));
            }
            ColumnKey::Many(positions) => match payload {
                Payload::Scalar(v) => {
                    for &i in &positions {
                        let mut c = self.cols()[i].clone();
                        c.set(row, v.clone())?;
                        staged.push((i, c));
                    }
                }
                Payload::List(items) => {
                    if items.len() != positions.len() {
                        return Err(DFrameError::LengthMismatch {
                            expected: positions.len(),
                            found: items.len(),
                        });
                    }
                    for (&i, item) in positions.iter().zip(items) {
                        let mut c = self.cols()[i].clone();
                        c.set(row, item)?;
                        staged.push((i, c));
                    }
                }
            },
        }
        for (i, c) in staged {
            self.replace_col(i, c);
        }
        self.check_invariants()
    }

    /// Deletes by address.
    ///
    /// - Integer, name, slice, list or mask: removes those columns.
    /// - `(row, :)`: removes those rows from every column.
    /// - `(:, col)`: removes those columns.
    /// - Any other pair is `AmbiguousDeletion`.
    ///
    /// Every key is resolved before anything is removed.
    pub fn delete(&mut self, addr: impl Into<Address>) -> DFResult<()> {
        match addr.into() {
            Address::Pair(row, col) => {
                if col.is_full_slice() {
                    let (positions, _) = resolve_positions(&row, self.n_rows())?;
                    self.remove_rows(&positions);
                } else if row.is_full_slice() {
                    let positions = self.resolve_columns(&col)?.into_positions();
                    self.remove_cols(&positions);
                } else {
                    return Err(DFrameError::AmbiguousDeletion);
                }
            }
            other => {
                let positions = self.resolve_columns(&other)?.into_positions();
                self.remove_cols(&positions);
            }
        }
        self.check_invariants()
    }
}

impl ColumnSelection for DataFrame {
    type View = DataFrame;
    type ColView = TypedArray;

    fn c(&self, selection: impl Into<Address>) -> DFResult<DataFrame> {
        let positions = self.resolve_columns(&selection.into())?.into_positions();
        Ok(self.select_cols(&positions))
    }

    fn col(&self, name: &str) -> DFResult<TypedArray> {
        self.col_name_index(name)
            .map(|i| self.cols()[i].clone())
            .ok_or_else(|| DFrameError::ColumnNotFound(name.to_owned()))
    }

    fn col_ix(&self, idx: usize) -> Option<TypedArray> {
        self.cols().get(idx).cloned()
    }

    fn col_vec(&self) -> Vec<TypedArray> {
        self.columns()
    }
}

impl RowSelection for DataFrame {
    type View = DataFrame;

    fn r(&self, selection: impl Into<Address>) -> DFResult<DataFrame> {
        let (positions, _) = resolve_positions(&selection.into(), self.get_row_count())?;

        #[cfg(feature = "parallel_proc")]
        let cols: Vec<TypedArray> = self.cols().par_iter().map(|c| c.gather(&positions)).collect();

        #[cfg(not(feature = "parallel_proc"))]
        let cols: Vec<TypedArray> = self.cols().iter().map(|c| c.gather(&positions)).collect();

        let n_rows = if cols.is_empty() { 0 } else { positions.len() };
        Ok(DataFrame::assemble(self.names().to_vec(), cols, n_rows))
    }

    #[inline]
    fn get_row_count(&self) -> usize {
        self.n_rows()
    }
}
