//! # **Stacking Kernels** - *Horizontal and vertical frame concatenation*
//!
//! - [`hstack`] / [`cbind`]: side by side; equal row counts, no shared names.
//! - [`vstack`]: one under another by position; equal column counts and
//! dtype sequences, names taken from the first frame.
//! - [`rbind`]: one under another by name; every frame is reordered to the
//! first frame's column order, then stacked as by `vstack`.
//!
//! Stacked frames share column buffers with their inputs until written to.

use crate::aliases::HashSet;
use crate::enums::dtype::DType;
use crate::enums::error::{DFResult, DFrameError};
use crate::structs::dataframe::DataFrame;
use crate::structs::typed_array::TypedArray;
use crate::traits::concatenate::Concatenate;

/// Places frames side by side, left to right.
///
/// # Errors
/// - `RowCountMismatch` if two frames differ in row count.
/// - `DuplicateColumnAcrossFrames` if a name appears in more than one frame.
pub fn hstack(frames: &[DataFrame]) -> DFResult<DataFrame> {
    let mut names: Vec<String> = Vec::new();
    let mut cols: Vec<TypedArray> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::default();
    let mut n_rows: Option<usize> = None;

    for frame in frames {
        match n_rows {
            None => n_rows = Some(frame.n_rows()),
            Some(n) if n != frame.n_rows() => {
                return Err(DFrameError::RowCountMismatch {
                    expected: n,
                    found: frame.n_rows(),
                });
            }
            Some(_) => {}
        }
        for (name, col) in frame.items() {
            if !seen.insert(name) {
                return Err(DFrameError::DuplicateColumnAcrossFrames(name.to_owned()));
            }
            names.push(name.to_owned());
            cols.push(col.clone());
        }
    }
    Ok(DataFrame::assemble(names, cols, n_rows.unwrap_or(0)))
}

/// Alias of [`hstack`].
#[inline]
pub fn cbind(frames: &[DataFrame]) -> DFResult<DataFrame> {
    hstack(frames)
}

/// Stacks frames vertically by column position.
///
/// # Errors
/// `IncompatibleFrames` if the column counts or the dtype sequences differ.
pub fn vstack(frames: &[DataFrame]) -> DFResult<DataFrame> {
    let Some((first, rest)) = frames.split_first() else {
        return Ok(DataFrame::new());
    };
    let dtypes = first.dtypes();
    for (k, frame) in rest.iter().enumerate() {
        if frame.n_cols() != first.n_cols() {
            return Err(DFrameError::IncompatibleFrames(format!(
                "frame {} has {} columns, expected {}",
                k + 1,
                frame.n_cols(),
                first.n_cols()
            )));
        }
        let theirs = frame.dtypes();
        if theirs != dtypes {
            return Err(DFrameError::IncompatibleFrames(format!(
                "frame {} has dtypes {}, expected {}",
                k + 1,
                fmt_dtypes(&theirs),
                fmt_dtypes(&dtypes)
            )));
        }
    }

    let mut cols = first.columns();
    for frame in rest {
        for (col, other) in cols.iter_mut().zip(frame.cols()) {
            col.extend(other)?;
        }
    }
    let n_rows = cols.first().map_or(0, TypedArray::len);
    Ok(DataFrame::assemble(first.names().to_vec(), cols, n_rows))
}

/// Stacks frames vertically by column name.
///
/// Every frame must hold exactly the first frame's set of names, in any
/// order; dtypes are then compared by name.
///
/// # Errors
/// `IncompatibleFrames` if a name set differs or a column's dtype differs.
pub fn rbind(frames: &[DataFrame]) -> DFResult<DataFrame> {
    let Some(first) = frames.first() else {
        return Ok(DataFrame::new());
    };
    let order = first.names();
    let mut aligned = Vec::with_capacity(frames.len());
    for (k, frame) in frames.iter().enumerate() {
        let same_set =
            frame.n_cols() == first.n_cols() && order.iter().all(|n| frame.has_col(n));
        if !same_set {
            return Err(DFrameError::IncompatibleFrames(format!(
                "frame {} has columns [{}], expected [{}]",
                k,
                frame.col_names().join(", "),
                first.col_names().join(", ")
            )));
        }
        let positions: Vec<usize> = order
            .iter()
            .filter_map(|n| frame.col_name_index(n))
            .collect();
        let mut reordered = frame.select_cols(&positions);
        reordered.set_names(order.to_vec())?;
        aligned.push(reordered);
    }
    vstack(&aligned)
}

fn fmt_dtypes(dtypes: &[DType]) -> String {
    let names: Vec<&str> = dtypes.iter().map(DType::name).collect();
    format!("[{}]", names.join(", "))
}

impl Concatenate for DataFrame {
    /// Positional vertical stack of two frames; see [`vstack`].
    fn concat(self, other: Self) -> DFResult<Self> {
        vstack(&[self, other])
    }
}
