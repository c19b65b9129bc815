//! # **Address Module** - *Python-style positional, named, sliced and logical keys*
//!
//! One closed type describes every key that `TypedArray` and `DataFrame`
//! accept for `get`, `set` and `delete`:
//!
//! | Variant | Example | Meaning |
//! |---|---|---|
//! | `Int` | `-1` | single position, negatives count from the end |
//! | `Float` | `1.0` | always rejected, cast to an integer first |
//! | `Bool` | `true` | always rejected, a mask must have full length |
//! | `Name` | `"a"` | column name |
//! | `Slice` | `1..`, `SliceSpec::new(None, None, Some(-1))` | half-open range with step |
//! | `List` | `vec![0, 2]`, `vec!["a", "b"]`, `vec![true, false]` | positions, names or mask |
//! | `Pair` | `(0, "a")` | two-dimensional `(row, column)` key |
//!
//! Rust ranges cover the common non-negative slices; use [`SliceSpec`] for
//! negative bounds or steps.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use crate::enums::error::{DFResult, DFrameError};
use crate::enums::value::Value;
use crate::structs::typed_array::TypedArray;
use crate::utils::normalise_index;

/// Python slice with optional bounds and step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

impl SliceSpec {
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The full slice `:`.
    pub fn full() -> Self {
        Self::default()
    }

    /// `true` only for the bare `:` with no bounds and no step.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.start.is_none() && self.stop.is_none() && self.step.is_none()
    }

    /// Resolves the slice against a sequence of `len` elements.
    ///
    /// Follows Python's `slice.indices`: missing bounds default per the sign
    /// of the step, negative bounds count from the end, and bounds clamp to
    /// the sequence rather than failing.
    pub fn indices(&self, len: usize) -> DFResult<Vec<usize>> {
        let step = self.step.unwrap_or(1);
        if step == 0 {
            return Err(DFrameError::InvalidAddress("slice step cannot be zero".into()));
        }
        let n = len as isize;
        let adjust = |bound: isize, lower: isize, upper: isize| {
            let b = if bound < 0 { bound + n } else { bound };
            b.clamp(lower, upper)
        };

        let mut out = Vec::new();
        if step > 0 {
            let start = self.start.map_or(0, |s| adjust(s, 0, n));
            let stop = self.stop.map_or(n, |s| adjust(s, 0, n));
            let mut i = start;
            while i < stop {
                out.push(i as usize);
                match i.checked_add(step) {
                    Some(next) => i = next,
                    None => break,
                }
            }
        } else {
            let start = self.start.map_or(n - 1, |s| adjust(s, -1, n - 1));
            let stop = self.stop.map_or(-1, |s| adjust(s, -1, n - 1));
            let mut i = start;
            while i > stop {
                out.push(i as usize);
                match i.checked_add(step) {
                    Some(next) => i = next,
                    None => break,
                }
            }
        }
        Ok(out)
    }
}

/// # Address
///
/// Key for `get`, `set` and `delete` on arrays and frames.
///
/// ## Description
/// - Build one with `From`/`Into` from integers, strings, ranges, vectors,
/// arrays, boolean arrays, or 2-tuples; every operation takes `impl Into<Address>`.
/// - Lists are classified on use by [`Address::classify_list`].
#[derive(Debug, Clone, PartialEq)]
pub enum Address {
    Int(isize),
    Float(f64),
    Bool(bool),
    Name(String),
    Slice(SliceSpec),
    List(Vec<Value>),
    Pair(Box<Address>, Box<Address>),
}

/// A classified list key.
#[derive(Debug, Clone, PartialEq)]
pub enum ListKey {
    Positions(Vec<isize>),
    Names(Vec<String>),
    /// Logical mask; `None` marks a missing entry.
    Mask(Vec<Option<bool>>),
}

impl Address {
    /// The full slice `:`.
    pub fn full() -> Self {
        Address::Slice(SliceSpec::full())
    }

    /// Builds a slice address.
    pub fn slice(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Address::Slice(SliceSpec::new(start, stop, step))
    }

    /// Builds a two-dimensional `(row, column)` address.
    pub fn pair(row: impl Into<Address>, col: impl Into<Address>) -> Self {
        Address::Pair(Box::new(row.into()), Box::new(col.into()))
    }

    #[inline]
    pub fn is_full_slice(&self) -> bool {
        matches!(self, Address::Slice(s) if s.is_full())
    }

    /// Short label for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Address::Int(_) => "integer",
            Address::Float(_) => "float",
            Address::Bool(_) => "boolean",
            Address::Name(_) => "name",
            Address::Slice(_) => "slice",
            Address::List(_) => "list",
            Address::Pair(_, _) => "pair",
        }
    }

    /// Classifies a list key as positions, names, or a logical mask.
    ///
    /// - Any float or datetime element is an `InvalidAddressType`.
    /// - Mixing integers, names and booleans is `MixedAddressTypes`.
    /// - Missing entries are kept in masks and rejected in position or name lists.
    /// - An empty list selects nothing.
    pub fn classify_list(items: &[Value]) -> DFResult<ListKey> {
        let (mut ints, mut names, mut bools, mut nulls) = (0usize, 0usize, 0usize, 0usize);
        for v in items {
            match v {
                Value::Null => nulls += 1,
                Value::Int64(_) => ints += 1,
                Value::String(_) => names += 1,
                Value::Boolean(_) => bools += 1,
                other => {
                    return Err(DFrameError::InvalidAddressType(format!(
                        "list keys may not contain {} values",
                        other.dtype()
                    )));
                }
            }
        }
        let kinds = [ints, names, bools].iter().filter(|n| **n > 0).count();
        if kinds > 1 {
            return Err(DFrameError::MixedAddressTypes);
        }
        if bools > 0 {
            return Ok(ListKey::Mask(items.iter().map(Value::try_bool).collect()));
        }
        if nulls > 0 {
            return Err(DFrameError::InvalidAddressType(
                "missing values are only allowed inside a logical mask".into(),
            ));
        }
        if names > 0 {
            return Ok(ListKey::Names(
                items.iter().filter_map(|v| v.try_str().map(str::to_owned)).collect(),
            ));
        }
        Ok(ListKey::Positions(
            items
                .iter()
                .filter_map(Value::try_i64)
                .map(|i| isize::try_from(i).unwrap_or(isize::MAX))
                .collect(),
        ))
    }
}

/// Resolves a full-length mask to the positions of its `true` entries.
pub(crate) fn mask_positions(mask: &[Option<bool>], len: usize) -> DFResult<Vec<usize>> {
    if mask.len() != len {
        return Err(DFrameError::AmbiguousLogicalIndex(format!(
            "logical mask has length {}, expected {}",
            mask.len(),
            len
        )));
    }
    let mut out = Vec::new();
    for (i, m) in mask.iter().enumerate() {
        match m {
            Some(true) => out.push(i),
            Some(false) => {}
            None => {
                return Err(DFrameError::AmbiguousLogicalIndex(format!(
                    "logical mask is missing a value at position {i}"
                )));
            }
        }
    }
    Ok(out)
}

/// Positions selected by a one-dimensional address over a sequence of `len`
/// elements without names.
///
/// Returns `(positions, single)`, where `single` is `true` for a plain
/// integer key. Used for array elements and frame rows alike.
pub(crate) fn resolve_positions(addr: &Address, len: usize) -> DFResult<(Vec<usize>, bool)> {
    match addr {
        Address::Int(i) => Ok((vec![normalise_index(*i, len)?], true)),
        Address::Float(_) => Err(DFrameError::InvalidAddressType(
            "float positions are not supported, cast to an integer".into(),
        )),
        Address::Bool(_) => Err(DFrameError::AmbiguousLogicalIndex(
            "a boolean scalar is not a logical index, provide a full-length mask".into(),
        )),
        Address::Name(n) => Err(DFrameError::InvalidAddressType(format!(
            "positions cannot be addressed by name ('{n}')"
        ))),
        Address::Slice(s) => Ok((s.indices(len)?, false)),
        Address::List(items) => {
            let positions = match Address::classify_list(items)? {
                ListKey::Positions(ps) => ps
                    .into_iter()
                    .map(|p| normalise_index(p, len))
                    .collect::<DFResult<Vec<_>>>()?,
                ListKey::Mask(mask) => mask_positions(&mask, len)?,
                ListKey::Names(_) => {
                    return Err(DFrameError::InvalidAddressType(
                        "positions cannot be addressed by name".into(),
                    ));
                }
            };
            Ok((positions, false))
        }
        Address::Pair(_, _) => Err(DFrameError::InvalidAddress(
            "a two-dimensional key cannot address a one-dimensional sequence".into(),
        )),
    }
}

macro_rules! impl_address_from_int {
    ($($t:ty),+ $(,)?) => {
        $(
            impl From<$t> for Address {
                #[inline]
                fn from(v: $t) -> Self {
                    Address::Int(isize::try_from(v).unwrap_or(isize::MAX))
                }
            }
        )+
    };
}

impl_address_from_int!(i32, i64, isize, u32, usize);

impl From<f64> for Address {
    #[inline]
    fn from(v: f64) -> Self {
        Address::Float(v)
    }
}

impl From<bool> for Address {
    #[inline]
    fn from(v: bool) -> Self {
        Address::Bool(v)
    }
}

impl From<&str> for Address {
    #[inline]
    fn from(v: &str) -> Self {
        Address::Name(v.to_owned())
    }
}

impl From<String> for Address {
    #[inline]
    fn from(v: String) -> Self {
        Address::Name(v)
    }
}

impl From<&String> for Address {
    #[inline]
    fn from(v: &String) -> Self {
        Address::Name(v.clone())
    }
}

impl From<SliceSpec> for Address {
    #[inline]
    fn from(v: SliceSpec) -> Self {
        Address::Slice(v)
    }
}

impl From<&Address> for Address {
    #[inline]
    fn from(v: &Address) -> Self {
        v.clone()
    }
}

fn bound(v: usize) -> Option<isize> {
    Some(isize::try_from(v).unwrap_or(isize::MAX))
}

impl From<Range<usize>> for Address {
    fn from(r: Range<usize>) -> Self {
        Address::Slice(SliceSpec::new(bound(r.start), bound(r.end), None))
    }
}

impl From<RangeFrom<usize>> for Address {
    fn from(r: RangeFrom<usize>) -> Self {
        Address::Slice(SliceSpec::new(bound(r.start), None, None))
    }
}

impl From<RangeTo<usize>> for Address {
    fn from(r: RangeTo<usize>) -> Self {
        Address::Slice(SliceSpec::new(None, bound(r.end), None))
    }
}

impl From<RangeInclusive<usize>> for Address {
    fn from(r: RangeInclusive<usize>) -> Self {
        Address::Slice(SliceSpec::new(
            bound(*r.start()),
            bound(r.end().saturating_add(1)),
            None,
        ))
    }
}

impl From<RangeToInclusive<usize>> for Address {
    fn from(r: RangeToInclusive<usize>) -> Self {
        Address::Slice(SliceSpec::new(None, bound(r.end.saturating_add(1)), None))
    }
}

impl From<RangeFull> for Address {
    fn from(_: RangeFull) -> Self {
        Address::full()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Address {
    fn from(v: Vec<T>) -> Self {
        Address::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Address {
    fn from(v: [T; N]) -> Self {
        Address::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Address {
    fn from(v: &[T]) -> Self {
        Address::List(v.iter().cloned().map(Into::into).collect())
    }
}

/// A boolean array becomes a logical mask; any other array a list key.
impl From<&TypedArray> for Address {
    fn from(v: &TypedArray) -> Self {
        Address::List(v.values().to_vec())
    }
}

impl From<TypedArray> for Address {
    fn from(v: TypedArray) -> Self {
        Address::from(&v)
    }
}

impl<R: Into<Address>, C: Into<Address>> From<(R, C)> for Address {
    fn from((row, col): (R, C)) -> Self {
        Address::pair(row, col)
    }
}

impl<V: Into<Value>> FromIterator<V> for Address {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Address::List(iter.into_iter().map(Into::into).collect())
    }
}
