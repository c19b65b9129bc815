//! # **TypedArray Module** - *Missing-aware, single-dtype column*
//!
//! An ordered sequence of [`Value`]s whose non-missing elements all share one
//! [`DType`]. Supports Python-style addressing for read, write and delete,
//! membership tests, and missing-propagating elementwise operators (see
//! [`crate::kernels::elementwise`]).
//!
//! Buffers are copy-on-write: clones, column selections, and full-range
//! slices share one `Arc<Vec64<Value>>` until either side is mutated.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use vec64::Vec64;

use crate::aliases::HashSet;
use crate::enums::address::{Address, resolve_positions};
use crate::enums::dtype::DType;
use crate::enums::error::{DFResult, DFrameError};
use crate::enums::payload::Payload;
use crate::enums::selection::Selection;
use crate::enums::shape_dim::ShapeDim;
use crate::enums::value::{Value, ValueKey};
use crate::traits::concatenate::Concatenate;
use crate::traits::shape::Shape;

/// # TypedArray
///
/// # Description
/// - Ordered, missing-aware sequence of elements with one inferred dtype.
/// - `DType::Null` marks an unknown dtype: the array is empty or all-missing
/// and accepts any element type until a non-missing value is stored.
/// - Every mutation is all-or-nothing: the address and the values are fully
/// validated before the buffer is touched.
///
/// # Structure
/// - `data`: shared, 64-byte aligned element buffer.
/// - `dtype`: the dtype of every non-missing element.
///
/// # Usage
/// - Build with [`TypedArray::new`] or the `arr!` macro, read with `get`,
/// `take` or `at`, and mutate with `set`, `delete` and `extend`.
/// - Used as the column type of [`crate::DataFrame`].
///
/// # Example
/// ```rust
/// use dframe::{TypedArray, Value};
///
/// let mut a = TypedArray::new(vec![Some(1), None, Some(3)]).unwrap();
/// a.set(1, 2).unwrap();
/// assert_eq!(a.at(-1).unwrap(), &Value::Int64(3));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypedArray {
    data: Arc<Vec64<Value>>,
    dtype: DType,
}

impl TypedArray {
    /// Builds an array from values, inferring the dtype.
    ///
    /// Fails with `DtypeConflict` if two non-missing values differ in dtype.
    pub fn new<I, V>(values: I) -> DFResult<Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self::from_vec64(values.into_iter().map(Into::into).collect())
    }

    /// Takes ownership of a prepared buffer, inferring the dtype.
    pub fn from_vec64(data: Vec64<Value>) -> DFResult<Self> {
        let dtype = DType::infer(data.iter())?;
        Ok(Self {
            data: Arc::new(data),
            dtype,
        })
    }

    /// Buffer already known to be homogeneous, e.g. a subset of an existing array.
    pub(crate) fn from_homogeneous(data: Vec64<Value>) -> Self {
        let dtype = DType::first_of(data.iter());
        Self {
            data: Arc::new(data),
            dtype,
        }
    }

    /// `n` missing elements with an unknown dtype.
    pub fn nulls(n: usize) -> Self {
        Self {
            data: Arc::new((0..n).map(|_| Value::Null).collect()),
            dtype: DType::Null,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    #[inline]
    pub fn dtype(&self) -> DType {
        self.dtype
    }

    #[inline]
    pub fn values(&self) -> &[Value] {
        self.data.as_slice()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values().iter()
    }

    pub fn null_count(&self) -> usize {
        self.iter().filter(|v| v.is_null()).count()
    }

    /// `true` if both arrays currently share one buffer.
    #[inline]
    pub fn is_shared_with(&self, other: &TypedArray) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Element at a possibly negative position.
    pub fn at(&self, index: isize) -> DFResult<&Value> {
        let i = crate::utils::normalise_index(index, self.len())?;
        Ok(&self.values()[i])
    }

    /// Reads by address.
    ///
    /// An integer key yields `Selection::Scalar`; slices, position lists and
    /// logical masks yield `Selection::Array`.
    pub fn get(&self, addr: impl Into<Address>) -> DFResult<Selection> {
        let (positions, single) = resolve_positions(&addr.into(), self.len())?;
        if single {
            return Ok(Selection::Scalar(self.values()[positions[0]].clone()));
        }
        Ok(Selection::Array(self.gather(&positions)))
    }

    /// Like `get`, but always returns an array; an integer key gives one element.
    pub fn take(&self, addr: impl Into<Address>) -> DFResult<TypedArray> {
        let (positions, _) = resolve_positions(&addr.into(), self.len())?;
        Ok(self.gather(&positions))
    }

    /// Copies the elements at `positions` into a new array.
    ///
    /// The identity selection shares the buffer instead.
    pub(crate) fn gather(&self, positions: &[usize]) -> TypedArray {
        let identity =
            positions.len() == self.len() && positions.iter().enumerate().all(|(i, p)| i == *p);
        if identity {
            return self.clone();
        }
        let values = self.values();
        Self::from_homogeneous(positions.iter().map(|&p| values[p].clone()).collect())
    }

    /// Writes by address.
    ///
    /// - A scalar payload is broadcast to every addressed position.
    /// - A list payload must match the number of addressed positions.
    /// - Every non-missing value must match the dtype, unless the dtype is
    /// unknown, in which case the new values must agree among themselves.
    ///
    /// Nothing is written unless every check passes.
    pub fn set(&mut self, addr: impl Into<Address>, payload: impl Into<Payload>) -> DFResult<()> {
        let (positions, single) = resolve_positions(&addr.into(), self.len())?;
        let payload: Payload = payload.into();
        let values = match payload {
            Payload::Scalar(v) => vec![v; positions.len()],
            Payload::List(_) if single => {
                return Err(DFrameError::InvalidAssignment(
                    "a sequence cannot be stored in a single element".into(),
                ));
            }
            list => list.broadcast(positions.len())?,
        };
        self.check_incoming(&values)?;
        if positions.is_empty() {
            return Ok(());
        }

        let slots = Arc::make_mut(&mut self.data).as_mut_slice();
        for (p, v) in positions.into_iter().zip(values) {
            slots[p] = v;
        }
        self.dtype = DType::first_of(self.values());
        Ok(())
    }

    fn check_incoming(&self, values: &[Value]) -> DFResult<()> {
        let incoming = DType::infer(values)?;
        if !self.dtype.accepts(incoming) {
            return Err(DFrameError::DtypeMismatch {
                expected: self.dtype,
                found: incoming,
            });
        }
        Ok(())
    }

    /// Removes the addressed elements, preserving the order of the rest.
    ///
    /// A position named more than once is removed once.
    pub fn delete(&mut self, addr: impl Into<Address>) -> DFResult<()> {
        let (positions, _) = resolve_positions(&addr.into(), self.len())?;
        self.remove_positions(&positions);
        Ok(())
    }

    /// Positions must already be in range.
    pub(crate) fn remove_positions(&mut self, positions: &[usize]) {
        if positions.is_empty() {
            return;
        }
        let mut dropped = vec![false; self.len()];
        for &p in positions {
            dropped[p] = true;
        }
        let kept: Vec64<Value> = self
            .iter()
            .zip(&dropped)
            .filter(|(_, d)| !**d)
            .map(|(v, _)| v.clone())
            .collect();
        *self = Self::from_homogeneous(kept);
    }

    /// Appends the elements of `other`.
    ///
    /// Fails with `DtypeConflict` unless the dtypes match or one is unknown.
    pub fn extend(&mut self, other: &TypedArray) -> DFResult<()> {
        if !self.dtype.accepts(other.dtype) {
            return Err(DFrameError::DtypeConflict {
                first: self.dtype,
                second: other.dtype,
            });
        }
        if other.is_empty() {
            return Ok(());
        }
        Arc::make_mut(&mut self.data).extend(other.iter().cloned());
        if self.dtype == DType::Null {
            self.dtype = other.dtype;
        }
        Ok(())
    }

    /// Same dtype, same length, and elementwise equal, with missing equal to missing.
    ///
    /// Arrays sharing one buffer are always equal, even when they hold `NaN`.
    pub fn equals(&self, other: &TypedArray) -> bool {
        self.dtype == other.dtype && (self.is_shared_with(other) || self.values() == other.values())
    }

    /// Boolean array marking elements found among `candidates`.
    ///
    /// Integers and floats compare numerically. A missing element is `true`
    /// only if the candidates contain a missing value. A scalar candidate is
    /// rejected.
    pub fn isin(&self, candidates: impl Into<Payload>) -> DFResult<TypedArray> {
        let candidates = candidates.into();
        if candidates.is_scalar() {
            return Err(DFrameError::invalid_op(
                "isin",
                "candidates must be a sequence, not a scalar",
            ));
        }
        let probes: Vec<Value> = candidates.into_values()?.iter().map(numeric_key).collect();
        let set: HashSet<ValueKey<'_>> = probes.iter().map(ValueKey).collect();
        Ok(Self::from_homogeneous(
            self.iter()
                .map(|v| Value::Boolean(set.contains(&ValueKey(&numeric_key(v)))))
                .collect(),
        ))
    }

    /// Distinct elements in first-occurrence order; missing counts as one value.
    pub fn unique(&self) -> TypedArray {
        let mut seen = HashSet::default();
        Self::from_homogeneous(
            self.iter()
                .filter(|v| seen.insert(ValueKey(*v)))
                .cloned()
                .collect(),
        )
    }

    /// Boolean array, `true` where the element is missing. Never missing itself.
    pub fn is_na(&self) -> TypedArray {
        Self::from_homogeneous(self.iter().map(|v| Value::Boolean(v.is_null())).collect())
    }

    /// Positions of the `true` elements of a boolean array.
    ///
    /// Missing elements fail with `AmbiguousLogicalIndex` unless
    /// `ignore_missing` is set, in which case they are skipped.
    pub fn which(&self, ignore_missing: bool) -> DFResult<Vec<usize>> {
        if self.dtype != DType::Boolean {
            return Err(DFrameError::invalid_op(
                "which",
                format!("requires a bool array, found {}", self.dtype),
            ));
        }
        let mut out = Vec::new();
        for (i, v) in self.iter().enumerate() {
            match v {
                Value::Boolean(true) => out.push(i),
                Value::Null if !ignore_missing => {
                    return Err(DFrameError::AmbiguousLogicalIndex(format!(
                        "missing value at position {i}"
                    )));
                }
                _ => {}
            }
        }
        Ok(out)
    }
}

/// Integral floats that fit an `i64` probe as integers so `1` and `1.0`
/// meet in one hash bucket. Integers keep their exact value.
fn numeric_key(v: &Value) -> Value {
    match v {
        Value::Float64(f) if f.fract() == 0.0 => match num_traits::cast::<f64, i64>(*f) {
            Some(i) => Value::Int64(i),
            None => Value::Float64(*f),
        },
        other => other.clone(),
    }
}

impl PartialEq for TypedArray {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl Shape for TypedArray {
    fn shape(&self) -> ShapeDim {
        ShapeDim::Rank1(self.len())
    }
}

impl Concatenate for TypedArray {
    fn concat(mut self, other: Self) -> DFResult<Self> {
        self.extend(&other)?;
        Ok(self)
    }
}

impl<'a> IntoIterator for &'a TypedArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for TypedArray {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypedArray<{}> [", self.dtype)?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
