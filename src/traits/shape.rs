//! # Shape Trait Module
//!
//! Unified way to describe the dimensionality "shape" of an element, array,
//! frame or selection, with standard accessors for 1d and 2d.

use crate::enums::shape_dim::ShapeDim;

/// Shape trait.
///
/// Includes accessors for common use cases e.g., shape_1d, shape_2d,
/// which are automatic provided the implementor implements `shape`.
pub trait Shape {
    /// Returns the shape dimension
    fn shape(&self) -> ShapeDim;

    /// Returns the first dimension
    ///
    /// Exists to bypass a match on `ShapeDim` for array shaped types
    fn shape_1d(&self) -> usize {
        match self.shape() {
            ShapeDim::Rank0(n) => n,
            ShapeDim::Rank1(n) => n,
            ShapeDim::Rank2 { rows, .. } => rows,
        }
    }

    /// Returns `(rows, columns)`
    ///
    /// Exists to bypass a match on `ShapeDim` for frame shaped types
    fn shape_2d(&self) -> (usize, usize) {
        match self.shape() {
            ShapeDim::Rank0(n) => (n, 1),
            ShapeDim::Rank1(n) => (n, 1),
            ShapeDim::Rank2 { rows, cols } => (rows, cols),
        }
    }
}
