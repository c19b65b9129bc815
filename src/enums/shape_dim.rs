//! # ShapeDim Enum Module
//!
//! Companion to [crate::traits::shape::Shape];
//!
//! Contains all supported `Shape` variants.

use crate::traits::shape::Shape;

/// Dimensional rank of a value, array or frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeDim {
    /// Rank-0 - must always be `1`
    Rank0(usize),

    /// Array element count
    Rank1(usize),

    /// Frame with row/column counts.
    Rank2 { rows: usize, cols: usize },
}

impl Shape for ShapeDim {
    fn shape(&self) -> ShapeDim {
        self.clone()
    }
}
