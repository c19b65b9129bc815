//! # **Elementwise Kernels** - *Missing-propagating operators over TypedArray*
//!
//! Scalar kernels for arithmetic, comparison, logical and unary operators,
//! and their lifting over [`TypedArray`] against a scalar or an equal-length
//! sequence. A missing operand always produces a missing result.
//!
//! ## Semantics
//! - `Int64 op Int64` is checked; overflow is an `InvalidOperation`.
//! - `Int64` and `Float64` promote to `Float64`.
//! - `%` and `//` floor towards negative infinity; `/` always yields a float;
//! `div` floors for two integers and divides otherwise.
//! - `+` concatenates strings, `*` repeats a string by an integer.
//! - `& | ^` are logical on booleans and bitwise on integers.
//! - Division or modulo by zero is an `InvalidOperation`.
//! - Ordering comparisons involving `NaN` are `false`.
//!
//! The `std::ops` operators are implemented for `&TypedArray` and return
//! `DFResult<TypedArray>`, e.g. `(&a + &b)?`.

use std::cmp::Ordering;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Rem, Sub};

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedNeg, CheckedRem, CheckedSub, checked_pow};

use crate::enums::error::{DFResult, DFrameError};
use crate::enums::operators::{ArithmeticOperator, ComparisonOperator, LogicalOperator, UnaryOperator};
use crate::enums::payload::Payload;
use crate::enums::value::Value;
use crate::structs::typed_array::TypedArray;

fn unsupported(op: &'static str, lhs: &Value, rhs: &Value) -> DFrameError {
    DFrameError::invalid_op(
        op,
        format!("unsupported operand types {} and {}", lhs.dtype(), rhs.dtype()),
    )
}

fn overflow(op: &'static str) -> DFrameError {
    DFrameError::invalid_op(op, "integer overflow")
}

fn zero_division(op: &'static str) -> DFrameError {
    DFrameError::invalid_op(op, "division by zero")
}

fn checked<T>(op: &'static str, v: Option<T>) -> DFResult<T> {
    v.ok_or_else(|| overflow(op))
}

/// Floor division for integers, rounding towards negative infinity.
fn floor_div_i64(op: &'static str, l: i64, r: i64) -> DFResult<i64> {
    if r == 0 {
        return Err(zero_division(op));
    }
    let q = checked(op, CheckedDiv::checked_div(&l, &r))?;
    let rem = checked(op, CheckedRem::checked_rem(&l, &r))?;
    Ok(if rem != 0 && ((rem < 0) != (r < 0)) { q - 1 } else { q })
}

/// Floor modulo for integers; the result has the sign of the divisor.
fn floor_mod_i64(op: &'static str, l: i64, r: i64) -> DFResult<i64> {
    if r == 0 {
        return Err(zero_division(op));
    }
    let rem = checked(op, CheckedRem::checked_rem(&l, &r))?;
    Ok(if rem != 0 && ((rem < 0) != (r < 0)) { rem + r } else { rem })
}

fn floor_mod_f64(op: &'static str, l: f64, r: f64) -> DFResult<f64> {
    if r == 0.0 {
        return Err(zero_division(op));
    }
    let rem = l % r;
    Ok(if rem != 0.0 && ((rem < 0.0) != (r < 0.0)) { rem + r } else { rem })
}

fn float_op(op: ArithmeticOperator, l: f64, r: f64) -> DFResult<Value> {
    use ArithmeticOperator::*;
    let name = op.symbol();
    let v = match op {
        Add => l + r,
        Subtract => l - r,
        Multiply => l * r,
        Divide | TrueDivide => {
            if r == 0.0 {
                return Err(zero_division(name));
            }
            l / r
        }
        FloorDivide => {
            if r == 0.0 {
                return Err(zero_division(name));
            }
            (l / r).floor()
        }
        Remainder => floor_mod_f64(name, l, r)?,
        Power => l.powf(r),
    };
    Ok(Value::Float64(v))
}

fn int_op(op: ArithmeticOperator, l: i64, r: i64) -> DFResult<Value> {
    use ArithmeticOperator::*;
    let name = op.symbol();
    let v = match op {
        Add => checked(name, CheckedAdd::checked_add(&l, &r))?,
        Subtract => checked(name, CheckedSub::checked_sub(&l, &r))?,
        Multiply => checked(name, CheckedMul::checked_mul(&l, &r))?,
        Divide | FloorDivide => floor_div_i64(name, l, r)?,
        Remainder => floor_mod_i64(name, l, r)?,
        TrueDivide => return float_op(op, l as f64, r as f64),
        Power => {
            if r < 0 {
                return float_op(op, l as f64, r as f64);
            }
            let exp = usize::try_from(r).map_err(|_| overflow(name))?;
            checked(name, checked_pow(l, exp))?
        }
    };
    Ok(Value::Int64(v))
}

fn repeat_str(s: &str, n: i64) -> Value {
    Value::String(s.repeat(usize::try_from(n).unwrap_or(0)))
}

/// Applies an arithmetic operator to two elements.
pub fn scalar_arithmetic(lhs: &Value, rhs: &Value, op: ArithmeticOperator) -> DFResult<Value> {
    use ArithmeticOperator::*;
    match (lhs, rhs, op) {
        (Value::Null, _, _) | (_, Value::Null, _) => Ok(Value::Null),

        (Value::Int64(l), Value::Int64(r), op) => int_op(op, *l, *r),
        (Value::Float64(l), Value::Float64(r), op) => float_op(op, *l, *r),

        // Mixed type promotion (Int + Float = Float)
        (Value::Int64(l), Value::Float64(r), op) => float_op(op, *l as f64, *r),
        (Value::Float64(l), Value::Int64(r), op) => float_op(op, *l, *r as f64),

        (Value::String(l), Value::String(r), Add) => Ok(Value::String(format!("{l}{r}"))),
        (Value::String(s), Value::Int64(n), Multiply) => Ok(repeat_str(s, *n)),
        (Value::Int64(n), Value::String(s), Multiply) => Ok(repeat_str(s, *n)),

        (l, r, op) => Err(unsupported(op.symbol(), l, r)),
    }
}

/// Orders two non-missing elements; `Ok(None)` when a `NaN` is involved.
fn order(lhs: &Value, rhs: &Value, op: &'static str) -> DFResult<Option<Ordering>> {
    match (lhs, rhs) {
        (Value::Int64(l), Value::Int64(r)) => Ok(Some(l.cmp(r))),
        (Value::Boolean(l), Value::Boolean(r)) => Ok(Some(l.cmp(r))),
        (Value::String(l), Value::String(r)) => Ok(Some(l.cmp(r))),
        #[cfg(feature = "datetime")]
        (Value::Datetime(l), Value::Datetime(r)) => Ok(Some(l.cmp(r))),
        (l, r) => match (l.try_f64(), r.try_f64()) {
            (Some(a), Some(b)) => Ok(a.partial_cmp(&b)),
            _ => Err(unsupported(op, l, r)),
        },
    }
}

/// Applies a comparison operator to two elements.
///
/// Equality never fails; elements of unrelated dtypes are simply unequal.
pub fn scalar_comparison(lhs: &Value, rhs: &Value, op: ComparisonOperator) -> DFResult<Value> {
    use ComparisonOperator::*;
    if lhs.is_null() || rhs.is_null() {
        return Ok(Value::Null);
    }
    let name = op.symbol();
    let result = match op {
        Equals => lhs.loose_eq(rhs),
        NotEquals => !lhs.loose_eq(rhs),
        LessThan => order(lhs, rhs, name)? == Some(Ordering::Less),
        LessThanOrEqualTo => matches!(order(lhs, rhs, name)?, Some(Ordering::Less | Ordering::Equal)),
        GreaterThan => order(lhs, rhs, name)? == Some(Ordering::Greater),
        GreaterThanOrEqualTo => {
            matches!(order(lhs, rhs, name)?, Some(Ordering::Greater | Ordering::Equal))
        }
    };
    Ok(Value::Boolean(result))
}

/// Applies a logical operator to two elements.
pub fn scalar_logical(lhs: &Value, rhs: &Value, op: LogicalOperator) -> DFResult<Value> {
    use LogicalOperator::*;
    match (lhs, rhs, op) {
        (Value::Null, _, _) | (_, Value::Null, _) => Ok(Value::Null),
        (Value::Boolean(l), Value::Boolean(r), And) => Ok(Value::Boolean(*l && *r)),
        (Value::Boolean(l), Value::Boolean(r), Or) => Ok(Value::Boolean(*l || *r)),
        (Value::Boolean(l), Value::Boolean(r), Xor) => Ok(Value::Boolean(*l ^ *r)),
        (Value::Int64(l), Value::Int64(r), And) => Ok(Value::Int64(l & r)),
        (Value::Int64(l), Value::Int64(r), Or) => Ok(Value::Int64(l | r)),
        (Value::Int64(l), Value::Int64(r), Xor) => Ok(Value::Int64(l ^ r)),
        (l, r, op) => Err(unsupported(op.symbol(), l, r)),
    }
}

/// Applies a unary operator to one element.
pub fn scalar_unary(v: &Value, op: UnaryOperator) -> DFResult<Value> {
    use UnaryOperator::*;
    let name = op.symbol();
    match (v, op) {
        (Value::Null, _) => Ok(Value::Null),
        (v, Not) => Ok(Value::Boolean(!v.is_truthy())),
        (Value::Int64(i), Negative) => Ok(Value::Int64(checked(name, CheckedNeg::checked_neg(i))?)),
        (Value::Float64(f), Negative) => Ok(Value::Float64(-f)),
        (Value::Int64(_) | Value::Float64(_), Positive) => Ok(v.clone()),
        (Value::Int64(i), Abs) => Ok(Value::Int64(checked(name, i.checked_abs())?)),
        (Value::Float64(f), Abs) => Ok(Value::Float64(f.abs())),
        (v, _) => Err(DFrameError::invalid_op(
            name,
            format!("unsupported operand type {}", v.dtype()),
        )),
    }
}

impl TypedArray {
    /// Lifts a binary scalar kernel over the array and a scalar or same-length operand.
    fn zip_with<F>(&self, rhs: Payload, f: F) -> DFResult<TypedArray>
    where
        F: Fn(&Value, &Value) -> DFResult<Value>,
    {
        let out: Vec<Value> = match rhs {
            Payload::Scalar(r) => self.iter().map(|l| f(l, &r)).collect::<DFResult<_>>()?,
            list => {
                let rhs = list.into_values()?;
                if rhs.len() != self.len() {
                    return Err(DFrameError::LengthMismatch {
                        expected: self.len(),
                        found: rhs.len(),
                    });
                }
                self.iter()
                    .zip(rhs.iter())
                    .map(|(l, r)| f(l, r))
                    .collect::<DFResult<_>>()?
            }
        };
        TypedArray::new(out)
    }

    pub fn unary(&self, op: UnaryOperator) -> DFResult<TypedArray> {
        let out = self
            .iter()
            .map(|v| scalar_unary(v, op))
            .collect::<DFResult<Vec<_>>>()?;
        TypedArray::new(out)
    }

    pub fn arithmetic(&self, op: ArithmeticOperator, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.zip_with(rhs.into(), |l, r| scalar_arithmetic(l, r, op))
    }

    pub fn comparison(&self, op: ComparisonOperator, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.zip_with(rhs.into(), |l, r| scalar_comparison(l, r, op))
    }

    pub fn logical(&self, op: LogicalOperator, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.zip_with(rhs.into(), |l, r| scalar_logical(l, r, op))
    }

    /// Logical negation by truthiness.
    pub fn not(&self) -> DFResult<TypedArray> {
        self.unary(UnaryOperator::Not)
    }

    pub fn neg(&self) -> DFResult<TypedArray> {
        self.unary(UnaryOperator::Negative)
    }

    pub fn pos(&self) -> DFResult<TypedArray> {
        self.unary(UnaryOperator::Positive)
    }

    pub fn abs(&self) -> DFResult<TypedArray> {
        self.unary(UnaryOperator::Abs)
    }

    pub fn eq(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.comparison(ComparisonOperator::Equals, rhs)
    }

    pub fn ne(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.comparison(ComparisonOperator::NotEquals, rhs)
    }

    pub fn ge(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.comparison(ComparisonOperator::GreaterThanOrEqualTo, rhs)
    }

    pub fn gt(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.comparison(ComparisonOperator::GreaterThan, rhs)
    }

    pub fn le(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.comparison(ComparisonOperator::LessThanOrEqualTo, rhs)
    }

    pub fn lt(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.comparison(ComparisonOperator::LessThan, rhs)
    }

    pub fn and(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.logical(LogicalOperator::And, rhs)
    }

    pub fn or(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.logical(LogicalOperator::Or, rhs)
    }

    pub fn xor(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.logical(LogicalOperator::Xor, rhs)
    }

    pub fn add(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::Add, rhs)
    }

    pub fn sub(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::Subtract, rhs)
    }

    pub fn mul(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::Multiply, rhs)
    }

    pub fn pow(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::Power, rhs)
    }

    /// Floor modulo.
    pub fn rem(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::Remainder, rhs)
    }

    /// Classic division: floor division for two integers, true division otherwise.
    pub fn div(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::Divide, rhs)
    }

    pub fn truediv(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::TrueDivide, rhs)
    }

    pub fn floordiv(&self, rhs: impl Into<Payload>) -> DFResult<TypedArray> {
        self.arithmetic(ArithmeticOperator::FloorDivide, rhs)
    }
}

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $call:ident) => {
        impl<R: Into<Payload>> $trait<R> for &TypedArray {
            type Output = DFResult<TypedArray>;

            fn $method(self, rhs: R) -> Self::Output {
                TypedArray::$call(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, truediv);
impl_binary_op!(Rem, rem, rem);
impl_binary_op!(BitAnd, bitand, and);
impl_binary_op!(BitOr, bitor, or);
impl_binary_op!(BitXor, bitxor, xor);

impl Neg for &TypedArray {
    type Output = DFResult<TypedArray>;

    fn neg(self) -> Self::Output {
        TypedArray::neg(self)
    }
}

impl Not for &TypedArray {
    type Output = DFResult<TypedArray>;

    fn not(self) -> Self::Output {
        TypedArray::not(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DType;

    fn arr<V: Into<Value>>(vals: Vec<V>) -> TypedArray {
        TypedArray::new(vals).unwrap()
    }

    #[test]
    fn test_missing_propagates() {
        let a = arr(vec![Some(1), None]);
        let out = a.add(1).unwrap();
        assert_eq!(out.values(), &[Value::Int64(2), Value::Null]);
        let out = a.eq(vec![1, 1]).unwrap();
        assert_eq!(out.values(), &[Value::Boolean(true), Value::Null]);
    }

    #[test]
    fn test_int_float_promotion() {
        let a = arr(vec![1, 2]);
        let out = a.mul(0.5).unwrap();
        assert_eq!(out.dtype(), DType::Float64);
        assert_eq!(out.values(), &[Value::Float64(0.5), Value::Float64(1.0)]);
    }

    #[test]
    fn test_division_family() {
        let a = arr(vec![7, -7]);
        assert_eq!(a.floordiv(2).unwrap().values(), &[Value::Int64(3), Value::Int64(-4)]);
        assert_eq!(a.rem(2).unwrap().values(), &[Value::Int64(1), Value::Int64(1)]);
        assert_eq!(a.div(2).unwrap().values(), &[Value::Int64(3), Value::Int64(-4)]);
        assert_eq!(a.truediv(2).unwrap().values(), &[Value::Float64(3.5), Value::Float64(-3.5)]);
        assert!(matches!(
            a.truediv(0).unwrap_err(),
            DFrameError::InvalidOperation { op: "/", .. }
        ));
        let f = arr(vec![-7.5]);
        assert_eq!(f.rem(2.0).unwrap().values(), &[Value::Float64(0.5)]);
    }

    #[test]
    fn test_overflow_is_error() {
        let a = arr(vec![i64::MAX]);
        assert!(a.add(1).is_err());
        assert!(arr(vec![i64::MIN]).neg().is_err());
        assert!(arr(vec![i64::MIN]).abs().is_err());
    }

    #[test]
    fn test_pow() {
        let a = arr(vec![2, 3]);
        assert_eq!(a.pow(3).unwrap().values(), &[Value::Int64(8), Value::Int64(27)]);
        assert_eq!(a.pow(-1).unwrap().dtype(), DType::Float64);
        assert!(arr(vec![10]).pow(100).is_err());
    }

    #[test]
    fn test_strings() {
        let a = arr(vec!["ab", "c"]);
        assert_eq!(a.add("!").unwrap().values(), &[Value::from("ab!"), Value::from("c!")]);
        assert_eq!(a.mul(2).unwrap().values()[1], Value::from("cc"));
        assert!(a.sub("x").is_err());
    }

    #[test]
    fn test_comparisons() {
        let a = arr(vec![1.0, f64::NAN, 3.0]);
        let out = a.gt(1).unwrap();
        assert_eq!(
            out.values(),
            &[Value::Boolean(false), Value::Boolean(false), Value::Boolean(true)]
        );
        assert!(arr(vec!["a"]).lt(1).is_err());
        assert_eq!(arr(vec!["a"]).eq(1).unwrap().values(), &[Value::Boolean(false)]);
    }

    #[test]
    fn test_logical_and_bitwise() {
        let a = arr(vec![Some(true), Some(false), None]);
        let out = a.and(vec![true, true, true]).unwrap();
        assert_eq!(out.values(), &[Value::Boolean(true), Value::Boolean(false), Value::Null]);
        let bits = arr(vec![6]).xor(3).unwrap();
        assert_eq!(bits.values(), &[Value::Int64(5)]);
    }

    #[test]
    fn test_unary() {
        let a = arr(vec![Some(0), Some(2), None]);
        assert_eq!(
            a.not().unwrap().values(),
            &[Value::Boolean(true), Value::Boolean(false), Value::Null]
        );
        assert_eq!(a.neg().unwrap().values()[1], Value::Int64(-2));
        assert!(arr(vec!["x"]).neg().is_err());
    }

    #[test]
    fn test_length_mismatch() {
        let a = arr(vec![1, 2]);
        assert_eq!(
            a.add(vec![1, 2, 3]).unwrap_err(),
            DFrameError::LengthMismatch { expected: 2, found: 3 }
        );
    }

    #[test]
    fn test_std_ops() {
        let a = arr(vec![1, 2]);
        let b = arr(vec![10, 20]);
        let sum = (&a + &b).unwrap();
        assert_eq!(sum.values(), &[Value::Int64(11), Value::Int64(22)]);
        let q = (&a / 2).unwrap();
        assert_eq!(q.values(), &[Value::Float64(0.5), Value::Float64(1.0)]);
        let n = (-&a).unwrap();
        assert_eq!(n.values()[0], Value::Int64(-1));
        let m = (!&arr(vec![true])).unwrap();
        assert_eq!(m.values(), &[Value::Boolean(false)]);
    }
}
