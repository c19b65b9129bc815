use dframe::{Address, DFrameError, DType, Selection, SliceSpec, TypedArray, Value, arr, values};

#[test]
fn test_create_infers_dtype_with_missing() {
    let a = TypedArray::new(vec![Some(1), None, Some(3)]).unwrap();
    assert_eq!(a.dtype(), DType::Int64);
    assert_eq!(a.get(1).unwrap(), Selection::Scalar(Value::Null));
    assert_eq!(a.null_count(), 1);

    let empty = TypedArray::new(Vec::<i64>::new()).unwrap();
    assert_eq!(empty.dtype(), DType::Null);
    assert_eq!(TypedArray::nulls(3).dtype(), DType::Null);
}

#[test]
fn test_create_rejects_mixed_dtypes() {
    let err = TypedArray::new(values![1, "a"]).unwrap_err();
    assert!(matches!(err, DFrameError::DtypeConflict { .. }));
    assert!(TypedArray::new(values![1, 2.0]).is_err());
}

#[test]
fn test_get_slices_follow_python_semantics() {
    let a = arr![0, 1, 2, 3, 4, 5].unwrap();
    let every_other = a.take(Address::slice(None, None, Some(2))).unwrap();
    assert_eq!(every_other.values(), values![0, 2, 4].as_slice());

    let reversed = a.take(SliceSpec::new(None, None, Some(-1))).unwrap();
    assert_eq!(reversed.values(), values![5, 4, 3, 2, 1, 0].as_slice());

    let tail = a.take(SliceSpec::new(Some(-2), None, None)).unwrap();
    assert_eq!(tail.values(), values![4, 5].as_slice());

    let clamped = a.take(SliceSpec::new(Some(4), Some(100), None)).unwrap();
    assert_eq!(clamped.len(), 2);

    assert!(matches!(
        a.take(SliceSpec::new(None, None, Some(0))).unwrap_err(),
        DFrameError::InvalidAddress(_)
    ));
}

#[test]
fn test_get_by_list_and_mask() {
    let a = arr!["a", "b", "c"].unwrap();
    assert_eq!(a.take(vec![2, -3]).unwrap().values(), values!["c", "a"].as_slice());
    assert_eq!(a.take(vec![true, false, true]).unwrap().values(), values!["a", "c"].as_slice());

    let mask = a.eq("b").unwrap();
    assert_eq!(a.take(&mask).unwrap().values(), values!["b"].as_slice());
}

#[test]
fn test_get_errors() {
    let a = arr![1, 2, 3].unwrap();
    assert_eq!(a.get(3).unwrap_err(), DFrameError::IndexOutOfRange { index: 3, len: 3 });
    assert!(matches!(a.get(1.0).unwrap_err(), DFrameError::InvalidAddressType(_)));
    assert!(matches!(a.get("x").unwrap_err(), DFrameError::InvalidAddressType(_)));
    assert!(matches!(a.get(true).unwrap_err(), DFrameError::AmbiguousLogicalIndex(_)));
    assert!(matches!(
        a.get(vec![true, false]).unwrap_err(),
        DFrameError::AmbiguousLogicalIndex(_)
    ));
    assert!(matches!(
        a.get(values![true, Value::Null, false]).unwrap_err(),
        DFrameError::AmbiguousLogicalIndex(_)
    ));
    assert_eq!(a.get(values![0, "x"]).unwrap_err(), DFrameError::MixedAddressTypes);
}

#[test]
fn test_set_then_get() {
    let mut a = arr![1, 2, 3].unwrap();
    a.set(-1, 30).unwrap();
    assert_eq!(a.at(2).unwrap(), &Value::Int64(30));

    a.set(0..2, 0).unwrap();
    assert_eq!(a.values(), values![0, 0, 30].as_slice());

    a.set(vec![0, 2], vec![7, 8]).unwrap();
    assert_eq!(a.values(), values![7, 0, 8].as_slice());

    a.set(1, Value::Null).unwrap();
    assert_eq!(a.null_count(), 1);
}

#[test]
fn test_set_is_atomic_on_failure() {
    let mut a = arr![1, 2, 3].unwrap();
    let err = a.set(.., vec![Value::from(1), Value::from("x"), Value::from(3)]).unwrap_err();
    assert!(matches!(err, DFrameError::DtypeConflict { .. }));
    assert!(matches!(a.set(0, "x").unwrap_err(), DFrameError::DtypeMismatch { .. }));
    assert_eq!(
        a.set(0..2, vec![1, 2, 3]).unwrap_err(),
        DFrameError::LengthMismatch { expected: 2, found: 3 }
    );
    assert!(matches!(a.set(0, vec![1, 2]).unwrap_err(), DFrameError::InvalidAssignment(_)));
    assert_eq!(a.values(), values![1, 2, 3].as_slice());
}

#[test]
fn test_unknown_dtype_adopts_first_value() {
    let mut a = TypedArray::nulls(2);
    a.set(0, "s").unwrap();
    assert_eq!(a.dtype(), DType::String);
    assert!(a.set(1, 5).is_err());
}

#[test]
fn test_delete_preserves_order() {
    let mut a = arr![0, 1, 2, 3, 4].unwrap();
    a.delete(vec![1, 3, 1]).unwrap();
    assert_eq!(a.values(), values![0, 2, 4].as_slice());
    a.delete(-1).unwrap();
    assert_eq!(a.values(), values![0, 2].as_slice());
    assert!(a.delete(5).is_err());
    assert_eq!(a.len(), 2);
}

#[test]
fn test_isin_and_missing() {
    let a = TypedArray::new(vec![Some(1), None, Some(3)]).unwrap();
    let hit = a.isin(vec![1, 3]).unwrap();
    assert_eq!(hit.values(), values![true, false, true].as_slice());

    let with_null = a.isin(values![Value::Null]).unwrap();
    assert_eq!(with_null.values(), values![false, true, false].as_slice());

    let numeric = a.isin(vec![3.0]).unwrap();
    assert_eq!(numeric.values(), values![false, false, true].as_slice());

    assert!(matches!(a.isin(1).unwrap_err(), DFrameError::InvalidOperation { .. }));
}

#[test]
fn test_unique_is_na_which() {
    let a = TypedArray::new(vec![Some("x"), None, Some("x"), Some("y"), None]).unwrap();
    assert_eq!(a.unique().values(), values!["x", Value::Null, "y"].as_slice());
    let na = a.is_na();
    assert_eq!(na.dtype(), DType::Boolean);
    assert_eq!(na.which(false).unwrap(), vec![1, 4]);

    let m = TypedArray::new(vec![Some(true), None, Some(true)]).unwrap();
    assert!(matches!(m.which(false).unwrap_err(), DFrameError::AmbiguousLogicalIndex(_)));
    assert_eq!(m.which(true).unwrap(), vec![0, 2]);
    assert!(a.which(true).is_err());
}

#[test]
fn test_arithmetic_operators() {
    let a = TypedArray::new(vec![Some(7), None, Some(-7)]).unwrap();
    let b = arr![2, 2, 2].unwrap();

    assert_eq!((&a + &b).unwrap().values(), values![9, Value::Null, -5].as_slice());
    assert_eq!(a.floordiv(2).unwrap().values(), values![3, Value::Null, -4].as_slice());
    assert_eq!((&a % 2).unwrap().values(), values![1, Value::Null, 1].as_slice());
    assert_eq!((&a / 2).unwrap().values(), values![3.5, Value::Null, -3.5].as_slice());
    assert_eq!(a.div(2).unwrap().values(), values![3, Value::Null, -4].as_slice());
    assert_eq!(a.pow(2).unwrap().values(), values![49, Value::Null, 49].as_slice());
    assert_eq!(a.mul(0.5).unwrap().dtype(), DType::Float64);

    assert!(matches!(a.div(0).unwrap_err(), DFrameError::InvalidOperation { .. }));
    let big = arr![i64::MAX].unwrap();
    assert!(matches!((&big + 1).unwrap_err(), DFrameError::InvalidOperation { .. }));
    assert!(matches!(
        (&a + &arr![1].unwrap()).unwrap_err(),
        DFrameError::LengthMismatch { .. }
    ));
}

#[test]
fn test_string_operators() {
    let s = arr!["ab", "c"].unwrap();
    assert_eq!((&s + "!").unwrap().values(), values!["ab!", "c!"].as_slice());
    assert_eq!((&s * 2).unwrap().values(), values!["abab", "cc"].as_slice());
    assert!((&s - "x").is_err());
}

#[test]
fn test_comparison_and_logical_operators() {
    let a = TypedArray::new(vec![Some(1.0), Some(f64::NAN), None]).unwrap();
    assert_eq!(a.gt(0.5).unwrap().values(), values![true, false, Value::Null].as_slice());
    assert_eq!(a.eq(1).unwrap().values(), values![true, false, Value::Null].as_slice());

    let p = arr![true, true, false].unwrap();
    let q = arr![true, false, false].unwrap();
    assert_eq!((&p & &q).unwrap().values(), values![true, false, false].as_slice());
    assert_eq!((&p | &q).unwrap().values(), values![true, true, false].as_slice());
    assert_eq!((&p ^ &q).unwrap().values(), values![false, true, false].as_slice());
    assert_eq!((!&p).unwrap().values(), values![false, false, true].as_slice());

    let ints = arr![6, 3].unwrap();
    assert_eq!(ints.and(3).unwrap().values(), values![2, 3].as_slice());
    assert!(arr!["a"].unwrap().lt(1).is_err());
}

#[test]
fn test_unary_operators() {
    let a = TypedArray::new(vec![Some(-2), None]).unwrap();
    assert_eq!((-&a).unwrap().values(), values![2, Value::Null].as_slice());
    assert_eq!(a.abs().unwrap().values(), values![2, Value::Null].as_slice());
    assert!(a.pos().unwrap().equals(&a));
    assert!(arr!["x"].unwrap().neg().is_err());
}

#[test]
fn test_copy_on_write() {
    let a = arr![1, 2, 3].unwrap();
    let mut b = a.clone();
    assert!(b.is_shared_with(&a));
    let full = a.take(..).unwrap();
    assert!(full.is_shared_with(&a));

    b.set(0, 100).unwrap();
    assert!(!b.is_shared_with(&a));
    assert_eq!(a.at(0).unwrap(), &Value::Int64(1));
}

#[test]
fn test_extend_and_equality() {
    let mut a = arr![1, 2].unwrap();
    a.extend(&arr![3].unwrap()).unwrap();
    assert_eq!(a, arr![1, 2, 3].unwrap());
    assert!(a.extend(&arr!["x"].unwrap()).is_err());
    assert!(!a.equals(&arr![1.0, 2.0, 3.0].unwrap()));
    assert_eq!(a.to_string(), "TypedArray<int64> [1, 2, 3]");
}
