use dframe::{
    DFrameError, DType, DataFrame, GridSource, Payload, Row, RowSource, Shape, TabularSource,
    TypedArray, Value, df, values,
};

/// CSV-like source: a header plus rows of raw strings.
struct CsvRows {
    header: Vec<&'static str>,
    lines: Vec<Vec<&'static str>>,
}

impl RowSource for CsvRows {
    fn header(&self) -> Option<Vec<String>> {
        Some(self.header.iter().map(|h| h.to_string()).collect())
    }

    fn rows(&self) -> impl Iterator<Item = Row> + '_ {
        self.lines
            .iter()
            .map(|line| line.iter().map(|cell| Value::from(*cell)).collect())
    }
}

/// Row-major numeric matrix.
struct Matrix {
    n_rows: usize,
    n_cols: usize,
    data: Vec<f64>,
}

impl GridSource for Matrix {
    fn grid_shape(&self) -> (usize, usize) {
        (self.n_rows, self.n_cols)
    }

    fn cell(&self, row: usize, col: usize) -> Option<Value> {
        self.data.get(row * self.n_cols + col).map(|v| Value::Float64(*v))
    }
}

/// Column store of another library.
struct Foreign {
    cols: Vec<(&'static str, Vec<i64>)>,
}

impl TabularSource for Foreign {
    fn column_names(&self) -> Vec<String> {
        self.cols.iter().map(|(n, _)| n.to_string()).collect()
    }

    fn column(&self, idx: usize) -> Vec<Value> {
        self.cols[idx].1.iter().map(|v| Value::from(*v)).collect()
    }
}

#[test]
fn test_named_columns_round_trip() {
    let c1 = TypedArray::new(vec![1, 2]).unwrap();
    let c2 = TypedArray::new(vec!["a", "b"]).unwrap();
    let frame = DataFrame::from_named_columns(vec![("n1", &c1), ("n2", &c2)]).unwrap();
    assert_eq!(frame.columns(), vec![c1.clone(), c2.clone()]);
    assert_eq!(frame.names(), &["n1", "n2"]);
    assert_eq!(frame.n_rows(), c1.len());

    let shared = DataFrame::from_arrays(vec![c1.clone(), c2], None).unwrap();
    assert!(shared.cols()[0].is_shared_with(&c1));
    assert_eq!(shared.col_names(), vec!["C0", "C1"]);
}

#[test]
fn test_named_columns_mixed_scalars() {
    let frame = df! { "id" => vec![1, 2, 3], "tag" => "t", "w" => 0.5 }.unwrap();
    assert_eq!(frame.shape_2d(), (3, 3));
    assert_eq!(frame.dtypes(), vec![DType::Int64, DType::String, DType::Float64]);

    let err = df! { "a" => vec![1, 2], "b" => vec![1, 2, 3] }.unwrap_err();
    assert_eq!(err, DFrameError::RowCountMismatch { expected: 2, found: 3 });

    let err = df! { "a" => vec![Payload::from(vec![1])] }.unwrap_err();
    assert!(matches!(err, DFrameError::InvalidAssignment(_)));
}

#[test]
fn test_rows_and_columns() {
    let rows = vec![values![1, "x"], values![2, Value::Null]];
    let frame = DataFrame::from_rows(rows.clone(), Some(vec!["n".into(), "s".into()])).unwrap();
    assert_eq!(frame.rows(), rows);
    assert_eq!(frame.cols()[1].null_count(), 1);

    let by_cols = DataFrame::from_columns(vec![values![1, 2], values!["x", Value::Null]], None).unwrap();
    assert_eq!(by_cols.rows(), rows);

    let err = DataFrame::from_rows(vec![values![1], values![2, 3]], None).unwrap_err();
    assert_eq!(err, DFrameError::RaggedRows { row: 1, expected: 1, found: 2 });

    let err = DataFrame::from_rows(vec![values![1, "x"], values!["y", 2]], None).unwrap_err();
    assert!(matches!(err, DFrameError::DtypeConflict { .. }));
}

#[test]
fn test_shape_constructor() {
    let frame = DataFrame::from_shape((2, 3), Some(vec!["a".into(), "b".into(), "c".into()])).unwrap();
    assert_eq!(frame.shape_2d(), (2, 3));
    assert!(frame.cols().iter().all(|c| c.null_count() == 2));
    assert!(DataFrame::from_shape((1, 2), Some(vec!["a".into(), "a".into()])).is_err());

    let mut frame = frame;
    frame.set((0, "a"), 1).unwrap();
    assert_eq!(frame.dtypes()[0], DType::Int64);
}

#[test]
fn test_grid_source() {
    let m = Matrix {
        n_rows: 2,
        n_cols: 2,
        data: vec![1.0, f64::NAN, 3.0, 4.0],
    };
    let frame = DataFrame::from_grid(&m, None).unwrap();
    assert_eq!(frame.get((0, 1)).unwrap().into_scalar().unwrap(), Value::Null);
    assert_eq!(frame.get((1, 0)).unwrap().into_scalar().unwrap(), Value::Float64(3.0));

    let short = Matrix {
        n_rows: 2,
        n_cols: 2,
        data: vec![1.0, 2.0, 3.0],
    };
    assert!(matches!(
        DataFrame::from_grid(&short, None).unwrap_err(),
        DFrameError::RaggedRows { row: 1, .. }
    ));
}

#[test]
fn test_external_table() {
    let ok = Foreign {
        cols: vec![("x", vec![1, 2]), ("y", vec![3, 4])],
    };
    let frame = DataFrame::from_external_table(&ok).unwrap();
    assert_eq!(frame.col_names(), vec!["x", "y"]);

    let dup = Foreign {
        cols: vec![("x", vec![1]), ("x", vec![2])],
    };
    assert_eq!(
        DataFrame::from_external_table(&dup).unwrap_err(),
        DFrameError::DuplicateColumnName("x".into())
    );
}

#[test]
fn test_row_source_with_dtype_inference() {
    let csv = CsvRows {
        header: vec!["id", "ratio", "ok", "label"],
        lines: vec![vec!["1", "0.5", "True", "a"], vec!["2", "1", "False", "b"]],
    };
    let raw = DataFrame::from_row_source(&csv, false).unwrap();
    assert!(raw.dtypes().iter().all(|d| *d == DType::String));

    let typed = DataFrame::from_row_source(&csv, true).unwrap();
    assert_eq!(typed.dtypes(), vec![DType::Int64, DType::Float64, DType::Boolean, DType::String]);
    assert_eq!(typed.get((1, "ratio")).unwrap().into_scalar().unwrap(), Value::Float64(1.0));
}

#[test]
fn test_structural_operations() {
    let mut frame = df! { "a" => vec![1, 2, 3], "x" => vec![4, 5, 6] }.unwrap();
    let before = frame.clone();
    assert!(frame.rename([("a", "x")]).is_err());
    assert_eq!(frame, before);

    frame.rename([("a", "b"), ("x", "a")]).unwrap();
    assert_eq!(frame.col_names(), vec!["b", "a"]);
    assert_eq!(frame.get((0, "a")).unwrap().into_scalar().unwrap(), Value::Int64(4));

    frame.reset_names();
    assert_eq!(frame.col_names(), vec!["C0", "C1"]);

    let head = frame.head(2);
    assert_eq!(head.shape_2d(), (2, 2));
    assert!(!head.equals(&frame));
    assert!(frame.equals(&frame.head(3)));

    let items: Vec<(&str, DType)> = frame.items().map(|(n, c)| (n, c.dtype())).collect();
    assert_eq!(items, vec![("C0", DType::Int64), ("C1", DType::Int64)]);
    assert!(frame.check_invariants().is_ok());
}

#[test]
fn test_frame_payload_assigns_columns() {
    let mut target = df! { "a" => vec![0, 0], "b" => vec![0, 0] }.unwrap();
    let source = df! { "p" => vec![1, 2], "q" => vec![3, 4] }.unwrap();
    target.set(vec!["a", "b"], &source).unwrap();
    assert_eq!(target.rows(), vec![values![1, 3], values![2, 4]]);
}
