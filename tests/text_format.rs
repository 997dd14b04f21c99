//! Integration tests for the text format and file helpers

use std::fs;
use std::io::Write;

use sparse_matrix::{
    parse, parse_with, read_matrix, read_matrix_with, serialize, write_matrix, MatrixError,
    ParseOptions, SparseMatrix,
};
use tempfile::{tempdir, NamedTempFile};

const SAMPLE: &str = "rows=4\ncols=5\n(3,4,-2)\n(0,1,7)\n\n(2,0,1)\n(0,1,9)\n";

#[test]
fn test_parse_sample() {
    let matrix: SparseMatrix<i64> = parse(SAMPLE).unwrap();

    assert_eq!(matrix.shape(), (4, 5));
    // Later duplicate wins
    assert_eq!(matrix.get_element(0, 1), 9);
    assert_eq!(matrix.triplets(), vec![(0, 1, 9), (2, 0, 1), (3, 4, -2)]);
}

#[test]
fn test_serialize_is_sorted_and_stable() {
    let forward = SparseMatrix::from_triplets(3, 3, vec![(0, 0, 1i64), (1, 2, 2), (2, 1, 3)]).unwrap();
    let backward = SparseMatrix::from_triplets(3, 3, vec![(2, 1, 3i64), (1, 2, 2), (0, 0, 1)]).unwrap();

    let text = serialize(&forward);
    assert_eq!(text, "rows=3\ncols=3\n(0,0,1)\n(1,2,2)\n(2,1,3)\n");
    assert_eq!(text, serialize(&backward));
}

#[test]
fn test_text_roundtrip() {
    let matrix: SparseMatrix<i64> = parse(SAMPLE).unwrap();
    let reparsed: SparseMatrix<i64> = parse(&serialize(&matrix)).unwrap();
    assert_eq!(reparsed, matrix);
}

#[test]
fn test_two_integer_entry_is_malformed() {
    let text = "rows=3\ncols=3\n(0,0,1)\n(1,2)\n(2,2,2)\n";
    match parse::<i64>(text) {
        Err(MatrixError::MalformedInput { line, content }) => {
            assert_eq!(line, 4);
            assert_eq!(content, "(1,2)");
        }
        other => panic!("expected MalformedInput, got {other:?}"),
    }
}

#[test]
fn test_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("result.txt");

    let matrix: SparseMatrix<i64> = parse(SAMPLE).unwrap();
    write_matrix(&path, &matrix).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "rows=4\ncols=5\n(0,1,9)\n(2,0,1)\n(3,4,-2)\n"
    );

    let loaded: SparseMatrix<i64> = read_matrix(&path).unwrap();
    assert_eq!(loaded, matrix);
}

#[test]
fn test_read_with_out_of_bounds_policy() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "rows=2\ncols=2\n(0,0,1)\n(0,9,4)\n(1,1,2)\n").unwrap();

    let err = read_matrix::<i64, _>(temp_file.path()).unwrap_err();
    assert!(err.is_out_of_bounds());

    let matrix: SparseMatrix<i64> =
        read_matrix_with(temp_file.path(), &ParseOptions::skipping_out_of_bounds()).unwrap();
    assert_eq!(matrix.triplets(), vec![(0, 0, 1), (1, 1, 2)]);
}

#[test]
fn test_negative_coordinate_is_out_of_bounds() {
    let text = "rows=2\ncols=2\n(0,0,1)\n(-1,0,5)\n(1,1,2)\n";

    match parse::<i64>(text) {
        Err(MatrixError::OutOfBounds { row: -1, col: 0, .. }) => {}
        other => panic!("expected OutOfBounds, got {other:?}"),
    }

    let matrix: SparseMatrix<i64> =
        parse_with(text, &ParseOptions::skipping_out_of_bounds()).unwrap();
    assert_eq!(matrix.triplets(), vec![(0, 0, 1), (1, 1, 2)]);
}

#[test]
fn test_plus_sign_and_spaced_header_are_rejected() {
    for text in ["rows= 5\ncols=2\n", "rows=+5\ncols=2\n"] {
        assert!(
            matches!(parse::<i64>(text), Err(MatrixError::MalformedHeader { line: 1, .. })),
            "{text:?}"
        );
    }
    for entry in ["(+1,0,2)", "(0,0,+3)"] {
        let text = format!("rows=5\ncols=5\n{entry}\n");
        assert!(
            matches!(parse::<i64>(&text), Err(MatrixError::MalformedInput { line: 3, .. })),
            "{entry:?}"
        );
    }
}

#[test]
fn test_missing_file_is_io_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does_not_exist.txt");

    match read_matrix::<i64, _>(&path) {
        Err(MatrixError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn test_write_into_missing_directory_is_io_failure() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("out.txt");

    let err = write_matrix(&path, &SparseMatrix::<i64>::identity(2)).unwrap_err();
    assert!(matches!(err, MatrixError::Io { .. }));
    assert!(err.to_string().contains("out.txt"));
}
