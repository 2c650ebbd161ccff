//! Tests for direct access through seek and fetch
//!
//! Also covers cursors without an executor, use after free, driver error
//! pass-through and the documented effect of mixing access modes

#[path = "testutils/mod.rs"]
mod testutils;

use rowcursor::{CursorError, MemoryDriverError, MemoryExecutorConfig, RowCursor, Value};
use testutils::failing_executor::{ConnectionLost, FailingExecutor};
use testutils::test_fixture::{name_of, CursorFixture};

#[test]
fn test_seek_positions_next_fetch() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A", "B", "C"]);

    cursor.seek(2).expect("Failed to seek");
    assert_eq!(cursor.position(), 2);
    assert_eq!(name_of(&cursor.current_row().unwrap().unwrap()), "C");

    cursor.seek(0).unwrap();
    let row = cursor.fetch_structured().unwrap().unwrap();
    assert_eq!(name_of(&row), "A");
    // Direct fetches leave the position alone
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_seek_invalidates_lookahead() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A", "B"]);

    assert_eq!(name_of(&cursor.current_row().unwrap().unwrap()), "A");
    cursor.seek(1).unwrap();
    assert_eq!(name_of(&cursor.current_row().unwrap().unwrap()), "B");
}

#[test]
fn test_seek_out_of_range_passes_driver_error_through() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A", "B"]);
    cursor.seek(1).unwrap();

    let err = cursor.seek(5).unwrap_err();
    assert_eq!(
        err.driver_error::<MemoryDriverError>(),
        Some(&MemoryDriverError::SeekOutOfRange {
            position: 5,
            row_count: 2
        })
    );
    assert_eq!(
        err.to_string(),
        "Seek to row 5 out of range for result with 2 row(s)"
    );
    // Failed seek keeps the previous position
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_seek_to_end_follows_config() {
    let strict = CursorFixture::new();
    let mut cursor = strict.cursor(&["A"]);
    assert!(cursor.seek(1).is_err());

    let lenient = CursorFixture::with_config(MemoryExecutorConfig::default().with_seek_to_end(true));
    let mut cursor = lenient.cursor(&["A"]);
    cursor.seek(1).expect("Seek to end should be allowed");
    assert!(!cursor.has_current().unwrap());
}

#[test]
fn test_fetch_indexed() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A"]);

    let row = cursor.fetch_indexed().unwrap().unwrap();
    assert_eq!(row.get(0), Some(&Value::Integer(0)));
    assert_eq!(row.get(1), Some(&Value::from("A")));
    assert!(cursor.fetch_indexed().unwrap().is_none());
}

#[test]
fn test_no_executor_vs_bound_executor() {
    let fixture = CursorFixture::new();
    let handle = fixture.people(&["A"]);

    let mut detached = RowCursor::detached(handle.clone());
    let err = detached.fetch_structured().unwrap_err();
    assert!(matches!(err, CursorError::NoExecutor { cursor: "RowCursor" }));
    assert_eq!(
        err.to_string(),
        "RowCursor needs a database handle for iteration"
    );

    let mut bound = RowCursor::from_cursor(Some(fixture.executor()), &detached).unwrap();
    assert_eq!(bound.result(), Some(&handle));
    assert!(bound.fetch_structured().unwrap().is_some());
}

#[test]
fn test_operations_fail_after_free() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A", "B"]);
    assert!(cursor.current_row().unwrap().is_some());

    cursor.free();
    assert!(cursor.is_freed());
    assert!(!cursor.has_executor());

    assert!(cursor.row_count().unwrap_err().is_freed());
    assert!(cursor.fetch_structured().unwrap_err().is_freed());
    assert!(cursor.fetch_indexed().unwrap_err().is_freed());
    assert!(cursor.seek(0).unwrap_err().is_freed());
    assert!(cursor.restart().unwrap_err().is_freed());
    // The cached row is not served after free
    assert!(cursor.current_row().unwrap_err().is_freed());
    assert!(cursor.advance().unwrap_err().is_freed());
    assert!(cursor.rows().is_err());
    assert!(RowCursor::from_cursor(Some(fixture.executor()), &cursor).is_err());
}

#[test]
fn test_free_leaves_sibling_cursors_alone() {
    let fixture = CursorFixture::new();
    let handle = fixture.people(&["A", "B"]);
    let mut first = fixture.executor().cursor(handle.clone());
    let mut second = fixture.executor().cursor(handle);

    first.free();
    assert_eq!(second.row_count().unwrap(), 2);
    assert!(second.fetch_structured().unwrap().is_some());
    assert_eq!(fixture.executor().open_results(), 1);
}

#[test]
fn test_driver_errors_are_not_translated() {
    let executor = FailingExecutor;
    let mut cursor = RowCursor::new(&executor, rowcursor::ResultHandle::Token(9));

    let err = cursor.fetch_structured().unwrap_err();
    assert_eq!(
        err.driver_error::<ConnectionLost>(),
        Some(&ConnectionLost("result#9".to_string()))
    );
    assert_eq!(err.to_string(), "connection lost while reading result#9");

    assert!(cursor.restart().unwrap_err().driver_error::<ConnectionLost>().is_some());
    assert!(cursor.seek(3).unwrap_err().driver_error::<ConnectionLost>().is_some());
    assert_eq!(cursor.position(), 0);
}

#[test]
fn test_rows_needs_driver_to_restart() {
    let executor = FailingExecutor;
    let mut cursor = RowCursor::new(&executor, rowcursor::ResultHandle::Token(1));

    // rows() restarts first, which already needs the driver
    assert!(cursor.rows().is_err());
}

#[test]
fn test_mixing_access_modes_skips_rows() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A", "B", "C"]);

    assert_eq!(name_of(&cursor.current_row().unwrap().unwrap()), "A");
    // A direct fetch moves the driver pointer behind the lookahead's back
    assert_eq!(name_of(&cursor.fetch_structured().unwrap().unwrap()), "B");
    // so the next sequential step lands on C and B is never seen there
    assert_eq!(name_of(&cursor.advance().unwrap().unwrap()), "C");
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_mixing_access_modes_repeats_rows() {
    let fixture = CursorFixture::new();
    let mut cursor = fixture.cursor(&["A", "B", "C"]);

    assert_eq!(name_of(&cursor.advance().unwrap().unwrap()), "A");
    assert_eq!(name_of(&cursor.advance().unwrap().unwrap()), "B");
    // A direct seek rewinds the driver; the sequential walk reads B again
    cursor.seek(1).unwrap();
    assert_eq!(name_of(&cursor.advance().unwrap().unwrap()), "B");
    assert_eq!(cursor.position(), 2);
}
