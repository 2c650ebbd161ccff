//! Executor whose primitives always fail

#![allow(dead_code)]

use rowcursor::{DriverError, IndexedRow, QueryExecutor, Row, RowCursor};
use thiserror::Error;

/// Error a real driver might raise when the connection drops mid-query
#[derive(Error, Debug, PartialEq)]
#[error("connection lost while reading {0}")]
pub struct ConnectionLost(pub String);

pub struct FailingExecutor;

impl FailingExecutor {
    fn fail(cursor: &RowCursor<'_>) -> DriverError {
        let handle = cursor
            .result()
            .map(ToString::to_string)
            .unwrap_or_default();
        Box::new(ConnectionLost(handle))
    }
}

impl QueryExecutor for FailingExecutor {
    fn count_rows(&self, cursor: &RowCursor<'_>) -> Result<usize, DriverError> {
        Err(Self::fail(cursor))
    }

    fn fetch_structured(&self, cursor: &RowCursor<'_>) -> Result<Option<Row>, DriverError> {
        Err(Self::fail(cursor))
    }

    fn fetch_indexed(&self, cursor: &RowCursor<'_>) -> Result<Option<IndexedRow>, DriverError> {
        Err(Self::fail(cursor))
    }

    fn seek_to(&self, cursor: &RowCursor<'_>, _position: usize) -> Result<(), DriverError> {
        Err(Self::fail(cursor))
    }
}
