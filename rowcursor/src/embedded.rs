// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Self-contained result sets
//!
//! An embedded result lets a cursor serve rows without a database handle.
//! Every primitive is optional: one that returns `None` is not provided, and
//! the cursor delegates that call to its executor (failing without one).

use crate::error::DriverError;
use crate::row::{check_row_widths, ColumnMismatch, IndexedRow, Row};
use crate::value::Value;
use std::sync::Arc;

/// Row access for a cursor that carries its own rows
///
/// Each method returns `None` when this result does not serve that call.
pub trait EmbeddedResult {
    fn row_count(&self) -> Option<usize> {
        None
    }

    fn fetch_structured(&mut self) -> Option<Result<Option<Row>, DriverError>> {
        None
    }

    fn fetch_indexed(&mut self) -> Option<Result<Option<IndexedRow>, DriverError>> {
        None
    }

    /// Reposition the read pointer
    fn seek(&mut self, _position: usize) -> Option<Result<(), DriverError>> {
        None
    }
}

/// Seek target beyond the rows held by a [`BufferedResult`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot seek to row {position}: result holds {row_count} row(s)")]
pub struct SeekOutOfRange {
    pub position: usize,
    pub row_count: usize,
}

/// Fully materialized rows with random access
///
/// Seeking to `row_count` is accepted and leaves the result exhausted.
#[derive(Debug, Clone)]
pub struct BufferedResult {
    rows: Vec<Row>,
    next: usize,
}

impl BufferedResult {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows, next: 0 }
    }

    /// Build rows from shared column names and positional values.
    /// Every row must hold exactly one value per column.
    pub fn from_values(
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<Self, ColumnMismatch> {
        check_row_widths(columns.len(), &rows)?;

        let columns: Arc<[String]> = columns.into();
        Ok(Self::new(
            rows.into_iter()
                .map(|values| Row::new(Arc::clone(&columns), values))
                .collect(),
        ))
    }

    fn take_next(&mut self) -> Option<Row> {
        let row = self.rows.get(self.next).cloned();
        if row.is_some() {
            self.next += 1;
        }
        row
    }
}

impl EmbeddedResult for BufferedResult {
    fn row_count(&self) -> Option<usize> {
        Some(self.rows.len())
    }

    fn fetch_structured(&mut self) -> Option<Result<Option<Row>, DriverError>> {
        Some(Ok(self.take_next()))
    }

    fn fetch_indexed(&mut self) -> Option<Result<Option<IndexedRow>, DriverError>> {
        Some(Ok(self.take_next().map(Row::into_indexed)))
    }

    fn seek(&mut self, position: usize) -> Option<Result<(), DriverError>> {
        if position > self.rows.len() {
            let err = SeekOutOfRange {
                position,
                row_count: self.rows.len(),
            };
            return Some(Err(err.into()));
        }
        self.next = position;
        Some(Ok(()))
    }
}

impl From<Vec<Row>> for BufferedResult {
    fn from(rows: Vec<Row>) -> Self {
        BufferedResult::new(rows)
    }
}

/// Rows that can be read once, front to back
///
/// There is no seek override, so repositioning a cursor over this result
/// needs an executor.
#[derive(Debug)]
pub struct ForwardOnlyResult {
    rows: std::vec::IntoIter<Row>,
    count: usize,
}

impl ForwardOnlyResult {
    pub fn new(rows: Vec<Row>) -> Self {
        let count = rows.len();
        Self {
            rows: rows.into_iter(),
            count,
        }
    }
}

impl EmbeddedResult for ForwardOnlyResult {
    fn row_count(&self) -> Option<usize> {
        Some(self.count)
    }

    fn fetch_structured(&mut self) -> Option<Result<Option<Row>, DriverError>> {
        Some(Ok(self.rows.next()))
    }

    fn fetch_indexed(&mut self) -> Option<Result<Option<IndexedRow>, DriverError>> {
        Some(Ok(self.rows.next().map(Row::into_indexed)))
    }
}
