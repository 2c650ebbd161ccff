// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! In-process executor
//!
//! [`MemoryExecutor`] plays the role of a database handle whose driver keeps
//! result sets in memory. Each registered result gets a numeric token and its
//! own read pointer, so any number of cursors can be open over one executor.

use crate::config::MemoryExecutorConfig;
use crate::cursor::RowCursor;
use crate::error::DriverError;
use crate::executor::QueryExecutor;
use crate::handle::ResultHandle;
use crate::row::{check_row_widths, ColumnMismatch, IndexedRow, Row};
use crate::value::Value;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by the in-memory driver
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MemoryDriverError {
    #[error("Unknown result set: {0}")]
    UnknownResult(String),

    #[error("Seek to row {position} out of range for result with {row_count} row(s)")]
    SeekOutOfRange { position: usize, row_count: usize },

    #[error("Too many open result sets (limit {limit})")]
    TooManyResults { limit: usize },

    #[error("Row {row} has {found} value(s), expected {expected}")]
    ColumnMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl From<ColumnMismatch> for MemoryDriverError {
    fn from(err: ColumnMismatch) -> Self {
        MemoryDriverError::ColumnMismatch {
            row: err.row,
            expected: err.expected,
            found: err.found,
        }
    }
}

struct StoredResult {
    columns: Arc<[String]>,
    rows: Vec<Vec<Value>>,
    /// Driver read pointer
    next: usize,
    /// Number of fetch calls served, including ones that hit the end
    fetches: usize,
}

impl StoredResult {
    fn fetch(&mut self) -> Option<Row> {
        self.fetches += 1;
        let values = self.rows.get(self.next)?.clone();
        self.next += 1;
        Some(Row::new(Arc::clone(&self.columns), values))
    }
}

#[derive(Default)]
struct State {
    next_id: u64,
    results: HashMap<u64, StoredResult>,
}

/// Executor serving result sets held in process memory
pub struct MemoryExecutor {
    config: MemoryExecutorConfig,
    state: Mutex<State>,
}

impl Default for MemoryExecutor {
    fn default() -> Self {
        Self::new(MemoryExecutorConfig::default())
    }
}

impl MemoryExecutor {
    pub fn new(config: MemoryExecutorConfig) -> Self {
        Self {
            config,
            state: Mutex::new(State::default()),
        }
    }

    pub fn config(&self) -> &MemoryExecutorConfig {
        &self.config
    }

    /// Store a result set and return the handle identifying it
    pub fn register(
        &self,
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<ResultHandle, MemoryDriverError> {
        check_row_widths(columns.len(), &rows)?;

        let mut state = self.state.lock();
        if state.results.len() >= self.config.max_open_results {
            log::warn!(
                "Refusing new result set: {} already open",
                state.results.len()
            );
            return Err(MemoryDriverError::TooManyResults {
                limit: self.config.max_open_results,
            });
        }

        state.next_id += 1;
        let id = state.next_id;
        log::debug!("Registered result#{} with {} row(s)", id, rows.len());
        state.results.insert(
            id,
            StoredResult {
                columns: columns.into(),
                rows,
                next: 0,
                fetches: 0,
            },
        );
        Ok(ResultHandle::Token(id))
    }

    /// Cursor over a registered result set
    pub fn cursor(&self, result: ResultHandle) -> RowCursor<'_> {
        RowCursor::new(self, result)
    }

    /// Register rows and open a cursor over them in one step
    pub fn open(
        &self,
        columns: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> Result<RowCursor<'_>, MemoryDriverError> {
        let handle = self.register(columns, rows)?;
        Ok(self.cursor(handle))
    }

    /// Drop a result set. Cursors still holding its handle will get
    /// [`MemoryDriverError::UnknownResult`] from then on.
    pub fn release(&self, result: &ResultHandle) -> bool {
        let released = result
            .as_token()
            .map(|id| self.state.lock().results.remove(&id).is_some())
            .unwrap_or(false);
        if released {
            log::debug!("Released {}", result);
        }
        released
    }

    pub fn open_results(&self) -> usize {
        self.state.lock().results.len()
    }

    /// Number of fetches the driver has served for `result`
    pub fn fetch_count(&self, result: &ResultHandle) -> Option<usize> {
        let id = result.as_token()?;
        self.state.lock().results.get(&id).map(|r| r.fetches)
    }

    fn with_result<T>(
        &self,
        cursor: &RowCursor<'_>,
        f: impl FnOnce(&mut StoredResult) -> Result<T, MemoryDriverError>,
    ) -> Result<T, DriverError> {
        let handle = cursor
            .result()
            .ok_or_else(|| MemoryDriverError::UnknownResult("freed cursor".to_string()))?;
        let id = handle
            .as_token()
            .ok_or_else(|| MemoryDriverError::UnknownResult(handle.to_string()))?;

        let mut state = self.state.lock();
        let stored = state
            .results
            .get_mut(&id)
            .ok_or_else(|| MemoryDriverError::UnknownResult(handle.to_string()))?;
        Ok(f(stored)?)
    }
}

impl QueryExecutor for MemoryExecutor {
    fn count_rows(&self, cursor: &RowCursor<'_>) -> Result<usize, DriverError> {
        self.with_result(cursor, |r| Ok(r.rows.len()))
    }

    fn fetch_structured(&self, cursor: &RowCursor<'_>) -> Result<Option<Row>, DriverError> {
        self.with_result(cursor, |r| Ok(r.fetch()))
    }

    fn fetch_indexed(&self, cursor: &RowCursor<'_>) -> Result<Option<IndexedRow>, DriverError> {
        self.with_result(cursor, |r| Ok(r.fetch().map(Row::into_indexed)))
    }

    fn seek_to(&self, cursor: &RowCursor<'_>, position: usize) -> Result<(), DriverError> {
        let allow_end = self.config.allow_seek_to_end;
        self.with_result(cursor, |r| {
            let row_count = r.rows.len();
            let in_range = position < row_count || (allow_end && position == row_count);
            if !in_range {
                return Err(MemoryDriverError::SeekOutOfRange {
                    position,
                    row_count,
                });
            }
            r.next = position;
            Ok(())
        })
    }
}
