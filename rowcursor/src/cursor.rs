// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row cursor over a driver result set
//!
//! A [`RowCursor`] wraps the opaque handle a driver returned for a query and
//! lets callers read rows without knowing how the driver stores them. It
//! supports two access modes:
//!
//! - **Direct access**: [`RowCursor::seek`], [`RowCursor::fetch_structured`],
//!   [`RowCursor::fetch_indexed`] and [`RowCursor::row_count`] map straight to
//!   the driver primitives.
//! - **Sequential access**: [`RowCursor::restart`], [`RowCursor::current_row`],
//!   [`RowCursor::advance`] and [`RowCursor::has_current`] (or the [`Rows`]
//!   iterator from [`RowCursor::rows`]) walk the result front to back.
//!
//! # Do not mix access modes
//!
//! Both modes move the same driver read pointer. The cursor's own position
//! and one-row lookahead are a cache, not a source of truth, so interleaving
//! direct calls with sequential ones can skip or repeat rows:
//!
//! ```ignore
//! let first = cursor.current_row()?;   // driver pointer now at row 1
//! cursor.fetch_structured()?;          // consumes row 1 behind the cache
//! let next = cursor.advance()?;        // returns row 2, row 1 was skipped
//! ```
//!
//! Pick one mode per cursor.
//!
//! # Backing
//!
//! Each primitive is served by the embedded result when the cursor was built
//! self-contained and that result provides it, and forwarded to the bound
//! [`QueryExecutor`] otherwise. With neither available the operation fails
//! with [`CursorError::NoExecutor`].

use crate::embedded::EmbeddedResult;
use crate::error::{CursorError, Result};
use crate::executor::QueryExecutor;
use crate::handle::ResultHandle;
use crate::row::{IndexedRow, Row};
use crate::row_iterator::RowIterator;
use std::fmt;

const PLAIN_CURSOR: &str = "RowCursor";

/// Lazy cursor over one query's result set
///
/// The executor is borrowed for `'db`, so a cursor can never outlive the
/// database handle that serves it.
pub struct RowCursor<'db> {
    /// `None` once the cursor has been freed
    result: Option<ResultHandle>,
    executor: Option<&'db dyn QueryExecutor>,
    embedded: Option<Box<dyn EmbeddedResult + 'db>>,
    position: usize,
    /// Lookahead for the sequential protocol: unset, a row, or the end marker
    current: Option<Option<Row>>,
    kind: &'static str,
}

impl<'db> RowCursor<'db> {
    /// Cursor whose primitives are served by `executor`
    pub fn new(executor: &'db dyn QueryExecutor, result: ResultHandle) -> Self {
        log::debug!("Opening cursor over {}", result);
        Self::build(Some(executor), result, None, PLAIN_CURSOR)
    }

    /// Cursor with a handle but no database handle
    ///
    /// Every operation on it fails with [`CursorError::NoExecutor`]. Useful
    /// only as a placeholder, or to be re-bound through
    /// [`RowCursor::from_cursor`].
    pub fn detached(result: ResultHandle) -> Self {
        log::debug!("Opening detached cursor over {}", result);
        Self::build(None, result, None, PLAIN_CURSOR)
    }

    /// Cursor that serves rows from its own embedded result
    pub fn self_contained<E>(embedded: E) -> Self
    where
        E: EmbeddedResult + 'db,
    {
        Self::with_embedded(None, ResultHandle::Materialized, embedded)
    }

    /// Cursor with an embedded result and an optional executor for the
    /// primitives the embedded result does not provide
    pub fn with_embedded<E>(
        executor: Option<&'db dyn QueryExecutor>,
        result: ResultHandle,
        embedded: E,
    ) -> Self
    where
        E: EmbeddedResult + 'db,
    {
        let kind = std::any::type_name::<E>();
        log::debug!("Opening self-contained cursor {} over {}", kind, result);
        Self::build(executor, result, Some(Box::new(embedded)), kind)
    }

    /// New cursor over the same result set as `other`
    ///
    /// Only the handle is shared; position and lookahead start fresh, and
    /// `other`'s embedded rows are not carried over.
    pub fn from_cursor(
        executor: Option<&'db dyn QueryExecutor>,
        other: &RowCursor<'_>,
    ) -> Result<Self> {
        let result = other.handle()?.clone();
        log::debug!("Re-wrapping {} in a new cursor", result);
        Ok(Self::build(executor, result, None, PLAIN_CURSOR))
    }

    fn build(
        executor: Option<&'db dyn QueryExecutor>,
        result: ResultHandle,
        embedded: Option<Box<dyn EmbeddedResult + 'db>>,
        kind: &'static str,
    ) -> Self {
        Self {
            result: Some(result),
            executor,
            embedded,
            position: 0,
            current: None,
            kind,
        }
    }

    /// Opaque handle identifying this cursor's result set to its driver
    ///
    /// `None` after [`RowCursor::free`].
    pub fn result(&self) -> Option<&ResultHandle> {
        self.result.as_ref()
    }

    /// Zero-based row position tracked by the cursor
    pub fn position(&self) -> usize {
        self.position
    }

    /// Type name used in error messages
    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn has_executor(&self) -> bool {
        self.executor.is_some()
    }

    pub fn is_self_contained(&self) -> bool {
        self.embedded.is_some()
    }

    pub fn is_freed(&self) -> bool {
        self.result.is_none()
    }

    // ---- direct access ----

    /// Number of rows in the result set
    pub fn row_count(&self) -> Result<usize> {
        self.handle()?;
        if let Some(count) = self.embedded.as_ref().and_then(|e| e.row_count()) {
            return Ok(count);
        }
        Ok(self.executor()?.count_rows(self)?)
    }

    /// Fetch the next row as a structured record, or `None` at the end
    ///
    /// Does not move [`RowCursor::position`].
    pub fn fetch_structured(&mut self) -> Result<Option<Row>> {
        self.handle()?;
        let row = match self.embedded.as_mut().and_then(|e| e.fetch_structured()) {
            Some(outcome) => outcome?,
            None => self.executor()?.fetch_structured(self)?,
        };
        log::trace!(
            "{} fetched {} at position {}",
            self.kind,
            if row.is_some() { "row" } else { "end marker" },
            self.position
        );
        Ok(row)
    }

    /// Fetch the next row as a positional record, or `None` at the end
    ///
    /// Does not move [`RowCursor::position`].
    pub fn fetch_indexed(&mut self) -> Result<Option<IndexedRow>> {
        self.handle()?;
        match self.embedded.as_mut().and_then(|e| e.fetch_indexed()) {
            Some(outcome) => Ok(outcome?),
            None => Ok(self.executor()?.fetch_indexed(self)?),
        }
    }

    /// Move the underlying result set to `position`
    ///
    /// Range checking is the driver's business; its error is returned as-is
    /// and leaves the cursor's position and lookahead unchanged.
    pub fn seek(&mut self, position: usize) -> Result<()> {
        self.seek_underlying(position)?;
        self.position = position;
        self.current = None;
        log::debug!("{} seeked to row {}", self.kind, position);
        Ok(())
    }

    /// Release the cursor's hold on its executor and result handle
    ///
    /// Idempotent. Any later operation fails with [`CursorError::Freed`].
    pub fn free(&mut self) {
        if let Some(result) = self.result.take() {
            log::debug!("Freeing {} over {}", self.kind, result);
        }
        self.executor = None;
        self.embedded = None;
        self.current = None;
    }

    // ---- sequential access ----

    /// Rewind to the first row and clear the lookahead
    ///
    /// The underlying result is only repositioned when it has rows, so this
    /// is safe on an empty result set.
    pub fn restart(&mut self) -> Result<()> {
        if self.row_count()? > 0 {
            self.seek_underlying(0)?;
        }
        self.position = 0;
        self.current = None;
        log::debug!("{} restarted", self.kind);
        Ok(())
    }

    /// Row at the current position without advancing
    ///
    /// Only the first call after a move reaches the driver; later calls are
    /// answered from the lookahead.
    pub fn current_row(&mut self) -> Result<Option<Row>> {
        self.handle()?;
        if let Some(current) = &self.current {
            return Ok(current.clone());
        }
        let row = self.fetch_structured()?;
        self.current = Some(row.clone());
        Ok(row)
    }

    /// Move to the next position and return the row found there
    pub fn advance(&mut self) -> Result<Option<Row>> {
        self.handle()?;
        self.current = None;
        self.position += 1;
        let row = self.fetch_structured()?;
        self.current = Some(row.clone());
        Ok(row)
    }

    /// Whether the current position holds a row
    pub fn has_current(&mut self) -> Result<bool> {
        Ok(self.current_row()?.is_some())
    }

    /// Restart and iterate over every row
    pub fn rows(&mut self) -> Result<Rows<'_, 'db>> {
        self.restart()?;
        Ok(Rows {
            cursor: self,
            started: false,
            done: false,
        })
    }

    // ---- helpers ----

    fn handle(&self) -> Result<&ResultHandle> {
        self.result.as_ref().ok_or_else(|| {
            log::error!("{} used after free", self.kind);
            CursorError::Freed { cursor: self.kind }
        })
    }

    fn executor(&self) -> Result<&'db dyn QueryExecutor> {
        self.executor.ok_or_else(|| {
            log::error!("{} needs a database handle for iteration", self.kind);
            CursorError::NoExecutor { cursor: self.kind }
        })
    }

    fn seek_underlying(&mut self, position: usize) -> Result<()> {
        self.handle()?;
        if let Some(outcome) = self.embedded.as_mut().and_then(|e| e.seek(position)) {
            return Ok(outcome?);
        }
        Ok(self.executor()?.seek_to(self, position)?)
    }
}

impl fmt::Debug for RowCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowCursor")
            .field("kind", &self.kind)
            .field("result", &self.result)
            .field("has_executor", &self.executor.is_some())
            .field("self_contained", &self.embedded.is_some())
            .field("position", &self.position)
            .field("current", &self.current)
            .finish()
    }
}

/// Iterator over a cursor's rows using the sequential protocol
///
/// Yields the current row, then keeps advancing until the end marker. Stops
/// after the first error.
pub struct Rows<'c, 'db> {
    cursor: &'c mut RowCursor<'db>,
    started: bool,
    done: bool,
}

impl Rows<'_, '_> {
    /// Position of the row most recently yielded
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Rows<'_, '_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let step = if self.started {
            self.cursor.advance()
        } else {
            self.started = true;
            self.cursor.current_row()
        };
        match step {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl RowIterator for Rows<'_, '_> {
    fn size_hint_rows(&self) -> Option<usize> {
        self.cursor.row_count().ok()
    }
}
