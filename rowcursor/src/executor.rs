// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Query executor interface
//!
//! The executor is the database handle that produced a result set. It knows
//! how to count, fetch and seek against the driver's native representation;
//! cursors forward those primitives to it, passing themselves so the executor
//! can pick the right result set out of [`RowCursor::result`].

use crate::cursor::RowCursor;
use crate::error::DriverError;
use crate::row::{IndexedRow, Row};

/// Low-level result-set primitives a database binding provides to cursors
///
/// A single executor may serve many open cursors at once. Methods take
/// `&self`; bindings that keep per-result state use interior mutability.
/// Returning `Ok(None)` from a fetch means the result set is exhausted.
pub trait QueryExecutor {
    /// Number of rows in the cursor's result set
    fn count_rows(&self, cursor: &RowCursor<'_>) -> Result<usize, DriverError>;

    /// Fetch the row under the driver's read pointer as a structured record
    /// and move the pointer forward
    fn fetch_structured(&self, cursor: &RowCursor<'_>) -> Result<Option<Row>, DriverError>;

    /// Fetch the row under the driver's read pointer as a positional record
    /// and move the pointer forward
    fn fetch_indexed(&self, cursor: &RowCursor<'_>) -> Result<Option<IndexedRow>, DriverError>;

    /// Move the driver's read pointer to `position`
    fn seek_to(&self, cursor: &RowCursor<'_>, position: usize) -> Result<(), DriverError>;
}
