// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row Iterator - lazy row streams
//!
//! Lets callers consume rows one at a time instead of materializing the
//! whole result set.

use crate::error::CursorError;
use crate::row::Row;

/// Iterator trait for lazy row evaluation
///
/// Without lazy evaluation:
/// ```ignore
/// let rows: Vec<Row> = fetch_everything(&mut cursor)?; // Loads all rows in memory
/// for row in rows.into_iter().take(10) {
///     process(row);
/// }
/// ```
///
/// With lazy evaluation:
/// ```ignore
/// for row in cursor.rows()?.take(10) { // Stops fetching after 10 rows
///     process(row?);
/// }
/// ```
pub trait RowIterator: Iterator<Item = Result<Row, CursorError>> {
    /// Total row count if the source knows it without scanning
    fn size_hint_rows(&self) -> Option<usize> {
        None
    }
}

/// Utility function to collect iterator results
///
/// Convenience wrapper for `.collect::<Result<Vec<_>, _>>()`
pub fn collect_rows<I>(iter: I) -> Result<Vec<Row>, CursorError>
where
    I: Iterator<Item = Result<Row, CursorError>>,
{
    iter.collect()
}
