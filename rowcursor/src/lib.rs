// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! rowcursor - lazy row cursors over database result sets
//!
//! A [`RowCursor`] sits between application code and whatever a database
//! driver returns for a query. Callers read rows through it without knowing
//! how the driver represents the result set.
//!
//! # Usage
//!
//! ```ignore
//! use rowcursor::{MemoryExecutor, Value};
//!
//! let db = MemoryExecutor::default();
//! let mut cursor = db.open(
//!     vec!["id".into(), "name".into()],
//!     vec![
//!         vec![Value::Integer(1), Value::from("Alice")],
//!         vec![Value::Integer(2), Value::from("Bob")],
//!     ],
//! )?;
//!
//! for row in cursor.rows()? {
//!     println!("{:?}", row?.get("name"));
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────┐
//! │   Application Code           │
//! └──────────────────────────────┘
//!               │
//!               ▼
//! ┌──────────────────────────────┐
//! │  RowCursor                   │
//! │  - position / lookahead      │
//! │  - EmbeddedResult (optional) │
//! └──────────────────────────────┘
//!               │  count / fetch / seek
//!               ▼
//! ┌──────────────────────────────┐
//! │  QueryExecutor (driver side) │
//! └──────────────────────────────┘
//! ```

pub mod config;
pub mod cursor;
pub mod embedded;
pub mod error;
pub mod executor;
pub mod handle;
pub mod memory;
pub mod row;
pub mod row_iterator;
pub mod value;

pub use config::MemoryExecutorConfig;
pub use cursor::{RowCursor, Rows};
pub use embedded::{BufferedResult, EmbeddedResult, ForwardOnlyResult, SeekOutOfRange};
pub use error::{CursorError, DriverError, Result};
pub use executor::QueryExecutor;
pub use handle::ResultHandle;
pub use memory::{MemoryDriverError, MemoryExecutor};
pub use row::{ColumnMismatch, IndexedRow, Row};
pub use row_iterator::{collect_rows, RowIterator};
pub use value::Value;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
