//! Test fixture for rowcursor integration tests
//!
//! Uses only the public API: result sets are registered on a
//! `MemoryExecutor` and read back through `RowCursor`.

#![allow(dead_code)]

use rowcursor::{MemoryExecutor, MemoryExecutorConfig, ResultHandle, Row, RowCursor, Value};

/// In-memory database handle with helpers for building result sets
pub struct CursorFixture {
    executor: MemoryExecutor,
}

impl CursorFixture {
    pub fn new() -> Self {
        Self::with_config(MemoryExecutorConfig::default())
    }

    pub fn with_config(config: MemoryExecutorConfig) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            executor: MemoryExecutor::new(config),
        }
    }

    pub fn executor(&self) -> &MemoryExecutor {
        &self.executor
    }

    /// Register a two-column (id, name) result set, one row per name
    pub fn people(&self, names: &[&str]) -> ResultHandle {
        let rows = names
            .iter()
            .enumerate()
            .map(|(i, name)| vec![Value::Integer(i as i64), Value::from(*name)])
            .collect();
        self.executor
            .register(vec!["id".to_string(), "name".to_string()], rows)
            .expect("Failed to register result set")
    }

    /// Cursor over a fresh `people` result set
    pub fn cursor(&self, names: &[&str]) -> RowCursor<'_> {
        let handle = self.people(names);
        self.executor.cursor(handle)
    }

    pub fn fetch_count(&self, cursor: &RowCursor<'_>) -> usize {
        let handle = cursor.result().expect("Cursor was freed");
        self.executor
            .fetch_count(handle)
            .expect("Result set not registered")
    }
}

/// Name column of a fetched row
pub fn name_of(row: &Row) -> &str {
    row.get("name")
        .and_then(Value::as_string)
        .expect("Row has no name column")
}

/// Build standalone rows for self-contained cursors
pub fn people_rows(names: &[&str]) -> Vec<Row> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            Row::from_pairs([
                ("id", Value::Integer(i as i64)),
                ("name", Value::from(*name)),
            ])
        })
        .collect()
}
