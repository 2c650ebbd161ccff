// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Row records produced by fetch operations

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// A row whose value count differs from its result's column count
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Row {row} has {found} value(s), expected {expected}")]
pub struct ColumnMismatch {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

/// Check that every row holds exactly `width` values
pub fn check_row_widths(width: usize, rows: &[Vec<Value>]) -> Result<(), ColumnMismatch> {
    match rows.iter().position(|values| values.len() != width) {
        Some(row) => Err(ColumnMismatch {
            row,
            expected: width,
            found: rows[row].len(),
        }),
        None => Ok(()),
    }
}

/// Structured row: field values keyed by column name, in column order
///
/// Column names are shared between all rows of one result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    columns: Arc<[String]>,
    values: Vec<Value>,
}

impl Row {
    /// Build a row from shared column names and positional values.
    /// Callers check widths with [`check_row_widths`] first.
    pub(crate) fn new(columns: Arc<[String]>, values: Vec<Value>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self { columns, values }
    }

    /// Build a row from `(name, value)` pairs
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let (columns, values): (Vec<String>, Vec<Value>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self {
            columns: columns.into(),
            values,
        }
    }

    /// Get a value by column name
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.columns
            .iter()
            .position(|c| c == name)
            .and_then(|i| self.values.get(i))
    }

    /// Get a value by column position
    pub fn get_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate over `(column, value)` pairs in column order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.columns
            .iter()
            .map(String::as_str)
            .zip(self.values.iter())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Drop the column names, keeping positional values only
    pub fn into_indexed(self) -> IndexedRow {
        IndexedRow(self.values)
    }

    /// Render the row as a JSON object keyed by column name
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .iter()
            .map(|(k, v)| (k.to_string(), value_to_json(v)))
            .collect();
        serde_json::Value::Object(map)
    }
}

/// Convert a row value to plain JSON
fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Null => serde_json::Value::Null,
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Integer(i) => serde_json::json!(i),
        Value::Number(n) => serde_json::json!(n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::DateTime(dt) => serde_json::Value::String(dt.to_rfc3339()),
        Value::Bytes(bytes) => {
            serde_json::Value::Array(bytes.iter().map(|b| serde_json::json!(b)).collect())
        }
        Value::Array(arr) => serde_json::Value::Array(arr.iter().map(value_to_json).collect()),
    }
}

/// Positional row: values addressed by column index only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedRow(pub Vec<Value>);

impl IndexedRow {
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_values(self) -> Vec<Value> {
        self.0
    }
}

impl From<Vec<Value>> for IndexedRow {
    fn from(values: Vec<Value>) -> Self {
        IndexedRow(values)
    }
}
