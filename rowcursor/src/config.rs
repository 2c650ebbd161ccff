// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Configuration for the in-memory executor

use serde::{Deserialize, Serialize};

/// Limits and policies for [`crate::memory::MemoryExecutor`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryExecutorConfig {
    /// Maximum number of result sets registered at the same time
    pub max_open_results: usize,

    /// Accept `seek_to(row_count)`, leaving the result exhausted.
    /// When false only positions of existing rows are valid seek targets.
    pub allow_seek_to_end: bool,
}

impl Default for MemoryExecutorConfig {
    fn default() -> Self {
        Self {
            max_open_results: 1024,
            allow_seek_to_end: false,
        }
    }
}

impl MemoryExecutorConfig {
    /// Parse a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn with_max_open_results(mut self, limit: usize) -> Self {
        self.max_open_results = limit;
        self
    }

    pub fn with_seek_to_end(mut self, allow: bool) -> Self {
        self.allow_seek_to_end = allow;
        self
    }
}
