// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Opaque result handles
//!
//! A handle identifies one result set to the driver that produced it. Cursors
//! carry it around and hand it back to their executor; they never look inside.

use std::fmt;
use std::sync::Arc;

/// Driver-specific token identifying a result set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResultHandle {
    /// Numeric resource id allocated by the driver
    Token(u64),
    /// Named descriptor (e.g. a server-side portal or statement name)
    Descriptor(Arc<str>),
    /// Rows are held by the cursor itself; no driver resource exists
    Materialized,
}

impl ResultHandle {
    pub fn descriptor(name: impl Into<Arc<str>>) -> Self {
        ResultHandle::Descriptor(name.into())
    }

    pub fn as_token(&self) -> Option<u64> {
        match self {
            ResultHandle::Token(id) => Some(*id),
            _ => None,
        }
    }

    pub fn is_materialized(&self) -> bool {
        matches!(self, ResultHandle::Materialized)
    }
}

impl fmt::Display for ResultHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultHandle::Token(id) => write!(f, "result#{}", id),
            ResultHandle::Descriptor(name) => write!(f, "result:{}", name),
            ResultHandle::Materialized => write!(f, "result:materialized"),
        }
    }
}
