// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Cursor error types

use thiserror::Error;

/// Any failure reported by a driver binding.
///
/// Drivers return their own error types; the cursor carries them through
/// without translation.
pub type DriverError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by cursor operations
#[derive(Error, Debug)]
pub enum CursorError {
    /// The cursor has no executor and no self-contained override for the operation
    #[error("{cursor} needs a database handle for iteration")]
    NoExecutor { cursor: &'static str },

    /// The cursor was used after `free()`
    #[error("{cursor} used after it was freed")]
    Freed { cursor: &'static str },

    /// Error raised by the executor or driver, passed through unchanged
    #[error(transparent)]
    Driver(DriverError),
}

impl CursorError {
    pub fn is_no_executor(&self) -> bool {
        matches!(self, CursorError::NoExecutor { .. })
    }

    pub fn is_freed(&self) -> bool {
        matches!(self, CursorError::Freed { .. })
    }

    /// Borrow the driver error as a concrete type, if it is one
    pub fn driver_error<E: std::error::Error + 'static>(&self) -> Option<&E> {
        match self {
            CursorError::Driver(err) => err.downcast_ref::<E>(),
            _ => None,
        }
    }
}

impl From<DriverError> for CursorError {
    fn from(error: DriverError) -> Self {
        CursorError::Driver(error)
    }
}

/// Cursor result alias
pub type Result<T> = std::result::Result<T, CursorError>;
