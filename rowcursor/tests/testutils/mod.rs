//! Test utilities for rowcursor integration tests
//!
//! - CursorFixture: in-memory executor preloaded with named result sets
//! - FailingExecutor: executor whose every primitive returns a driver error

pub mod failing_executor;
pub mod test_fixture;
