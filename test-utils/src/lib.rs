//! Statboard Test Utils
//!
//! Provides shared testing utilities for building unit tests for the statboard bot.
//! This crate offers a builder pattern for creating test contexts backed by a temporary
//! directory holding a growth history file in the on-disk JSON format.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for seeding the growth history file
//! - **TestContext**: Test environment owning the temporary directory and file path
//! - **SnapshotFactory**: Builder for individual persisted snapshot records
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory::snapshot::SnapshotFactory};
//!
//! #[test]
//! fn loads_seeded_history() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_fine_grained(SnapshotFactory::new().total_members(10))
//!         .build()?;
//!
//!     let store = SnapshotStore::new(test.data_file());
//!     // Perform store operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
