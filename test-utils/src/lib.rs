//! Labhub Test Utils
//!
//! Shared testing utilities for the labhub server. Tests get an in-memory SQLite
//! database whose tables are generated straight from the SeaORM entities, an optional
//! session backed by the same database, and factories for inserting rows with
//! sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the test database schema
//! - **TestContext**: Database connection and session for a single test
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Builders that insert entities with defaults
//! - **fixture**: In-memory entity models that never touch the database
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn awards_points() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_all_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     // ...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
