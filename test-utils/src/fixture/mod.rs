//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures build in-memory entity models for unit tests of conversions and pure
//! business rules. Unlike factories, fixtures never insert into the database.
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let user = fixture::user::entity();
//! let admin = fixture::user::entity_builder().role("admin").build();
//! ```

pub mod user;

pub use user::{entity as user_entity, entity_builder as user_entity_builder};
