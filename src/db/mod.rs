//! Persistence layer for user records.
//!
//! [`UserStore`] is the seam the auth service talks to. [`DbOperations`]
//! backs it with PostgreSQL; [`InMemoryUserStore`] keeps records in process
//! for local runs and tests.

pub mod memory;
pub mod models;
pub mod operations;
pub mod store;

pub use memory::InMemoryUserStore;
pub use models::{NewUser, User};
pub use operations::DbOperations;
pub use store::UserStore;
