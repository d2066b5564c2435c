//! # Database Access Module
//!
//! Per-operation MySQL connections and the member store seam. The service
//! holds no persistent database state of its own: every store operation
//! opens a fresh connection, runs its statements, and closes it.

pub mod memory;
pub mod provider;
pub mod store;

pub use memory::InMemoryMemberStore;
pub use provider::{ConnectionProvider, ProviderError};
pub use store::{DeleteOutcome, MemberStore, MySqlMemberStore, StoreError, StoreResult};
