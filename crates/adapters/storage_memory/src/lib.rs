//! # devicedesk-adapter-storage-memory
//!
//! In-memory storage adapter.
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `devicedesk-app::ports::storage`
//! - Load the device inventory from seed data (built in, or a JSON file)
//! - Allocate software request ids from a monotonic counter guarded by the
//!   same lock as the request map
//!
//! ## Dependency rule
//! Depends on `devicedesk-app` (for port traits) and `devicedesk-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod seed;
pub mod store;

pub use error::{SeedError, StorageError};
pub use seed::SeedData;
pub use store::InMemoryStore;
