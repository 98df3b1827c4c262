//! Storage backend implementations.
//!
//! This module provides concrete implementations of the repository trait
//! defined in `itemstore_core::storage`:
//!
//! - [`DynamoDbRepository`]: the items table, used by the Lambda binaries
//! - [`InMemoryRepository`]: a `HashMap` with the same semantics, used in
//!   tests

pub mod dynamodb;
pub mod inmemory;

pub use dynamodb::{shared_repository, DynamoDbRepository};
pub use inmemory::InMemoryRepository;
