//! Core for the itemstore handlers.
//!
//! Following the Functional Core pattern, everything in this crate is pure
//! data and pure functions: the [`item::Record`] model, the request types,
//! the update directive builder, the gateway envelope and the error types.
//! Storage access lives behind [`storage::ItemRepository`], implemented by
//! the `itemstore` crate.

pub mod gateway;
pub mod item;
pub mod serde;
pub mod storage;
