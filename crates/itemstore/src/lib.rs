//! Lambda handlers for the items table.
//!
//! Each of the four binaries (`create-item`, `list-items`, `update-item`,
//! `delete-item`) wires one function from [`handlers`] into the Lambda
//! runtime through [`runtime::run`]. The handlers themselves only depend on
//! [`itemstore_core::storage::ItemRepository`], so they run unchanged
//! against DynamoDB in production and [`storage::InMemoryRepository`] in
//! tests.

pub mod config;
pub mod handlers;
pub mod runtime;
pub mod storage;
pub mod telemetry;
