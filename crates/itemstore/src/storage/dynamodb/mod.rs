//! DynamoDB storage backend implementation.
//!
//! This module provides a DynamoDB-based implementation of the repository
//! trait using `aws-sdk-dynamodb`.

mod client;
mod conversions;
mod error;
mod repository;

pub use client::{create_client, shared_repository};
pub use conversions::{attribute_to_json, item_to_record, json_to_attribute, record_to_item};
pub use repository::DynamoDbRepository;
