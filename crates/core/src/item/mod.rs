mod directive;
mod error;
mod requests;
mod types;

pub use directive::{UpdateDirective, PROTECTED_FIELDS};
pub use error::ValidationError;
pub use requests::{CreateItemRequest, DeleteItemRequest, ItemUpdate, UpdateItemRequest};
pub use types::{
    format_timestamp, Record, CREATED_AT_FIELD, DESCRIPTION_FIELD, ID_FIELD, NAME_FIELD,
};
