mod error;
mod http_mapping;
mod traits;

pub use error::{RepositoryError, Result};
pub use http_mapping::{handler_error_to_status_code, repository_error_to_status_code};
pub use traits::ItemRepository;
