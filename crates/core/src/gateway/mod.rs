mod error;
mod event;
mod response;

pub use error::HandlerError;
pub use event::{DecodeError, GatewayEvent};
pub use response::{
    default_headers, GatewayResponse, ResponseBody, ALLOW_CREDENTIALS, ALLOW_HEADERS,
    ALLOW_METHODS, ALLOW_ORIGIN,
};
