use crate::domain::{ContactError, FilterError};
use astra::Response;
// errors.rs
use thiserror::Error;

/// Errors originating from routing or from rejected user input.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Method Not Allowed")]
    MethodNotAllowed,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Payload Too Large")]
    PayloadTooLarge,
    #[error("Internal Server Error")]
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::MethodNotAllowed => 405,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge => 413,
            ServerError::InternalError => 500,
        }
    }
}

impl From<FilterError> for ServerError {
    fn from(err: FilterError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}

impl From<ContactError> for ServerError {
    fn from(err: ContactError) -> Self {
        ServerError::BadRequest(err.to_string())
    }
}
