//! Error handling for the service
//!
//! This module defines the error taxonomy and its mapping onto HTTP responses.

mod conversions;
mod helpers;
mod response;
#[cfg(test)]
mod tests;
mod types;

pub use conversions::map_write_error;
pub use response::ErrorResponse;
pub use types::{Result, ServiceError};
