//! Shared utilities
//!
//! Error handling and request validation used across the service.

pub mod error;
pub mod validation;
