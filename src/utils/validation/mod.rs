//! Validation utilities for request payloads

mod data_validator;


pub use data_validator::DataValidator;
