//! JWT token handling
//!
//! This module provides token issuance and verification.

mod handler;
pub mod types;


pub use types::{Claims, JwtHandler};
