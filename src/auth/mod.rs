//! Authentication
//!
//! Password hashing, token issuance and the registration/login flow.

pub mod jwt;
pub mod password;
mod system;
mod types;

pub use jwt::{Claims, JwtHandler};
pub use system::AuthSystem;
pub use types::{AuthResponse, LoginRequest, RegisterRequest};
