//! HTTP middleware implementations

mod auth;

pub use auth::{JwtAuthMiddleware, JwtAuthMiddlewareService, get_claims};
