//! HTTP route modules
//!
//! This module contains all HTTP route handlers organized by functionality.

pub mod auth;
pub mod employees;

use crate::server::middleware::JwtAuthMiddleware;
use actix_web::web;

/// Configure every route under `/api`
pub fn configure_routes(cfg: &mut web::ServiceConfig, protect_employees: bool) {
    cfg.service(
        web::scope("/api")
            .configure(auth::configure_routes)
            .service(
                web::scope("/employees")
                    .wrap(JwtAuthMiddleware::new(protect_employees))
                    .configure(employees::configure_routes),
            ),
    );
}
